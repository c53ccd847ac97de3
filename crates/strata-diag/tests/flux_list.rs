//! Flux exchange-list report format and file handling.

use std::fs;
use std::path::PathBuf;

use strata_core::{DiagSink, Level, PatchId, Rank, SimClock};
use strata_diag::{flux_list_file_name, render_flux_list, write_flux_list};
use strata_mesh::{ExchangeKind, Face};
use strata_test_utils::MeshFixture;

fn mesh() -> MeshFixture {
    MeshFixture::new([32, 32, 32], 8, 3, 4)
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("strata-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn render(mesh: &MeshFixture, kind: ExchangeKind) -> String {
    let mut buf = Vec::new();
    render_flux_list(&mut buf, mesh, kind, SimClock::new(0.25, 8), Rank(2), Level(0)).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn every_face_prints_a_block_even_when_empty() {
    let text = render(&mesh(), ExchangeKind::Send);
    assert_eq!(text.matches("Face = ").count(), 6);
    for face in Face::ALL {
        assert!(text.contains(&format!("Face = {}     Length = 0", face.index())));
    }
}

#[test]
fn a_populated_face_lists_its_ids_in_fixed_width_columns() {
    let mut mesh = mesh();
    mesh.set_flux_send(Level(0), Face::XMinus, vec![PatchId(3), PatchId(7), PatchId(142)]);

    let text = render(&mesh, ExchangeKind::Send);
    let lines: Vec<_> = text.lines().collect();
    let header = lines
        .iter()
        .position(|l| l.starts_with("Face = 0"))
        .unwrap();
    assert_eq!(lines[header], "Face = 0     Length = 3");
    assert_eq!(lines[header + 1], "    3     7   142 ");
    assert_eq!(lines[header + 2], "");
}

#[test]
fn an_empty_face_keeps_an_empty_id_line() {
    let mut mesh = mesh();
    mesh.set_flux_send(Level(0), Face::XPlus, vec![PatchId(9)]);

    let text = render(&mesh, ExchangeKind::Send);
    let lines: Vec<_> = text.lines().collect();
    let face0 = lines
        .iter()
        .position(|l| l.starts_with("Face = 0"))
        .unwrap();
    assert_eq!(lines[face0], "Face = 0     Length = 0");
    assert_eq!(lines[face0 + 1], "");
    assert_eq!(lines[face0 + 2], "");
    assert!(lines[face0 + 3].starts_with("Face = 1"));
}

#[test]
fn the_kind_selects_which_family_of_lists_is_read() {
    let mut mesh = mesh();
    mesh.set_flux_send(Level(0), Face::ZPlus, vec![PatchId(1)]);
    mesh.set_flux_recv(Level(0), Face::ZPlus, vec![PatchId(2), PatchId(3)]);

    let send = render(&mesh, ExchangeKind::Send);
    let recv = render(&mesh, ExchangeKind::Recv);
    assert!(send.contains("Face = 5     Length = 1"));
    assert!(recv.contains("Face = 5     Length = 2"));
}

#[test]
fn file_names_encode_kind_rank_level_and_label() {
    assert_eq!(
        flux_list_file_name(ExchangeKind::Send, Rank(0), Level(1), None),
        "SendFluxPatchList_0_1"
    );
    assert_eq!(
        flux_list_file_name(ExchangeKind::Recv, Rank(4), Level(0), Some("restart")),
        "RecvFluxPatchList_4_0_restart"
    );
}

#[test]
fn rewriting_warns_once_and_reproduces_the_bytes() {
    let dir = scratch_dir("flux-list-rewrite");
    let mut mesh = mesh();
    mesh.set_flux_recv(Level(1), Face::YMinus, vec![PatchId(11)]);
    let clock = SimClock::new(3.0, 60);

    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut diag = DiagSink::new(&mut out, &mut err);
    let path = write_flux_list(
        &mesh, Rank(1), clock, ExchangeKind::Recv, Level(1), None, &dir, &mut diag,
    )
    .unwrap();
    drop(diag);
    assert!(err.is_empty());
    let first = fs::read(&path).unwrap();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut diag = DiagSink::new(&mut out, &mut err);
    write_flux_list(&mesh, Rank(1), clock, ExchangeKind::Recv, Level(1), None, &dir, &mut diag)
        .unwrap();
    drop(diag);

    let err = String::from_utf8(err).unwrap();
    assert_eq!(err.matches("already exists").count(), 1);
    assert_eq!(fs::read(&path).unwrap(), first);

    let _ = fs::remove_dir_all(&dir);
}
