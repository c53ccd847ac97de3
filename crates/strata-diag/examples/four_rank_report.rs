//! Drive all three diagnostic passes across a four-rank in-process
//! group.
//!
//! Each rank thread owns one quadrant of a 2x2x1 domain decomposition,
//! runs the finiteness check collectively, then writes its own patch-map
//! and flux-list reports into a scratch directory.
//!
//! Run with:
//!   cargo run --example four_rank_report

use std::fs;
use std::path::PathBuf;
use std::thread;

use strata_comm::{local_group, Communicator};
use strata_core::{DiagSink, Level, Rank, SimClock};
use strata_diag::{check_finite, write_flux_list, write_patch_map};
use strata_mesh::{Axis, Dir26, ExchangeKind, Face};
use strata_test_utils::{fill_fluid_random, MeshFixture};

const RANKS: u32 = 4;

/// One rank's quadrant: 32^3 base cells, patches of 8^3, two levels.
fn quadrant_mesh(rank: Rank) -> MeshFixture {
    let mut mesh = MeshFixture::new([32, 32, 32], 8, 2, 5);

    // Level-0 cell scale is 2, so each quadrant spans 64 grid units.
    let origin = [(rank.0 as i32 % 2) * 64, (rank.0 as i32 / 2) * 64, 0];
    mesh.set_domain_origin(origin);

    // A few patches along this rank's inner boundary, marked for
    // exchange with the neighbor quadrant.
    let span = 16;
    let mut ids = Vec::new();
    for p in 0..3 {
        ids.push(mesh.push_patch(Level(0), [origin[0] + 3 * span, origin[1] + p * span, origin[2]]));
    }
    mesh.set_patch_send(Level(0), Dir26::new(1).unwrap(), ids.clone());
    mesh.set_flux_send(Level(0), Face::XPlus, ids);

    fill_fluid_random(&mut mesh, 0xC0FFEE + rank.0 as u64);
    mesh
}

fn main() {
    let dir = std::env::temp_dir().join(format!("strata-demo-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let clock = SimClock::new(0.125, 16);

    let handles: Vec<_> = local_group(RANKS)
        .into_iter()
        .map(|comm| {
            let dir = dir.clone();
            thread::spawn(move || -> (u32, String, Vec<PathBuf>) {
                let rank = comm.rank();
                let mesh = quadrant_mesh(rank);

                let mut out = Vec::new();
                let mut err = std::io::stderr();
                let mut diag = DiagSink::new(&mut out, &mut err);

                check_finite(&mesh, &comm, clock, Level(0), "demo", &mut diag).unwrap();

                let mut written = Vec::new();
                written.push(
                    write_patch_map(&mesh, rank, clock, Level(0), Axis::Z, None, &dir, &mut diag)
                        .unwrap(),
                );
                written.push(
                    write_flux_list(
                        &mesh, rank, clock, ExchangeKind::Send, Level(0), None, &dir, &mut diag,
                    )
                    .unwrap(),
                );
                drop(diag);

                (rank.0, String::from_utf8(out).unwrap(), written)
            })
        })
        .collect();

    for h in handles {
        let (rank, out, written) = h.join().unwrap();
        print!("{out}");
        for path in written {
            println!("rank {rank} wrote {}", path.display());
        }
    }

    println!("reports under {}", dir.display());
}
