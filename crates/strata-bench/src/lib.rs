//! Benchmark profiles for the strata diagnostics.
//!
//! Provides pre-built mesh fixtures sized for benchmarking:
//!
//! - [`reference_mesh`]: 64^3 base cells, 8^3 patches, three levels,
//!   with exchange lists along one sub-domain boundary
//! - [`dense_exchange_mesh`]: every boundary patch slot claimed by an
//!   exchange list, for worst-case occupancy builds

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_core::{Level, PatchId};
use strata_mesh::{Dir26, Face, MeshView};
use strata_test_utils::{fill_fluid_random, MeshFixture};

/// Reference profile: 64^3 base cells, 8^3 patches, three levels.
///
/// One column of boundary patches is registered for patch-data and flux
/// exchange; all fluid data is finite.
pub fn reference_mesh(seed: u64) -> MeshFixture {
    let mut mesh = MeshFixture::new([64, 64, 64], 8, 3, 5);
    let span = mesh.patch_cells() as i32 * mesh.cell_scale(Level(0));

    let mut ids = Vec::new();
    for p in 0..8 {
        ids.push(mesh.push_patch(Level(0), [7 * span, p * span, 0]));
    }
    mesh.set_patch_send(Level(0), Dir26::new(1).unwrap(), ids.clone());
    mesh.set_flux_send(Level(0), Face::XPlus, ids);

    fill_fluid_random(&mut mesh, seed);
    mesh
}

/// Worst-case exchange profile: every patch slot on the +x boundary
/// face is claimed for both send and receive.
pub fn dense_exchange_mesh(seed: u64) -> MeshFixture {
    let mut mesh = MeshFixture::new([64, 64, 64], 8, 3, 5);
    let span = mesh.patch_cells() as i32 * mesh.cell_scale(Level(0));

    let mut ids = Vec::new();
    for y in 0..8 {
        for z in 0..8 {
            ids.push(mesh.push_patch(Level(0), [7 * span, y * span, z * span]));
        }
    }
    mesh.set_patch_send(Level(0), Dir26::new(1).unwrap(), ids.clone());
    let recv: Vec<PatchId> = ids.clone();
    mesh.set_patch_recv(Level(0), Dir26::new(1).unwrap(), recv);
    mesh.set_flux_send(Level(0), Face::XPlus, ids);

    fill_fluid_random(&mut mesh, seed);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_mesh_is_deterministic() {
        let a = reference_mesh(42);
        let b = reference_mesh(42);
        assert_eq!(a.patch_count(Level(0)), b.patch_count(Level(0)));
        assert_eq!(
            a.fluid_field(a.fluid_slot(Level(0)), Level(0), PatchId(0), 0),
            b.fluid_field(b.fluid_slot(Level(0)), Level(0), PatchId(0), 0),
        );
    }

    #[test]
    fn dense_exchange_mesh_fills_the_boundary_face() {
        let mesh = dense_exchange_mesh(42);
        assert_eq!(mesh.patch_count(Level(0)), 64);
        assert_eq!(
            mesh.patch_send_list(Level(0), Dir26::new(1).unwrap()).len(),
            64
        );
    }
}
