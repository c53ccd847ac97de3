//! Diagnostic passes over the AMR patch hierarchy.
//!
//! Three one-shot, stateless operations, each reading the hierarchy
//! through [`strata_mesh::MeshView`]:
//!
//! - [`check_finite`] — distributed, rank-ordered scan of per-cell
//!   simulation state for NaN/infinite values, aborting the process
//!   group on global failure;
//! - [`write_patch_map`] — per-rank occupancy grid of patches scheduled
//!   for patch-data exchange, rendered as ASCII slices along one axis;
//! - [`write_flux_list`] — per-rank dump of the face-bucketed flux
//!   exchange lists.
//!
//! The file-producing passes split into writer-generic `render_*`
//! functions (any `io::Write` sink) and filesystem-facing `write_*`
//! wrappers, so tests assert on rendered bytes without touching disk.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod finite;
pub mod flux_list;
pub mod occupancy;
pub mod patch_map;

mod report;

pub use error::DiagError;
pub use finite::check_finite;
pub use flux_list::{flux_list_file_name, render_flux_list, write_flux_list};
pub use occupancy::{grid_dims, patch_slot, CellMark, OccupancyMap, SliceAxes};
pub use patch_map::{build_occupancy, patch_map_file_name, render_patch_map, write_patch_map};
