//! Strata: distributed diagnostics for adaptive-mesh-refinement
//! simulations.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all strata sub-crates. For most users, adding `strata` as a
//! single dependency is sufficient.
//!
//! The workspace covers three one-shot diagnostic passes over an AMR
//! patch hierarchy, read through the [`mesh::MeshView`] seam and
//! coordinated through the [`comm::Communicator`] seam:
//!
//! - [`diag::check_finite`] — rank-ordered NaN/infinity scan with a
//!   collective pass/fail verdict and group abort on failure;
//! - [`diag::write_patch_map`] — ASCII slice view of the patch-data
//!   exchange occupancy grid;
//! - [`diag::write_flux_list`] — face-bucketed flux exchange-list dump.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // Single-rank group: broadcasts echo, the barrier is a no-op.
//! let comm = SerialComm;
//! let verdict = ordered_visit(&comm, |pass| {
//!     assert_eq!(comm.rank(), Rank(0));
//!     pass
//! });
//! assert!(verdict);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | IDs, simulation clock, diagnostic sink, config errors |
//! | [`mesh`] | `strata-mesh` | Direction buckets, axes, the `MeshView` seam |
//! | [`comm`] | `strata-comm` | Communicator seam, ordered visitation, local groups |
//! | [`diag`] | `strata-diag` | The three diagnostic passes and the occupancy grid |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core IDs, clock, sink, and error types (`strata-core`).
pub use strata_core as types;

/// Mesh-domain types and the read-only hierarchy seam (`strata-mesh`).
///
/// Contains the two direction-bucket granularities ([`mesh::Face`],
/// [`mesh::Dir26`]), the slice [`mesh::Axis`], and [`mesh::MeshView`].
pub use strata_mesh as mesh;

/// Communicator seam and rank-ordered collectives (`strata-comm`).
///
/// [`comm::SerialComm`] covers single-rank runs; [`comm::local_group`]
/// builds a thread-backed group for tests and examples.
pub use strata_comm as comm;

/// The diagnostic passes (`strata-diag`).
pub use strata_diag as diag;

/// Common imports for typical strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use strata_core::{ConfigError, DiagSink, Level, PatchId, Rank, SimClock, Slot};

    // Mesh seam
    pub use strata_mesh::{Axis, Dir26, ExchangeKind, Face, MeshView};

    // Communication
    pub use strata_comm::{local_group, ordered_visit, Communicator, SerialComm};

    // Diagnostics
    pub use strata_diag::{check_finite, write_flux_list, write_patch_map, DiagError};
}
