//! Read-only seam to the external AMR patch hierarchy.

use strata_core::{Level, PatchId, Slot};

use crate::direction::{Dir26, Face};

/// Read-only view of one rank's portion of the AMR patch hierarchy.
///
/// The hierarchy itself — patch storage, refinement, ownership, and the
/// exchange-list computation — lives outside this workspace. The
/// diagnostics only ever read through this trait; nothing here mutates
/// the mesh.
///
/// # Coordinate conventions
///
/// All spatial positions are expressed on a shared integer grid whose
/// unit is one cell at the *finest* level. [`cell_scale`] gives the
/// width of one cell at a given level on that grid; a patch corner is
/// always a multiple of `patch_cells() * cell_scale(level)` relative to
/// [`domain_origin`].
///
/// [`cell_scale`]: MeshView::cell_scale
/// [`domain_origin`]: MeshView::domain_origin
pub trait MeshView {
    /// Number of refinement levels in the hierarchy.
    fn level_count(&self) -> u32;

    /// Cells along one side of every (cubical) patch.
    fn patch_cells(&self) -> u32;

    /// Level-0 cell extent of this rank's sub-domain along each axis.
    fn base_cells(&self) -> [u32; 3];

    /// Width of one cell at `level` on the shared integer grid.
    ///
    /// Halves with each refinement; a cell at the finest level has
    /// width 1.
    fn cell_scale(&self, level: Level) -> i32;

    /// This rank's sub-domain origin on the shared integer grid.
    fn domain_origin(&self) -> [i32; 3];

    /// Number of fluid-state components per cell.
    fn fluid_components(&self) -> usize;

    /// Storage slot currently holding the fluid state at `level`.
    fn fluid_slot(&self, level: Level) -> Slot;

    /// Storage slot currently holding the potential field at `level`.
    fn potential_slot(&self, level: Level) -> Slot;

    /// Number of patches this rank owns at `level`.
    fn patch_count(&self, level: Level) -> usize;

    /// Corner (lowest-index cell coordinate) of a patch on the shared
    /// integer grid.
    fn patch_corner(&self, level: Level, id: PatchId) -> [i32; 3];

    /// One component of a patch's fluid state, flattened k-major
    /// (z outermost, x innermost).
    fn fluid_field(&self, slot: Slot, level: Level, id: PatchId, component: usize) -> &[f64];

    /// A patch's potential field, or `None` when the run has no gravity
    /// coupling. Same flattening as [`fluid_field`](MeshView::fluid_field).
    fn potential_field(&self, slot: Slot, level: Level, id: PatchId) -> Option<&[f64]>;

    /// Patches scheduled to send patch data in one 26-way direction.
    fn patch_send_list(&self, level: Level, dir: Dir26) -> &[PatchId];

    /// Patches scheduled to receive patch data in one 26-way direction.
    fn patch_recv_list(&self, level: Level, dir: Dir26) -> &[PatchId];

    /// Patches scheduled to send flux data across one face.
    fn flux_send_list(&self, level: Level, face: Face) -> &[PatchId];

    /// Patches scheduled to receive flux data across one face.
    fn flux_recv_list(&self, level: Level, face: Face) -> &[PatchId];
}
