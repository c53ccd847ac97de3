//! Dense occupancy grid over patch slots and the slice-projection
//! table.
//!
//! The grid has one cell per patch slot per dimension at a level, plus
//! two ghost slots on each side. It is built fresh for every call and
//! owned exclusively by that call; `Drop` releases it on every exit
//! path, including the fatal ones.

use strata_core::Level;
use strata_mesh::{Axis, MeshView};

/// Marker for one patch slot in the occupancy grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellMark {
    /// No exchange scheduled through this slot.
    Empty,
    /// A patch here is scheduled to send data.
    Send,
    /// A patch here is scheduled to receive data.
    Recv,
}

impl CellMark {
    /// Character rendered for this marker.
    pub fn glyph(self) -> char {
        match self {
            CellMark::Empty => '.',
            CellMark::Send => 'S',
            CellMark::Recv => 'R',
        }
    }
}

/// Index-role permutation for one slice orientation.
///
/// Fixing an axis assigns the remaining two to printed columns and
/// rows via an explicit table (no index aliasing):
///
/// | fixed | col | row |
/// |-------|-----|-----|
/// | X     | Y   | Z   |
/// | Y     | X   | Z   |
/// | Z     | X   | Y   |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceAxes {
    /// Axis walked slice by slice.
    pub slice: Axis,
    /// Axis printed left to right within a row.
    pub col: Axis,
    /// Axis printed as rows, top row = highest index.
    pub row: Axis,
}

impl SliceAxes {
    /// Index roles for the given fixed axis.
    pub fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::X => Self { slice: Axis::X, col: Axis::Y, row: Axis::Z },
            Axis::Y => Self { slice: Axis::Y, col: Axis::X, row: Axis::Z },
            Axis::Z => Self { slice: Axis::Z, col: Axis::X, row: Axis::Y },
        }
    }

    /// Compose a 3D grid coordinate from (slice, row, col) loop indices.
    pub fn compose(&self, slice: usize, row: usize, col: usize) -> [usize; 3] {
        let mut at = [0usize; 3];
        at[self.slice.index()] = slice;
        at[self.row.index()] = row;
        at[self.col.index()] = col;
        at
    }
}

/// Occupancy-grid extent at `level`: `(base / patch) * 2^level + 4` per
/// axis, the 4 being two ghost patch slots on each side.
pub fn grid_dims<M: MeshView + ?Sized>(mesh: &M, level: Level) -> [usize; 3] {
    let base = mesh.base_cells();
    let patch = mesh.patch_cells() as usize;
    let mut dims = [0usize; 3];
    for d in 0..3 {
        dims[d] = ((base[d] as usize / patch) << level.0) + 4;
    }
    dims
}

/// Grid coordinate of the patch slot holding `corner`.
///
/// The corner is taken relative to the rank's sub-domain origin,
/// divided by the patch span at `level`, and shifted by the two-slot
/// ghost padding. Deterministic in (corner, origin, scale) only.
pub fn patch_slot<M: MeshView + ?Sized>(mesh: &M, level: Level, corner: [i32; 3]) -> [usize; 3] {
    let origin = mesh.domain_origin();
    let span = mesh.patch_cells() as i32 * mesh.cell_scale(level);
    let mut at = [0usize; 3];
    for d in 0..3 {
        at[d] = ((corner[d] - origin[d]) / span + 2) as usize;
    }
    at
}

/// Dense 3D grid of per-patch-slot markers.
pub struct OccupancyMap {
    dims: [usize; 3],
    cells: Vec<CellMark>,
}

impl OccupancyMap {
    /// Allocate a grid of the given extent, every slot [`CellMark::Empty`].
    pub fn new(dims: [usize; 3]) -> Self {
        Self {
            dims,
            cells: vec![CellMark::Empty; dims[0] * dims[1] * dims[2]],
        }
    }

    /// Grid extent per axis.
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Marker at the given grid coordinate.
    pub fn get(&self, at: [usize; 3]) -> CellMark {
        self.cells[self.flat(at)]
    }

    /// Store `mark` at the given coordinate, returning the previous
    /// marker.
    pub fn mark(&mut self, at: [usize; 3], mark: CellMark) -> CellMark {
        let idx = self.flat(at);
        std::mem::replace(&mut self.cells[idx], mark)
    }

    /// Flat index, x fastest.
    fn flat(&self, at: [usize; 3]) -> usize {
        for d in 0..3 {
            assert!(
                at[d] < self.dims[d],
                "occupancy coordinate {at:?} outside grid {:?}; the patch corner \
                 violates the hierarchy alignment invariant",
                self.dims
            );
        }
        (at[2] * self.dims[1] + at[1]) * self.dims[0] + at[0]
    }
}
