//! In-memory mesh fixture implementing `MeshView`.

use strata_core::{Level, PatchId, Slot};
use strata_mesh::{Dir26, Face, MeshView};

/// One patch's backing storage: two slots per field.
#[derive(Clone)]
struct PatchData {
    corner: [i32; 3],
    /// `fluid[slot][component]` -> cells, k-major.
    fluid: [Vec<Vec<f64>>; 2],
    /// `potential[slot]` -> cells; `None` without gravity coupling.
    potential: Option<[Vec<f64>; 2]>,
}

/// Concrete in-memory [`MeshView`] for tests, examples, and benches.
///
/// Construct with [`MeshFixture::new`], optionally enable the potential
/// field, push patches, then fill data and exchange lists through the
/// setters. Patch corners are validated against the alignment invariant
/// at push time.
#[derive(Clone)]
pub struct MeshFixture {
    base_cells: [u32; 3],
    patch_cells: u32,
    level_count: u32,
    fluid_components: usize,
    with_potential: bool,
    domain_origin: [i32; 3],
    fluid_slots: Vec<Slot>,
    potential_slots: Vec<Slot>,
    patches: Vec<Vec<PatchData>>,
    patch_send: Vec<[Vec<PatchId>; 26]>,
    patch_recv: Vec<[Vec<PatchId>; 26]>,
    flux_send: Vec<[Vec<PatchId>; 6]>,
    flux_recv: Vec<[Vec<PatchId>; 6]>,
}

impl MeshFixture {
    /// A mesh with the given per-axis level-0 cell extent, patch side
    /// length, level count, and fluid arity. No patches, no potential,
    /// origin at zero, slot A current everywhere.
    pub fn new(
        base_cells: [u32; 3],
        patch_cells: u32,
        level_count: u32,
        fluid_components: usize,
    ) -> Self {
        assert!(level_count > 0, "need at least one level");
        assert!(patch_cells > 0, "patches need at least one cell");
        for d in 0..3 {
            assert_eq!(
                base_cells[d] % patch_cells,
                0,
                "base cells must tile into patches on axis {d}"
            );
        }
        let levels = level_count as usize;
        Self {
            base_cells,
            patch_cells,
            level_count,
            fluid_components,
            with_potential: false,
            domain_origin: [0; 3],
            fluid_slots: vec![Slot::A; levels],
            potential_slots: vec![Slot::A; levels],
            patches: vec![Vec::new(); levels],
            patch_send: (0..levels).map(|_| std::array::from_fn(|_| Vec::new())).collect(),
            patch_recv: (0..levels).map(|_| std::array::from_fn(|_| Vec::new())).collect(),
            flux_send: (0..levels).map(|_| std::array::from_fn(|_| Vec::new())).collect(),
            flux_recv: (0..levels).map(|_| std::array::from_fn(|_| Vec::new())).collect(),
        }
    }

    /// Enable the potential field (gravity coupling). Must be called
    /// before any patch is pushed.
    pub fn with_potential(mut self) -> Self {
        assert!(
            self.patches.iter().all(Vec::is_empty),
            "enable the potential before pushing patches"
        );
        self.with_potential = true;
        self
    }

    /// Place this rank's sub-domain origin on the shared integer grid.
    pub fn set_domain_origin(&mut self, origin: [i32; 3]) {
        self.domain_origin = origin;
    }

    pub fn set_fluid_slot(&mut self, level: Level, slot: Slot) {
        self.fluid_slots[level.0 as usize] = slot;
    }

    pub fn set_potential_slot(&mut self, level: Level, slot: Slot) {
        self.potential_slots[level.0 as usize] = slot;
    }

    /// Add a patch at `level` with the given corner on the shared
    /// integer grid. Data buffers start zeroed.
    ///
    /// # Panics
    ///
    /// Panics if the corner is not aligned to the patch span at
    /// `level` relative to the domain origin.
    pub fn push_patch(&mut self, level: Level, corner: [i32; 3]) -> PatchId {
        let span = self.patch_cells as i32 * self.scale(level);
        for d in 0..3 {
            assert_eq!(
                (corner[d] - self.domain_origin[d]).rem_euclid(span),
                0,
                "corner {corner:?} not aligned to the patch span {span} at level {level}"
            );
        }

        let cells = (self.patch_cells as usize).pow(3);
        let zero = vec![0.0; cells];
        let fluid_slot = vec![zero.clone(); self.fluid_components];
        let potential = self
            .with_potential
            .then(|| [zero.clone(), zero.clone()]);

        let list = &mut self.patches[level.0 as usize];
        list.push(PatchData {
            corner,
            fluid: [fluid_slot.clone(), fluid_slot],
            potential,
        });
        PatchId(list.len() as u32 - 1)
    }

    /// Mutable access to one fluid component buffer.
    pub fn fluid_mut(
        &mut self,
        slot: Slot,
        level: Level,
        id: PatchId,
        component: usize,
    ) -> &mut [f64] {
        &mut self.patches[level.0 as usize][id.0 as usize].fluid[slot.0 as usize][component]
    }

    /// Mutable access to one potential buffer.
    ///
    /// # Panics
    ///
    /// Panics if the fixture was built without the potential field.
    pub fn potential_mut(&mut self, slot: Slot, level: Level, id: PatchId) -> &mut [f64] {
        self.patches[level.0 as usize][id.0 as usize]
            .potential
            .as_mut()
            .expect("fixture has no potential field")[slot.0 as usize]
            .as_mut_slice()
    }

    /// Write a NaN into one cell of the current-slot fluid data.
    pub fn poison(&mut self, level: Level, id: PatchId, component: usize, cell: usize) {
        let slot = self.fluid_slots[level.0 as usize];
        self.fluid_mut(slot, level, id, component)[cell] = f64::NAN;
    }

    pub fn set_patch_send(&mut self, level: Level, dir: Dir26, ids: Vec<PatchId>) {
        self.patch_send[level.0 as usize][dir.index()] = ids;
    }

    pub fn set_patch_recv(&mut self, level: Level, dir: Dir26, ids: Vec<PatchId>) {
        self.patch_recv[level.0 as usize][dir.index()] = ids;
    }

    pub fn set_flux_send(&mut self, level: Level, face: Face, ids: Vec<PatchId>) {
        self.flux_send[level.0 as usize][face.index()] = ids;
    }

    pub fn set_flux_recv(&mut self, level: Level, face: Face, ids: Vec<PatchId>) {
        self.flux_recv[level.0 as usize][face.index()] = ids;
    }

    fn scale(&self, level: Level) -> i32 {
        1 << (self.level_count - 1 - level.0)
    }
}

impl MeshView for MeshFixture {
    fn level_count(&self) -> u32 {
        self.level_count
    }

    fn patch_cells(&self) -> u32 {
        self.patch_cells
    }

    fn base_cells(&self) -> [u32; 3] {
        self.base_cells
    }

    fn cell_scale(&self, level: Level) -> i32 {
        self.scale(level)
    }

    fn domain_origin(&self) -> [i32; 3] {
        self.domain_origin
    }

    fn fluid_components(&self) -> usize {
        self.fluid_components
    }

    fn fluid_slot(&self, level: Level) -> Slot {
        self.fluid_slots[level.0 as usize]
    }

    fn potential_slot(&self, level: Level) -> Slot {
        self.potential_slots[level.0 as usize]
    }

    fn patch_count(&self, level: Level) -> usize {
        self.patches[level.0 as usize].len()
    }

    fn patch_corner(&self, level: Level, id: PatchId) -> [i32; 3] {
        self.patches[level.0 as usize][id.0 as usize].corner
    }

    fn fluid_field(&self, slot: Slot, level: Level, id: PatchId, component: usize) -> &[f64] {
        &self.patches[level.0 as usize][id.0 as usize].fluid[slot.0 as usize][component]
    }

    fn potential_field(&self, slot: Slot, level: Level, id: PatchId) -> Option<&[f64]> {
        self.patches[level.0 as usize][id.0 as usize]
            .potential
            .as_ref()
            .map(|slots| slots[slot.0 as usize].as_slice())
    }

    fn patch_send_list(&self, level: Level, dir: Dir26) -> &[PatchId] {
        &self.patch_send[level.0 as usize][dir.index()]
    }

    fn patch_recv_list(&self, level: Level, dir: Dir26) -> &[PatchId] {
        &self.patch_recv[level.0 as usize][dir.index()]
    }

    fn flux_send_list(&self, level: Level, face: Face) -> &[PatchId] {
        &self.flux_send[level.0 as usize][face.index()]
    }

    fn flux_recv_list(&self, level: Level, face: Face) -> &[PatchId] {
        &self.flux_recv[level.0 as usize][face.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh() -> MeshFixture {
        MeshFixture::new([32, 32, 32], 8, 3, 5)
    }

    #[test]
    fn scale_halves_per_refinement_level() {
        let mesh = mesh();
        assert_eq!(mesh.cell_scale(Level(0)), 4);
        assert_eq!(mesh.cell_scale(Level(1)), 2);
        assert_eq!(mesh.cell_scale(Level(2)), 1);
    }

    #[test]
    fn poison_targets_the_current_slot_only() {
        let mut mesh = mesh();
        let id = mesh.push_patch(Level(0), [0, 0, 0]);
        mesh.set_fluid_slot(Level(0), Slot::B);
        mesh.poison(Level(0), id, 2, 7);

        assert!(mesh.fluid_field(Slot::B, Level(0), id, 2)[7].is_nan());
        assert!(mesh.fluid_field(Slot::A, Level(0), id, 2)[7].is_finite());
    }

    #[test]
    fn potential_is_absent_unless_enabled() {
        let mut plain = mesh();
        let id = plain.push_patch(Level(0), [0, 0, 0]);
        assert!(plain.potential_field(Slot::A, Level(0), id).is_none());

        let mut coupled = MeshFixture::new([32, 32, 32], 8, 3, 5).with_potential();
        let id = coupled.push_patch(Level(0), [0, 0, 0]);
        assert!(coupled.potential_field(Slot::A, Level(0), id).is_some());
    }

    #[test]
    #[should_panic(expected = "not aligned")]
    fn misaligned_corners_are_rejected() {
        // Patch span at level 0 is 8 * 4 = 32 grid units.
        mesh().push_patch(Level(0), [16, 0, 0]);
    }
}
