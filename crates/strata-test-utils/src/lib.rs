//! Test fixtures and instrumentation for the strata diagnostics.
//!
//! Provides [`MeshFixture`], a concrete in-memory [`strata_mesh::MeshView`],
//! a seeded random field fill, and [`CountingComm`] for asserting on
//! collective-operation counts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::MeshFixture;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

use strata_comm::Communicator;
use strata_core::{Level, PatchId, Rank, Slot};
use strata_mesh::MeshView;

/// Fill every fluid buffer of the fixture — both slots, every level,
/// every component — with finite values from a seeded ChaCha8 RNG.
///
/// Identical seeds produce identical fixtures.
pub fn fill_fluid_random(mesh: &mut MeshFixture, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for lv in 0..mesh.level_count() {
        let level = Level(lv);
        for p in 0..mesh.patch_count(level) {
            let id = PatchId(p as u32);
            for v in 0..mesh.fluid_components() {
                for slot in [Slot::A, Slot::B] {
                    for cell in mesh.fluid_mut(slot, level, id, v) {
                        *cell = rng.random_range(-1.0..1.0);
                    }
                }
            }
        }
    }
}

/// Wraps a communicator, counting broadcast and barrier calls through
/// shared atomics.
///
/// The counters survive an aborting rank because callers can clone the
/// handles out before moving the communicator into a thread.
pub struct CountingComm<C> {
    inner: C,
    broadcasts: Arc<AtomicUsize>,
    barriers: Arc<AtomicUsize>,
}

impl<C> CountingComm<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            broadcasts: Arc::new(AtomicUsize::new(0)),
            barriers: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handles to the (broadcast, barrier) counters.
    pub fn counters(&self) -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        (Arc::clone(&self.broadcasts), Arc::clone(&self.barriers))
    }

    pub fn broadcasts(&self) -> usize {
        self.broadcasts.load(Ordering::SeqCst)
    }

    pub fn barriers(&self) -> usize {
        self.barriers.load(Ordering::SeqCst)
    }

    /// Total collective operations seen by this rank.
    pub fn collectives(&self) -> usize {
        self.broadcasts() + self.barriers()
    }
}

impl<C: Communicator> Communicator for CountingComm<C> {
    fn rank(&self) -> Rank {
        self.inner.rank()
    }

    fn rank_count(&self) -> u32 {
        self.inner.rank_count()
    }

    fn broadcast_flag(&self, root: Rank, value: bool) -> bool {
        self.broadcasts.fetch_add(1, Ordering::SeqCst);
        self.inner.broadcast_flag(root, value)
    }

    fn barrier(&self) {
        self.barriers.fetch_add(1, Ordering::SeqCst);
        self.inner.barrier()
    }

    fn abort(&self, code: i32) -> ! {
        self.inner.abort(code)
    }
}
