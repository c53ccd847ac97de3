//! Strongly-typed identifiers for ranks, levels, patches, and slots.

use std::fmt;

/// Identifies one participant process in the distributed run.
///
/// Ranks are dense integers in `[0, rank_count)`. Rank 0 is the
/// coordinating rank: it alone prints global confirmation lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(pub u32);

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Rank {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Refinement depth within the patch hierarchy; 0 is the coarsest grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(pub u32);

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Level {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a patch within one rank's portion of a refinement level.
///
/// Patch IDs are only meaningful relative to `(rank, level)` — two ranks
/// may both own a `PatchId(0)` at the same level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatchId(pub u32);

impl fmt::Display for PatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PatchId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Double-buffer storage slot selecting current vs. previous field data.
///
/// The hierarchy keeps two buffers per field; which one is "current"
/// flips as the solvers advance. Diagnostics read whichever slot the
/// hierarchy reports as current and never write either.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slot(pub u8);

impl Slot {
    /// The first storage buffer.
    pub const A: Slot = Slot(0);
    /// The second storage buffer.
    pub const B: Slot = Slot(1);

    /// The other buffer of the pair.
    pub fn flip(self) -> Slot {
        Slot(self.0 ^ 1)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
