//! Neighbor-direction buckets for exchange lists.
//!
//! Exchange lists come in two granularities that must never be
//! conflated: flux lists are bucketed by the 6 patch faces ([`Face`]),
//! while patch-data lists are bucketed by all 26 face/edge/corner
//! neighbor relationships ([`Dir26`]).

use std::fmt;

/// 6-way face direction bucket for flux exchange lists.
///
/// The variant order is the wire order used by the flux-list report
/// files: faces print as indices 0 through 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// The -x face.
    XMinus,
    /// The +x face.
    XPlus,
    /// The -y face.
    YMinus,
    /// The +y face.
    YPlus,
    /// The -z face.
    ZMinus,
    /// The +z face.
    ZPlus,
}

impl Face {
    /// All six faces in wire order.
    pub const ALL: [Face; 6] = [
        Face::XMinus,
        Face::XPlus,
        Face::YMinus,
        Face::YPlus,
        Face::ZMinus,
        Face::ZPlus,
    ];

    /// Dense index of this face in wire order.
    pub fn index(self) -> usize {
        match self {
            Face::XMinus => 0,
            Face::XPlus => 1,
            Face::YMinus => 2,
            Face::YPlus => 3,
            Face::ZMinus => 4,
            Face::ZPlus => 5,
        }
    }

    /// Unit offset from a patch to its neighbor across this face.
    pub fn offset(self) -> [i32; 3] {
        match self {
            Face::XMinus => [-1, 0, 0],
            Face::XPlus => [1, 0, 0],
            Face::YMinus => [0, -1, 0],
            Face::YPlus => [0, 1, 0],
            Face::ZMinus => [0, 0, -1],
            Face::ZPlus => [0, 0, 1],
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// 26-way face/edge/corner direction bucket for patch-data exchange
/// lists.
///
/// A validated dense index in `[0, 26)`. The enumeration walks the
/// 3x3x3 neighbor cube in x-fastest order, skipping the center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dir26(u8);

impl Dir26 {
    /// Number of face/edge/corner directions.
    pub const COUNT: usize = 26;

    /// Validate a raw direction index.
    pub fn new(index: u8) -> Option<Self> {
        (index < Self::COUNT as u8).then_some(Self(index))
    }

    /// Dense index of this direction.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All 26 directions in index order.
    pub fn all() -> impl Iterator<Item = Dir26> {
        (0..Self::COUNT as u8).map(Dir26)
    }

    /// Unit offset from a patch to its neighbor in this direction.
    ///
    /// Every component is in `{-1, 0, 1}` and at least one is nonzero.
    pub fn offset(self) -> [i32; 3] {
        // Index 13 of the 3x3x3 cube is the center; directions at or
        // past it shift up by one.
        let n = if self.0 >= 13 { self.0 + 1 } else { self.0 } as i32;
        [n % 3 - 1, n / 3 % 3 - 1, n / 9 - 1]
    }
}

impl fmt::Display for Dir26 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn face_indices_match_wire_order() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn face_offsets_are_unit_axis_vectors() {
        for face in Face::ALL {
            let off = face.offset();
            let nonzero: Vec<_> = off.iter().filter(|&&v| v != 0).collect();
            assert_eq!(nonzero.len(), 1, "{face:?} is not a face offset");
            assert_eq!(nonzero[0].abs(), 1);
        }
    }

    #[test]
    fn dir26_rejects_out_of_range_indices() {
        assert!(Dir26::new(25).is_some());
        assert!(Dir26::new(26).is_none());
    }

    #[test]
    fn dir26_offsets_cover_the_neighbor_cube_exactly_once() {
        let offsets: HashSet<[i32; 3]> = Dir26::all().map(Dir26::offset).collect();
        assert_eq!(offsets.len(), 26);
        assert!(!offsets.contains(&[0, 0, 0]), "center is not a direction");
        for off in &offsets {
            assert!(off.iter().all(|v| (-1..=1).contains(v)), "{off:?}");
        }
    }
}
