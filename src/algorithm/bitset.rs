use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset tracking which catalog tiles are in use
///
/// Indexed by catalog position (0-based). Membership tests and updates are
/// O(1), and the set never grows after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a bitset with room for `capacity` tiles, none present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Number of catalog slots tracked
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Mark a tile as used, returning false if it already was or is out of range
    pub fn insert(&mut self, index: usize) -> bool {
        match self.bits.get_mut(index) {
            Some(mut bit) if !*bit => {
                *bit = true;
                true
            }
            _ => false,
        }
    }

    /// Release a tile, returning false if it was not marked
    pub fn remove(&mut self, index: usize) -> bool {
        match self.bits.get_mut(index) {
            Some(mut bit) if *bit => {
                *bit = false;
                true
            }
            _ => false,
        }
    }

    /// Test tile membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all used catalog indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TileBitset({}/{} used: {:?})",
            self.count(),
            self.capacity(),
            self.to_vec()
        )
    }
}
