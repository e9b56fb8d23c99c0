//! The eight-element symmetry group of the square
//!
//! Every transform is a reflection about the main diagonal (optional)
//! followed by a number of counter-clockwise quarter turns. The same rule
//! is applied to edge codes, pixel blocks and coordinate sets, so a tile's
//! recorded transform reproduces exactly when its pixels are assembled.

use ndarray::{Array2, ArrayView2, s};
use std::fmt;

use crate::spatial::edges::{EdgeCode, EdgeCodec};

/// One element of the square's symmetry group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Transform {
    rotations: u8,
    reflect: bool,
}

impl Transform {
    /// The transform that leaves everything in place
    pub const IDENTITY: Self = Self {
        rotations: 0,
        reflect: false,
    };

    /// All eight transforms, unreflected ones first
    pub const ALL: [Self; 8] = [
        Self::new(0, false),
        Self::new(1, false),
        Self::new(2, false),
        Self::new(3, false),
        Self::new(0, true),
        Self::new(1, true),
        Self::new(2, true),
        Self::new(3, true),
    ];

    /// Create a transform, quarter turns taken modulo four
    pub const fn new(rotations: u8, reflect: bool) -> Self {
        Self {
            rotations: rotations % 4,
            reflect,
        }
    }

    /// Look up a transform by its position in [`Transform::ALL`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this transform in [`Transform::ALL`]
    pub const fn index(self) -> usize {
        self.rotations as usize + if self.reflect { 4 } else { 0 }
    }

    /// Counter-clockwise quarter turns applied after any reflection
    pub const fn rotations(self) -> u8 {
        self.rotations
    }

    /// Whether the transform reflects about the main diagonal first
    pub const fn reflects(self) -> bool {
        self.reflect
    }

    /// Apply to edge codes stored top, right, bottom, left
    ///
    /// Reflection reverses the order and complements every code; a quarter
    /// turn rotates the array one step to the left.
    pub fn apply_to_edges(self, edges: [EdgeCode; 4], codec: &EdgeCodec) -> [EdgeCode; 4] {
        let mut transformed = edges;
        if self.reflect {
            transformed.reverse();
            for edge in &mut transformed {
                *edge = codec.complement(*edge);
            }
        }
        transformed.rotate_left(self.rotations as usize);
        transformed
    }

    /// Apply to a pixel block, producing a new owned block
    ///
    /// Rectangular blocks swap their dimensions on every quarter turn.
    pub fn apply_to_array<T: Clone>(self, block: ArrayView2<'_, T>) -> Array2<T> {
        let mut current = if self.reflect {
            block.t().to_owned()
        } else {
            block.to_owned()
        };
        for _ in 0..self.rotations {
            // transpose then reverse the rows: one counter-clockwise turn
            let turned = current.t().slice(s![..;-1, ..]).to_owned();
            current = turned;
        }
        current
    }

    /// Apply to a single cell of a `height` x `width` box
    ///
    /// Returns the transformed cell and the transformed box dimensions.
    pub const fn apply_to_cell(
        self,
        cell: (usize, usize),
        height: usize,
        width: usize,
    ) -> ((usize, usize), usize, usize) {
        let (mut row, mut col) = cell;
        let (mut h, mut w) = (height, width);
        if self.reflect {
            (row, col) = (col, row);
            (h, w) = (w, h);
        }
        let mut turn = 0;
        while turn < self.rotations {
            (row, col) = (w - 1 - col, row);
            (h, w) = (w, h);
            turn += 1;
        }
        ((row, col), h, w)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = u16::from(self.rotations) * 90;
        if self.reflect {
            write!(f, "reflect+rot{degrees}")
        } else {
            write!(f, "rot{degrees}")
        }
    }
}
