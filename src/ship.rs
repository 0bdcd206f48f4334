//! Vessels and their orientation, with cells and hits tracked in a `BitBoard`.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::config::{class_name, BOARD_SIZE};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Cell `k` steps from (`row`, `col`) along this orientation.
    #[inline]
    pub fn step(self, row: usize, col: usize, k: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + k),
            Orientation::Vertical => (row + k, col),
        }
    }
}

impl From<bool> for Orientation {
    /// `true` means horizontal.
    fn from(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// One vessel: a fixed length, the cells it occupies and the cells hit so far.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    cells: BB,
    hits: BB,
}

impl Vessel {
    /// Create a vessel of `length` with no cells registered yet.
    pub fn new(length: usize) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        Ok(Vessel {
            length,
            cells: BB::new(),
            hits: BB::new(),
        })
    }

    /// Build a straight vessel of `length` starting at (`row`, `col`).
    pub fn line(
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        let mut vessel = Self::new(length)?;
        vessel.cells = BB::line(row, col, length, orientation)?;
        Ok(vessel)
    }

    /// Register one occupied cell. Adding a cell twice is a no-op.
    pub fn add_cell(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        if self.cells.get(row, col)? {
            return Ok(());
        }
        if self.cells.count_ones() == self.length {
            return Err(BoardError::VesselFull);
        }
        self.cells.set(row, col)?;
        Ok(())
    }

    /// Whether (`row`, `col`) is one of this vessel's cells.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col).unwrap_or(false)
    }

    /// Mark (`row`, `col`) as hit. Returns `false` and ignores the call if the
    /// cell does not belong to this vessel.
    pub fn record_hit(&mut self, row: usize, col: usize) -> bool {
        self.contains(row, col) && self.hits.set(row, col).is_ok()
    }

    /// Sunk once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of distinct segments hit.
    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter_set_bits()
    }

    /// Occupancy mask of the vessel.
    pub fn mask(&self) -> BB {
        self.cells
    }

    /// Mask of hit segments.
    pub fn hits(&self) -> BB {
        self.hits
    }

    /// Display name of the vessel's class.
    pub fn class_name(&self) -> &'static str {
        class_name(self.length)
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ class: \"{}\", length: {}, cells: {:?}, hits: {} }}",
            self.class_name(),
            self.length,
            self.cells.iter_set_bits().collect::<alloc::vec::Vec<_>>(),
            self.hits.count_ones(),
        )
    }
}
