//! Common types: shot results, cell states and the error enums.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Occupied,
}

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot hit a vessel that is still afloat.
    Hit,
    /// Shot sank the vessel, carrying its length.
    Sunk { length: usize },
    /// Cell was already fired upon; nothing changed.
    AlreadyFired,
}

impl ShotResult {
    /// Whether the shot struck a vessel. `AlreadyFired` counts as no hit.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk { .. })
    }
}

/// Errors returned by grid, vessel and targeting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    InvalidCoordinate { row: usize, col: usize },
    /// Vessel length must be positive.
    InvalidLength,
    /// Placement leaves the board, overlaps or touches another vessel.
    IllegalPlacement,
    /// Vessel already holds as many cells as its length.
    VesselFull,
    /// Random fleet placement ran out of restarts.
    PlacementExhausted,
    /// Every cell has already been fired upon.
    NoTargetsLeft,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => {
                BoardError::InvalidCoordinate { row, col }
            }
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate ({}, {}) is off the board", row, col)
            }
            BoardError::InvalidLength => write!(f, "Vessel length must be positive"),
            BoardError::IllegalPlacement => write!(f, "Vessel cannot be placed there"),
            BoardError::VesselFull => write!(f, "Vessel already has all its cells"),
            BoardError::PlacementExhausted => write!(f, "Unable to place the fleet"),
            BoardError::NoTargetsLeft => write!(f, "Every cell has already been fired upon"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Underlying grid failure.
    Board(BoardError),
    /// The event is not accepted in the current phase.
    WrongPhase {
        action: &'static str,
        phase: crate::game::Phase,
    },
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Board(e) => write!(f, "{}", e),
            SessionError::WrongPhase { action, phase } => {
                write!(f, "Cannot {} during {:?}", action, phase)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}
