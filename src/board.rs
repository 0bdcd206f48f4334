//! One player's grid: occupancy, shot history and the vessels placed on it.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, warn};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, ShotResult};
use crate::config::{BOARD_SIZE, MAX_FLEET_RESTARTS, PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Vessel};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Grid engine for one side of the game.
///
/// Vessels never touch, not even diagonally: every placement keeps a one-cell
/// buffer of open water around it.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    occupancy: BB,
    fired: BB,
    vessels: Vec<Vessel>,
}

impl Grid {
    /// Create an empty grid with no vessels and no shots.
    pub fn new() -> Self {
        Grid {
            occupancy: BB::new(),
            fired: BB::new(),
            vessels: Vec::new(),
        }
    }

    /// Reset occupancy and shots, removing every vessel.
    pub fn clear(&mut self) {
        self.occupancy.clear_all();
        self.fired.clear_all();
        self.vessels.clear();
    }

    /// Footprint of a vessel at the given origin, or `None` if it runs off the board.
    fn footprint(
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Option<BB>, BoardError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(BoardError::InvalidCoordinate { row, col });
        }
        if length == 0 {
            return Err(BoardError::InvalidLength);
        }
        Ok(BB::line(row, col, length, orientation).ok())
    }

    /// Whether a vessel of `length` fits at (`row`, `col`): fully on the board,
    /// on empty cells, and with no occupied cell in its 8-neighbourhood.
    pub fn can_place(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<bool, BoardError> {
        Ok(match Self::footprint(row, col, length, orientation)? {
            Some(mask) => !mask.dilate().intersects(&self.occupancy),
            None => false,
        })
    }

    /// Place a vessel, re-validating the placement first.
    pub fn place(
        &mut self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if !self.can_place(row, col, length, orientation)? {
            return Err(BoardError::IllegalPlacement);
        }
        let vessel = Vessel::line(length, row, col, orientation)?;
        self.occupancy |= vessel.mask();
        self.vessels.push(vessel);
        Ok(())
    }

    /// Clear the grid and place every vessel of `fleet` at random.
    ///
    /// Each vessel gets `PLACEMENT_ATTEMPTS` random draws. If one runs out the
    /// whole fleet starts over, up to `MAX_FLEET_RESTARTS` times.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &[usize],
    ) -> Result<(), BoardError> {
        for &length in fleet {
            if length == 0 {
                return Err(BoardError::InvalidLength);
            }
            if length > GRID_SIZE {
                return Err(BoardError::IllegalPlacement);
            }
        }
        for restart in 0..=MAX_FLEET_RESTARTS {
            self.clear();
            if self.try_place_fleet(rng, fleet)? {
                debug!("fleet of {} placed after {} restarts", fleet.len(), restart);
                return Ok(());
            }
            debug!("fleet placement stuck, restarting ({})", restart + 1);
        }
        self.clear();
        warn!("fleet placement exhausted after {} restarts", MAX_FLEET_RESTARTS);
        Err(BoardError::PlacementExhausted)
    }

    fn try_place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &[usize],
    ) -> Result<bool, BoardError> {
        'vessels: for &length in fleet {
            for _ in 0..PLACEMENT_ATTEMPTS {
                let orientation = Orientation::from(rng.random::<bool>());
                let row = rng.random_range(0..GRID_SIZE);
                let col = rng.random_range(0..GRID_SIZE);
                if self.can_place(row, col, length, orientation)? {
                    self.place(row, col, length, orientation)?;
                    continue 'vessels;
                }
            }
            return Ok(false);
        }
        Ok(true)
    }

    /// Whether (`row`, `col`) has been fired upon.
    pub fn is_shot(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.fired.get(row, col)?)
    }

    /// Fired upon and open water.
    pub fn is_miss(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.fired.get(row, col)? && !self.occupancy.get(row, col)?)
    }

    /// Fire at (`row`, `col`).
    ///
    /// A shot that sinks a vessel also marks its surrounding ring as fired,
    /// since no other vessel can lie there.
    pub fn shoot_at(&mut self, row: usize, col: usize) -> Result<ShotResult, BoardError> {
        if self.fired.get(row, col)? {
            return Ok(ShotResult::AlreadyFired);
        }
        self.fired.set(row, col)?;
        let Some(vessel) = self.vessels.iter_mut().find(|v| v.contains(row, col)) else {
            return Ok(ShotResult::Miss);
        };
        vessel.record_hit(row, col);
        if !vessel.is_sunk() {
            return Ok(ShotResult::Hit);
        }
        let length = vessel.length();
        let ring = vessel.mask().dilate();
        debug!("{} sunk at ({}, {})", vessel.class_name(), row, col);
        self.fired |= ring;
        Ok(ShotResult::Sunk { length })
    }

    /// True when every vessel is sunk.
    pub fn is_fleet_destroyed(&self) -> bool {
        self.vessels.iter().all(|v| v.is_sunk())
    }

    /// The vessel occupying (`row`, `col`), if any.
    pub fn vessel_at(&self, row: usize, col: usize) -> Result<Option<&Vessel>, BoardError> {
        if !self.occupancy.get(row, col)? {
            return Ok(None);
        }
        Ok(self.vessels.iter().find(|v| v.contains(row, col)))
    }

    /// Whether (`row`, `col`) belongs to a sunk vessel.
    pub fn is_part_of_sunk_vessel(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.vessel_at(row, col)?.is_some_and(|v| v.is_sunk()))
    }

    /// Occupancy of a cell. Meant for rendering one's own grid.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Ok(if self.occupancy.get(row, col)? {
            Cell::Occupied
        } else {
            Cell::Empty
        })
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Mask of all occupied cells.
    pub fn occupancy(&self) -> BB {
        self.occupancy
    }

    /// Mask of all fired-upon cells.
    pub fn fired(&self) -> BB {
        self.fired
    }

    /// Mask of cells belonging to sunk vessels.
    pub fn sunk_cells(&self) -> BB {
        self.vessels
            .iter()
            .filter(|v| v.is_sunk())
            .fold(BB::new(), |acc, v| acc | v.mask())
    }

    /// Number of fired-upon cells, surrounding rings included.
    pub fn shot_count(&self) -> usize {
        self.fired.count_ones()
    }

    /// Total segments hit across all vessels.
    pub fn hit_count(&self) -> usize {
        self.vessels.iter().map(Vessel::hit_count).sum()
    }

    /// Lengths of vessels still afloat, in placement order.
    pub fn remaining_lengths(&self) -> Vec<usize> {
        self.vessels
            .iter()
            .filter(|v| !v.is_sunk())
            .map(Vessel::length)
            .collect()
    }

    /// Hit cells whose vessel is still afloat, in row-major order.
    pub fn unresolved_hits(&self) -> Vec<(usize, usize)> {
        let mut open = BB::new();
        for vessel in self.vessels.iter().filter(|v| !v.is_sunk()) {
            open |= vessel.hits();
        }
        open.iter_set_bits().collect()
    }

    /// Whether the placed vessels match `fleet` as a multiset of lengths.
    pub fn is_fleet_complete(&self, fleet: &[usize]) -> bool {
        let mut placed: Vec<usize> = self.vessels.iter().map(Vessel::length).collect();
        let mut wanted: Vec<usize> = fleet.to_vec();
        placed.sort_unstable();
        wanted.sort_unstable();
        placed == wanted
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{\n  occupancy: {:?},\n  fired: {:?},\n  vessels: {:?}\n}}",
            self.occupancy, self.fired, self.vessels
        )
    }
}
