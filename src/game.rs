//! Session state machine driving one human-versus-computer game.
//!
//! The grids know nothing about turns or placement modes; the session owns both
//! grids and moves between phases on discrete events.

use log::{debug, info};
use rand::Rng;

use crate::{
    ai,
    board::Grid,
    common::{SessionError, ShotResult},
    config::{FLEET, NUM_SHIPS},
    ship::Orientation,
};

/// One side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Waiting for the human to choose manual or automatic placement.
    SelectingMode,
    /// Human places vessel `ship_index` of the fleet next.
    ManualPlacement {
        ship_index: usize,
        orientation: Orientation,
    },
    /// Human fleet complete, waiting for the game to start.
    AwaitingStart,
    PlayerTurn,
    OpponentTurn,
    /// Game finished; carries the winner.
    GameOver(Side),
}

/// Outcome of a single shot within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub shooter: Side,
    pub target: (usize, usize),
    pub result: ShotResult,
    /// Phase after the shot was resolved.
    pub phase: Phase,
}

/// A human-versus-computer game.
#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    human: Grid,
    computer: Grid,
}

impl Session {
    /// Fresh session with empty grids, waiting for a placement mode.
    pub fn new() -> Self {
        Self {
            phase: Phase::SelectingMode,
            human: Grid::new(),
            computer: Grid::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The human's own grid.
    pub fn human_grid(&self) -> &Grid {
        &self.human
    }

    /// The computer's grid. Front ends must only reveal fired-upon cells.
    pub fn computer_grid(&self) -> &Grid {
        &self.computer
    }

    /// Winner once the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::GameOver(side) => Some(side),
            _ => None,
        }
    }

    fn wrong_phase(&self, action: &'static str) -> SessionError {
        SessionError::WrongPhase {
            action,
            phase: self.phase,
        }
    }

    fn transition(&mut self, next: Phase) {
        if next != self.phase {
            debug!("session phase {:?} -> {:?}", self.phase, next);
        }
        self.phase = next;
    }

    /// Start placing the human fleet by hand, clearing any earlier placement.
    pub fn begin_manual_placement(&mut self) -> Result<Phase, SessionError> {
        match self.phase {
            Phase::SelectingMode | Phase::AwaitingStart => {
                self.human.clear();
                self.transition(Phase::ManualPlacement {
                    ship_index: 0,
                    orientation: Orientation::Horizontal,
                });
                Ok(self.phase)
            }
            _ => Err(self.wrong_phase("begin manual placement")),
        }
    }

    /// Toggle the orientation used for the next manual placement.
    pub fn rotate(&mut self) -> Result<Orientation, SessionError> {
        match self.phase {
            Phase::ManualPlacement {
                ship_index,
                orientation,
            } => {
                let orientation = orientation.rotated();
                self.transition(Phase::ManualPlacement {
                    ship_index,
                    orientation,
                });
                Ok(orientation)
            }
            _ => Err(self.wrong_phase("rotate")),
        }
    }

    /// Length of the vessel to place next, during manual placement.
    pub fn next_length(&self) -> Option<usize> {
        match self.phase {
            Phase::ManualPlacement { ship_index, .. } => FLEET.get(ship_index).copied(),
            _ => None,
        }
    }

    /// Place the next vessel of the fleet with its origin at (`row`, `col`).
    pub fn place_next(&mut self, row: usize, col: usize) -> Result<Phase, SessionError> {
        let Phase::ManualPlacement {
            ship_index,
            orientation,
        } = self.phase
        else {
            return Err(self.wrong_phase("place a vessel"));
        };
        let length = FLEET[ship_index];
        self.human.place(row, col, length, orientation)?;
        let next = ship_index + 1;
        if next == NUM_SHIPS {
            self.transition(Phase::AwaitingStart);
        } else {
            self.transition(Phase::ManualPlacement {
                ship_index: next,
                orientation,
            });
        }
        Ok(self.phase)
    }

    /// Place the whole human fleet at random.
    pub fn auto_place<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Phase, SessionError> {
        match self.phase {
            Phase::SelectingMode | Phase::AwaitingStart => {
                self.human.place_fleet_randomly(rng, &FLEET)?;
                self.transition(Phase::AwaitingStart);
                Ok(self.phase)
            }
            _ => Err(self.wrong_phase("auto place")),
        }
    }

    /// Start the game. The computer's fleet is placed now if it has none yet.
    /// The human fires first.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Phase, SessionError> {
        if self.phase != Phase::AwaitingStart {
            return Err(self.wrong_phase("start"));
        }
        if self.computer.vessels().is_empty() {
            self.computer.place_fleet_randomly(rng, &FLEET)?;
        }
        info!("game started");
        self.transition(Phase::PlayerTurn);
        Ok(self.phase)
    }

    /// Human fires at the computer's grid.
    pub fn player_fire(&mut self, row: usize, col: usize) -> Result<TurnReport, SessionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(self.wrong_phase("fire"));
        }
        let result = self.computer.shoot_at(row, col)?;
        Ok(self.resolve(Side::Human, (row, col), result))
    }

    /// Computer picks a target on the human's grid and fires.
    pub fn opponent_fire<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<TurnReport, SessionError> {
        if self.phase != Phase::OpponentTurn {
            return Err(self.wrong_phase("fire for the computer"));
        }
        let (row, col) = ai::compute_next_target(&self.computer, &self.human, rng)?;
        let result = self.human.shoot_at(row, col)?;
        Ok(self.resolve(Side::Computer, (row, col), result))
    }

    /// Hits keep the turn, misses pass it, re-fired cells change nothing.
    fn resolve(&mut self, shooter: Side, target: (usize, usize), result: ShotResult) -> TurnReport {
        let defender = match shooter {
            Side::Human => &self.computer,
            Side::Computer => &self.human,
        };
        let next = if result.is_hit() && defender.is_fleet_destroyed() {
            info!("{:?} wins", shooter);
            Phase::GameOver(shooter)
        } else {
            match result {
                ShotResult::Miss => turn_of(shooter.opponent()),
                ShotResult::Hit | ShotResult::Sunk { .. } => turn_of(shooter),
                ShotResult::AlreadyFired => self.phase,
            }
        };
        self.transition(next);
        TurnReport {
            shooter,
            target,
            result,
            phase: next,
        }
    }

    /// Clear both grids and go back to choosing a placement mode.
    pub fn restart(&mut self) {
        self.human.clear();
        self.computer.clear();
        info!("session restarted");
        self.transition(Phase::SelectingMode);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn turn_of(side: Side) -> Phase {
    match side {
        Side::Human => Phase::PlayerTurn,
        Side::Computer => Phase::OpponentTurn,
    }
}
