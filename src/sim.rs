//! Unattended matches between two `Player`s, used for simulation and demos.

use rand::rngs::SmallRng;

use crate::{
    board::Grid,
    common::{BoardError, ShotResult},
    config::BOARD_SIZE,
    player::Player,
};

/// Shot cap after which a match is abandoned without a winner.
pub const MAX_MATCH_SHOTS: usize = 4 * (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Seat of a player in a match. `First` fires first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Summary of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    pub winner: Option<Seat>,
    pub first_shots: usize,
    pub second_shots: usize,
    /// Number of times the turn passed between seats, plus one.
    pub turns: usize,
}

/// One resolved shot of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchShot {
    pub seat: Seat,
    pub target: (usize, usize),
    pub result: ShotResult,
}

/// A match played one shot at a time.
///
/// A hit keeps the turn, a miss passes it. Re-fired cells count against the
/// shot cap but keep the turn.
pub struct Match<'a> {
    first: &'a mut (dyn Player + 'a),
    second: &'a mut (dyn Player + 'a),
    rng_first: &'a mut SmallRng,
    rng_second: &'a mut SmallRng,
    grid_first: Grid,
    grid_second: Grid,
    seat: Seat,
    report: SimReport,
    finished: bool,
}

impl<'a> Match<'a> {
    /// Let both players place their fleets on fresh grids.
    pub fn new(
        first: &'a mut (dyn Player + 'a),
        second: &'a mut (dyn Player + 'a),
        rng_first: &'a mut SmallRng,
        rng_second: &'a mut SmallRng,
    ) -> Result<Self, BoardError> {
        let mut grid_first = Grid::new();
        let mut grid_second = Grid::new();
        first.place_ships(rng_first, &mut grid_first)?;
        second.place_ships(rng_second, &mut grid_second)?;
        Ok(Match {
            first,
            second,
            rng_first,
            rng_second,
            grid_first,
            grid_second,
            seat: Seat::First,
            report: SimReport {
                winner: None,
                first_shots: 0,
                second_shots: 0,
                turns: 1,
            },
            finished: false,
        })
    }

    /// The grid owned by `seat`.
    pub fn grid(&self, seat: Seat) -> &Grid {
        match seat {
            Seat::First => &self.grid_first,
            Seat::Second => &self.grid_second,
        }
    }

    pub fn report(&self) -> SimReport {
        self.report
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Play the next shot. Returns `None` once a fleet is destroyed or the
    /// shot cap is reached.
    pub fn step(&mut self) -> Result<Option<MatchShot>, BoardError> {
        if self.finished {
            return Ok(None);
        }
        if self.report.first_shots + self.report.second_shots >= MAX_MATCH_SHOTS {
            self.finished = true;
            return Ok(None);
        }
        let seat = self.seat;
        let (player, other, rng, own, target, shots) = match seat {
            Seat::First => (
                &mut *self.first,
                &mut *self.second,
                &mut *self.rng_first,
                &self.grid_first,
                &mut self.grid_second,
                &mut self.report.first_shots,
            ),
            Seat::Second => (
                &mut *self.second,
                &mut *self.first,
                &mut *self.rng_second,
                &self.grid_second,
                &mut self.grid_first,
                &mut self.report.second_shots,
            ),
        };
        let coord = player.select_target(rng, own, target)?;
        let result = target.shoot_at(coord.0, coord.1)?;
        *shots += 1;
        player.handle_shot_result(coord, result);
        other.handle_opponent_shot(coord, result);

        if result.is_hit() && target.is_fleet_destroyed() {
            self.report.winner = Some(seat);
            self.finished = true;
        } else if result == ShotResult::Miss {
            self.seat = seat.opponent();
            self.report.turns += 1;
        }
        Ok(Some(MatchShot {
            seat,
            target: coord,
            result,
        }))
    }
}

/// Play one match to the end. `observe` sees every shot together with the
/// grid that was fired upon.
pub fn run_match<'a, F>(
    first: &'a mut (dyn Player + 'a),
    second: &'a mut (dyn Player + 'a),
    rng_first: &'a mut SmallRng,
    rng_second: &'a mut SmallRng,
    mut observe: F,
) -> Result<SimReport, BoardError>
where
    F: FnMut(Seat, (usize, usize), ShotResult, &Grid),
{
    let mut game = Match::new(first, second, rng_first, rng_second)?;
    while let Some(shot) = game.step()? {
        observe(shot.seat, shot.target, shot.result, game.grid(shot.seat.opponent()));
    }
    Ok(game.report())
}
