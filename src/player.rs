use crate::{board::Grid, common::ShotResult, BoardError};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Place the whole fleet onto the provided grid.
    fn place_ships(&mut self, rng: &mut SmallRng, grid: &mut Grid) -> Result<(), BoardError>;

    /// Choose the next cell to fire at on `target`, given the player's own grid.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Grid,
        target: &Grid,
    ) -> Result<(usize, usize), BoardError>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: (usize, usize), _result: ShotResult) {}

    /// Inform the player of an opponent shot against its grid.
    fn handle_opponent_shot(&mut self, _coord: (usize, usize), _result: ShotResult) {}
}
