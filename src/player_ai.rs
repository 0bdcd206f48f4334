use crate::{ai, board::Grid, config::FLEET, BoardError};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Computer player: random fleet placement and probability-density targeting.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, grid: &mut Grid) -> Result<(), BoardError> {
        grid.place_fleet_randomly(rng, &FLEET)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Grid,
        target: &Grid,
    ) -> Result<(usize, usize), BoardError> {
        ai::compute_next_target(own, target, rng)
    }
}
