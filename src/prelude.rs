//! Commonly used types and utilities for ease of import.

pub use crate::{
    compute_next_target, AiPlayer, BoardError, Grid, Orientation, Phase, Player, Session,
    ShotResult, Side, Vessel, FLEET,
};

#[cfg(feature = "std")]
pub use crate::ui::{print_heat_map, print_own_board, print_player_view, print_target_board};

#[cfg(feature = "std")]
pub use crate::player_cli::CliPlayer;
