// Probability-density targeting for the computer opponent.
// Stateless: everything is recomputed from the defender's grid on each call.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::{
    bitboard::BitBoard,
    board::Grid,
    common::BoardError,
    config::{BOARD_SIZE, FLEET},
    ship::Orientation,
};

/// Bitboard type alias for convenience.
type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Per-cell count of legal vessel placements covering that cell.
pub type HeatMap = [[u32; GRID_SIZE]; GRID_SIZE];

/// Vessel lengths assumed to still be afloat on the defending side.
///
/// Taken from the attacker's own un-sunk vessels, which mirrors the defender's
/// fleet only because both sides share one manifest. Falls back to the full
/// manifest when the attacker has nothing afloat to go by.
pub fn remaining_sizes(attacker_own: &Grid) -> Vec<usize> {
    let sizes = attacker_own.remaining_lengths();
    if sizes.is_empty() {
        FLEET.to_vec()
    } else {
        sizes
    }
}

/// Count every legal placement of each remaining length on the defender's grid.
///
/// A placement is legal when none of its cells is a recorded miss or part of a
/// sunk vessel. While unresolved hits exist, a placement must also cover at
/// least one of them.
pub fn calc_heat(defender: &Grid, remaining: &[usize]) -> HeatMap {
    let mut heat = [[0u32; GRID_SIZE]; GRID_SIZE];

    let fired = defender.fired();
    let occupancy = defender.occupancy();
    let sunk = defender.sunk_cells();
    let blocked = (fired & !occupancy) | sunk;
    let unresolved = fired & occupancy & !sunk;

    for &len in remaining {
        if len == 0 || len > GRID_SIZE {
            continue;
        }
        for orient in [Orientation::Horizontal, Orientation::Vertical] {
            let (max_row, max_col) = match orient {
                Orientation::Horizontal => (GRID_SIZE, GRID_SIZE - len + 1),
                Orientation::Vertical => (GRID_SIZE - len + 1, GRID_SIZE),
            };
            for r in 0..max_row {
                for c in 0..max_col {
                    let Ok(mask) = BB::line(r, c, len, orient) else {
                        continue;
                    };
                    if mask.intersects(&blocked) {
                        continue;
                    }
                    if !unresolved.is_empty() && !mask.intersects(&unresolved) {
                        continue;
                    }
                    for k in 0..len {
                        let (rr, cc) = orient.step(r, c, k);
                        heat[rr][cc] += 1;
                    }
                }
            }
        }
    }

    heat
}

/// Pick the unfired cell with the highest heat, first in row-major order.
///
/// When no unfired cell has positive heat, pick a random unfired cell of even
/// parity (`row + col`), or any unfired cell if none of those remain.
pub fn select_target<R: Rng + ?Sized>(
    defender: &Grid,
    heat: &HeatMap,
    rng: &mut R,
) -> Result<(usize, usize), BoardError> {
    let open = !defender.fired();

    let mut best: Option<((usize, usize), u32)> = None;
    for (r, c) in open.iter_set_bits() {
        let h = heat[r][c];
        if best.map_or(true, |(_, b)| h > b) {
            best = Some(((r, c), h));
        }
    }

    match best {
        None => Err(BoardError::NoTargetsLeft),
        Some((cell, h)) if h > 0 => Ok(cell),
        Some(_) => {
            let cells: Vec<(usize, usize)> = open.iter_set_bits().collect();
            let parity: Vec<(usize, usize)> = cells
                .iter()
                .copied()
                .filter(|&(r, c)| (r + c) % 2 == 0)
                .collect();
            let pool = if parity.is_empty() { &cells } else { &parity };
            debug!("heat map empty, falling back to {} candidate cells", pool.len());
            Ok(pool[rng.random_range(0..pool.len())])
        }
    }
}

/// Next target given an explicit list of remaining defender lengths.
pub fn next_target_with_sizes<R: Rng + ?Sized>(
    defender: &Grid,
    sizes: &[usize],
    rng: &mut R,
) -> Result<(usize, usize), BoardError> {
    let heat = calc_heat(defender, sizes);
    select_target(defender, &heat, rng)
}

/// Next cell for the computer to fire at on `defender`, using the attacker's own
/// grid to decide which vessel lengths are still in play.
pub fn compute_next_target<R: Rng + ?Sized>(
    attacker_own: &Grid,
    defender: &Grid,
    rng: &mut R,
) -> Result<(usize, usize), BoardError> {
    next_target_with_sizes(defender, &remaining_sizes(attacker_own), rng)
}
