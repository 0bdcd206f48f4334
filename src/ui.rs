#![cfg(feature = "std")]

//! Terminal rendering of grids and heat maps.

use std::fmt::Write;

use crate::{ai::HeatMap, board::Grid, config::BOARD_SIZE};

const GRID_SIZE: usize = BOARD_SIZE as usize;

fn header(out: &mut String, width: usize) {
    out.push_str("   ");
    for c in 0..GRID_SIZE {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {:>width$}", ch, width = width);
    }
    out.push('\n');
}

fn render(grid: &Grid, reveal: bool) -> String {
    let mut out = String::new();
    header(&mut out, 1);
    let fired = grid.fired();
    let occupancy = grid.occupancy();
    let sunk = grid.sunk_cells();
    for r in 0..GRID_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..GRID_SIZE {
            let shot = fired.get(r, c).unwrap_or(false);
            let ship = occupancy.get(r, c).unwrap_or(false);
            let ch = if sunk.get(r, c).unwrap_or(false) {
                '#'
            } else if shot && ship {
                'X'
            } else if shot {
                'o'
            } else if reveal && ship {
                'S'
            } else {
                '.'
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// The owner's view: vessels visible.
pub fn render_own_grid(grid: &Grid) -> String {
    render(grid, true)
}

/// The attacker's view: only fired-upon cells are revealed.
pub fn render_target_grid(grid: &Grid) -> String {
    render(grid, false)
}

/// Heat counts as a table.
pub fn render_heat_map(heat: &HeatMap) -> String {
    let mut out = String::new();
    header(&mut out, 3);
    for (r, row) in heat.iter().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for v in row {
            let _ = write!(out, " {:>3}", v);
        }
        out.push('\n');
    }
    out
}

pub fn print_own_board(grid: &Grid) {
    print!("{}", render_own_grid(grid));
}

pub fn print_target_board(grid: &Grid) {
    print!("{}", render_target_grid(grid));
}

/// Print the opponent grid (top) and the player's own grid (bottom).
pub fn print_player_view(own: &Grid, target: &Grid) {
    println!("Opponent grid:");
    print_target_board(target);
    println!("\nYour grid:");
    print_own_board(own);
    println!("Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water");
}

/// Print a heat map under a title.
pub fn print_heat_map(heat: &HeatMap) {
    println!("\nTargeting heat:");
    print!("{}", render_heat_map(heat));
}
