#![cfg(feature = "std")]

//! Terminal input for the human player.

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::warn;
use rand::rngs::SmallRng;

use crate::{
    ai,
    board::Grid,
    common::{BoardError, ShotResult},
    config::{class_name, BOARD_SIZE, FLEET},
    player::Player,
    ship::Orientation,
};

/// Format a cell as column letter plus 1-based row, e.g. `A5`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse a coordinate like `A5` into (row, col).
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE as usize {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-10".to_string());
    }
    if row > BOARD_SIZE as usize {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1, col))
}

/// A manual placement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementInput {
    /// Place the next vessel with its origin here, optionally with an orientation.
    At(usize, usize, Option<Orientation>),
    /// Toggle orientation.
    Rotate,
    /// Place the fleet at random.
    Auto,
}

/// Parse `A5`, `A5 H`, `A5 V`, `r` (rotate) or an empty line (random placement).
pub fn parse_placement(input: &str) -> Result<PlacementInput, String> {
    let input = input.trim();
    match input {
        "" => return Ok(PlacementInput::Auto),
        "r" | "R" => return Ok(PlacementInput::Rotate),
        _ => {}
    }
    let mut parts = input.split_whitespace();
    let (r, c) = parse_coord(parts.next().unwrap_or_default())?;
    let orientation = match parts.next() {
        None => None,
        Some("h") | Some("H") => Some(Orientation::Horizontal),
        Some("v") | Some("V") => Some(Orientation::Vertical),
        Some(other) => return Err(format!("Invalid orientation '{}' - use H or V", other)),
    };
    if parts.next().is_some() {
        return Err("Too many words - expected e.g. A5 H".to_string());
    }
    Ok(PlacementInput::At(r, c, orientation))
}

/// Short description of a shot outcome.
pub fn describe_shot(result: ShotResult) -> String {
    match result {
        ShotResult::Miss => "miss".to_string(),
        ShotResult::Hit => "hit".to_string(),
        ShotResult::Sunk { length } => format!("sunk a {}", class_name(length)),
        ShotResult::AlreadyFired => "already fired there".to_string(),
    }
}

/// Describe an orientation for prompts.
pub fn orientation_label(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Horizontal => "horizontal",
        Orientation::Vertical => "vertical",
    }
}

/// Human player reading commands from `input` and writing prompts to `output`.
pub struct CliPlayer<I = StdinLock<'static>, O = Stdout> {
    input: I,
    output: O,
}

impl CliPlayer {
    /// Player on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> CliPlayer<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning its output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Print `prompt` and read one trimmed line. End of input is an error.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, msg: impl fmt::Display) {
        if let Err(e) = writeln!(self.output, "{}", msg) {
            warn!("failed to write to terminal: {}", e);
        }
    }
}

impl<I: BufRead, O: Write> Player for CliPlayer<I, O> {
    /// Ask for each vessel's origin as `A5 H` or `A5 V`. An empty line, or the
    /// end of input, places the whole fleet at random instead.
    fn place_ships(&mut self, rng: &mut SmallRng, grid: &mut Grid) -> Result<(), BoardError> {
        grid.clear();
        for &length in FLEET.iter() {
            loop {
                let prompt = format!(
                    "Place {} (length {}), e.g. A5 H, or empty for random: ",
                    class_name(length),
                    length
                );
                let line = match self.read_line(&prompt) {
                    Ok(line) => line,
                    Err(e) => {
                        warn!("no placement input ({}), placing at random", e);
                        String::new()
                    }
                };
                match parse_placement(&line) {
                    Ok(PlacementInput::At(r, c, orientation)) => {
                        let orientation = orientation.unwrap_or(Orientation::Horizontal);
                        match grid.place(r, c, length, orientation) {
                            Ok(()) => break,
                            Err(e) => self.say(e),
                        }
                    }
                    Ok(PlacementInput::Rotate) => {
                        self.say("Give the orientation after the cell, e.g. A5 V")
                    }
                    Ok(PlacementInput::Auto) => return grid.place_fleet_randomly(rng, &FLEET),
                    Err(e) => self.say(e),
                }
            }
        }
        Ok(())
    }

    /// Ask for a target, offering the targeting suggestion as default. An empty
    /// line, or the end of input, takes the suggestion.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Grid,
        target: &Grid,
    ) -> Result<(usize, usize), BoardError> {
        let (sr, sc) = ai::compute_next_target(own, target, rng)?;
        loop {
            let prompt = format!("Enter target [{}]: ", coord_to_string(sr, sc));
            let line = match self.read_line(&prompt) {
                Ok(line) => line,
                Err(e) => {
                    warn!("no target input ({}), taking the suggestion", e);
                    return Ok((sr, sc));
                }
            };
            if line.is_empty() {
                return Ok((sr, sc));
            }
            match parse_coord(&line) {
                Ok(cell) => return Ok(cell),
                Err(e) => self.say(e),
            }
        }
    }

    fn handle_shot_result(&mut self, coord: (usize, usize), result: ShotResult) {
        let msg = format!(
            "You fired at {}: {}",
            coord_to_string(coord.0, coord.1),
            describe_shot(result)
        );
        self.say(msg);
    }

    fn handle_opponent_shot(&mut self, coord: (usize, usize), result: ShotResult) {
        let msg = format!(
            "Opponent fired at {}: {}",
            coord_to_string(coord.0, coord.1),
            describe_shot(result)
        );
        self.say(msg);
    }
}
