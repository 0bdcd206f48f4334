pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 10;

/// Vessel lengths in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of vessel segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random draws per vessel before the whole fleet placement starts over.
pub const PLACEMENT_ATTEMPTS: usize = 5000;

/// Whole-fleet restarts before random placement gives up.
pub const MAX_FLEET_RESTARTS: usize = 100;

/// Display name for a vessel of the given length.
pub fn class_name(length: usize) -> &'static str {
    match length {
        4 => "Battleship",
        3 => "Cruiser",
        2 => "Destroyer",
        1 => "Patrol Boat",
        _ => "Vessel",
    }
}
