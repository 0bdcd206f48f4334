use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::player_cli::CliPlayer;
use seabattle::{compute_next_target, Grid, Orientation, Player, ShotResult, FLEET};

fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(player: CliPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(player.into_output()).unwrap()
}

fn fleet_grid(seed: u64) -> Grid {
    let mut grid = Grid::new();
    grid.place_fleet_randomly(&mut SmallRng::seed_from_u64(seed), &FLEET)
        .unwrap();
    grid
}

#[test]
fn test_select_target_retries_bad_input() {
    let mut p = player("Z9\nB3\n");
    let mut rng = SmallRng::seed_from_u64(1);
    let target = p
        .select_target(&mut rng, &fleet_grid(1), &fleet_grid(2))
        .unwrap();
    assert_eq!(target, (2, 1));
    let out = output(p);
    assert!(out.contains("Enter target ["));
    assert!(out.contains("Column 'Z' out of bounds"));
}

#[test]
fn test_select_target_defaults_to_suggestion() {
    let own = fleet_grid(3);
    let mut target = fleet_grid(4);
    target.shoot_at(5, 5).unwrap();
    let expected = compute_next_target(&own, &target, &mut SmallRng::seed_from_u64(9)).unwrap();

    let mut p = player("\n");
    let got = p
        .select_target(&mut SmallRng::seed_from_u64(9), &own, &target)
        .unwrap();
    assert_eq!(got, expected);

    // closed input takes the suggestion as well
    let mut p = player("");
    let got = p
        .select_target(&mut SmallRng::seed_from_u64(9), &own, &target)
        .unwrap();
    assert_eq!(got, expected);
}

#[test]
fn test_manual_placement_from_input() {
    let lines = [
        "A1 H", "B3 X", "F1", "A3", "E3", "H3", "A5", "D5", "F5", "H5", "J5 V",
    ];
    let mut input = lines.join("\n");
    input.push('\n');
    // a touching placement is rejected and asked again
    let input = input.replacen("A3\n", "A2\nA3\n", 1);

    let mut p = player(&input);
    let mut grid = fleet_grid(5);
    p.place_ships(&mut SmallRng::seed_from_u64(0), &mut grid)
        .unwrap();

    assert!(grid.is_fleet_complete(&FLEET));
    assert_eq!(grid.shot_count(), 0);
    assert_eq!(grid.vessel_at(0, 3).unwrap().map(|v| v.length()), Some(4));
    assert_eq!(grid.vessel_at(4, 9).unwrap().map(|v| v.length()), Some(1));
    let out = output(p);
    assert!(out.contains("Invalid orientation"));
    assert!(out.contains("cannot be placed"));
}

#[test]
fn test_empty_line_places_fleet_at_random() {
    let mut p = player("A1 V\n\n");
    let mut grid = Grid::new();
    p.place_ships(&mut SmallRng::seed_from_u64(6), &mut grid)
        .unwrap();
    assert!(grid.is_fleet_complete(&FLEET));

    let mut p = player("");
    let mut grid = Grid::new();
    grid.place(0, 0, 2, Orientation::Horizontal).unwrap();
    p.place_ships(&mut SmallRng::seed_from_u64(7), &mut grid)
        .unwrap();
    assert!(grid.is_fleet_complete(&FLEET));
}

#[test]
fn test_shot_reports_are_printed() {
    let mut p = player("");
    p.handle_shot_result((2, 1), ShotResult::Hit);
    p.handle_opponent_shot((0, 9), ShotResult::Sunk { length: 3 });
    p.handle_opponent_shot((9, 0), ShotResult::Miss);
    let out = output(p);
    assert!(out.contains("You fired at B3: hit"));
    assert!(out.contains("Opponent fired at J1: sunk a Cruiser"));
    assert!(out.contains("Opponent fired at A10: miss"));
}
