use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    run_match, AiPlayer, Grid, Match, MatchShot, Player, Seat, ShotResult, FLEET,
    TOTAL_SHIP_CELLS,
};

#[test]
fn test_ai_vs_ai_game() {
    let mut rng1 = SmallRng::seed_from_u64(123);
    let mut rng2 = SmallRng::seed_from_u64(456);
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();

    let mut hits = [0usize; 2];
    let mut refires = 0;
    let report = run_match(&mut p1, &mut p2, &mut rng1, &mut rng2, |seat, _, result, _| {
        let i = match seat {
            Seat::First => 0,
            Seat::Second => 1,
        };
        if result.is_hit() {
            hits[i] += 1;
        }
        if result == ShotResult::AlreadyFired {
            refires += 1;
        }
    })
    .unwrap();

    let winner = report.winner.expect("game took too many shots");
    let i = match winner {
        Seat::First => 0,
        Seat::Second => 1,
    };
    assert_eq!(hits[i], TOTAL_SHIP_CELLS);
    assert!(hits[1 - i] < TOTAL_SHIP_CELLS);
    assert_eq!(refires, 0);
    assert!(report.first_shots + report.second_shots <= 200);
    assert!(report.turns >= 1);
}

#[test]
fn test_ai_places_full_fleet_on_a_used_grid() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut grid = Grid::new();
    grid.place_fleet_randomly(&mut rng, &[4, 4]).unwrap();
    grid.shoot_at(0, 0).unwrap();

    let mut ai = AiPlayer::new();
    ai.place_ships(&mut rng, &mut grid).unwrap();
    assert!(grid.is_fleet_complete(&FLEET));
    assert_eq!(grid.shot_count(), 0);
}

#[test]
fn test_same_seeds_same_match() {
    let play = || {
        let mut rng1 = SmallRng::seed_from_u64(1);
        let mut rng2 = SmallRng::seed_from_u64(2);
        run_match(
            &mut AiPlayer::new(),
            &mut AiPlayer::new(),
            &mut rng1,
            &mut rng2,
            |_, _, _, _| {},
        )
        .unwrap()
    };
    assert_eq!(play(), play());
}

#[test]
fn test_match_steps_until_a_fleet_is_gone() {
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let first: &mut dyn Player = &mut p1;
    let second: &mut dyn Player = &mut p2;
    let mut rng1 = SmallRng::seed_from_u64(21);
    let mut rng2 = SmallRng::seed_from_u64(22);

    let mut game = Match::new(first, second, &mut rng1, &mut rng2).unwrap();
    let mut seen = [0usize; 2];
    let mut last: Option<MatchShot> = None;
    while let Some(shot) = game.step().unwrap() {
        if let Some(prev) = last {
            // only a miss hands the turn over
            if prev.result == ShotResult::Miss {
                assert_eq!(shot.seat, prev.seat.opponent());
            } else {
                assert_eq!(shot.seat, prev.seat);
            }
        }
        match shot.seat {
            Seat::First => seen[0] += 1,
            Seat::Second => seen[1] += 1,
        }
        last = Some(shot);
    }
    assert!(game.is_finished());
    assert!(game.step().unwrap().is_none());

    let report = game.report();
    assert_eq!(report.first_shots, seen[0]);
    assert_eq!(report.second_shots, seen[1]);
    let winner = report.winner.unwrap();
    assert!(game.grid(winner.opponent()).is_fleet_destroyed());
    assert!(!game.grid(winner).is_fleet_destroyed());
}
