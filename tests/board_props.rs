use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{Grid, ShotResult, BOARD_SIZE, FLEET, NUM_SHIPS};

fn random_grid(seed: u64) -> (Grid, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new();
    grid.place_fleet_randomly(&mut rng, &FLEET).unwrap();
    (grid, rng)
}

fn chebyshev(a: (usize, usize), b: (usize, usize)) -> usize {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_completion_and_adjacency(seed in any::<u64>()) {
        let (grid, _) = random_grid(seed);
        prop_assert_eq!(grid.vessels().len(), NUM_SHIPS);
        prop_assert!(grid.is_fleet_complete(&FLEET));

        let vessels = grid.vessels();
        for (i, a) in vessels.iter().enumerate() {
            prop_assert_eq!(a.cells().count(), a.length());
            for b in &vessels[i + 1..] {
                for ca in a.cells() {
                    for cb in b.cells() {
                        prop_assert!(chebyshev(ca, cb) > 1, "{:?} touches {:?}", ca, cb);
                    }
                }
            }
        }
    }

    #[test]
    fn manual_placement_never_touches(seed in any::<u64>(), attempts in 1..200usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new();
        for _ in 0..attempts {
            let len = rng.random_range(1..=4);
            let r = rng.random_range(0..BOARD_SIZE as usize);
            let c = rng.random_range(0..BOARD_SIZE as usize);
            let o = rng.random::<bool>().into();
            let allowed = grid.can_place(r, c, len, o).unwrap();
            prop_assert_eq!(grid.place(r, c, len, o).is_ok(), allowed);
        }
        let vessels = grid.vessels();
        for (i, a) in vessels.iter().enumerate() {
            for b in &vessels[i + 1..] {
                prop_assert!(!a.mask().dilate().intersects(&b.mask()));
            }
        }
    }

    #[test]
    fn hit_conservation_and_sunk_monotonicity(seed in any::<u64>(), shots in 1..150usize) {
        let (mut grid, mut rng) = random_grid(seed);
        let mut hits = 0;
        let mut sunk_seen = vec![false; grid.vessels().len()];
        for _ in 0..shots {
            let r = rng.random_range(0..BOARD_SIZE as usize);
            let c = rng.random_range(0..BOARD_SIZE as usize);
            let occupied_before = grid.vessel_at(r, c).unwrap().is_some();
            let fresh = !grid.is_shot(r, c).unwrap();
            let result = grid.shoot_at(r, c).unwrap();
            if fresh {
                prop_assert_eq!(result.is_hit(), occupied_before);
            } else {
                prop_assert_eq!(result, ShotResult::AlreadyFired);
            }
            if result.is_hit() {
                hits += 1;
            }
            prop_assert_eq!(grid.hit_count(), hits);
            for (i, v) in grid.vessels().iter().enumerate() {
                prop_assert!(v.hits().is_subset(&v.mask()));
                if sunk_seen[i] {
                    prop_assert!(v.is_sunk());
                }
                sunk_seen[i] = v.is_sunk();
            }
        }
    }
}
