use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{run_match, AiPlayer};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();

    let report = run_match(&mut p1, &mut p2, &mut rng1, &mut rng2, |_, _, _, _| {})?;

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
