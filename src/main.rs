use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::player_cli::{
    coord_to_string, describe_shot, orientation_label, parse_placement, CliPlayer,
    PlacementInput,
};
use seabattle::ui::{print_heat_map, print_own_board, print_player_view, render_target_grid};
use seabattle::{
    calc_heat, class_name, init_logging, remaining_sizes, AiPlayer, Match, Phase, Player, Seat,
    Session, SessionError, Side,
};
use tokio::time::{sleep, Duration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place your fleet by hand instead of at random")]
        manual: bool,
        #[arg(long, default_value_t = 800, help = "Pause between computer shots")]
        delay_ms: u64,
        #[arg(long, help = "Show the computer's targeting heat map each turn")]
        heat: bool,
    },
    /// Watch two computer players fight it out.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0, help = "Pause between shots")]
        delay_ms: u64,
    },
}

fn make_rng(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn place_manually(
    session: &mut Session,
    human: &mut CliPlayer,
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    session.begin_manual_placement()?;
    println!("Enter an origin like A5 or A5 V, 'r' to rotate, or an empty line for random placement.");
    while let Phase::ManualPlacement { orientation, .. } = session.phase() {
        print_own_board(session.human_grid());
        let length = session.next_length().unwrap_or(0);
        let prompt = format!(
            "Place {} (length {}, {}): ",
            class_name(length),
            length,
            orientation_label(orientation)
        );
        match parse_placement(&human.read_line(&prompt)?) {
            Ok(PlacementInput::At(r, c, wanted)) => {
                if wanted.is_some_and(|o| o != orientation) {
                    session.rotate()?;
                }
                match session.place_next(r, c) {
                    Ok(_) => {}
                    Err(SessionError::Board(e)) => println!("{}", e),
                    Err(e) => return Err(e.into()),
                }
            }
            Ok(PlacementInput::Rotate) => {
                session.rotate()?;
            }
            Ok(PlacementInput::Auto) => {
                session.restart();
                session.auto_place(rng)?;
            }
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}

async fn play(seed: Option<u64>, manual: bool, delay_ms: u64, heat: bool) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = make_rng(seed, 0);
    let mut session = Session::new();
    let mut human = CliPlayer::stdio();
    if manual {
        place_manually(&mut session, &mut human, &mut rng)?;
    } else {
        session.auto_place(&mut rng)?;
    }
    session.start(&mut rng)?;

    loop {
        match session.phase() {
            Phase::PlayerTurn => {
                print_player_view(session.human_grid(), session.computer_grid());
                let (r, c) =
                    human.select_target(&mut rng, session.human_grid(), session.computer_grid())?;
                match session.player_fire(r, c) {
                    Ok(report) => human.handle_shot_result(report.target, report.result),
                    Err(SessionError::Board(e)) => println!("{}", e),
                    Err(e) => return Err(e.into()),
                }
            }
            Phase::OpponentTurn => {
                sleep(Duration::from_millis(delay_ms)).await;
                if heat {
                    let sizes = remaining_sizes(session.computer_grid());
                    print_heat_map(&calc_heat(session.human_grid(), &sizes));
                }
                let report = session.opponent_fire(&mut rng)?;
                human.handle_opponent_shot(report.target, report.result);
            }
            Phase::GameOver(winner) => {
                print_player_view(session.human_grid(), session.computer_grid());
                match winner {
                    Side::Human => println!("You won!"),
                    Side::Computer => println!("You lost."),
                }
                return Ok(());
            }
            other => anyhow::bail!("unexpected phase {:?}", other),
        }
    }
}

async fn local(seed: Option<u64>, delay_ms: u64) -> anyhow::Result<()> {
    println!("Starting local computer vs computer game...");
    let mut rng1 = make_rng(seed, 0);
    let mut rng2 = make_rng(seed, 1);
    let mut ai1 = AiPlayer::new();
    let mut ai2 = AiPlayer::new();

    let mut game = Match::new(&mut ai1, &mut ai2, &mut rng1, &mut rng2)?;
    while let Some(shot) = game.step()? {
        println!(
            "{:?} fired at {}: {}\n{}",
            shot.seat,
            coord_to_string(shot.target.0, shot.target.1),
            describe_shot(shot.result),
            render_target_grid(game.grid(shot.seat.opponent()))
        );
        if delay_ms > 0 {
            sleep(Duration::from_millis(delay_ms)).await;
        }
    }
    let report = game.report();
    match report.winner {
        Some(Seat::First) => println!("First player wins after {} turns", report.turns),
        Some(Seat::Second) => println!("Second player wins after {} turns", report.turns),
        None => println!("No winner after {} turns", report.turns),
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            manual,
            delay_ms,
            heat,
        } => play(seed, manual, delay_ms, heat).await,
        Commands::Local { seed, delay_ms } => local(seed, delay_ms).await,
    }
}
