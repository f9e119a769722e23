use battleships::{cli, init_logging, Coord, Difficulty, Game, GameStatus, Side};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about = "Human vs. computer Battleships on a 6x6 grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, default_value = "easy", help = "Computer difficulty (easy or hard)")]
        difficulty: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play a whole match with random human shots and print a JSON summary.
    Sim {
        #[arg(long, default_value = "hard", help = "Computer difficulty (easy or hard)")]
        difficulty: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct SimSummary {
    difficulty: Difficulty,
    winner: Side,
    human_shots: usize,
    computer_shots: usize,
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn new_game(difficulty: &str, seed: Option<u64>) -> anyhow::Result<Game> {
    let difficulty: Difficulty = difficulty.parse()?;
    Ok(Game::new(difficulty, make_rng(seed))?)
}

fn simulate(mut game: Game, mut shooter: SmallRng) -> anyhow::Result<SimSummary> {
    use rand::Rng;

    game.place_remaining_randomly()?;
    let mut computer_shots = 0;
    while game.status() == GameStatus::InProgress {
        let open: Vec<Coord> = Coord::all().filter(|&c| !game.has_human_fired(c)).collect();
        let target = open[shooter.random_range(0..open.len())];
        if game.fire_human(target)?.is_terminal() {
            break;
        }
        game.fire_computer()?;
        computer_shots += 1;
    }
    let GameStatus::Finished(winner) = game.status() else {
        anyhow::bail!("simulation stopped before the match was decided");
    };
    Ok(SimSummary {
        difficulty: game.difficulty(),
        winner,
        human_shots: game.human_shots(),
        computer_shots,
    })
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { difficulty, seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut game = new_game(&difficulty, seed)?;
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            cli::run_interactive(&mut game, &mut input, &mut output)?;
        }
        Commands::Sim { difficulty, seed } => {
            let game = new_game(&difficulty, seed)?;
            let shooter = make_rng(seed.map(|s| s.wrapping_add(1)));
            let summary = simulate(game, shooter)?;
            println!("{}", serde_json::to_string(&summary)?);
        }
    }
    Ok(())
}
