use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dialoguer::Input;
use five_card_odds::core::{Deck, PokerError};
use five_card_odds::game::{MAX_PLAYERS, MIN_PLAYERS, simulate};
use five_card_odds::odds::{ProbabilityTable, enumerate, enumerate_parallel};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "five-card-odds")]
#[command(about = "Five card poker hand probabilities and showdown simulation")]
struct SimulationArgs {
    /// Players in each simulated game. Prompted for when missing.
    #[arg(short, long)]
    players: Option<usize>,

    /// Number of games to simulate. Prompted for when missing.
    #[arg(short, long)]
    games: Option<usize>,

    /// Seed for the shuffles, so runs can be repeated
    #[arg(long)]
    seed: Option<u64>,

    /// Where the hand probability table goes
    #[arg(long, default_value = "PokerHandProbabilities.txt")]
    probabilities: PathBuf,

    /// Where the game by game results go
    #[arg(long, default_value = "PokerGameResults.txt")]
    results: PathBuf,

    /// Enumerate hands on a single thread
    #[arg(long)]
    serial: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = SimulationArgs::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: SimulationArgs) -> Result<(), PokerError> {
    let deck = Deck::new();
    let counts = if args.serial {
        enumerate(&deck[..])?
    } else {
        enumerate_parallel(&deck[..])?
    };
    let table = ProbabilityTable::from_counts(&counts)?;
    table.write_to(&mut BufWriter::new(File::create(&args.probabilities)?))?;

    println!("Welcome to 5-Card Poker Simulation!");
    println!(
        "For hand probabilities, see \"{}\"\n",
        args.probabilities.display()
    );

    let players = match args.players {
        Some(players) => players,
        None => prompt_players()?,
    };
    let games = match args.games {
        Some(games) => games,
        None => prompt_games()?,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut out = BufWriter::new(File::create(&args.results)?);
    let summary = simulate(players, games, &mut rng, &mut out)?;
    event!(Level::INFO, ?summary, "Wrote game results");

    println!(
        "\nYour games have been simulated! Results can be found in \"{}\"",
        args.results.display()
    );
    Ok(())
}

fn prompt_players() -> Result<usize, PokerError> {
    let players = Input::<usize>::new()
        .with_prompt(format!(
            "How many players would you like to simulate (between {} and {})?",
            MIN_PLAYERS, MAX_PLAYERS
        ))
        .validate_with(|players: &usize| -> Result<(), String> {
            if (MIN_PLAYERS..=MAX_PLAYERS).contains(players) {
                Ok(())
            } else {
                Err(String::from("Invalid number! Please try another."))
            }
        })
        .interact_text()
        .map_err(io::Error::other)?;
    Ok(players)
}

fn prompt_games() -> Result<usize, PokerError> {
    let games = Input::<usize>::new()
        .with_prompt("How many games would you like to simulate?")
        .interact_text()
        .map_err(io::Error::other)?;
    Ok(games)
}
