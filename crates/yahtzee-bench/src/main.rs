use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::Level;

use yahtzee_bench::logging::init_logging;
use yahtzee_bench::session::{MatchSession, policy_with_samples, run_solo_game};
use yahtzee_bench::stats::ScoreStats;
use yahtzee_core::model::archetype::Archetype;

/// Benchmarking harness for the CPU dice archetypes.
#[derive(Debug, Parser)]
#[command(
    name = "yahtzee-bench",
    author,
    version,
    about = "Deterministic Yahtzee archetype benchmarking harness"
)]
struct Cli {
    /// RNG seed for reproducible runs.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,

    /// Monte-Carlo sample count for the simulated archetypes.
    #[arg(long, value_name = "SAMPLES", default_value_t = 500)]
    samples: u32,

    /// Log policy decisions at DEBUG instead of INFO.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play repeated solo games with one archetype and report totals.
    Analyze {
        /// Archetype to exercise (simulation, gambler, aggressive,
        /// defensive, normal).
        #[arg(value_name = "ARCHETYPE")]
        archetype: Archetype,

        /// Number of solo games to play.
        #[arg(long, value_name = "GAMES", default_value_t = 200)]
        games: u32,

        /// Emit the statistics as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Play a round-robin match between all five archetypes.
    Match {
        /// Write a resumable snapshot here after every round.
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
    },
    /// Resume a saved match snapshot and play it to completion.
    Resume {
        /// Snapshot file written by `match --save`.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    });

    let mut rng = StdRng::seed_from_u64(cli.seed);

    match cli.command {
        Command::Analyze {
            archetype,
            games,
            json,
        } => {
            let policy = policy_with_samples(archetype, cli.samples);
            let mut totals = Vec::with_capacity(games as usize);
            for _ in 0..games {
                let result = run_solo_game(policy.as_ref(), &mut rng)?;
                totals.push(result.total);
            }
            let stats = ScoreStats::from_totals(&totals).context("no games were played")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{archetype}: {} games", stats.games);
                println!(
                    "  mean {:.2}  median {:.1}  std dev {:.2}",
                    stats.mean, stats.median, stats.std_dev
                );
                println!(
                    "  range [{:.0}, {:.0}]  95% CI [{:.2}, {:.2}]",
                    stats.min, stats.max, stats.ci95.0, stats.ci95.1
                );
            }
        }
        Command::Match { save } => {
            let mut session = MatchSession::all_archetypes(cli.samples);
            while !session.is_finished() {
                session.play_round(&mut rng)?;
                if let Some(path) = save.as_deref() {
                    session.save(path)?;
                }
            }
            print_standings(&session);
            if let Some(path) = save.as_deref() {
                println!("Snapshot: {}", path.display());
            }
        }
        Command::Resume { file } => {
            let mut session = MatchSession::load(&file, cli.samples)?;
            println!(
                "Resuming from turn {} with {} players",
                session.next_turn(),
                session.players().len()
            );
            session.run_to_completion(&mut rng)?;
            print_standings(&session);
        }
    }

    Ok(())
}

fn print_standings(session: &MatchSession) {
    println!("Final standings:");
    for (rank, (name, total)) in session.standings().iter().enumerate() {
        println!("{:>2}. {name:<18} {total:>3}", rank + 1);
    }
}
