//! Solver Bridge Binary
//!
//! Solves a spot through the external solver (with caching) or
//! inspects a cache directory.

use clap::Parser;
use clap::Subcommand;
use gtobridge::cache::Cache;
use gtobridge::cards::Board;
use gtobridge::cards::Hole;
use gtobridge::solver::Bridge;
use gtobridge::solver::Config;
use gtobridge::solver::Solver;
use gtobridge::spot::Position;
use gtobridge::spot::Spot;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "broker spots through an external GTO solver")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// solve a spot and print its strategy table
    Solve {
        /// path to the solver binary
        #[arg(long)]
        binary: PathBuf,
        /// cache directory
        #[arg(long, default_value = "cache")]
        cache: PathBuf,
        /// optional JSON config file of overrides
        #[arg(long)]
        config: Option<PathBuf>,
        /// comma-separated board, empty for preflop
        #[arg(long, default_value = "")]
        board: String,
        /// pot size in big blinds
        #[arg(long)]
        pot: f32,
        /// effective stack in big blinds
        #[arg(long)]
        stack: f32,
        /// acting seat (UTG..BB)
        #[arg(long)]
        position: Position,
        /// restrict output to one hand, e.g. AhQs
        #[arg(long)]
        hole: Option<String>,
    },
    /// report cache occupancy
    Stats {
        #[arg(long, default_value = "cache")]
        cache: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gtobridge::log();
    match Args::parse().command {
        Command::Solve {
            binary,
            cache,
            config,
            board,
            pot,
            stack,
            position,
            hole,
        } => {
            let mut config = match config {
                Some(path) => Config::load(&path)?,
                None => Config::default(),
            };
            config.binary = binary;
            let bridge = Bridge::new(config, &cache)?;
            let spot = Spot::new(Board::try_from(board.as_str())?, pot, stack, position, vec![])?;
            match hole {
                Some(hand) => {
                    let hole = Hole::try_from(hand.as_str())?;
                    let strategy = bridge.strategy(&spot, &hole).await?;
                    print!("{}", strategy);
                }
                None => {
                    let solution = bridge.solve(&spot).await?;
                    println!(
                        "exploitability {:.3} after {} iterations",
                        solution.exploitability(),
                        solution.iterations(),
                    );
                    for (hole, strategy) in solution.strategies() {
                        println!("{}", hole);
                        print!("{}", strategy);
                    }
                }
            }
        }
        Command::Stats { cache } => {
            let cache = Cache::open(&cache)?;
            println!("{}", cache.stats());
        }
    }
    Ok(())
}
