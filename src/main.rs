use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use forage_core::{init_file_logging, init_logging, Simulation};
use forage_lib::app::{self, spawn_signal_handler};
use forage_lib::driver::StopToken;
use forage_lib::model::config::{AppConfig, DEFAULT_CONFIG_PATH};

const TUI_LOG_PATH: &str = "forage.log";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Seed for a reproducible run (overrides `sim.seed`)
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Animate the simulation in the terminal (default)
    Tui,
    /// Run the render loop without a display
    Headless {
        /// Frames to draw before exiting
        #[arg(long, default_value_t = 600)]
        frames: u64,

        /// Train a generation every N frames
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        train_every: Option<u64>,

        /// Print the final world as JSON
        #[arg(long)]
        print_world: bool,
    },
    /// Train generations back to back and print each report
    Train {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        generations: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let command = args.command.clone().unwrap_or(Command::Tui);

    match command {
        Command::Tui => init_file_logging(Path::new(TUI_LOG_PATH))
            .with_context(|| format!("failed to open log file {TUI_LOG_PATH}"))?,
        _ => init_logging(),
    }

    let mut config = AppConfig::load(&args.config)?;
    if args.seed.is_some() {
        config.sim.seed = args.seed;
    }

    let engine = Simulation::new(config.sim.clone()).context("failed to create simulation")?;

    let stop = StopToken::new();
    spawn_signal_handler(stop.clone());

    match command {
        Command::Tui => {
            let frames =
                tokio::task::spawn_blocking(move || app::run_tui(&config, engine, stop)).await??;
            println!("Exited clean after {frames} frames.");
        }
        Command::Headless {
            frames,
            train_every,
            print_world,
        } => {
            let run = tokio::task::spawn_blocking(move || {
                app::run_headless(&config, engine, frames, train_every, stop, |report| {
                    println!("{report}")
                })
            })
            .await??;

            if print_world {
                println!("{}", serde_json::to_string(&run.world)?);
            }
        }
        Command::Train { generations } => {
            let mut engine = engine;
            tokio::task::spawn_blocking(move || {
                app::run_training(&mut engine, generations, |report| println!("{report}"))
            })
            .await??;
        }
    }

    Ok(())
}
