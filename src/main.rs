//! Toque - Bayesian tier ranking for rated restaurants
//!
//! CLI entry point.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use toque::cli::{render, RateCommand, SeedCommand, TiersCommand};
use toque::config::Config;
use toque::core::Pipeline;
use toque::error::{Result, ToqueError};
use toque::service::RatingService;
use toque::storage::FileRatingStore;

/// Toque - Bayesian tier ranking for rated restaurants
#[derive(Parser)]
#[command(name = "toque")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the ratings log (overrides config)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a venue's initial rating (1-5)
    Seed {
        /// The venue to seed
        venue: String,
        /// Initial rating level
        rating: u8,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Submit a tier grade (S, A, B, C, D, F) for a venue
    Rate {
        /// The venue being graded
        venue: String,
        /// The tier grade
        grade: String,
        /// The submitting user
        #[arg(long)]
        user: String,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Compute and print the current tier assignment
    Tiers {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(Path::new("."))?;

    let log_path = cli
        .store
        .or_else(|| config.store.ratings_log_path())
        .ok_or_else(|| {
            ToqueError::config("could not determine ratings log path (no home directory)")
        })?;
    let store = FileRatingStore::new(log_path);
    let pipeline = Pipeline::from_config(&config);

    match cli.command {
        Commands::Seed {
            venue,
            rating,
            json,
        } => {
            let output = SeedCommand::new(store).run(&venue, rating);
            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if output.success {
                println!("seeded {} at {}", output.venue, output.rating);
            }
            finish(output.success, output.error.as_deref(), json)
        }

        Commands::Rate {
            venue,
            grade,
            user,
            json,
        } => {
            let service = RatingService::new(store, pipeline);
            let output = RateCommand::new(service).run(&user, &venue, &grade);
            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if let Some(tiers) = &output.tiers {
                print!("{}", render(tiers));
            }
            finish(output.success, output.error.as_deref(), json)
        }

        Commands::Tiers { json } => {
            let service = RatingService::new(store, pipeline);
            let output = TiersCommand::new(service).run();
            if json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if let Some(tiers) = &output.tiers {
                print!("{}", render(tiers));
            }
            finish(output.success, output.error.as_deref(), json)
        }
    }
}

/// Map a command output to an exit code, printing the error when the JSON
/// body did not already carry it.
fn finish(success: bool, error: Option<&str>, json: bool) -> Result<ExitCode> {
    if success {
        return Ok(ExitCode::SUCCESS);
    }
    if !json {
        if let Some(error) = error {
            eprintln!("error: {error}");
        }
    }
    Ok(ExitCode::FAILURE)
}
