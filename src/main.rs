mod cli;
mod config;
mod error;
mod logic;
mod models;
mod store;
mod ui;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands, RecommendArgs};
use config::Config;
use models::{RuleTable, SoilSample};
use store::OutputStore;
use tracing_subscriber::EnvFilter;
use ui::{CropListing, RecommendationSummary};

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        // Keep stdout for the summary
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        command,
        config,
        rules,
        output_dir,
        ..
    } = cli;

    // Setup writes a fresh config, so it runs before any is loaded
    let args = match command {
        Commands::Init => {
            Config::setup_interactive()?;
            return Ok(());
        }
        Commands::Crops => None,
        Commands::Recommend(args) => Some(args),
    };

    // Load configuration, then apply CLI and environment overrides
    let config = Config::load(config.as_ref())?.with_overrides(rules, output_dir);
    tracing::debug!(?config, "Resolved configuration");

    let rules = RuleTable::load(&config.rules_path)?;

    match args {
        Some(args) => run_recommend(&args, &rules, &config),
        None => {
            println!("{}", CropListing::new(&rules));
            Ok(())
        }
    }
}

fn run_recommend(args: &RecommendArgs, rules: &RuleTable, config: &Config) -> anyhow::Result<()> {
    // Validate every numeric field before computing anything
    let sample = SoilSample::from_raw(&args.crop, &args.ph, &args.n, &args.p, &args.k, &args.rainfall)?;
    let recommendation = logic::recommend(&sample, rules)?;

    println!();
    println!("=== AGRO ADVISORY RESULT ===");
    println!("{}", RecommendationSummary::new(&recommendation));

    if args.no_save {
        return Ok(());
    }

    // Save outputs: one history entry and one report per run
    let store = OutputStore::new(&config.output);
    let now = Local::now();

    store
        .append_history(&recommendation, now)
        .with_context(|| format!("Failed to update history at {}", store.history_path().display()))?;
    let report_path = store
        .write_report(&recommendation, now)
        .with_context(|| format!("Failed to write report in {}", store.dir().display()))?;

    println!();
    println!("Saved: {}", report_path.display());
    println!("History: {}", store.history_path().display());

    Ok(())
}
