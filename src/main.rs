//! Inspection tool for the short URL configuration.
//!
//! Resolves the configuration exactly as the service does at startup and
//! prints it, so a deployment's environment can be checked before rollout.
//!
//! # Usage
//!
//! ```bash
//! # Print the resolved configuration
//! cargo run -- show
//!
//! # Print it as JSON
//! cargo run -- show --format json
//!
//! # Only validate (exit code 1 on error)
//! cargo run -- check
//!
//! # Read variables from a specific dotenv file
//! cargo run -- --env-file deploy/prod.env check
//! ```
//!
//! # Environment Variables
//!
//! - `SHORT_CHARS`, `SHORT_LENGTH`, `SHORT_REWRITES`: see [`shortener_config::config`]
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use shortener_config::ResolvedConfig;
use shortener_config::config::load_from_env;
use shortener_config::logging::{self, LogFormat};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

/// Inspect the short URL configuration derived from the environment.
#[derive(Parser)]
#[command(name = "shortener-config")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dotenv file to load instead of `.env`
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Validate the configuration and exit
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from the dotenv file; a missing `.env` is fine
    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    logging::init("info", LogFormat::from_env()?)?;

    let config = load_from_env()?;
    config.print_summary();

    match cli.command {
        Commands::Show { format } => show(&config, format)?,
        Commands::Check => check(&config),
    }

    Ok(())
}

/// Prints the resolved configuration.
fn show(config: &ResolvedConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(config)
                .context("Failed to serialize configuration")?;
            println!("{json}");
        }
        OutputFormat::Text => print_text(config),
    }

    Ok(())
}

fn print_text(config: &ResolvedConfig) {
    println!("{}", "Short URL configuration".bright_blue().bold());
    println!();

    let characters = config.characters();
    println!(
        "{} {} ({} distinct)",
        "Alphabet:".bright_white().bold(),
        characters.len().to_string().bright_green().bold(),
        characters.distinct_len()
    );
    println!(
        "  {}",
        characters
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    );

    let duplicates = characters.duplicates();
    if !duplicates.is_empty() {
        println!(
            "  {} {}",
            "Duplicated:".yellow(),
            duplicates.join(" ").yellow().bold()
        );
    }

    println!(
        "{} {}",
        "ID length:".bright_white().bold(),
        config.length().to_string().bright_green().bold()
    );
    println!(
        "{} {}",
        "ID space:".bright_white().bold(),
        config.id_space()
    );

    println!(
        "{} {}",
        "Rewrites:".bright_white().bold(),
        config.rewrites().len().to_string().bright_green().bold()
    );
    for (from, to) in config.rewrites() {
        println!("  {} {} {}", from, "->".dimmed(), to.bright_yellow());
    }
}

fn check(config: &ResolvedConfig) {
    println!(
        "{} {} symbols, length {}, {} rewrites",
        "Configuration OK:".green().bold(),
        config.characters().len(),
        config.length(),
        config.rewrites().len()
    );
}
