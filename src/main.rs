use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use fitcalc::config::AppConfig;
use fitcalc::logging::{init_logging, LogLevel};
use fitcalc::report::{self, OutputFormat};
use fitcalc::{demo_packages, load_packages, process_packages, FitCalcError};

/// fitcalc - Workout summary calculator
///
/// Turns sensor packages (a workout tag plus readings) into distance,
/// mean speed and calorie summaries for swimming, running and race walking.
#[derive(Parser)]
#[command(name = "fitcalc")]
#[command(version)]
#[command(about = "Workout summary calculator", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Package file (.csv or .json); demo packages are used when omitted
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Report format (text, json)
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Exit with an error if any package is rejected
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize packages (default)
    Run,

    /// Inspect or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        show: bool,

        /// Write a default configuration file
        #[arg(long)]
        init: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        let message = match err.downcast_ref::<FitCalcError>() {
            Some(fit_err) => {
                fit_err.log();
                fit_err.user_message()
            }
            None => {
                tracing::error!(error = %format!("{:#}", err), "fitcalc run failed");
                format!("{:#}", err)
            }
        };
        eprintln!("{} {}", "error:".red().bold(), message);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let initializing = matches!(cli.command, Some(Commands::Config { init: true, .. }));
    let mut config = match &cli.config {
        Some(path) if initializing && !path.exists() => AppConfig::default(),
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default(),
    };

    if cli.verbose > 0 {
        config.logging.level = LogLevel::from_verbosity(cli.verbose);
    }
    init_logging(&config.logging).context("Failed to initialize logging")?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            if let Some(format) = cli.format {
                config.output.format = format;
            }
            config.output.strict |= cli.strict;
            summarize(&config, cli.input)
        }
        Commands::Config { show, init } => manage_config(&config, cli.config, show, init),
    }
}

fn summarize(config: &AppConfig, input: Option<PathBuf>) -> Result<()> {
    let packages = match input {
        Some(path) => load_packages(&path).map_err(FitCalcError::from)?,
        None if !config.packages.is_empty() => config.packages.clone(),
        None => demo_packages(),
    };

    let outcomes = process_packages(&packages);
    let rendered = report::render(&outcomes, config.output.format)
        .context("Failed to render report")?;
    println!("{}", rendered);

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        if config.output.strict {
            bail!("{} of {} packages were rejected", failed, outcomes.len());
        }
        eprintln!(
            "{}",
            format!("{} of {} packages were skipped", failed, outcomes.len()).yellow()
        );
    }

    Ok(())
}

fn manage_config(config: &AppConfig, path: Option<PathBuf>, show: bool, init: bool) -> Result<()> {
    let path = path.unwrap_or_else(AppConfig::default_config_path);

    let effective = if init {
        if path.exists() {
            bail!("Config file already exists: {}", path.display());
        }
        let starter = starter_config();
        starter.save_to_file(&path)?;
        eprintln!("{}", format!("✓ Wrote {}", path.display()).green());
        starter
    } else {
        config.clone()
    };

    if show || !init {
        let rendered = toml::to_string_pretty(&effective)
            .map_err(|e| FitCalcError::Configuration(e.to_string()))?;
        println!("# {}", path.display());
        println!("{}", rendered);
    }

    Ok(())
}

/// Config written by `config --init`: defaults plus the demo packages
fn starter_config() -> AppConfig {
    AppConfig {
        packages: demo_packages(),
        ..AppConfig::default()
    }
}
