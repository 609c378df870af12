mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use arithmetic::{Service, normalize_input, render};
use arithmetic_sdk::{ArithmeticClientV1, Operation};
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Arith - host driver for the single-precision arithmetic exports
#[derive(Parser)]
#[command(name = "arith")]
#[command(about = "Arith - evaluate expressions with the single-precision arithmetic exports")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression left to right, e.g. "2 + 3 * 4"
    Eval {
        /// Expression over + - * / (no precedence, no unary minus)
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Clean the input like the calculator keypad does first: collapse
        /// doubled operators to the last one and prefix a leading `0`
        #[arg(long)]
        normalize: bool,
    },
    /// Run a single operation
    Apply {
        /// Operation name (add, multiply, subtract, divide) or symbol
        operation: Operation,
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        y: f32,
    },
    /// Validate configuration and exit
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (ARITH__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.verbose);

    logging::init_logging(&config.logging);
    tracing::debug!("arith starting");

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    // Dispatch subcommands (default: check)
    let service = Service::new();
    match cli.command.unwrap_or(Commands::Check) {
        Commands::Eval {
            expression,
            normalize,
        } => {
            let expression = if normalize {
                normalize_input(&expression)
            } else {
                expression
            };
            eval(&service, &expression)
        }
        Commands::Apply { operation, x, y } => {
            apply(&service, operation, x, y);
            Ok(())
        }
        Commands::Check => check_config(&config),
    }
}

fn eval(client: &dyn ArithmeticClientV1, expression: &str) -> Result<()> {
    let result = client
        .evaluate(expression)
        .with_context(|| format!("cannot evaluate '{expression}'"))?;
    tracing::info!(value = result.value, "evaluation finished");
    println!("{}", result.display);
    Ok(())
}

fn apply(client: &dyn ArithmeticClientV1, operation: Operation, x: f32, y: f32) {
    let value = client.apply(operation, x, y);
    if value.is_nan() {
        tracing::warn!(%operation, x, y, "operation produced NaN");
    }
    println!("{}", render(value));
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}
