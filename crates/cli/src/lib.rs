pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tavolo_core::config::{LoadOptions, LogFormat, PricingConfig};

#[derive(Debug, Parser)]
#[command(
    name = "tavolo",
    about = "Tavolo pricing operator CLI",
    long_about = "Recompute order totals from a JSON pricing request and inspect the \
                  effective pricing configuration.",
    after_help = "Examples:\n  tavolo preview --request order.json\n  tavolo config"
)]
pub struct Cli {
    /// Explicit config file path (defaults to tavolo.toml lookup).
    #[arg(long, global = true)]
    config_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Price a request file and print the structured pricing result")]
    Preview {
        #[arg(long, help = "Path to a JSON pricing request file")]
        request: PathBuf,
    },
    #[command(about = "Inspect effective pricing configuration values")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let options = LoadOptions { config_path: cli.config_path.clone(), ..LoadOptions::default() };
    let config = match PricingConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            let result =
                commands::CommandResult::failure("config", "config_validation", error.to_string(), 2);
            println!("{}", result.output);
            return ExitCode::from(result.exit_code);
        }
    };

    init_logging(&config);

    let result = match cli.command {
        Command::Preview { request } => commands::preview::run(&config, &request),
        Command::Config => commands::config::run(&config),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn init_logging(config: &PricingConfig) {
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        LogFormat::Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}
