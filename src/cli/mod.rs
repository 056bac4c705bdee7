//! Command-line interface for par-deck.
//!
//! The binary is a development driver for the session core: it replays a
//! scripted sequence of tab operations and prints the resulting registry.
//! Replay parsing and execution live in the [`replay`] submodule.

pub mod replay;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use par_deck_config::Config;
use std::path::{Path, PathBuf};

/// par-deck - session and split-screen core for multi-pane remote clients
#[derive(Parser)]
#[command(name = "par-deck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/par-deck/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set debug log level (overrides config and RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a YAML script of tab operations and print the final state as JSON
    Replay {
        /// Script file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the effective configuration as YAML
    ShowConfig,
}

/// Load the config named on the command line, else the default file if it
/// exists, else built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = Config::config_path();
            if !default_path.exists() {
                log::info!("No config file, using defaults");
                return Ok(Config::default());
            }
            default_path
        }
    };
    Config::load_from(&path).with_context(|| format!("loading config {}", path.display()))
}

/// Run the selected subcommand
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Replay { file } => {
            let script = std::fs::read_to_string(file)
                .with_context(|| format!("reading script {}", file.display()))?;
            let ops = replay::parse_script(&script)?;
            let report = replay::replay(config, &ops);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Commands::ShowConfig => {
            print!("{}", serde_yaml_ng::to_string(config)?);
            Ok(())
        }
    }
}
