use anyhow::Result;
use clap::Parser;
use par_deck::cli::{self, Cli};
use par_deck_config::LogLevel;

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = cli::load_config(args.config.as_deref())?;

    // CLI --log-level takes highest precedence, then RUST_LOG, then config,
    // then DEBUG_LEVEL.
    let config_level = (std::env::var_os("RUST_LOG").is_none() && config.log_level != LogLevel::Off)
        .then(|| config.log_level.to_level_filter());
    let override_level = args
        .log_level
        .map(cli::LogLevelArg::to_level_filter)
        .or(config_level);
    par_deck::debug::init_log_bridge(override_level);

    log::info!("Starting par-deck {}", par_deck::VERSION);

    let result = cli::run(&args, &config);
    if let Err(ref e) = result {
        log::error!("par-deck failed: {e:#}");
    }
    result
}
