use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use spillpay::cache::{decode_names, CacheError, CACHED_NAMES_SLOT};
use spillpay::cli::{Cli, Command, SplitArgs};
use spillpay::config::Config;
use spillpay::logging::{self, LogTarget};
use spillpay::roster::ParticipantStore;
use spillpay::storage::SlotStore;
use spillpay::ui::app::App;
use spillpay::ui::runtime;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());
    let slots = cli.slot_store(&data_dir);
    let log_dir = cli.log_dir(&data_dir);

    match cli.command {
        Some(Command::Split(args)) => {
            logging::init(&config.logging.level, LogTarget::Stderr)?;
            run_split(&args, &config);
            Ok(())
        }
        Some(Command::Names) => {
            logging::init(&config.logging.level, LogTarget::Stderr)?;
            print_names(slots.as_ref(), &data_dir)
        }
        None => {
            let log_file = config.log_file(&log_dir);
            logging::init(&config.logging.level, LogTarget::File(log_file.clone()))
                .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
            run_tui(slots, &config)
        }
    }
}

fn run_split(args: &SplitArgs, config: &Config) {
    tracing::debug!(people = args.people.len(), "Splitting from command line");
    for line in args.render(&config.display.currency_symbol) {
        println!("{line}");
    }
}

fn print_names(slots: &dyn SlotStore, data_dir: &Path) -> Result<()> {
    let Some(bytes) = slots.read(CACHED_NAMES_SLOT)? else {
        return Ok(());
    };
    let names = match decode_names(&bytes) {
        Ok(names) => names,
        Err(CacheError::Empty) => Vec::new(),
        Err(err) => {
            return Err(err).with_context(|| {
                format!("Names cache in {} is unreadable", data_dir.display())
            })
        }
    };
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn run_tui(slots: Box<dyn SlotStore>, config: &Config) -> Result<()> {
    tracing::info!(store = slots.name(), "Opening names cache");
    let app = App::new(
        ParticipantStore::load(slots),
        config.display.currency_symbol.clone(),
    );
    runtime::run(app).context("Terminal session failed")?;
    Ok(())
}
