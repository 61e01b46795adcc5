//! Command-line interface.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::roster::{Order, Participant};
use crate::split::{compute_shares, Distribution, SharedCost, Total, NO_DISTRIBUTION_MESSAGE};
use crate::storage::{FileSlotStore, MemorySlotStore, SlotStore};

#[derive(Debug, Parser)]
#[command(name = "spillpay", version, about = "Split a bill by what everyone ordered")]
pub struct Cli {
    /// Config file (default: ~/.config/spillpay/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the names cache
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Neither read nor write anything under the data directory: names stay
    /// in memory and the default log file moves to the temp directory
    #[arg(long)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print each person's share without opening the TUI
    Split(SplitArgs),
    /// Print the cached names, one per line
    Names,
}

#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Grand total including tax and tip
    #[arg(long, value_parser = parse_total)]
    pub total: Total,

    /// Cost of an item shared evenly by everyone
    #[arg(long, default_value = "0")]
    pub shared: String,

    /// People as NAME=ORDER (NAME may be empty)
    #[arg(required = true, value_name = "NAME=ORDER", value_parser = parse_entry)]
    pub people: Vec<Entry>,
}

/// One `NAME=ORDER` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub order: Order,
}

fn parse_total(input: &str) -> Result<Total, String> {
    Total::parse(input).ok_or_else(|| format!("'{input}' is not a positive amount"))
}

fn parse_entry(input: &str) -> Result<Entry, String> {
    let (name, order) = input
        .rsplit_once('=')
        .ok_or_else(|| format!("'{input}' should look like NAME=ORDER"))?;
    let order = Order::parse(order)
        .ok_or_else(|| format!("order '{order}' for '{name}' is not a non-negative number"))?;
    Ok(Entry {
        name: name.to_string(),
        order,
    })
}

impl Cli {
    /// Names cache for this run. Ephemeral runs start from an empty
    /// in-memory store.
    pub fn slot_store(&self, data_dir: &Path) -> Box<dyn SlotStore> {
        if self.ephemeral {
            Box::new(MemorySlotStore::new())
        } else {
            Box::new(FileSlotStore::new(data_dir))
        }
    }

    /// Directory for the default log file.
    pub fn log_dir(&self, data_dir: &Path) -> PathBuf {
        if self.ephemeral {
            std::env::temp_dir()
        } else {
            data_dir.to_path_buf()
        }
    }
}

impl SplitArgs {
    /// Output lines for the `split` command.
    pub fn render(&self, currency: &str) -> Vec<String> {
        let participants: Vec<Participant> = self
            .people
            .iter()
            .map(|entry| Participant::new(entry.name.as_str()).with_order(entry.order))
            .collect();

        match compute_shares(&participants, SharedCost::parse(&self.shared), self.total) {
            Distribution::Shares(shares) => {
                shares.iter().map(|share| share.format(currency)).collect()
            }
            Distribution::NoValidDistribution => vec![NO_DISTRIBUTION_MESSAGE.to_string()],
        }
    }
}
