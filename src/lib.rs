//! SpillPay: split a shared bill by what each person ordered.
//!
//! The crate is organized into the following modules:
//!
//! - `roster`: participants and the store that keeps their names cached
//! - `split`: the pure share calculator
//! - `cache`: codec for the persisted names slot
//! - `storage`: named-slot byte storage (file and in-memory)
//! - `config`: TOML configuration
//! - `cli`: command-line arguments
//! - `logging`: tracing subscriber setup
//! - `ui`: terminal presentation layer (MVI)

pub mod cache;
pub mod cli;
pub mod config;
pub mod logging;
pub mod roster;
pub mod split;
pub mod storage;
pub mod ui;
