//! Terminal presentation layer: one sheet of participants, a shared item
//! cost, a total to confirm and the resulting shares.

pub mod app;
pub mod confirm;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod sheet;
pub mod terminal_guard;
pub mod theme;
