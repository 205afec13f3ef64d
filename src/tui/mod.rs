//! # Module: TUI Dashboard
//!
//! ## Responsibility
//! The renderer side of the refresh cycle: a Ratatui terminal dashboard
//! showing the price chart, the recent-samples table, the min/max/count
//! gauges with the status indicator, and a diagnostic log tail.
//!
//! ## Guarantees
//! - No panics in any rendering or update path
//! - A failed cycle performs no renderer writes — the previous tick's
//!   frame stays visible with the status set to `error`
//! - The chart slot is created once and mutated in place thereafter
//!
//! ## NOT Responsible For
//! - Fetching or shaping (see `fetch` and `shape`)
//! - Terminal setup/restore (owned by the `tui` binary)

pub mod app;
pub mod events;
pub mod feed;
pub mod ui;
pub mod widgets;
