//! # Module: TUI Widgets
//!
//! ## Responsibility
//! Individual rendering widgets for each dashboard surface. Each widget
//! is a pure function that takes app state and a layout rect, and
//! renders into a frame.
//!
//! ## Guarantees
//! - All widgets handle the pre-first-tick state gracefully
//! - No widget panics on any input range
//! - All widgets read from the same frame, so chart, table header, and
//!   gauges always agree on the series set within one tick

pub mod chart;
pub mod gauges;
pub mod log;
pub mod table;
