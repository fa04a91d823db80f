//! TUI components for regdex.
//!
//! This module provides the interactive catalog browser built on ratatui.

pub mod browse;

pub use browse::{BrowseTui, run_browse_tui};
