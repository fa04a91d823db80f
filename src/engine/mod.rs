//! Filter, sort, and view-state engines.
//!
//! `filter` and `sort` are pure functions over record slices; all mutable
//! browsing state lives in [`state::ViewState`] and [`detail::DetailView`],
//! which the CLI and TUI surfaces own explicitly. There are no module-level
//! globals.

pub mod detail;
pub mod filter;
pub mod sort;
pub mod state;

pub use detail::{DetailView, Section, render_section};
pub use filter::{FilterState, filter, matches};
pub use sort::{SortKey, compare, sort_records};
pub use state::{SEARCH_DEBOUNCE, ViewState};
