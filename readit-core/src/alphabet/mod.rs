//! Per-alphabet emphasis weights.
//!
//! Weights are data, not code: every alphabet is a small TOML table
//! turned into an immutable [`PriorityTable`] at startup.

pub mod config;
mod loader;
mod table;

pub use config::AlphabetConfig;
pub use loader::{builtin_names, is_builtin, load_builtin, parse_alphabet};
pub use table::PriorityTable;
