//! Interactive TUI
//!
//! Terminal front end for playing rounds.

mod app;
mod rendering;

pub use app::{Alert, App, Statistics, run_tui};
