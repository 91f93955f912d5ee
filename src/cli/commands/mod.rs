//! Command implementations for focus-timer.
//!
//! Each command returns the text to print; `main` does the printing.

mod completions;
mod config;
mod history;
mod preview;
mod run;

pub use completions::completions;
pub use config::config;
pub use history::history;
pub use preview::preview;
pub use run::run;
