//! focus-timer - A focus/break interval timer for the terminal
//!
//! This crate provides the timer state machine, its settings and history
//! storage, completion alerts, and the command-line and terminal interfaces
//! built on top of them.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod output;
pub mod storage;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use controller::FocusTimer;
pub use error::TimerError;
