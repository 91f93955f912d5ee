//! Timer modes.

use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// The period a timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Work interval
    Focus,
    /// Short rest between focus periods
    ShortBreak,
    /// Long rest after a full cycle
    LongBreak,
}

impl Mode {
    /// All modes in selector order.
    pub const ALL: [Self; 3] = [Self::Focus, Self::ShortBreak, Self::LongBreak];

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Stable identifier used in storage and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::ShortBreak => "short-break",
            Self::LongBreak => "long-break",
        }
    }

    /// Check if this is a break.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }

    /// Position in [`Mode::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Focus => 0,
            Self::ShortBreak => 1,
            Self::LongBreak => 2,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = TimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "focus" | "f" => Ok(Self::Focus),
            "short-break" | "short" | "sb" => Ok(Self::ShortBreak),
            "long-break" | "long" | "lb" => Ok(Self::LongBreak),
            other => Err(TimerError::Parse(format!("unknown mode: {other}"))),
        }
    }
}
