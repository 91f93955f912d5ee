use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::config::THEMES;
use crate::timer::Mode;

/// Largest `preview --steps`.
pub const MAX_PREVIEW_STEPS: u64 = 1000;

/// Largest `history --limit`.
pub const MAX_HISTORY_LIMIT: u64 = 10_000;

#[derive(Parser)]
#[command(name = "focus-timer")]
#[command(about = "A focus timer for the terminal: work and break periods with notifications")]
#[command(long_about = "focus-timer - cycle through focus periods and breaks

Runs a countdown that alternates focus periods with short breaks, and a long
break after every four focus periods. Finished periods ring the terminal bell
and raise a desktop notification.

QUICK START:
  focus-timer                     Open the interactive timer
  focus-timer run --periods 2     Count down two periods in line mode
  focus-timer config set focus 50 Make focus periods 50 minutes
  focus-timer history --today     See what you finished today

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Directory holding settings, history and logs
    ///
    /// Defaults to ~/.focus-timer
    #[arg(long, env = "FOCUS_TIMER_HOME", global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// Keys:
    ///   Space   start/pause        r   reset
    ///   s       skip               1-3 focus / short / long
    ///   + -     adjust duration    t   next theme
    ///   m       toggle sound       n   toggle notifications
    ///   ?       help               q   quit
    Tui,

    /// Count down in line mode
    ///
    /// Prints a live progress line and runs the given number of periods
    /// back to back.
    ///
    /// Examples:
    ///   focus-timer run
    ///   focus-timer run --mode short-break
    ///   focus-timer run --periods 8
    Run(RunArgs),

    /// Show or change settings
    Config(ConfigArgs),

    /// Show completed periods
    ///
    /// Examples:
    ///   focus-timer history
    ///   focus-timer history --today
    ///   focus-timer history --clear --force
    History(HistoryArgs),

    /// Preview the upcoming cycle of periods
    Preview {
        /// Number of periods to show (1-1000)
        #[arg(
            long,
            short = 'n',
            default_value = "10",
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_PREVIEW_STEPS)
        )]
        steps: usize,
    },

    /// Generate shell completions
    ///
    /// Example: focus-timer completions bash > ~/.bash_completion.d/focus-timer
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the `run` command.
#[derive(Args)]
pub struct RunArgs {
    /// Mode to start in
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<Mode>,

    /// Number of periods to run
    #[arg(long, short = 'p', default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub periods: u32,
}

/// Arguments for the `config` command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Settings subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings
    Show,

    /// Set a period length in minutes
    ///
    /// Example: focus-timer config set short-break 10
    Set {
        /// Mode to change
        #[arg(value_enum)]
        mode: Mode,

        /// Length in minutes
        #[arg(value_parser = clap::value_parser!(u32).range(1..=999))]
        minutes: u32,
    },

    /// Turn the completion sound on or off
    Sound {
        /// on or off
        #[arg(value_enum)]
        state: Switch,
    },

    /// Turn desktop notifications on or off
    Notifications {
        /// on or off
        #[arg(value_enum)]
        state: Switch,
    },

    /// Select the color theme
    Theme {
        /// Theme name
        #[arg(value_parser = clap::builder::PossibleValuesParser::new(THEMES))]
        name: String,
    },

    /// Restore default settings
    Reset,
}

/// On/off switch for boolean settings.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Switch {
    /// Enabled
    On,
    /// Disabled
    Off,
}

impl Switch {
    /// Check if the switch is on.
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Arguments for the `history` command.
#[derive(Args)]
pub struct HistoryArgs {
    /// Number of periods to show (1-10000)
    #[arg(
        long,
        short = 'n',
        default_value = "10",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_HISTORY_LIMIT)
    )]
    pub limit: usize,

    /// Show today's totals per mode instead of individual periods
    #[arg(long)]
    pub today: bool,

    /// Delete all recorded periods
    #[arg(long)]
    pub clear: bool,

    /// Confirm --clear
    #[arg(long, requires = "clear")]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_command_defaults_to_tui() {
        let cli = Cli::try_parse_from(["focus-timer"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output, OutputFormat::Pretty);
    }

    #[test]
    fn test_cli_run_defaults() {
        let cli = Cli::try_parse_from(["focus-timer", "run"]).unwrap();
        if let Some(Commands::Run(args)) = cli.command {
            assert!(args.mode.is_none());
            assert_eq!(args.periods, 1);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_run_with_mode() {
        let cli =
            Cli::try_parse_from(["focus-timer", "run", "--mode", "long-break", "-p", "3"]).unwrap();
        if let Some(Commands::Run(args)) = cli.command {
            assert_eq!(args.mode, Some(Mode::LongBreak));
            assert_eq!(args.periods, 3);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_config_set() {
        let cli = Cli::try_parse_from(["focus-timer", "config", "set", "focus", "50"]).unwrap();
        if let Some(Commands::Config(args)) = cli.command {
            if let ConfigCommands::Set { mode, minutes } = args.command {
                assert_eq!(mode, Mode::Focus);
                assert_eq!(minutes, 50);
            } else {
                panic!("Expected Set subcommand");
            }
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_config_set_rejects_zero() {
        assert!(Cli::try_parse_from(["focus-timer", "config", "set", "focus", "0"]).is_err());
    }

    #[test]
    fn test_cli_config_theme_must_be_known() {
        assert!(Cli::try_parse_from(["focus-timer", "config", "theme", "forest"]).is_ok());
        assert!(Cli::try_parse_from(["focus-timer", "config", "theme", "neon"]).is_err());
    }

    #[test]
    fn test_cli_history_force_requires_clear() {
        assert!(Cli::try_parse_from(["focus-timer", "history", "--force"]).is_err());
        assert!(Cli::try_parse_from(["focus-timer", "history", "--clear", "--force"]).is_ok());
    }

    #[test]
    fn test_cli_preview_steps_bounded() {
        let cli = Cli::try_parse_from(["focus-timer", "preview", "-n", "1000"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Preview { steps: 1000 })));

        assert!(Cli::try_parse_from(["focus-timer", "preview", "-n", "1001"]).is_err());
        assert!(Cli::try_parse_from(["focus-timer", "preview", "-n", "0"]).is_err());
        assert!(
            Cli::try_parse_from(["focus-timer", "preview", "-n", "18446744073709551615"]).is_err()
        );
    }

    #[test]
    fn test_cli_history_limit_bounded() {
        assert!(Cli::try_parse_from(["focus-timer", "history", "-n", "10000"]).is_ok());
        assert!(Cli::try_parse_from(["focus-timer", "history", "-n", "10001"]).is_err());
    }

    #[test]
    fn test_cli_global_output() {
        let cli = Cli::try_parse_from(["focus-timer", "preview", "-o", "json"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_switch() {
        assert!(Switch::On.is_on());
        assert!(!Switch::Off.is_on());
    }
}
