use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use focus_timer::cli::commands;
use focus_timer::config::Paths;
use focus_timer::notify::DesktopSink;
use focus_timer::storage::{HistoryStore, JsonFileStore};
use focus_timer::{Cli, Commands, FocusTimer};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    if let Some(Commands::Completions { shell }) = cli.command {
        print!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let paths = cli
        .data_dir
        .clone()
        .map_or_else(Paths::new, |dir| Ok(Paths::with_root(dir)))?;
    paths.ensure_dirs()?;

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    setup_logging(cli.verbose, interactive.then_some(paths.log_file.as_path()));

    let store = JsonFileStore::new(&paths.settings_file);

    let output = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            focus_timer::tui::run(load_timer(&paths))?;
            String::new()
        }
        Commands::Run(args) => {
            let mut timer = load_timer(&paths);
            commands::run(&mut timer, &args, format)?
        }
        Commands::Config(args) => commands::config(&store, args.command, format)?,
        Commands::History(args) => {
            let history = HistoryStore::open(&paths.history_db).with_context(|| {
                format!("could not open history at {}", paths.history_db.display())
            })?;
            commands::history(&history, &args, format)?
        }
        Commands::Preview { steps } => commands::preview(&store, steps, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Build the timer from the stored settings. History is optional: if the
/// database cannot be opened the timer still runs.
fn load_timer(paths: &Paths) -> FocusTimer {
    let history = match HistoryStore::open(&paths.history_db) {
        Ok(history) => Some(history),
        Err(e) => {
            warn!(error = %e, "history disabled");
            None
        }
    };

    FocusTimer::load(
        Box::new(JsonFileStore::new(&paths.settings_file)),
        Box::new(DesktopSink::default()),
        history,
    )
}

/// Log to stderr, or to `log_file` while the terminal UI owns the screen.
fn setup_logging(verbose: bool, log_file: Option<&Path>) {
    let default = if verbose { "focus_timer=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let file = log_file.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    let (file_layer, stderr_layer) = match (log_file, file) {
        (Some(_), Some(file)) => (
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file))),
            None,
        ),
        (Some(_), None) => (None, None),
        (None, _) => (
            None,
            Some(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
}
