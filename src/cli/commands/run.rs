//! Line-mode countdown.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, RunArgs};
use crate::controller::FocusTimer;
use crate::error::TimerError;
use crate::output::to_json;
use crate::timer::{render_progress_bar, Completion, TimerEngine};

const REDRAW_INTERVAL: Duration = Duration::from_millis(200);
const BAR_WIDTH: usize = 20;

/// Count down `args.periods` periods back to back, redrawing a progress line
/// on stdout. Progress lines are only drawn for pretty output.
///
/// # Errors
///
/// Returns an error if stdout cannot be written or the summary cannot be
/// serialized.
pub fn run(timer: &mut FocusTimer, args: &RunArgs, format: OutputFormat) -> Result<String, TimerError> {
    if let Some(mode) = args.mode {
        timer.set_mode(mode);
    }

    let draw = format == OutputFormat::Pretty;
    let mut stdout = std::io::stdout();
    let mut completions = Vec::new();

    for _ in 0..args.periods {
        timer.start();

        let completion = loop {
            if draw {
                write!(stdout, "\r{}", progress_line(timer.engine()))?;
                stdout.flush()?;
            }
            thread::sleep(REDRAW_INTERVAL);
            if let Some(completion) = timer.pump(Instant::now()) {
                break completion;
            }
        };

        if draw {
            writeln!(stdout, "\r{}", finished_line(&completion))?;
        }
        completions.push(completion);
    }

    summary(&completions, timer.engine(), format)
}

/// "Focus  24:59 [██░░] 4%" for the current state.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn progress_line(engine: &TimerEngine) -> String {
    let progress = engine.progress_fraction();
    let percent = (progress * 100.0).round() as u32;

    format!(
        "{:<12} {} {} {percent:>3}%",
        engine.mode().label().bold(),
        engine.time_label(),
        render_progress_bar(progress, BAR_WIDTH)
    )
}

fn finished_line(completion: &Completion) -> String {
    format!(
        "{:<12} 00:00 {} done, next up: {}",
        completion.finished.label().bold(),
        render_progress_bar(1.0, BAR_WIDTH),
        completion.next.label()
    )
    .green()
    .to_string()
}

fn summary(
    completions: &[Completion],
    engine: &TimerEngine,
    format: OutputFormat,
) -> Result<String, TimerError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "count": completions.len(),
            "completed": completions,
            "next": engine.mode(),
            "session_count": engine.session_count(),
        })),
        OutputFormat::Pretty => Ok(format!(
            "Finished {} period{}. Next: {} ({})",
            completions.len(),
            if completions.len() == 1 { "" } else { "s" },
            engine.mode(),
            engine.session_label()
        )),
    }
}
