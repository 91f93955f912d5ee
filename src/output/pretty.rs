use colored::Colorize;

use crate::config::TimerConfig;
use crate::storage::{ModeSummary, PeriodRecord};
use crate::timer::{format_duration, format_mmss, Mode, PlannedPeriod, MAX_SESSIONS};

fn on_off(enabled: bool) -> String {
    if enabled {
        "on".green().to_string()
    } else {
        "off".red().to_string()
    }
}

fn mode_colored(mode: Mode) -> String {
    match mode {
        Mode::Focus => mode.label().red().bold().to_string(),
        Mode::ShortBreak => mode.label().green().to_string(),
        Mode::LongBreak => mode.label().blue().to_string(),
    }
}

/// Format settings as pretty output
pub fn format_config_pretty(config: &TimerConfig) -> String {
    let mut output = format!("{}\n", "Settings".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for mode in Mode::ALL {
        output.push_str(&format!(
            "  {:<22} {} min\n",
            mode.label().dimmed(),
            config.durations.minutes(mode)
        ));
    }
    output.push_str(&format!(
        "  {:<22} {}\n",
        "Sound".dimmed(),
        on_off(config.sound_enabled)
    ));
    output.push_str(&format!(
        "  {:<22} {}\n",
        "Notifications".dimmed(),
        on_off(config.desktop_notifications)
    ));
    output.push_str(&format!("  {:<22} {}", "Theme".dimmed(), config.theme.cyan()));

    output
}

/// Format completed periods as a pretty table
pub fn format_history_pretty(records: &[PeriodRecord]) -> String {
    if records.is_empty() {
        return "No completed periods yet.\n\nStart one with: focus-timer".to_string();
    }

    let mut output = format!("{} ({} periods)\n", "History".bold(), records.len());
    output.push_str(&"─".repeat(50));
    output.push('\n');

    for record in records {
        let when = record
            .completed_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M");
        let status = if record.skipped {
            "skipped".yellow()
        } else {
            "done".green()
        };
        let seconds = u32::try_from(record.duration_seconds).unwrap_or(u32::MAX);

        output.push_str(&format!(
            "{}  {:<22} {:>6}  {}\n",
            when.to_string().dimmed(),
            mode_colored(record.mode),
            format_mmss(seconds),
            status
        ));
    }

    output
}

/// Format today's per-mode totals
pub fn format_summary_pretty(summaries: &[ModeSummary]) -> String {
    if summaries.is_empty() {
        return "Nothing finished today.".to_string();
    }

    let mut output = format!("{}\n", "Today".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for summary in summaries {
        let seconds = u64::try_from(summary.total_seconds).unwrap_or(0);
        let mut line = format!(
            "  {:<22} {:>3} × {}",
            mode_colored(summary.mode),
            summary.periods,
            format_duration(seconds)
        );
        if summary.skipped > 0 {
            line.push_str(&format!("  ({} skipped)", summary.skipped).dimmed().to_string());
        }
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format the upcoming cycle
pub fn format_preview_pretty(periods: &[PlannedPeriod]) -> String {
    let mut output = format!("{}\n", "Upcoming periods".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for (i, period) in periods.iter().enumerate() {
        let session = match period.mode {
            Mode::Focus => format!("session {} of {MAX_SESSIONS}", period.session_count),
            Mode::ShortBreak | Mode::LongBreak => String::new(),
        };
        output.push_str(&format!(
            "{:>3}. {:<22} {:>3} min  {}\n",
            i + 1,
            mode_colored(period.mode),
            period.minutes,
            session.dimmed()
        ));
    }

    let total: u32 = periods.iter().map(|p| p.minutes).sum();
    output.push_str(&format!(
        "\nTotal: {}",
        format_duration(u64::from(total) * 60)
    ));

    output
}
