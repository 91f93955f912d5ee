//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

use crate::timer::Mode;
use crate::tui::app::{App, HELP_TEXT};
use crate::tui::theme::Palette;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let palette = app.palette();

    // Create layout: header, mode tabs, clock, progress, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Mode tabs
            Constraint::Min(5),    // Clock
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, &palette, chunks[0]);
    render_tabs(frame, app, &palette, chunks[1]);
    render_clock(frame, app, &palette, chunks[2]);
    render_progress(frame, app, &palette, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let config = app.timer.config();
    let flags = format!(
        "sound:{} notify:{} theme:{}",
        if config.sound_enabled { "on" } else { "off" },
        if config.desktop_notifications { "on" } else { "off" },
        config.theme
    );

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Focus Timer ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(flags, Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    );

    frame.render_widget(header, area);
}

/// Render the mode selector.
fn render_tabs(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let engine = app.timer.engine();
    let durations = engine.durations();

    let titles: Vec<Line<'_>> = Mode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            Line::from(format!(
                "{} {} ({}m)",
                i + 1,
                mode.label(),
                durations.minutes(*mode)
            ))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(engine.mode().index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(palette.mode(engine.mode()))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .divider("|")
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(tabs, area);
}

/// Render the remaining time and session label.
fn render_clock(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let engine = app.timer.engine();
    let color = palette.mode(engine.mode());

    let state = if engine.is_running() { "running" } else { "paused" };

    // Vertically center the three lines
    let padding = area.height.saturating_sub(5) / 2;
    let mut lines = vec![Line::from(""); usize::from(padding)];
    lines.push(Line::from(Span::styled(
        engine.time_label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        engine.session_label(),
        Style::default().fg(color),
    )));
    lines.push(Line::from(Span::styled(
        state,
        Style::default().fg(Color::DarkGray),
    )));

    let clock = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(format!(" {} ", engine.mode().label())),
        );

    frame.render_widget(clock, area);
}

/// Render the progress gauge.
fn render_progress(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let engine = app.timer.engine();
    let ratio = engine.progress_fraction().clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(palette.mode(engine.mode())))
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0));

    frame.render_widget(gauge, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = if app.show_help {
        HELP_TEXT
    } else {
        app.status.as_deref().unwrap_or("?:help | q:quit")
    };

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
