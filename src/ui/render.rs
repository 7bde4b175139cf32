use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode};
use super::commands;
use super::theme::Palette;

/// Rows of chrome around the table body: cards, status, command bar,
/// table borders and header.
pub(crate) const CHROME_HEIGHT: u16 = 4 + 1 + 1 + 3;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let area = f.area();
    f.render_widget(Block::default().style(palette.normal_style()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Summary cards
            Constraint::Min(5),    // Table
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(area);

    super::screens::summary::render(f, chunks[0], app);
    super::screens::transactions::render(f, chunks[1], app);
    render_status_bar(f, chunks[2], app, palette);
    render_command_bar(f, chunks[3], app, palette);

    if app.input_mode == InputMode::Form {
        super::screens::form::render(f, area, app);
    }

    if app.show_help {
        render_help_overlay(f, area, palette);
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => palette.accent,
        InputMode::Command | InputMode::Form => palette.green,
        InputMode::Search => palette.yellow,
    };
    let mode_style = Style::default()
        .fg(palette.header_bg)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = format!(
        " {} shown | {} total | sort: {}",
        app.rows.len(),
        app.store.len(),
        app.controls.sort
    );

    let right = match app.input_mode {
        InputMode::Form => " Tab field | Enter save | Esc cancel ",
        InputMode::Search => " Enter keep | Esc clear ",
        _ => " a add | / search | s sort | t theme | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, palette.status_bar_style()),
        Span::styled(" ".repeat(pad), palette.status_bar_style()),
        Span::styled(right, palette.status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(palette.accent)),
                Span::styled(&app.command_input, palette.command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Search => {
            let match_info = if !app.controls.search.is_empty() {
                format!("  ({} matches)", app.rows.len())
            } else {
                String::new()
            };
            (
                Line::from(vec![
                    Span::styled("/", Style::default().fg(palette.yellow)),
                    Span::styled(&app.controls.search, palette.command_bar_style()),
                    Span::styled(match_info, palette.dim_style()),
                ]),
                Some(1 + app.controls.search.chars().count() as u16),
            )
        }
        InputMode::Normal | InputMode::Form => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, / to search, a to add, ? for help",
                    palette.dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    palette.command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(palette.command_bg));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect, palette: &Palette) {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(palette.yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let mut help_text = vec![
        Line::from(Span::styled(
            " ledgerview Help ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading(" Keys"),
        Line::from(Span::styled(
            "  j/k or Up/Down   Move cursor           g/G        Top/Bottom",
            palette.normal_style(),
        )),
        Line::from(Span::styled(
            "  a                Add transaction       /          Search (live)",
            palette.normal_style(),
        )),
        Line::from(Span::styled(
            "  s                Cycle sort order      t          Toggle theme",
            palette.normal_style(),
        )),
        Line::from(Span::styled(
            "  :                Command mode          Ctrl-q     Quit",
            palette.normal_style(),
        )),
        Line::from(""),
        heading(" Commands"),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<10} {desc}"),
            palette.normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        palette.dim_style(),
    )));

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.header_bg)),
    );
    f.render_widget(help, popup_area);
}
