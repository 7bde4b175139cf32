use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::format::{format_currency_str, format_date};
use crate::models::TransactionKind;
use crate::ui::app::{App, FormField};

/// Centered popup with the four add-transaction fields.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(state) = app.form.as_ref() else {
        return;
    };
    let palette = app.theme.palette();

    let mut lines = vec![Line::from("")];
    let mut cursor = None;
    for (row, field) in FormField::all().iter().enumerate() {
        let active = *field == state.field;
        let label_style = if active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            palette.dim_style()
        };
        let label = format!(" {:<22}", field.label());
        let value = state.value(*field);
        if active {
            cursor = Some((
                (label.chars().count() + value.chars().count()) as u16,
                row as u16 + 1,
            ));
        }
        lines.push(Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(value.to_string(), palette.command_bar_style()),
            Span::styled(preview(*field, value), palette.dim_style()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Tab next field | Enter save | Esc cancel",
        palette.dim_style(),
    )));

    let popup_height = (lines.len() as u16 + 2).min(area.height);
    let popup_width = 64.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(Span::styled(" New transaction ", palette.title_style()))
            .style(Style::default().bg(palette.header_bg)),
    );
    f.render_widget(popup, popup_area);

    if let Some((dx, dy)) = cursor {
        let cx = (popup_area.x + 1 + dx).min(popup_area.right().saturating_sub(2));
        f.set_cursor_position((cx, popup_area.y + 1 + dy));
    }
}

/// How the typed value will be displayed once stored, or a hint while it is
/// not valid yet.
fn preview(field: FormField, value: &str) -> String {
    let shown = match field {
        FormField::Description => return String::new(),
        FormField::Amount => format_currency_str(value).ok(),
        FormField::Date => format_date(value).ok(),
        FormField::Kind => match TransactionKind::parse(value) {
            TransactionKind::Other(_) => {
                let known: Vec<&str> =
                    TransactionKind::all().iter().map(|k| k.as_str()).collect();
                return format!("  (not {}, kept unclassified)", known.join("/"));
            }
            _ => None,
        },
    };
    shown.map(|s| format!("  → {s}")).unwrap_or_default()
}
