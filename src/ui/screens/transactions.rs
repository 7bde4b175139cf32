use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    if app.rows.is_empty() {
        let msg = if !app.store.is_empty() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("No transactions matching '{}'", app.controls.search),
                    palette.dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Esc to clear the search",
                    palette.dim_style(),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled("No transactions yet", palette.dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Press a to add one, or :add <date> <type> <amount> <description>",
                    palette.dim_style(),
                )),
            ]
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style())
            .title(Span::styled(" Transactions (0) ", palette.title_style()));
        f.render_widget(
            Paragraph::new(msg)
                .centered()
                .style(palette.normal_style())
                .block(block),
            area,
        );
        return;
    }

    let header_cells = ["#", "Date", "Description", "Type", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(palette.header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .rows
        .iter()
        .enumerate()
        .skip(app.row_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, row)| {
            let style = if i == app.row_index {
                palette.selected_style()
            } else if i % 2 == 1 {
                palette.alt_row_style()
            } else {
                palette.normal_style()
            };

            let kind = row.type_class.map(|c| c.as_str()).unwrap_or("-");

            Row::new(vec![
                Cell::from(row.id.to_string()),
                Cell::from(row.date_display.clone()),
                Cell::from(truncate(&row.description, 40)),
                Cell::from(kind),
                Cell::from(Span::styled(
                    row.signed_amount_display.clone(),
                    palette.amount_style(row.type_class),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(10),
        Constraint::Length(18),
    ];

    let search = if app.controls.search.trim().is_empty() {
        String::new()
    } else {
        format!("search: '{}' ", app.controls.search)
    };

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style())
            .style(palette.normal_style())
            .title(Span::styled(
                format!(
                    " Transactions ({}/{}) {}| sort: {} ",
                    app.rows.len(),
                    app.store.len(),
                    search,
                    app.controls.sort.label()
                ),
                palette.title_style(),
            )),
    );

    f.render_widget(table, area);
}
