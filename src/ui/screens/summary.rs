use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::format::format_currency;
use crate::ui::app::App;
use crate::ui::theme::Palette;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let summary = &app.summary;
    render_card(
        f,
        cards[0],
        palette,
        "Income",
        summary.income,
        palette.green,
        format!("{} txns", summary.income_count),
    );
    render_card(
        f,
        cards[1],
        palette,
        "Expenses",
        summary.expense,
        palette.red,
        format!("{} txns", summary.expense_count),
    );
    render_card(
        f,
        cards[2],
        palette,
        "Balance",
        summary.balance,
        if summary.balance >= Decimal::ZERO {
            palette.green
        } else {
            palette.red
        },
        format!("{} total", app.store.len()),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    title: &str,
    amount: Decimal,
    color: Color,
    subtitle: String,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .style(palette.normal_style())
        .title(Span::styled(format!(" {title} "), palette.title_style()));

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format_currency(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, palette.dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}
