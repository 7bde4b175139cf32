//! Display formatting under the single supported convention: pt-BR dates
//! and Brazilian real amounts.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const CURRENCY_SYMBOL: &str = "R$";
/// Separates the symbol from the digits, as the pt-BR currency style does.
const SYMBOL_GAP: char = '\u{a0}';
const THOUSANDS_SEPARATOR: &str = ".";
const DECIMAL_SEPARATOR: char = ',';

/// Format a calendar date or a timestamp as `DD/MM/YYYY`.
///
/// A bare `YYYY-MM-DD` is taken component by component, so it never
/// shifts a day under a negative UTC offset. Timestamps carrying an offset
/// are converted to the local calendar date; naive timestamps are already
/// local.
pub(crate) fn format_date(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let date = parse_date_like(trimmed).with_context(|| format!("Invalid date: '{trimmed}'"))?;
    Ok(format_naive_date(date))
}

pub(crate) fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn parse_date_like(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Format an amount as currency with thousand separators and 2 decimal places.
/// e.g. `1234.5` → `"R$ 1.234,50"`, `-500` → `"-R$ 500,00"`
pub(crate) fn format_currency(val: Decimal) -> String {
    let rounded = val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let abs = rounded.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let grouped: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(THOUSANDS_SEPARATOR);

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{SYMBOL_GAP}{grouped}{DECIMAL_SEPARATOR}{dec_part}")
}

/// Coerce a numeric string and format it as currency.
pub(crate) fn format_currency_str(value: &str) -> Result<String> {
    let amount = coerce_number(value)
        .with_context(|| format!("Not a number: '{}'", value.trim()))?;
    Ok(format_currency(amount))
}

/// Parse a plain number, also accepting a lone `,` as the decimal point
/// ("12,50") the way it is typed on a pt-BR keyboard. Grouped input such as
/// "1.234,50" is rejected.
pub(crate) fn coerce_number(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.contains(',') {
        if trimmed.contains('.') || trimmed.matches(',').count() > 1 {
            return None;
        }
        return Decimal::from_str(&trimmed.replace(',', ".")).ok();
    }
    Decimal::from_str(trimmed).ok()
}
