use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::format::coerce_number;
use crate::models::{NewTransaction, TransactionKind};

/// Largest amount a single transaction may carry, in whole units.
const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum InputError {
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),
    #[error("Amount must not be negative: '{0}'")]
    NegativeAmount(String),
    #[error("Amount too large: '{0}'")]
    AmountTooLarge(String),
    #[error("Invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Raw form fields exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TransactionForm {
    pub(crate) description: String,
    pub(crate) amount: String,
    pub(crate) date: String,
    pub(crate) kind: String,
}

impl TransactionForm {
    pub(crate) fn new(description: &str, amount: &str, date: &str, kind: &str) -> Self {
        Self {
            description: description.to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
            kind: kind.to_string(),
        }
    }

    /// Validate the fields into a record ready for the store. Nothing that
    /// fails here ever reaches the store.
    pub(crate) fn parse(&self) -> Result<NewTransaction, InputError> {
        Ok(NewTransaction {
            description: self.description.trim().to_string(),
            amount: parse_amount(&self.amount)?,
            date: parse_date(&self.date)?,
            kind: TransactionKind::parse(&self.kind),
        })
    }
}

pub(crate) fn parse_amount(s: &str) -> Result<Decimal, InputError> {
    let trimmed = s.trim();
    let amount =
        coerce_number(trimmed).ok_or_else(|| InputError::InvalidAmount(trimmed.to_string()))?;
    if amount < Decimal::ZERO {
        return Err(InputError::NegativeAmount(trimmed.to_string()));
    }
    if amount > Decimal::from(MAX_AMOUNT_UNITS) {
        return Err(InputError::AmountTooLarge(trimmed.to_string()));
    }
    Ok(amount)
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, InputError> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests;
