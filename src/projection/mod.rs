//! Derives what the renderer shows from the store and the current view
//! controls. Nothing here mutates the store.

use rust_decimal::Decimal;

use crate::format::{format_currency, format_naive_date};
use crate::models::{Transaction, TransactionKind};
use crate::store::TransactionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SortKey {
    /// Insertion order.
    #[default]
    Unsorted,
    ValueDesc,
    DateDesc,
}

impl SortKey {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Unsorted => "default",
            Self::ValueDesc => "value-desc",
            Self::DateDesc => "date-desc",
        }
    }

    /// Unknown identifiers fall back to insertion order.
    pub(crate) fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "value-desc" => Self::ValueDesc,
            "date-desc" => Self::DateDesc,
            _ => Self::Unsorted,
        }
    }

    pub(crate) fn all() -> &'static [SortKey] {
        &[Self::Unsorted, Self::ValueDesc, Self::DateDesc]
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Self::Unsorted => Self::ValueDesc,
            Self::ValueDesc => Self::DateDesc,
            Self::DateDesc => Self::Unsorted,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Unsorted => "Insertion order",
            Self::ValueDesc => "Value (high to low)",
            Self::DateDesc => "Date (newest first)",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visual classification of a row. Kinds outside income/expense get none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeClass {
    Income,
    Expense,
}

impl TypeClass {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    fn of(kind: &TransactionKind) -> Option<Self> {
        match kind {
            TransactionKind::Income => Some(Self::Income),
            TransactionKind::Expense => Some(Self::Expense),
            TransactionKind::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DisplayRow {
    pub(crate) id: u64,
    pub(crate) signed_amount_display: String,
    pub(crate) date_display: String,
    pub(crate) description: String,
    pub(crate) type_class: Option<TypeClass>,
}

impl DisplayRow {
    fn from_transaction(txn: &Transaction) -> Self {
        Self {
            id: txn.id,
            signed_amount_display: format_currency(txn.signed_amount()),
            date_display: format_naive_date(txn.date),
            description: txn.description.clone(),
            type_class: TypeClass::of(&txn.kind),
        }
    }
}

/// Sort, filter, then shape `transactions` into display rows.
///
/// Sorting is stable, so ties keep insertion order, and filtering keeps the
/// sorted order among matches.
pub(crate) fn project(transactions: &[Transaction], sort: SortKey, query: &str) -> Vec<DisplayRow> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    match sort {
        SortKey::ValueDesc => ordered.sort_by(|a, b| b.signed_amount().cmp(&a.signed_amount())),
        SortKey::DateDesc => ordered.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::Unsorted => {}
    }

    let needle = query.trim().to_lowercase();
    ordered
        .into_iter()
        .filter(|t| matches_search(&t.description, &needle))
        .map(DisplayRow::from_transaction)
        .collect()
}

fn matches_search(description: &str, needle: &str) -> bool {
    needle.is_empty() || description.trim().to_lowercase().contains(needle)
}

/// The user's current sort key and search text. Lives beside the store,
/// never inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ViewControls {
    pub(crate) sort: SortKey,
    pub(crate) search: String,
}

impl ViewControls {
    pub(crate) fn set_sort(&mut self, raw: &str) {
        self.sort = SortKey::parse(raw);
    }

    pub(crate) fn set_search(&mut self, raw: &str) {
        self.search = raw.to_string();
    }

    pub(crate) fn project(&self, store: &TransactionStore) -> Vec<DisplayRow> {
        project(store.all(), self.sort, &self.search)
    }
}

/// Totals over every stored transaction, independent of the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Summary {
    pub(crate) income: Decimal,
    /// Positive magnitude of all expenses.
    pub(crate) expense: Decimal,
    pub(crate) balance: Decimal,
    pub(crate) income_count: usize,
    pub(crate) expense_count: usize,
}

pub(crate) fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();
    for txn in transactions {
        if txn.is_income() {
            summary.income = summary.income.saturating_add(txn.amount);
            summary.income_count += 1;
        } else if txn.is_expense() {
            summary.expense = summary.expense.saturating_add(txn.amount);
            summary.expense_count += 1;
        }
    }
    summary.balance = summary.income.saturating_sub(summary.expense);
    summary
}

#[cfg(test)]
mod tests;
