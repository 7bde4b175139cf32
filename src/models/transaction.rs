use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
    /// Any value outside the closed income/expense set, kept verbatim.
    Other(String),
}

impl TransactionKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Other(raw) => raw,
        }
    }

    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "income" => Self::Income,
            "expense" => Self::Expense,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    pub fn all() -> &'static [TransactionKind] {
        &[Self::Income, Self::Expense]
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record as submitted, before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub description: String,
    /// Always a non-negative magnitude.
    pub amount: Decimal,
    pub date: NaiveDate,
    pub kind: TransactionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: u64,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub kind: TransactionKind,
}

impl Transaction {
    pub(crate) fn from_new(id: u64, new: NewTransaction) -> Self {
        Self {
            id,
            description: new.description,
            amount: new.amount,
            date: new.date,
            kind: new.kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with the sign implied by the kind. Unknown kinds stay unsigned.
    pub fn signed_amount(&self) -> Decimal {
        if self.is_expense() {
            -self.amount
        } else {
            self.amount
        }
    }
}
