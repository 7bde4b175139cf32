use crate::models::{NewTransaction, Transaction};

/// Owns every transaction in insertion order. Nothing else holds a copy
/// that can be mutated; views are derived through `projection`.
#[derive(Debug, Default)]
pub(crate) struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_seed(seed: Vec<NewTransaction>) -> Self {
        let mut store = Self::new();
        for new in seed {
            store.append(new);
        }
        store
    }

    /// Store a record, assigning it the next id (`len + 1`).
    pub(crate) fn append(&mut self, new: NewTransaction) -> &Transaction {
        let id = self.transactions.len() as u64 + 1;
        self.transactions.push(Transaction::from_new(id, new));
        log::debug!("Stored transaction #{id}");
        &self.transactions[self.transactions.len() - 1]
    }

    pub(crate) fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
