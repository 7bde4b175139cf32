//! Startup dataset: either the built-in sample ledger or a CSV file.

use anyhow::{Context, Result};
use std::path::Path;

use crate::input::{InputError, TransactionForm};
use crate::models::NewTransaction;

const COLUMNS: [&str; 4] = ["description", "amount", "date", "type"];

/// Sample ledger shown when no seed file is configured.
pub(crate) fn mock_data() -> Result<Vec<NewTransaction>, InputError> {
    [
        ("Salário", "5000", "2025-10-01", "income"),
        ("Aluguel", "1500", "2025-10-05", "expense"),
        ("Supermercado", "432.87", "2025-10-07", "expense"),
        ("Freelance site", "1200", "2025-10-12", "income"),
        ("Conta de luz", "187.3", "2025-10-15", "expense"),
        ("Cinema", "64", "2025-10-18", "expense"),
        ("Venda de bicicleta", "850", "2025-10-20", "income"),
        ("Farmácia", "92.45", "2025-10-22", "expense"),
    ]
    .iter()
    .map(|(description, amount, date, kind)| {
        TransactionForm::new(description, amount, date, kind).parse()
    })
    .collect()
}

/// Read seed transactions from a CSV file with a header row naming the
/// `description`, `amount`, `date` and `type` columns in any order.
pub(crate) fn load_csv(path: &Path) -> Result<Vec<NewTransaction>> {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open seed file: {}", path.display()))?;
    read_csv(rdr)
}

fn read_csv<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<NewTransaction>> {
    let headers = rdr.headers().context("Failed to read CSV header")?.clone();
    let mut positions = [0usize; 4];
    for (slot, name) in positions.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("Seed file is missing the '{name}' column"))?;
    }
    let [desc_col, amount_col, date_col, type_col] = positions;

    let mut seed = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        // Header is line 1
        let line = i + 2;
        let record = result.with_context(|| format!("Row {line}: failed to read CSV record"))?;
        let field = |col: usize| record.get(col).unwrap_or("");
        let form = TransactionForm::new(
            field(desc_col),
            field(amount_col),
            field(date_col),
            field(type_col),
        );
        let new = form.parse().with_context(|| format!("Row {line}"))?;
        seed.push(new);
    }

    log::info!("Loaded {} seed transactions", seed.len());
    Ok(seed)
}
