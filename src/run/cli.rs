use anyhow::Result;

use crate::format::format_currency;
use crate::input::TransactionForm;
use crate::projection::{summarize, DisplayRow, SortKey, ViewControls};
use crate::store::TransactionStore;
use crate::ui::util::truncate;

pub(crate) fn as_cli(args: &[String], store: &mut TransactionStore) -> Result<()> {
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };
    match command.as_str() {
        "list" | "ls" => cli_list(&args[1..], store),
        "add" => cli_add(&args[1..], store),
        "summary" => cli_summary(store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("ledgerview {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("ledgerview — in-memory transaction ledger viewer");
    println!();
    println!("Usage: ledgerview [--seed <file.csv>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                             Launch interactive TUI");
    println!("  list                               Print the transaction table");
    let sort_keys: Vec<&str> = SortKey::all().iter().map(|k| k.as_str()).collect();
    println!("    --sort <key>                     Sort order: {}", sort_keys.join(", "));
    println!("    --search <text>                  Filter by description");
    println!("  add <desc> <amount> <date> <type>  Add a transaction, then print the table");
    println!("  summary                            Print income, expenses and balance");
    println!("  --help, -h                         Show this help");
    println!("  --version, -V                      Show version");
    println!();
    println!("Environment:");
    println!("  LEDGERVIEW_SEED                    Seed CSV (description,amount,date,type)");
    println!("  LEDGERVIEW_LOG                     Log filter (default: info)");
}

/// `--sort` and `--search` flags shared by `list` and `add`.
fn view_controls(args: &[String]) -> ViewControls {
    let flag = |name: &str| {
        args.windows(2)
            .find(|w| w[0] == name)
            .map(|w| w[1].as_str())
    };
    let mut controls = ViewControls::default();
    if let Some(sort) = flag("--sort") {
        controls.set_sort(sort);
        if controls.sort == SortKey::Unsorted && !matches!(sort, "default" | "none") {
            log::warn!("Unknown sort key '{sort}', using insertion order");
        }
    }
    if let Some(search) = flag("--search") {
        controls.set_search(search);
    }
    controls
}

fn cli_list(args: &[String], store: &TransactionStore) -> Result<()> {
    let controls = view_controls(args);
    print_rows(&controls.project(store));
    Ok(())
}

fn cli_add(args: &[String], store: &mut TransactionStore) -> Result<()> {
    let fields: Vec<&String> = args.iter().take(4).collect();
    if fields.len() < 4 || fields.iter().any(|f| f.starts_with("--")) {
        anyhow::bail!("Usage: ledgerview add <description> <amount> <date> <type>");
    }

    let form = TransactionForm::new(fields[0], fields[1], fields[2], fields[3]);
    let new = form.parse().inspect_err(|e| log::warn!("Rejected submission: {e}"))?;
    let stored = store.append(new);
    println!("Added transaction #{}: {}", stored.id, stored.description);
    log::info!("Added transaction #{}", stored.id);

    let controls = view_controls(&args[4..]);
    print_rows(&controls.project(store));
    Ok(())
}

fn cli_summary(store: &TransactionStore) -> Result<()> {
    let summary = summarize(store.all());

    println!("ledgerview — {} transactions", store.len());
    println!("{}", "─".repeat(40));
    println!(
        "  Income:    {:>18}  ({} txns)",
        format_currency(summary.income),
        summary.income_count
    );
    println!(
        "  Expenses:  {:>18}  ({} txns)",
        format_currency(summary.expense),
        summary.expense_count
    );
    println!("  Balance:   {:>18}", format_currency(summary.balance));
    Ok(())
}

fn print_rows(rows: &[DisplayRow]) {
    if rows.is_empty() {
        println!("No transactions");
        return;
    }

    println!(
        "{:<4} {:<10} {:<32} {:<8} {:>16}",
        "ID", "Date", "Description", "Type", "Amount"
    );
    println!("{}", "─".repeat(74));
    for row in rows {
        println!(
            "{:<4} {:<10} {:<32} {:<8} {:>16}",
            row.id,
            row.date_display,
            truncate(&row.description, 32),
            row.type_class.map(|c| c.as_str()).unwrap_or("-"),
            row.signed_amount_display,
        );
    }
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
