#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::input::TransactionForm;
use crate::models::NewTransaction;

fn new_txn(description: &str, amount: Decimal, date: &str, kind: TransactionKind) -> NewTransaction {
    NewTransaction {
        description: description.into(),
        amount,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        kind,
    }
}

fn salary_and_rent() -> TransactionStore {
    TransactionStore::from_seed(vec![
        new_txn("Salary", dec!(1000), "2025-01-01", TransactionKind::Income),
        new_txn("Rent", dec!(500), "2025-01-02", TransactionKind::Expense),
    ])
}

fn mixed() -> TransactionStore {
    TransactionStore::from_seed(vec![
        new_txn("Groceries", dec!(80), "2025-03-10", TransactionKind::Expense),
        new_txn("Freelance gig", dec!(300), "2025-03-01", TransactionKind::Income),
        new_txn("Coffee beans", dec!(80), "2025-03-15", TransactionKind::Expense),
        new_txn("Gift from grandma", dec!(50), "2025-03-10", TransactionKind::Other("gift".into())),
        new_txn("Refund", dec!(300), "2025-02-20", TransactionKind::Income),
    ])
}

fn ids(rows: &[DisplayRow]) -> Vec<u64> {
    rows.iter().map(|r| r.id).collect()
}

// ── SortKey ───────────────────────────────────────────────────

#[test]
fn test_sort_key_parse() {
    assert_eq!(SortKey::parse("value-desc"), SortKey::ValueDesc);
    assert_eq!(SortKey::parse("date-desc"), SortKey::DateDesc);
    assert_eq!(SortKey::parse(" DATE-DESC "), SortKey::DateDesc);
    assert_eq!(SortKey::parse(""), SortKey::Unsorted);
    assert_eq!(SortKey::parse("default"), SortKey::Unsorted);
    assert_eq!(SortKey::parse("amount-asc"), SortKey::Unsorted);
}

#[test]
fn test_sort_key_roundtrip() {
    for k in SortKey::all() {
        assert_eq!(SortKey::parse(k.as_str()), *k);
    }
}

#[test]
fn test_sort_key_next_cycles_through_all() {
    let mut k = SortKey::default();
    let mut seen = Vec::new();
    for _ in 0..SortKey::all().len() {
        seen.push(k);
        k = k.next();
    }
    assert_eq!(k, SortKey::default());
    assert_eq!(seen, SortKey::all());
}

// ── Scenarios ─────────────────────────────────────────────────

#[test]
fn test_value_desc_puts_income_before_expense() {
    let store = salary_and_rent();
    let rows = project(store.all(), SortKey::ValueDesc, "");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].description, "Salary");
    assert_eq!(rows[0].signed_amount_display, "R$\u{a0}1.000,00");
    assert_eq!(rows[1].description, "Rent");
    assert_eq!(rows[1].signed_amount_display, "-R$\u{a0}500,00");
}

#[test]
fn test_search_rent_regardless_of_sort() {
    let store = salary_and_rent();
    for key in SortKey::all() {
        let rows = project(store.all(), *key, "rent");
        assert_eq!(ids(&rows), vec![2], "sort key {key}");
        assert_eq!(rows[0].description, "Rent");
    }
}

#[test]
fn test_append_then_project_keeps_old_ids() {
    let mut store = salary_and_rent();
    let bonus = store
        .append(new_txn("Bonus", dec!(200), "2025-01-01", TransactionKind::Income))
        .id;
    assert_eq!(bonus, 3);

    let rows = project(store.all(), SortKey::Unsorted, "");
    assert_eq!(ids(&rows), vec![1, 2, 3]);
    assert_eq!(rows[0].description, "Salary");
    assert_eq!(rows[1].description, "Rent");
}

// ── Sort ──────────────────────────────────────────────────────

#[test]
fn test_unsorted_is_insertion_order() {
    let store = mixed();
    assert_eq!(ids(&project(store.all(), SortKey::Unsorted, "")), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_value_desc_is_stable() {
    let store = mixed();
    // signed: 1:-80 2:+300 3:-80 4:+50 (neutral) 5:+300
    let rows = project(store.all(), SortKey::ValueDesc, "");
    assert_eq!(ids(&rows), vec![2, 5, 4, 1, 3]);
}

#[test]
fn test_date_desc_is_stable() {
    let store = mixed();
    // dates: 1:03-10 2:03-01 3:03-15 4:03-10 5:02-20
    let rows = project(store.all(), SortKey::DateDesc, "");
    assert_eq!(ids(&rows), vec![3, 1, 4, 2, 5]);
}

#[test]
fn test_sort_never_reorders_store() {
    let store = mixed();
    let before = store.all().to_vec();
    project(store.all(), SortKey::ValueDesc, "");
    project(store.all(), SortKey::DateDesc, "");
    assert_eq!(store.all(), before.as_slice());
}

// ── Filter ────────────────────────────────────────────────────

#[test]
fn test_filter_case_insensitive_and_trimmed() {
    let store = mixed();
    assert_eq!(ids(&project(store.all(), SortKey::Unsorted, "  COFFEE ")), vec![3]);
    assert_eq!(ids(&project(store.all(), SortKey::Unsorted, "gr")), vec![1, 4]);
}

#[test]
fn test_filter_trims_description() {
    let store = TransactionStore::from_seed(vec![new_txn(
        "  padded  ",
        dec!(1),
        "2025-01-01",
        TransactionKind::Income,
    )]);
    assert_eq!(project(store.all(), SortKey::Unsorted, "padded").len(), 1);
}

#[test]
fn test_empty_query_matches_all() {
    let store = mixed();
    assert_eq!(project(store.all(), SortKey::Unsorted, "").len(), 5);
    assert_eq!(project(store.all(), SortKey::Unsorted, "   ").len(), 5);
}

#[test]
fn test_no_match_is_empty() {
    let store = mixed();
    assert!(project(store.all(), SortKey::DateDesc, "mortgage").is_empty());
}

#[test]
fn test_filter_preserves_sorted_order() {
    let store = mixed();
    let rows = project(store.all(), SortKey::DateDesc, "e");
    // Unfiltered date order is 3, 1, 4, 2, 5; "Gift from grandma" has no "e"
    assert_eq!(ids(&rows), vec![3, 1, 2, 5]);

    let rows = project(store.all(), SortKey::ValueDesc, "r");
    // Matches: Groceries(1), Freelance gig(2), Gift from grandma(4), Refund(5)
    assert_eq!(ids(&rows), vec![2, 5, 4, 1]);
}

#[test]
fn test_filter_is_subset_of_unfiltered() {
    let store = mixed();
    for key in SortKey::all() {
        let all = project(store.all(), *key, "");
        for q in ["co", "g", "zzz", "Refund"] {
            for row in project(store.all(), *key, q) {
                assert!(all.contains(&row), "{row:?} missing for query {q}");
            }
        }
    }
}

#[test]
fn test_projection_idempotent() {
    let store = mixed();
    for key in SortKey::all() {
        let first = project(store.all(), *key, "e");
        let second = project(store.all(), *key, "e");
        assert_eq!(first, second);
    }
}

// ── Shape ─────────────────────────────────────────────────────

#[test]
fn test_row_shape() {
    let store = mixed();
    let rows = project(store.all(), SortKey::Unsorted, "");

    assert_eq!(rows[0].date_display, "10/03/2025");
    assert_eq!(rows[0].signed_amount_display, "-R$\u{a0}80,00");
    assert_eq!(rows[0].type_class, Some(TypeClass::Expense));

    assert_eq!(rows[1].signed_amount_display, "R$\u{a0}300,00");
    assert_eq!(rows[1].type_class, Some(TypeClass::Income));

    // Unknown kind: rendered, unsigned, no class
    assert_eq!(rows[3].signed_amount_display, "R$\u{a0}50,00");
    assert_eq!(rows[3].type_class, None);
    assert_eq!(rows[3].description, "Gift from grandma");
}

#[test]
fn test_type_class_as_str() {
    assert_eq!(TypeClass::Income.as_str(), "income");
    assert_eq!(TypeClass::Expense.as_str(), "expense");
}

// ── ViewControls ──────────────────────────────────────────────

#[test]
fn test_view_controls_project() {
    let store = salary_and_rent();
    let mut controls = ViewControls::default();
    assert_eq!(ids(&controls.project(&store)), vec![1, 2]);

    controls.set_sort("value-desc");
    assert_eq!(controls.sort, SortKey::ValueDesc);
    controls.set_search("sal");
    assert_eq!(ids(&controls.project(&store)), vec![1]);

    controls.set_sort("bogus");
    controls.set_search("");
    assert_eq!(controls.sort, SortKey::Unsorted);
    assert_eq!(ids(&controls.project(&store)), vec![1, 2]);
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summarize() {
    let store = mixed();
    let s = summarize(store.all());
    assert_eq!(s.income, dec!(600));
    assert_eq!(s.expense, dec!(160));
    assert_eq!(s.balance, dec!(440));
    assert_eq!(s.income_count, 2);
    assert_eq!(s.expense_count, 2);
}

#[test]
fn test_summarize_empty() {
    let s = summarize(&[]);
    assert_eq!(s, Summary::default());
    assert_eq!(s.balance, Decimal::ZERO);
}

#[test]
fn test_summarize_negative_balance() {
    let mut store = salary_and_rent();
    store.append(new_txn("Car", dec!(2500), "2025-01-05", TransactionKind::Expense));
    let s = summarize(store.all());
    assert_eq!(s.balance, dec!(-2000));
}

#[test]
fn test_summarize_saturates_instead_of_overflowing() {
    let store = TransactionStore::from_seed(vec![
        new_txn("Big", Decimal::MAX, "2025-01-01", TransactionKind::Income),
        new_txn("Bigger", Decimal::MAX, "2025-01-02", TransactionKind::Income),
        new_txn("Huge bill", Decimal::MAX, "2025-01-03", TransactionKind::Expense),
    ]);
    let s = summarize(store.all());
    assert_eq!(s.income, Decimal::MAX);
    assert_eq!(s.expense, Decimal::MAX);
    assert_eq!(s.balance, Decimal::ZERO);
    assert_eq!(s.income_count, 2);
}

#[test]
fn test_summarize_largest_accepted_amounts() {
    let mut store = TransactionStore::new();
    for _ in 0..3 {
        let form = TransactionForm::new("Big", "1000000000000", "2025-01-01", "income");
        store.append(form.parse().unwrap());
    }
    let s = summarize(store.all());
    assert_eq!(s.income, dec!(3000000000000));
    assert_eq!(s.balance, dec!(3000000000000));
}
