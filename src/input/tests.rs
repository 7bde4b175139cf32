#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_basic() {
    assert_eq!(parse_amount("100.50").unwrap(), dec!(100.50));
    assert_eq!(parse_amount(" 42 ").unwrap(), dec!(42));
    assert_eq!(parse_amount("0").unwrap(), dec!(0));
}

#[test]
fn test_parse_amount_comma_decimal() {
    assert_eq!(parse_amount("12,50").unwrap(), dec!(12.50));
}

#[test]
fn test_parse_amount_rejects_mixed_separators() {
    assert!(matches!(parse_amount("1.234,50"), Err(InputError::InvalidAmount(_))));
    assert!(matches!(parse_amount("1,234,50"), Err(InputError::InvalidAmount(_))));
}

#[test]
fn test_parse_amount_rejects_non_numeric() {
    assert_eq!(
        parse_amount("abc"),
        Err(InputError::InvalidAmount("abc".into()))
    );
    assert!(matches!(parse_amount("NaN"), Err(InputError::InvalidAmount(_))));
    assert!(matches!(parse_amount("12abc"), Err(InputError::InvalidAmount(_))));
}

#[test]
fn test_parse_amount_rejects_empty() {
    assert_eq!(parse_amount(""), Err(InputError::InvalidAmount(String::new())));
    assert_eq!(parse_amount("   "), Err(InputError::InvalidAmount(String::new())));
}

#[test]
fn test_parse_amount_rejects_negative() {
    assert_eq!(
        parse_amount("-5"),
        Err(InputError::NegativeAmount("-5".into()))
    );
}

#[test]
fn test_parse_amount_caps_magnitude() {
    assert_eq!(parse_amount("1000000000000").unwrap(), dec!(1000000000000));
    assert_eq!(
        parse_amount("1000000000000.01"),
        Err(InputError::AmountTooLarge("1000000000000.01".into()))
    );
    assert!(matches!(
        parse_amount("79228162514264337593543950335"),
        Err(InputError::AmountTooLarge(_))
    ));
}

// ── parse_date ────────────────────────────────────────────────

#[test]
fn test_parse_date_iso() {
    let d = parse_date("2025-12-05").unwrap();
    assert_eq!(d, NaiveDate::from_ymd_opt(2025, 12, 5).unwrap());
}

#[test]
fn test_parse_date_rejects_other_formats() {
    assert!(matches!(parse_date("05/12/2025"), Err(InputError::InvalidDate(_))));
    assert!(matches!(parse_date("2025-13-01"), Err(InputError::InvalidDate(_))));
    assert!(matches!(parse_date("2025-02-30"), Err(InputError::InvalidDate(_))));
    assert!(matches!(parse_date(""), Err(InputError::InvalidDate(_))));
}

// ── TransactionForm ───────────────────────────────────────────

#[test]
fn test_form_parse_valid() {
    let form = TransactionForm::new("  Bonus ", "200", "2025-01-01", "income");
    let new = form.parse().unwrap();
    assert_eq!(new.description, "Bonus");
    assert_eq!(new.amount, dec!(200));
    assert_eq!(new.date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert_eq!(new.kind, TransactionKind::Income);
}

#[test]
fn test_form_parse_unknown_kind_is_accepted() {
    let form = TransactionForm::new("Swap", "10", "2025-01-01", "transfer");
    let new = form.parse().unwrap();
    assert_eq!(new.kind, TransactionKind::Other("transfer".into()));
}

#[test]
fn test_form_parse_bad_amount_fails_closed() {
    let form = TransactionForm::new("Lunch", "twelve", "2025-01-01", "expense");
    assert_eq!(form.parse(), Err(InputError::InvalidAmount("twelve".into())));
}

#[test]
fn test_form_parse_bad_date() {
    let form = TransactionForm::new("Lunch", "12", "tomorrow", "expense");
    assert_eq!(form.parse(), Err(InputError::InvalidDate("tomorrow".into())));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        InputError::InvalidAmount("x".into()).to_string(),
        "Invalid amount: 'x'"
    );
    assert_eq!(
        InputError::InvalidDate("y".into()).to_string(),
        "Invalid date: 'y' (expected YYYY-MM-DD)"
    );
}
