//! Amount and fee extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{AMOUNT_LABEL, CURRENCY_AMOUNT, FEE_LABEL};

/// Parse the first baht-denominated number on a line (e.g. "1,688.10 Baht").
///
/// Values outside the `Decimal` range (about 7.9e28) yield `None`.
pub fn extract_currency(line: &str) -> Option<Decimal> {
    let caps = CURRENCY_AMOUNT.captures(line)?;
    let cleaned = caps[1].replace(',', "");

    Decimal::from_str(&cleaned).ok()
}

/// Whether the line carries a baht-denominated number, parseable or not.
pub fn has_currency(line: &str) -> bool {
    CURRENCY_AMOUNT.is_match(line)
}

/// Amount value on the line following an "Amount" label.
pub fn extract_amount(prev_line: &str, line: &str) -> Option<Decimal> {
    extract_labeled(AMOUNT_LABEL, prev_line, line)
}

/// Fee value on the line following a "Fee" label.
pub fn extract_fee(prev_line: &str, line: &str) -> Option<Decimal> {
    extract_labeled(FEE_LABEL, prev_line, line)
}

fn extract_labeled(label: &str, prev_line: &str, line: &str) -> Option<Decimal> {
    if !prev_line.contains(label) {
        return None;
    }

    extract_currency(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_extract_currency() {
        assert_eq!(extract_currency("1,688.10 Baht"), Some(dec("1688.10")));
        assert_eq!(extract_currency("65.00 Baht"), Some(dec("65")));
        assert_eq!(extract_currency("12,000THB"), Some(dec("12000")));
        assert_eq!(extract_currency("3.5 baht"), Some(dec("3.5")));
    }

    #[test]
    fn test_currency_requires_unit() {
        assert_eq!(extract_currency("1,688.10"), None);
        assert_eq!(extract_currency("594.00 USD"), None);
        assert_eq!(extract_currency(", Baht"), None);
    }

    #[test]
    fn test_currency_out_of_range() {
        let line = "100000000000000000000000000000 Baht";
        assert_eq!(extract_currency(line), None);
        assert!(has_currency(line));
    }

    #[test]
    fn test_extract_amount_needs_label() {
        assert_eq!(extract_amount("Amount", "594.00 Baht"), Some(dec("594")));
        assert_eq!(extract_amount("Fee", "594.00 Baht"), None);
        assert_eq!(extract_amount("", "594.00 Baht"), None);
    }

    #[test]
    fn test_extract_fee_needs_label() {
        assert_eq!(extract_fee("Fee", "0.00 Baht"), Some(Decimal::ZERO));
        assert_eq!(extract_fee("Amount", "0.00 Baht"), None);
    }
}
