//! Common regex patterns and lookup tables for slip extraction.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Whole-line datetime: "25 Oct 2025 17:33" or "25 Oct 2025 17:33:05"
    pub static ref DATETIME_LINE: Regex = Regex::new(
        r"^\s*([0-9]{1,2})\s+([A-Za-z]+)\s+([0-9]{4})\s+([0-9]{1,2}):([0-9]{2})(?::([0-9]{2}))?\s*$"
    ).unwrap();

    // Amount followed by the baht unit: "1,688.10 Baht", "65.00THB"
    pub static ref CURRENCY_AMOUNT: Regex = Regex::new(
        r"(?i)([0-9,]+(?:\.[0-9]+)?)\s*(?:Baht|THB)"
    ).unwrap();

    // Unmasked account or bill number
    pub static ref ACCOUNT_NUMBER: Regex = Regex::new(
        r"^[0-9]+$"
    ).unwrap();

    pub static ref TRANSACTION_ID: Regex = Regex::new(
        r"^[A-Za-z0-9]+$"
    ).unwrap();

    // Brand signature, possibly wrapped over two lines
    pub static ref BRAND_SIGNATURE: Regex = Regex::new(
        r"(?i)make\s*by\s*KBank"
    ).unwrap();

    pub static ref MONTHS: HashMap<&'static str, u32> = {
        let mut m = HashMap::new();
        for (names, month) in [
            (&["jan", "january"][..], 1),
            (&["feb", "february"][..], 2),
            (&["mar", "march"][..], 3),
            (&["apr", "april"][..], 4),
            (&["may"][..], 5),
            (&["jun", "june"][..], 6),
            (&["jul", "july"][..], 7),
            (&["aug", "august"][..], 8),
            (&["sep", "sept", "september"][..], 9),
            (&["oct", "october"][..], 10),
            (&["nov", "november"][..], 11),
            (&["dec", "december"][..], 12),
        ] {
            for name in names {
                m.insert(*name, month);
            }
        }
        m
    };
}

/// Latin and Cyrillic `x`/`X` plus the multiplication sign, as OCR renders masked digits.
pub const MASK_CHARS: [char; 5] = ['x', 'X', '\u{0445}', '\u{0425}', '\u{00d7}'];

/// Separators allowed inside a masked account number.
pub const MASK_SEPARATORS: [char; 2] = ['-', '\u{2014}'];

/// Label fragment shared by "Transaction ID:" style lines.
pub const TRANSACTION_ID_LABEL: &str = "tion ID:";

pub const AMOUNT_LABEL: &str = "Amount";

pub const FEE_LABEL: &str = "Fee";
