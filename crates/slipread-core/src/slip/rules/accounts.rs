//! Party account extraction (holder name plus masked or plain number).

use super::patterns::{ACCOUNT_NUMBER, MASK_CHARS, MASK_SEPARATORS};
use super::split_last_token;

/// An account-number-shaped line resolved against its name context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountMatch {
    /// Holder name, trimmed.
    pub name: String,
    /// Account number, mask or bill number.
    pub number: String,
}

/// Match a line ending in an account number.
///
/// `name_context` holds the name lines seen before this one. When the line
/// has several space-separated tokens, all but the last are appended to the
/// name and the last one must be the number.
pub fn extract_account(name_context: &str, line: &str) -> Option<AccountMatch> {
    let mut name = name_context.to_string();
    let mut candidate = line;

    if let Some((label, last)) = split_last_token(line) {
        if !label.is_empty() {
            name.push(' ');
            name.push_str(label);
        }
        if !last.is_empty() {
            candidate = last;
        }
    }

    let number = if is_masked_number(candidate) {
        candidate.to_lowercase()
    } else if ACCOUNT_NUMBER.is_match(candidate) {
        candidate.to_string()
    } else {
        return None;
    };

    Some(AccountMatch {
        name: name.trim().to_string(),
        number,
    })
}

/// `xxx-x-x5304-x` style: needs a mask character and a digit, nothing else
/// but separators.
fn is_masked_number(s: &str) -> bool {
    let mut has_mask = false;
    let mut has_digit = false;

    for c in s.chars() {
        if MASK_CHARS.contains(&c) {
            has_mask = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if !MASK_SEPARATORS.contains(&c) {
            return false;
        }
    }

    has_mask && has_digit
}
