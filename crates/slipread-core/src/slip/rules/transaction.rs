//! Transaction identifier extraction.

use super::patterns::{TRANSACTION_ID, TRANSACTION_ID_LABEL};
use super::split_last_token;

/// Identifier from a "Transaction ID: ..." line, or a bare identifier line
/// following such a label.
pub fn extract_transaction_id(prev_line: &str, line: &str) -> Option<String> {
    let (label, candidate) = match split_last_token(line) {
        Some((label, last)) => (label, if last.is_empty() { line } else { last }),
        None => ("", line),
    };

    if !label.contains(TRANSACTION_ID_LABEL) && !prev_line.contains(TRANSACTION_ID_LABEL) {
        return None;
    }

    TRANSACTION_ID
        .is_match(candidate)
        .then(|| candidate.to_string())
}
