//! Rule-based field extractors for slip lines.
//!
//! Every extractor is a pure function of the current line and, where the
//! slip layout puts a label on its own line, the preceding unconsumed line.

pub mod accounts;
pub mod amounts;
pub mod dates;
pub mod patterns;
pub mod transaction;

pub use accounts::{extract_account, AccountMatch};
pub use amounts::{extract_amount, extract_currency, extract_fee, has_currency};
pub use dates::extract_datetime;
pub use transaction::extract_transaction_id;

/// Split a line on single spaces into a leading label and its last token.
///
/// Empty parts are kept as they are, so `"a  b"` yields label `"a "`.
/// Returns `None` for single-token lines.
pub(crate) fn split_last_token(line: &str) -> Option<(&str, &str)> {
    line.rsplit_once(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_last_token() {
        assert_eq!(split_last_token("TEAM T xxx-x"), Some(("TEAM T", "xxx-x")));
        assert_eq!(split_last_token("a  b"), Some(("a ", "b")));
        assert_eq!(split_last_token("trailing "), Some(("trailing", "")));
        assert_eq!(split_last_token("single"), None);
    }
}
