//! "make by KBank" slip provider.
//!
//! Slips from this template list a header (title, datetime), the brand
//! signature, then payer and payee blocks where each block is one or more
//! name lines closed by an account-number line, followed by labeled amount,
//! fee and transaction id rows. Some layouts move the signature to the end.
//! The walker below visits the lines once and assigns each field as its
//! shape appears.

use tracing::{debug, info, trace};

use crate::models::config::ExtractionConfig;
use crate::models::slip::{PaymentSlip, Provider};

use super::adapter::ProviderParser;
use super::normalize::{normalize_with, BRAND_SENTINEL};
use super::rules::{
    extract_account, extract_amount, extract_datetime, extract_fee, extract_transaction_id,
    has_currency,
    patterns::{AMOUNT_LABEL, BRAND_SIGNATURE, FEE_LABEL},
};
use super::SlipParser;

/// Line-walking parser for "make by KBank" slips.
#[derive(Debug, Clone, Default)]
pub struct MakeByKBankParser {
    config: ExtractionConfig,
}

/// Rolling state carried across lines.
#[derive(Debug, Default)]
struct WalkState<'a> {
    seen_brand: bool,
    /// Last line that no rule consumed.
    prev_line: &'a str,
    /// Name fragments waiting for their account line.
    pending_names: Vec<&'a str>,
}

impl WalkState<'_> {
    fn name_context(&self) -> String {
        let joined = self.pending_names.join(" ");
        if joined.is_empty() {
            self.prev_line.to_string()
        } else {
            joined
        }
    }
}

impl MakeByKBankParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given extraction settings.
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Parse slip text into a record. Missing fields are left empty.
    pub fn parse(&self, text: &str) -> PaymentSlip {
        info!("Parsing MakeByKBank slip from {} characters of text", text.len());

        let normalized = normalize_with(text, &self.config.extra_noise_phrases);
        let mut slip = PaymentSlip::new(Provider::MakeByKBank);
        slip.currency = self.config.default_currency;

        let mut state = WalkState::default();

        for line in normalized.split('\n') {
            let in_details = state.seen_brand || slip.datetime.is_some();
            trace!(in_details, line, "walking slip line");

            if let Some(datetime) = extract_datetime(line) {
                slip.datetime = Some(datetime);
                continue;
            }

            if line == BRAND_SENTINEL {
                state.seen_brand = true;
                continue;
            }

            if in_details {
                if let Some(account) = extract_account(&state.name_context(), line) {
                    if slip.payer_account.is_none() {
                        debug!("Assigned payer account {}", account.number);
                        slip.payer = Some(account.name);
                        slip.payer_account = Some(account.number);
                        state.pending_names.clear();
                        continue;
                    } else if slip.payee_account.is_none() {
                        debug!("Assigned payee account {}", account.number);
                        slip.payee = Some(account.name);
                        slip.payee_account = Some(account.number);
                        state.pending_names.clear();
                        continue;
                    }
                }

                if !slip.has_parties() {
                    state.pending_names.push(line);
                }
            }

            if let Some(amount) = extract_amount(state.prev_line, line) {
                debug!("Extracted amount {}", amount);
                slip.amount = amount;
                continue;
            }

            if let Some(fee) = extract_fee(state.prev_line, line) {
                debug!("Extracted fee {}", fee);
                slip.fee = fee;
                continue;
            }

            if has_currency(line)
                && (state.prev_line.contains(AMOUNT_LABEL) || state.prev_line.contains(FEE_LABEL))
            {
                debug!("Labeled value out of range, left unset: {}", line);
            }

            // Later ids win: merchant slips repeat the label with the acquirer's id last.
            if let Some(transaction_id) = extract_transaction_id(state.prev_line, line) {
                debug!("Extracted transaction id {}", transaction_id);
                slip.transaction_id = Some(transaction_id);
                continue;
            }

            state.prev_line = line;
        }

        if slip.datetime.is_none() {
            debug!("No datetime line found");
        }

        slip
    }
}

/// Whether the text carries the "make by KBank" signature, on one line or two.
pub fn is_make_by_kbank(text: &str) -> bool {
    BRAND_SIGNATURE.is_match(text)
}

/// Default MakeByKBank parser, recognized by its brand signature.
pub fn parser() -> impl SlipParser {
    parser_from_config(ExtractionConfig::default())
}

/// MakeByKBank parser with the given extraction settings.
pub fn parser_from_config(config: ExtractionConfig) -> impl SlipParser {
    let inner = MakeByKBankParser::with_config(config);
    ProviderParser::new(Provider::MakeByKBank, is_make_by_kbank, move |text: &str| {
        inner.parse(text)
    })
}

/// MakeByKBank parser with a caller-supplied recognition predicate.
pub fn parser_with<C>(can_parse: C) -> impl SlipParser
where
    C: Fn(&str) -> bool + Send + Sync,
{
    let inner = MakeByKBankParser::new();
    ProviderParser::new(Provider::MakeByKBank, can_parse, move |text: &str| {
        inner.parse(text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    use crate::models::slip::Currency;

    #[test]
    fn test_empty_text_gives_empty_record() {
        let slip = MakeByKBankParser::new().parse("");
        assert_eq!(slip, PaymentSlip::new(Provider::MakeByKBank));
    }

    #[test]
    fn test_accounts_ignored_before_details_section() {
        let text = "TEAM T\nxxx-x-x5304-x\nAmount\n10.00 Baht";
        let slip = MakeByKBankParser::new().parse(text);

        assert_eq!(slip.payer_account, None);
        assert_eq!(slip.amount, Decimal::from(10));
    }

    #[test]
    fn test_third_account_line_is_ignored() {
        let text = "\
25 Oct 2025 17:33
make by KBank
ALICE
xxx-x-x1111-x
BOB
xxx-x-x2222-x
CAROL
xxx-x-x3333-x
";
        let slip = MakeByKBankParser::new().parse(text);

        assert_eq!(slip.payer.as_deref(), Some("ALICE"));
        assert_eq!(slip.payer_account.as_deref(), Some("xxx-x-x1111-x"));
        assert_eq!(slip.payee.as_deref(), Some("BOB"));
        assert_eq!(slip.payee_account.as_deref(), Some("xxx-x-x2222-x"));
    }

    #[test]
    fn test_last_transaction_id_wins() {
        let text = "\
Transaction ID: FIRST01
Transaction ID: SECOND02
";
        let slip = MakeByKBankParser::new().parse(text);
        assert_eq!(slip.transaction_id.as_deref(), Some("SECOND02"));
    }

    #[test]
    fn test_amount_label_on_previous_line() {
        let text = "Amount\n1,688.10 Baht\nFee\n5.00 Baht";
        let slip = MakeByKBankParser::new().parse(text);

        assert_eq!(slip.amount, Decimal::from_str("1688.10").unwrap());
        assert_eq!(slip.fee, Decimal::from(5));
    }

    #[test]
    fn test_datetime_opens_details_section() {
        let text = "1 Nov 2025 08:00:30\nSOMCHAI\n011829186";
        let slip = MakeByKBankParser::new().parse(text);

        assert_eq!(
            slip.datetime,
            NaiveDate::from_ymd_opt(2025, 11, 1)
                .unwrap()
                .and_hms_opt(8, 0, 30)
        );
        assert_eq!(slip.payer.as_deref(), Some("SOMCHAI"));
        assert_eq!(slip.payer_account.as_deref(), Some("011829186"));
    }

    #[test]
    fn test_previous_line_names_account() {
        let slip = MakeByKBankParser::new().parse("SOMCHAI\nmake by KBank\n011829186");

        assert_eq!(slip.payer.as_deref(), Some("SOMCHAI"));
        assert_eq!(slip.payer_account.as_deref(), Some("011829186"));
    }

    #[test]
    fn test_bare_payee_number_reuses_previous_line() {
        let slip = MakeByKBankParser::new().parse("SOMCHAI\nmake by KBank\n011829186\n0222");

        assert_eq!(slip.payer.as_deref(), Some("SOMCHAI"));
        assert_eq!(slip.payee.as_deref(), Some("SOMCHAI"));
        assert_eq!(slip.payee_account.as_deref(), Some("0222"));
    }

    #[test]
    fn test_oversized_amount_stays_zero() {
        let slip = MakeByKBankParser::new()
            .parse("Amount\n100000000000000000000000000000 Baht\nFee\n1.00 Baht");

        assert_eq!(slip.amount, Decimal::ZERO);
        assert_eq!(slip.fee, Decimal::ONE);
        assert_eq!(slip.transaction_id, None);
    }

    #[test]
    fn test_config_currency_and_noise() {
        let config = ExtractionConfig {
            extra_noise_phrases: vec!["Ref: 1234".to_string()],
            default_currency: Some(Currency::Thb),
        };
        let slip = MakeByKBankParser::with_config(config)
            .parse("25 Oct 2025 17:33\nRef: 1234\nTEAM T\n011829186");

        assert_eq!(slip.currency, Some(Currency::Thb));
        assert_eq!(slip.payer.as_deref(), Some("TEAM T"));
    }

    #[test]
    fn test_is_make_by_kbank() {
        assert!(is_make_by_kbank("x\nmake\nby KBank\ny"));
        assert!(is_make_by_kbank("make by kbank"));
        assert!(!is_make_by_kbank("made by KBank"));
    }

    #[test]
    fn test_parser_adapter() {
        let p = parser();
        assert_eq!(p.name(), &Provider::MakeByKBank);
        assert!(p.can_parse("make by KBank"));
        assert!(!p.can_parse("SCB easy"));

        let always = parser_with(|_: &str| true);
        assert!(always.can_parse("SCB easy"));
        assert_eq!(always.parse("").provider, Provider::MakeByKBank);
    }
}
