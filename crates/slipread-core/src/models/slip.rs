//! Payment slip data model.

use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured fields extracted from one payment confirmation slip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSlip {
    /// Template/provider that produced this record.
    pub provider: Provider,

    /// Transaction timestamp (naive, no timezone applied).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<NaiveDateTime>,

    /// Sending party name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,

    /// Sending party account number or mask.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_account: Option<String>,

    /// Receiving party name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee: Option<String>,

    /// Receiving party account, mask or bill number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_account: Option<String>,

    /// Payment reference. Reserved, no extractor fills it yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Transaction amount.
    pub amount: Decimal,

    /// Transaction fee.
    pub fee: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    /// Transaction identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl PaymentSlip {
    /// Empty record for a provider, with zero amount and fee.
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            datetime: None,
            payer: None,
            payer_account: None,
            payee: None,
            payee_account: None,
            reference: None,
            amount: Decimal::ZERO,
            fee: Decimal::ZERO,
            currency: None,
            transaction_id: None,
        }
    }

    /// Whether both party slots have been resolved.
    pub fn has_parties(&self) -> bool {
        self.payer_account.is_some() && self.payee_account.is_some()
    }
}

/// Known slip providers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Provider {
    /// K PLUS "make by KBank" slips.
    MakeByKBank,
    /// Caller-defined provider.
    Custom(String),
}

impl Provider {
    pub fn as_str(&self) -> &str {
        match self {
            Self::MakeByKBank => "MakeByKBank",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Provider {
    fn from(s: &str) -> Self {
        match s {
            "MakeByKBank" => Self::MakeByKBank,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for Provider {
    fn from(s: String) -> Self {
        match s.as_str() {
            "MakeByKBank" => Self::MakeByKBank,
            _ => Self::Custom(s),
        }
    }
}

impl From<Provider> for String {
    fn from(p: Provider) -> Self {
        match p {
            Provider::MakeByKBank => "MakeByKBank".to_string(),
            Provider::Custom(name) => name,
        }
    }
}

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    /// Thai baht.
    #[default]
    #[serde(rename = "THB")]
    Thb,
}
