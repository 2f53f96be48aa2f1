//! Payment slip parsing: normalization, field rules, providers and dispatch.

pub mod adapter;
pub mod kbank;
pub mod normalize;
pub mod registry;
pub mod rules;

pub use adapter::{create_parser, ProviderParser};
pub use kbank::{is_make_by_kbank, MakeByKBankParser};
pub use registry::ParserRegistry;

use crate::models::slip::{PaymentSlip, Provider};

/// Capability implemented by every slip provider.
///
/// Parsing is best effort: fields that cannot be found stay empty instead of
/// failing the call.
pub trait SlipParser: Send + Sync {
    /// Provider tag this parser produces.
    fn name(&self) -> &Provider;

    /// Whether this parser recognizes the slip text.
    fn can_parse(&self, text: &str) -> bool;

    /// Extract a slip record from OCR text.
    fn parse(&self, text: &str) -> PaymentSlip;
}

impl<T: SlipParser + ?Sized> SlipParser for Box<T> {
    fn name(&self) -> &Provider {
        (**self).name()
    }

    fn can_parse(&self, text: &str) -> bool {
        (**self).can_parse(text)
    }

    fn parse(&self, text: &str) -> PaymentSlip {
        (**self).parse(text)
    }
}
