//! Composes a provider tag, a predicate and a parse function into a [`SlipParser`].

use crate::models::slip::{PaymentSlip, Provider};

use super::SlipParser;

/// Parser built from plain functions.
pub struct ProviderParser<C, P> {
    provider: Provider,
    can_parse: C,
    parse: P,
}

impl<C, P> ProviderParser<C, P>
where
    C: Fn(&str) -> bool + Send + Sync,
    P: Fn(&str) -> PaymentSlip + Send + Sync,
{
    pub fn new(provider: impl Into<Provider>, can_parse: C, parse: P) -> Self {
        Self {
            provider: provider.into(),
            can_parse,
            parse,
        }
    }
}

impl<C, P> SlipParser for ProviderParser<C, P>
where
    C: Fn(&str) -> bool + Send + Sync,
    P: Fn(&str) -> PaymentSlip + Send + Sync,
{
    fn name(&self) -> &Provider {
        &self.provider
    }

    fn can_parse(&self, text: &str) -> bool {
        (self.can_parse)(text)
    }

    fn parse(&self, text: &str) -> PaymentSlip {
        (self.parse)(text)
    }
}

/// Shorthand for [`ProviderParser::new`].
pub fn create_parser<C, P>(provider: impl Into<Provider>, can_parse: C, parse: P) -> ProviderParser<C, P>
where
    C: Fn(&str) -> bool + Send + Sync,
    P: Fn(&str) -> PaymentSlip + Send + Sync,
{
    ProviderParser::new(provider, can_parse, parse)
}
