//! Ordered provider registry with first-match-wins dispatch.

use tracing::{debug, info};

use crate::error::ParserError;
use crate::models::slip::{PaymentSlip, Provider};

use super::{kbank, SlipParser};

/// Ordered set of slip parsers.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn SlipParser>>,
}

impl ParserRegistry {
    /// Create a registry from parsers in priority order.
    pub fn new(parsers: Vec<Box<dyn SlipParser>>) -> Self {
        Self { parsers }
    }

    /// Append a parser with the lowest priority so far.
    pub fn with_parser(mut self, parser: impl SlipParser + 'static) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    /// Registered providers, in dispatch order.
    pub fn providers(&self) -> impl Iterator<Item = &Provider> {
        self.parsers.iter().map(|p| p.name())
    }

    /// Parse with the first parser that recognizes the text.
    pub fn parse(&self, text: &str) -> Result<PaymentSlip, ParserError> {
        for parser in &self.parsers {
            if parser.can_parse(text) {
                info!("Dispatching slip to provider {}", parser.name());
                return Ok(parser.parse(text));
            }
            debug!("Provider {} declined slip", parser.name());
        }

        Err(ParserError::NoMatchingParser)
    }

    /// Parse with the parser registered under `provider`, skipping recognition.
    pub fn parse_with_provider(
        &self,
        text: &str,
        provider: &Provider,
    ) -> Result<PaymentSlip, ParserError> {
        let parser = self
            .parsers
            .iter()
            .find(|p| p.name() == provider)
            .ok_or_else(|| ParserError::UnknownProvider(provider.to_string()))?;

        info!("Parsing slip with requested provider {}", provider);
        Ok(parser.parse(text))
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new(Vec::new()).with_parser(kbank::parser())
    }
}
