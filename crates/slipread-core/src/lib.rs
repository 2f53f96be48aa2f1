//! Core library for payment slip OCR text.
//!
//! This crate provides:
//! - Slip text normalization (noise removal, brand marker detection)
//! - Line-level field rules (datetime, amounts, accounts, transaction ids)
//! - The "make by KBank" slip provider
//! - A provider registry with first-match-wins dispatch

pub mod error;
pub mod models;
pub mod slip;

pub use error::{ParserError, ParserErrorCode, Result, SlipreadError};
pub use models::config::{ExtractionConfig, SlipreadConfig};
pub use models::slip::{Currency, PaymentSlip, Provider};
pub use slip::{
    create_parser, is_make_by_kbank, MakeByKBankParser, ParserRegistry, ProviderParser, SlipParser,
};
