//! Configuration structures for slip extraction.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlipreadError};
use crate::models::slip::Currency;

/// Main configuration for the slipread pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipreadConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Extra literal phrases stripped from the text before walking it.
    pub extra_noise_phrases: Vec<String>,

    /// Currency pre-filled on every parsed slip. Left unset when `None`.
    pub default_currency: Option<Currency>,
}

impl SlipreadConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| SlipreadError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| SlipreadError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
