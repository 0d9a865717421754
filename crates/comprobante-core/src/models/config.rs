//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ComprobanteError, Result};

/// Main configuration for the comprobante pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComprobanteConfig {
    /// Receipt extraction configuration.
    pub extraction: ExtractionConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Output validation configuration.
    pub validation: ValidationConfig,
}

/// Which extractor implementation to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorVariant {
    /// Fields, line items and totals reconciliation.
    #[default]
    Full,
    /// Six scalar fields, no items, no reconciliation.
    Minimal,
}

/// Receipt extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Extractor variant.
    pub variant: ExtractorVariant,

    /// Issuer name used when the text carries no razón social.
    pub fallback_issuer_name: String,

    /// Report lines matched by more than one row grammar as warnings.
    pub flag_duplicate_items: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            variant: ExtractorVariant::Full,
            fallback_issuer_name: String::new(),
            flag_duplicate_items: true,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum text length to consider PDF as text-based.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 50 }
    }
}

/// Output validation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Run validation on every extracted record.
    pub enabled: bool,

    /// Check the RUC mod-11 check digit, not just its length.
    pub verify_ruc_checksum: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            verify_ruc_checksum: true,
        }
    }
}

impl ComprobanteConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ComprobanteError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ComprobanteError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
