use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Placeholders and limits used when rendering reports.
///
/// The defaults reproduce the stock report layout. Any subset of fields may
/// be given when deserializing; the rest keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Shown for absent fields
    pub missing: String,
    pub unknown_error_code: String,
    pub unknown_error_message: String,
    /// Length of the prompt preview in batch reports, in characters
    pub prompt_preview_chars: usize,
    /// Appended after every prompt preview, truncated or not
    pub ellipsis: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            missing: "N/A".to_string(),
            unknown_error_code: "unknown".to_string(),
            unknown_error_message: "Unknown error".to_string(),
            prompt_preview_chars: 50,
            ellipsis: "...".to_string(),
        }
    }
}

impl FormatConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ReportError::InvalidConfig {
            reason: e.to_string(),
        })
    }
}
