//! Error types for response extraction.
//!
//! Only two failure shapes ever reach a caller: invalid input and total
//! extraction failure. A candidate that parses but fails required-field
//! validation is not an error of its own; the pipeline falls through to the
//! next strategy.

use thiserror::Error;

use crate::scan::Truncation;

/// Errors that can occur when extracting JSON from an LLM response.
///
/// Callers that configure a fallback value never see these: the fallback is
/// returned instead. Only fallback-less calls observe an `Err`.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("empty or non-textual LLM response")]
    EmptyInput,

    #[error("no valid JSON found in LLM response (strategies tried: {strategies}). Content starts with: '{content_preview}'", strategies = .attempted.join(", "))]
    NoJsonFound {
        /// The complete raw response, kept for diagnostics.
        raw: String,
        /// Leading slice of the trimmed response, for display.
        content_preview: String,
        /// Names of the strategies that ran, in order.
        attempted: Vec<&'static str>,
        /// Present when the response looks like JSON cut off mid-stream.
        truncation: Option<Truncation>,
    },

    #[error("extracted JSON does not match the expected response shape: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
        /// The value that was extracted but failed typed deserialization.
        value: serde_json::Value,
    },
}

impl ExtractError {
    /// The original raw response text, when the error carries one.
    pub fn raw(&self) -> Option<&str> {
        match self {
            ExtractError::NoJsonFound { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Truncation evidence, when the response looked like cut-off JSON.
    pub fn truncation(&self) -> Option<&Truncation> {
        match self {
            ExtractError::NoJsonFound { truncation, .. } => truncation.as_ref(),
            _ => None,
        }
    }
}
