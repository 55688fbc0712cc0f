//! The extraction pipeline: options, the [`Extractor`], and entry points.
//!
//! Extraction is a pure function of `(raw text, options)`. The extractor
//! holds nothing but its diagnostic sink, so a single instance can serve any
//! number of concurrent generation tasks without synchronization.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::ExtractError;
use crate::scan::detect_truncation;
use crate::strategies::Strategy;
use crate::validate::is_structurally_valid;

/// Characters of raw text kept in previews attached to errors and
/// diagnostics.
const PREVIEW_CHARS: usize = 50;

/// Configuration for one extraction call.
///
/// Built with chained `with_*` methods:
///
/// ```
/// use copyforge_extract::ParseOptions;
/// use serde_json::json;
///
/// let options = ParseOptions::new()
///     .with_required_fields(["industry", "toneOfVoice"])
///     .with_fallback(json!({"industry": "general business", "toneOfVoice": "professional"}))
///     .with_log_errors(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    fallback: Option<Value>,
    required_fields: Vec<String>,
    log_errors: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value returned when no strategy yields a valid result. With a
    /// fallback configured, extraction never fails.
    pub fn with_fallback(mut self, fallback: Value) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Top-level keys that must all be present on a parsed object for it to
    /// be accepted. Empty means any object or array is acceptable.
    pub fn with_required_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Emit diagnostics on failure paths. Observability only; never changes
    /// what is returned.
    pub fn with_log_errors(mut self, log_errors: bool) -> Self {
        self.log_errors = log_errors;
        self
    }

    pub fn fallback(&self) -> Option<&Value> {
        self.fallback.as_ref()
    }

    pub fn required_fields(&self) -> &[String] {
        &self.required_fields
    }

    pub fn log_errors(&self) -> bool {
        self.log_errors
    }
}

/// Recovers validated JSON values from raw LLM response text.
///
/// Strategies run in the fixed order of [`Strategy::ALL`]; the first
/// candidate that both parses as JSON and passes structural validation wins.
/// See the crate documentation for the strategy list.
pub struct Extractor {
    sink: Box<dyn DiagnosticSink>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Extractor with the default `tracing`-backed diagnostic sink.
    pub fn new() -> Self {
        Self {
            sink: Box::new(TracingSink),
        }
    }

    /// Extractor with a caller-supplied diagnostic sink.
    pub fn with_sink(sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    /// Extracts a JSON value from `raw`.
    ///
    /// # Arguments
    ///
    /// * `raw` - The unprocessed textual output of an LLM call
    /// * `options` - Fallback, required fields, and logging configuration
    ///
    /// # Returns
    ///
    /// The first structurally valid parsed value, the configured fallback on
    /// total failure, or an [`ExtractError`] when no fallback is configured.
    pub fn extract(&self, raw: &str, options: &ParseOptions) -> Result<Value, ExtractError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            if options.log_errors() {
                self.sink.log(
                    "empty LLM response, no extraction attempted",
                    &Diagnostic {
                        raw,
                        attempted: &[],
                        truncation: None,
                    },
                );
            }
            return match options.fallback() {
                Some(fallback) => Ok(fallback.clone()),
                None => Err(ExtractError::EmptyInput),
            };
        }

        let mut attempted = Vec::with_capacity(Strategy::ALL.len());
        for strategy in Strategy::ALL {
            attempted.push(strategy.name());
            for candidate in strategy.candidates(trimmed) {
                let Ok(value) = serde_json::from_str::<Value>(&candidate) else {
                    continue;
                };
                if is_structurally_valid(&value, options.required_fields()) {
                    return Ok(value);
                }
            }
        }

        let truncation = detect_truncation(trimmed);
        let preview: String = trimmed.chars().take(PREVIEW_CHARS).collect();

        if options.log_errors() {
            self.sink.log(
                "no strategy produced valid JSON from LLM response",
                &Diagnostic {
                    raw,
                    attempted: &attempted,
                    truncation: truncation.as_ref(),
                },
            );
        }

        match options.fallback() {
            Some(fallback) => Ok(fallback.clone()),
            None => Err(ExtractError::NoJsonFound {
                raw: raw.to_string(),
                content_preview: preview,
                attempted,
                truncation,
            }),
        }
    }

    /// Extracts and deserializes into the expected response shape.
    ///
    /// Runs the same pipeline as [`extract`](Self::extract), then
    /// `serde_json::from_value`. Required fields are checked for presence
    /// only, so a value can validate and still not fit `T`; in that case the
    /// configured fallback is deserialized instead, and only a fallback-less
    /// call surfaces [`ExtractError::Deserialize`].
    pub fn extract_as<T: DeserializeOwned>(
        &self,
        raw: &str,
        options: &ParseOptions,
    ) -> Result<T, ExtractError> {
        let value = self.extract(raw, options)?;
        match serde_json::from_value::<T>(value.clone()) {
            Ok(typed) => Ok(typed),
            Err(source) => {
                if options.log_errors() {
                    self.sink.log(
                        "extracted JSON did not fit the expected response shape",
                        &Diagnostic {
                            raw,
                            attempted: &[],
                            truncation: None,
                        },
                    );
                }
                match options.fallback() {
                    Some(fallback) => serde_json::from_value::<T>(fallback.clone()).map_err(|e| {
                        ExtractError::Deserialize {
                            source: e,
                            value: fallback.clone(),
                        }
                    }),
                    None => Err(ExtractError::Deserialize { source, value }),
                }
            }
        }
    }
}

/// Extracts with the default `tracing`-backed sink.
///
/// Convenience for callers that do not inject their own [`DiagnosticSink`].
pub fn extract_json(raw: &str, options: &ParseOptions) -> Result<Value, ExtractError> {
    Extractor::new().extract(raw, options)
}
