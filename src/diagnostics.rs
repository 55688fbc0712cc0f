//! Injected logging capability for extraction failures.
//!
//! The extractor itself has no ambient side effects: all diagnostics flow
//! through a [`DiagnosticSink`] supplied by the embedding application. The
//! default [`TracingSink`] forwards to the `tracing` ecosystem; [`NullSink`]
//! discards everything.

use crate::scan::Truncation;

/// Context attached to a diagnostic record.
#[derive(Debug)]
pub struct Diagnostic<'a> {
    /// The complete raw response. Sinks decide how much of it to surface.
    pub raw: &'a str,
    /// Strategy names attempted, in pipeline order.
    pub attempted: &'a [&'static str],
    /// Truncation evidence, when the response looked like cut-off JSON.
    pub truncation: Option<&'a Truncation>,
}

/// Logging collaborator for extraction failures.
///
/// Observability only: sinks never influence what the extractor returns.
pub trait DiagnosticSink: Send + Sync {
    fn log(&self, message: &str, context: &Diagnostic<'_>);
}

/// Default sink, forwarding diagnostics to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, message: &str, context: &Diagnostic<'_>) {
        let preview: String = context.raw.chars().take(200).collect();
        match context.truncation {
            Some(truncation) => tracing::warn!(
                raw_preview = preview.as_str(),
                attempted = ?context.attempted,
                unclosed_braces = truncation.unclosed_braces,
                unclosed_brackets = truncation.unclosed_brackets,
                "{}",
                message
            ),
            None => tracing::warn!(
                raw_preview = preview.as_str(),
                attempted = ?context.attempted,
                "{}",
                message
            ),
        }
    }
}

/// Sink that discards all diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn log(&self, _message: &str, _context: &Diagnostic<'_>) {}
}
