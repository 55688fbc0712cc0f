//! Extraction strategies for locating JSON in raw LLM response text.
//!
//! Each strategy is an independent pure function over the full raw text; no
//! strategy depends on another strategy's partial state. The pipeline in
//! [`crate::extract`] tries them in the fixed order of [`Strategy::ALL`] and
//! keeps the first candidate that both parses as JSON and passes structural
//! validation.

pub mod balanced;
pub mod fenced;
pub mod greedy;
pub mod lines;
pub mod repair;

/// One stage of the extraction pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Markdown fence and prefix/suffix prose stripping.
    Fenced,
    /// Balanced-brace scan from the first `{`.
    Balanced,
    /// Greedy `{...}` / `[...]` span matching.
    Greedy,
    /// Common-error textual repairs, then reparse.
    Repaired,
    /// Line-oriented brace-depth accumulation.
    Lines,
}

impl Strategy {
    /// Pipeline order. Earlier strategies are stricter; later ones are
    /// progressively more aggressive.
    pub const ALL: [Strategy; 5] = [
        Strategy::Fenced,
        Strategy::Balanced,
        Strategy::Greedy,
        Strategy::Repaired,
        Strategy::Lines,
    ];

    /// Stable name used in diagnostics and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Fenced => "fenced",
            Strategy::Balanced => "balanced",
            Strategy::Greedy => "greedy",
            Strategy::Repaired => "repaired",
            Strategy::Lines => "lines",
        }
    }

    /// Candidate JSON texts this strategy recovers from `text`, in
    /// preference order. Candidates are unvalidated; the pipeline parses and
    /// checks them.
    pub fn candidates(self, text: &str) -> Vec<String> {
        match self {
            Strategy::Fenced => fenced::cleaned(text).into_iter().collect(),
            Strategy::Balanced => balanced::first_object(text).into_iter().collect(),
            Strategy::Greedy => greedy::object_span(text)
                .into_iter()
                .chain(greedy::array_span(text))
                .collect(),
            Strategy::Repaired => repair::repaired(text).into_iter().collect(),
            Strategy::Lines => lines::object_block(text).into_iter().collect(),
        }
    }
}
