//! Strategy 3: greedy span matching.
//!
//! A looser fallback than the balanced scan: take everything from the first
//! opening delimiter to the last closing one, with no depth tracking. Wrong
//! for inputs with prose braces after the object, but it is only consulted
//! after the stricter strategies have failed, and its output still has to
//! parse and validate before it wins.

use regex::Regex;

/// The span from the first `{` to the last `}`, if both exist.
pub fn object_span(text: &str) -> Option<String> {
    let re = Regex::new(r"\{[\s\S]*\}").ok()?;
    re.find(text).map(|m| m.as_str().to_string())
}

/// The span from the first `[` to the last `]`, for array-shaped results.
pub fn array_span(text: &str) -> Option<String> {
    let re = Regex::new(r"\[[\s\S]*\]").ok()?;
    re.find(text).map(|m| m.as_str().to_string())
}
