//! Strategy 4: common-error repair, then reparse.
//!
//! A fixed sequence of textual transforms over the fence-cleaned text:
//! single quotes to double quotes, trailing commas removed, bare word keys
//! quoted, `//` and `/* */` comments stripped, whitespace runs collapsed.
//!
//! These are plain text rewrites, not JSON-aware ones, so each can itself
//! corrupt pathological input — the quote transform mangles legitimate
//! apostrophes ("l'entreprise"), the comment transform eats `//` inside URL
//! values. Accepted limitation: repaired output still has to parse and
//! validate before it wins.

use regex::Regex;

use super::fenced;

/// Produces the repaired candidate for `text`.
///
/// Repairs apply to the fence-cleaned span when one exists, otherwise to the
/// text with fence markers removed (covers array-shaped input, which has no
/// `{...}` span to clean).
pub fn repaired(text: &str) -> Option<String> {
    let base = fenced::cleaned(text)
        .unwrap_or_else(|| fenced::without_fence_markers(text).trim().to_string());
    if base.is_empty() {
        return None;
    }
    apply(&base)
}

/// The repair sequence itself, in fixed order.
fn apply(text: &str) -> Option<String> {
    // a. single quotes to double quotes
    let repaired = text.replace('\'', "\"");

    // b. trailing commas before a closing delimiter
    let re_trailing_comma = Regex::new(r",\s*([}\]])").ok()?;
    let repaired = re_trailing_comma.replace_all(&repaired, "$1");

    // c. bare word keys
    let re_bare_key = Regex::new(r"(\w+)\s*:").ok()?;
    let repaired = re_bare_key.replace_all(&repaired, "\"$1\":");

    // d. line and block comments
    let re_line_comment = Regex::new(r"//[^\n]*").ok()?;
    let repaired = re_line_comment.replace_all(&repaired, "");
    let re_block_comment = Regex::new(r"/\*[\s\S]*?\*/").ok()?;
    let repaired = re_block_comment.replace_all(&repaired, "");

    // e. whitespace collapse
    let re_whitespace = Regex::new(r"\s+").ok()?;
    let repaired = re_whitespace.replace_all(&repaired, " ");

    Some(repaired.trim().to_string())
}
