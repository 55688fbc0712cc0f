//! Strategy 1: markdown fence and prose stripping.
//!
//! LLM providers routinely wrap structured output in ```json fences and
//! surround it with commentary. This strategy pulls the content out of the
//! first fenced block (preferring a `json`-tagged one), drops any text before
//! the first `{` and after the final `}`, and hands the remainder to the
//! parser.

use regex::Regex;

/// Produces the fence-stripped, prose-trimmed candidate for `text`.
///
/// Returns `None` when the text contains no `{...}` span at all.
pub fn cleaned(text: &str) -> Option<String> {
    let inner = json_block(text)
        .or_else(|| any_block(text))
        .unwrap_or_else(|| without_fence_markers(text));
    let start = inner.find('{')?;
    let end = inner.rfind('}')?;
    if end < start {
        return None;
    }
    Some(inner[start..=end].to_string())
}

/// Removes stray fence markers without extracting a block.
///
/// Used when no complete fenced block is present (e.g. an opening fence whose
/// closing marker was cut off).
pub fn without_fence_markers(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

/// Content of the first ```json ... ``` block, if any.
fn json_block(text: &str) -> Option<String> {
    let re = Regex::new(r"```json\s*\n?([\s\S]*?)\n?```").ok()?;
    let caps = re.captures(text)?;
    Some(caps.get(1)?.as_str().trim().to_string())
}

/// Content of the first generic ``` ... ``` block, if any.
fn any_block(text: &str) -> Option<String> {
    let re = Regex::new(r"```(?:\w+)?\s*\n?([\s\S]*?)\n?```").ok()?;
    let caps = re.captures(text)?;
    Some(caps.get(1)?.as_str().trim().to_string())
}
