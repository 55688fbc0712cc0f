//! Strategy 5: line-oriented brace matching.
//!
//! Last-ditch extraction for multi-line objects the earlier strategies could
//! not isolate: find the first line that opens an object, then accumulate
//! lines while a running per-line `{`/`}` count stays positive. The count is
//! not string-aware, so braces inside string values can cut the range short
//! or extend it — accepted for a final fallback.

/// The line range from the first `{`-opening line to the line that returns
/// the running brace count to zero.
pub fn object_block(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines
        .iter()
        .position(|line| line.trim_start().starts_with('{'))?;

    let mut depth: isize = 0;
    for (offset, line) in lines[start..].iter().enumerate() {
        depth += line.matches('{').count() as isize;
        depth -= line.matches('}').count() as isize;
        if depth <= 0 {
            return Some(lines[start..=start + offset].join("\n"));
        }
    }

    None
}
