//! String-aware scanning primitives for locating JSON spans in raw text.
//!
//! All scanners here respect JSON string literals: braces and brackets that
//! appear inside a quoted string (including after escape sequences) never
//! affect depth tracking. This is what lets the balanced strategy recover
//! objects whose string values contain `{` or `}` characters.

/// Result of scanning a text for JSON structure.
///
/// Produced by [`analyze_structure`]; used to decorate extraction failures
/// with truncation evidence when the response looks like JSON that was cut
/// off mid-stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureAnalysis {
    /// Number of `{` without a matching `}`.
    pub unclosed_braces: usize,
    /// Number of `[` without a matching `]`.
    pub unclosed_brackets: usize,
    /// Whether the scan ended inside a string literal.
    pub in_string: bool,
    /// Byte offset of the first `{` or `[` outside a string, if any.
    pub json_start: Option<usize>,
}

/// Evidence that a response contains JSON that was truncated mid-stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    /// The JSON-like tail of the input, from its first opening delimiter.
    pub partial: String,
    pub unclosed_braces: usize,
    pub unclosed_brackets: usize,
}

/// Scans `text` and reports brace/bracket balance and string state.
///
/// # Arguments
///
/// * `text` - The string to analyze
///
/// # Returns
///
/// A [`StructureAnalysis`] with unclosed delimiter counts, whether the scan
/// ended inside a string, and where JSON-like content starts.
pub fn analyze_structure(text: &str) -> StructureAnalysis {
    let mut brace_depth: isize = 0;
    let mut bracket_depth: isize = 0;
    let mut in_string = false;
    let mut escape_next = false;
    let mut json_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => {
                if json_start.is_none() {
                    json_start = Some(i);
                }
                brace_depth += 1;
            }
            '}' if !in_string => brace_depth -= 1,
            '[' if !in_string => {
                if json_start.is_none() {
                    json_start = Some(i);
                }
                bracket_depth += 1;
            }
            ']' if !in_string => bracket_depth -= 1,
            _ => {}
        }
    }

    StructureAnalysis {
        unclosed_braces: brace_depth.max(0) as usize,
        unclosed_brackets: bracket_depth.max(0) as usize,
        in_string,
        json_start,
    }
}

/// Detects truncated JSON in `text`.
///
/// Returns `Some` when JSON-like content starts but its delimiters never
/// close (or the text ends inside a string literal), `None` when the content
/// is balanced or contains no JSON at all.
pub fn detect_truncation(text: &str) -> Option<Truncation> {
    let trimmed = text.trim();
    let analysis = analyze_structure(trimmed);
    let json_start = analysis.json_start?;

    if analysis.unclosed_braces > 0 || analysis.unclosed_brackets > 0 || analysis.in_string {
        Some(Truncation {
            partial: trimmed[json_start..].to_string(),
            unclosed_braces: analysis.unclosed_braces,
            unclosed_brackets: analysis.unclosed_brackets,
        })
    } else {
        None
    }
}

/// Finds the `}` that closes the object opened by the first `{` of `s`.
///
/// Handles nested objects, string literals, and escape sequences within
/// strings.
///
/// # Arguments
///
/// * `s` - A string starting with `{`
///
/// # Returns
///
/// The byte index of the matching closing `}`, or `None` if the object never
/// closes.
pub fn find_matching_brace(s: &str) -> Option<usize> {
    find_matching(s, '{', '}')
}

/// Finds the `]` that closes the array opened by the first `[` of `s`.
///
/// # Arguments
///
/// * `s` - A string starting with `[`
///
/// # Returns
///
/// The byte index of the matching closing `]`, or `None` if the array never
/// closes.
pub fn find_matching_bracket(s: &str) -> Option<usize> {
    find_matching(s, '[', ']')
}

fn find_matching(s: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, c) in s.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}
