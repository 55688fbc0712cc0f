//! Strategy 2: balanced-brace scan.
//!
//! Scans from the first `{` tracking brace depth (string- and escape-aware)
//! and takes the substring up to the `}` that returns the depth to zero. This
//! recovers nested objects that a first-to-last-brace cut would over-extend
//! when prose after the object contains a stray `}`.

use crate::scan::find_matching_brace;

/// The first complete `{...}` object in `text`, by depth tracking.
pub fn first_object(text: &str) -> Option<String> {
    let start = text.find('{')?;
    let rest = &text[start..];
    let end = find_matching_brace(rest)?;
    Some(rest[..=end].to_string())
}
