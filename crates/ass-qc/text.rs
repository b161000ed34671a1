//! Plain text extraction for heuristics
//!
//! Every text heuristic works on the event text with override blocks removed
//! and forced line breaks turned into `\n`. Syntax is not validated here;
//! see [`crate::tags`] for that.

use once_cell::sync::Lazy;
use regex::Regex;

/// Override block: `{` up to the first following `}`
static OVERRIDE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]*\}").expect("Invalid override block regex"));

/// Strip override blocks and normalize forced line breaks.
///
/// Blocks are removed before `\N` is replaced, which keeps the function
/// idempotent even when a block splits an escape (`\{\b1}N`). An unterminated
/// `{` is left in place.
///
/// # Example
///
/// ```rust
/// use ass_qc::text::plaintext;
///
/// assert_eq!(plaintext(r"{\an8}Hello\Nworld{}"), "Hello\nworld");
/// ```
#[must_use]
pub fn plaintext(raw: &str) -> String {
    OVERRIDE_BLOCK.replace_all(raw, "").replace("\\N", "\n")
}

/// Whether the plain text has no visible content.
#[must_use]
pub fn is_blank(raw: &str) -> bool {
    plaintext(raw).trim().is_empty()
}
