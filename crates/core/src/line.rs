//! Line classification shared by the hard-break pass and its callers.
//!
//! Trimming and the whitespace after a block marker use the ECMAScript
//! whitespace set (`String.prototype.trim`, regex `\s`), so a line classifies
//! the same way here as in the browser editor that wrote it. It differs from
//! `char::is_whitespace` on two code points: U+FEFF counts, U+0085 does not.

use crate::code_fence::is_fence_delimiter;

/// Whether `c` is in the ECMAScript WhiteSpace or LineTerminator set.
pub fn is_js_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        c => c.is_whitespace(),
    }
}

/// Trims leading and trailing whitespace the way JavaScript's `trim()` does.
pub fn js_trim(line: &str) -> &str {
    line.trim_matches(is_js_whitespace)
}

/// Classification of a single line, derived from its trimmed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Opening or closing fence (```` ``` ```` or `~~~`).
    FenceDelimiter,
    /// Heading, blockquote, list item, table row, or fenced code content.
    Structural,
    /// Empty after trimming.
    Blank,
    /// Prose that may receive a hard break.
    Plain,
}

/// Classifies a trimmed line given whether the fold is inside a code fence.
pub fn classify_line(trimmed: &str, inside_fence: bool) -> LineKind {
    if is_fence_delimiter(trimmed) {
        LineKind::FenceDelimiter
    } else if inside_fence {
        LineKind::Structural
    } else if trimmed.is_empty() {
        LineKind::Blank
    } else if is_structural(trimmed) {
        LineKind::Structural
    } else {
        LineKind::Plain
    }
}

/// Returns true for block-structural prefixes: one of `#`, `>`, `-`, `+`, `*`
/// followed by whitespace, an ordered list marker (`12. `), or a table row (`|`).
///
/// Only the character after the marker is checked, so `## Title` is prose.
pub fn is_structural(trimmed: &str) -> bool {
    is_marker_prefixed(trimmed) || is_ordered_list_item(trimmed) || trimmed.starts_with('|')
}

/// Whether a trimmed line following a plain line keeps the pair eligible for a
/// hard break. Fence delimiters are not special here.
pub fn is_plain_successor(trimmed: &str) -> bool {
    !trimmed.is_empty() && !is_structural(trimmed)
}

fn is_marker_prefixed(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    match chars.next() {
        Some('#' | '>' | '-' | '+' | '*') => chars.next().is_some_and(is_js_whitespace),
        _ => false,
    }
}

fn is_ordered_list_item(trimmed: &str) -> bool {
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    let mut rest = trimmed[digits..].chars();
    rest.next() == Some('.') && rest.next().is_some_and(is_js_whitespace)
}
