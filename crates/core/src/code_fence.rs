//! Code fence tracking for the hard-break pass.
//!
//! The fold is deliberately coarse: any line whose trimmed text starts with
//! three backticks or three tildes flips the state, whichever marker opened
//! the fence. Marker and opening line are carried only for diagnostics.

use crate::error::SourceLocation;
use crate::line::{is_js_whitespace, js_trim};

/// State folded left-to-right over the lines of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FenceState {
    /// Whether the fold is inside a fenced code block.
    pub inside: bool,
    /// Marker character of the delimiter that opened the current fence.
    pub marker: Option<char>,
    /// Where the current fence was opened.
    pub opened_at: Option<SourceLocation>,
}

impl FenceState {
    /// Whether the fold is currently inside a fenced code block.
    pub fn is_inside(&self) -> bool {
        self.inside
    }
}

/// Outcome of processing a single line for fence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineParseOutcome {
    /// State to carry into the next line.
    pub next_state: FenceState,
    /// The line is a delimiter or fenced content and must be emitted untouched.
    pub skip_rewrite: bool,
}

/// Returns true when the trimmed line begins with ```` ``` ```` or `~~~`.
pub fn is_fence_delimiter(trimmed: &str) -> bool {
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Advance fence state based on a single line of text.
///
/// `line_number` is 1-indexed and only used to record where a fence opened.
pub fn advance_fence_state(line: &str, line_number: usize, state: FenceState) -> LineParseOutcome {
    let trimmed = js_trim(line);

    if !is_fence_delimiter(trimmed) {
        return LineParseOutcome {
            next_state: state,
            skip_rewrite: state.inside,
        };
    }

    let next_state = if state.inside {
        FenceState::default()
    } else {
        let column = line.chars().take_while(|c| is_js_whitespace(*c)).count() + 1;
        FenceState {
            inside: true,
            marker: trimmed.chars().next(),
            opened_at: Some(SourceLocation::new(line_number, column)),
        }
    };

    LineParseOutcome {
        next_state,
        skip_rewrite: true,
    }
}
