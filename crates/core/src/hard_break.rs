//! Soft-break to hard-break conversion for WYSIWYG-authored Markdown.
//!
//! A WYSIWYG editor shows every newline as a visual line break, but Markdown
//! renderers fold a single newline into a space. Appending two trailing spaces
//! to a prose line turns the newline after it into a hard break. The pass is
//! conservative: a break is only added between two consecutive plain lines,
//! never next to fences, headings, quotes, lists, tables or blank lines.

use std::borrow::Cow;

use crate::code_fence::{FenceState, advance_fence_state};
use crate::error::{TransformDiagnostics, TransformWarning};
use crate::line::{is_plain_successor, is_structural, js_trim};

/// Suffix that turns a newline into a Markdown hard break.
pub const HARD_BREAK: &str = "  ";

/// Converts soft line breaks into Markdown hard breaks.
///
/// Returns the input unchanged when `preserve_breaks` is false. Otherwise the
/// output has the same number of `\n`-separated lines as the input and differs
/// only by two trailing spaces on selected lines.
///
/// # Examples
///
/// ```
/// use mdfield_core::hard_break_fix;
///
/// assert_eq!(hard_break_fix("hello\nworld", true), "hello  \nworld");
/// assert_eq!(hard_break_fix("hello\n\nworld", true), "hello\n\nworld");
/// assert_eq!(hard_break_fix("hello\nworld", false), "hello\nworld");
/// ```
pub fn hard_break_fix(markdown: &str, preserve_breaks: bool) -> Cow<'_, str> {
    HardBreakTransformer::new(preserve_breaks).transform(markdown)
}

/// Result of a hard-break pass with bookkeeping for callers that report on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformReport {
    /// Rewritten document.
    pub output: String,
    /// Number of `\n`-separated lines (identical for input and output).
    pub lines: usize,
    /// How many lines received a hard break.
    pub breaks_inserted: usize,
    /// Non-fatal findings such as an unterminated fence.
    pub diagnostics: TransformDiagnostics,
}

/// Hard-break pass configured with the field's `hardwrap` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardBreakTransformer {
    enabled: bool,
}

impl Default for HardBreakTransformer {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl HardBreakTransformer {
    /// Creates a transformer; a disabled one is the identity.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether breaks are being preserved.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Rewrites the document, borrowing the input when disabled.
    pub fn transform<'a>(&self, markdown: &'a str) -> Cow<'a, str> {
        if !self.enabled {
            return Cow::Borrowed(markdown);
        }
        Cow::Owned(self.transform_with_diagnostics(markdown).output)
    }

    /// Rewrites the document and reports what the pass did.
    pub fn transform_with_diagnostics(&self, markdown: &str) -> TransformReport {
        let lines: Vec<&str> = markdown.split('\n').collect();

        if !self.enabled {
            return TransformReport {
                output: markdown.to_string(),
                lines: lines.len(),
                breaks_inserted: 0,
                diagnostics: TransformDiagnostics::new(),
            };
        }

        let mut output = String::with_capacity(markdown.len() + markdown.len() / 8);
        let mut breaks_inserted = 0;

        let fence = lines
            .iter()
            .enumerate()
            .fold(FenceState::default(), |fence, (index, line)| {
                if index > 0 {
                    output.push('\n');
                }
                output.push_str(line);

                let outcome = advance_fence_state(line, index + 1, fence);
                let trimmed = js_trim(line);
                if outcome.skip_rewrite || trimmed.is_empty() || is_structural(trimmed) {
                    return outcome.next_state;
                }

                let next_is_plain = lines
                    .get(index + 1)
                    .is_some_and(|next| is_plain_successor(js_trim(next)));
                if next_is_plain && !line.ends_with(HARD_BREAK) {
                    output.push_str(HARD_BREAK);
                    breaks_inserted += 1;
                }

                outcome.next_state
            });

        let mut diagnostics = TransformDiagnostics::new();
        if let (Some(location), Some(marker)) = (fence.opened_at, fence.marker) {
            log::debug!("unterminated code fence opened at {location}");
            diagnostics.add_warning(TransformWarning::UnclosedCodeFence { location, marker });
        }

        TransformReport {
            output,
            lines: lines.len(),
            breaks_inserted,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceLocation;

    fn fix(input: &str) -> String {
        hard_break_fix(input, true).into_owned()
    }

    #[test]
    fn joins_adjacent_prose_lines() {
        assert_eq!(fix("hello\nworld"), "hello  \nworld");
    }

    #[test]
    fn blank_line_separates_paragraphs() {
        assert_eq!(fix("hello\n\nworld"), "hello\n\nworld");
    }

    #[test]
    fn heading_is_left_alone() {
        assert_eq!(fix("# Title\nBody text"), "# Title\nBody text");
    }

    #[test]
    fn deeper_headings_count_as_prose() {
        assert_eq!(fix("## Title\nbody"), "## Title  \nbody");
        assert_eq!(fix("intro\n## Next"), "intro  \n## Next");
    }

    #[test]
    fn byte_order_mark_line_is_blank() {
        assert_eq!(fix("a\n\u{FEFF}"), "a\n\u{FEFF}");
        assert_eq!(fix("\u{FEFF}\nb"), "\u{FEFF}\nb");
    }

    #[test]
    fn next_line_is_not_blank_javascript_wise() {
        // U+0085 is not whitespace to the browser, so the line is prose.
        assert_eq!(fix("a\n\u{0085}"), "a  \n\u{0085}");
    }

    #[test]
    fn fenced_block_is_untouched() {
        assert_eq!(fix("```\na\nb\n```"), "```\na\nb\n```");
        assert_eq!(fix("~~~\na\nb\n~~~"), "~~~\na\nb\n~~~");
    }

    #[test]
    fn existing_hard_break_is_kept() {
        assert_eq!(fix("line1  \nline2"), "line1  \nline2");
    }

    #[test]
    fn list_item_then_prose() {
        assert_eq!(fix("- item one\nline two"), "- item one\nline two");
    }

    #[test]
    fn prose_before_list_gets_no_break() {
        assert_eq!(fix("intro\n- a\n- b"), "intro\n- a\n- b");
    }

    #[test]
    fn prose_before_fence_gets_a_break() {
        // The successor test does not look at fence delimiters.
        assert_eq!(fix("intro\n```\ncode\n```"), "intro  \n```\ncode\n```");
    }

    #[test]
    fn three_prose_lines() {
        assert_eq!(fix("a\nb\nc"), "a  \nb  \nc");
    }

    #[test]
    fn trailing_newline_is_not_a_successor() {
        assert_eq!(fix("a\n"), "a\n");
        assert_eq!(fix("a\nb\n"), "a  \nb\n");
    }

    #[test]
    fn single_trailing_space_still_gets_suffix() {
        assert_eq!(fix("a \nb"), "a   \nb");
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        assert_eq!(fix("a\n   \nb"), "a\n   \nb");
    }

    #[test]
    fn preserves_indentation() {
        assert_eq!(fix("  indented\n\tnext"), "  indented  \n\tnext");
    }

    #[test]
    fn carriage_returns_are_kept() {
        assert_eq!(fix("a\r\nb"), "a\r  \nb");
    }

    #[test]
    fn empty_document() {
        assert_eq!(fix(""), "");
        let report = HardBreakTransformer::default().transform_with_diagnostics("");
        assert_eq!(report.lines, 1);
        assert_eq!(report.breaks_inserted, 0);
    }

    #[test]
    fn disabled_borrows_input() {
        let input = "a\nb";
        assert!(matches!(hard_break_fix(input, false), Cow::Borrowed("a\nb")));
    }

    #[test]
    fn unclosed_fence_passes_rest_through_and_warns() {
        let input = "text\n  ~~~\nalpha\nbeta";
        let report = HardBreakTransformer::new(true).transform_with_diagnostics(input);
        assert_eq!(report.output, "text  \n  ~~~\nalpha\nbeta");
        assert_eq!(report.breaks_inserted, 1);
        assert_eq!(
            report.diagnostics.warnings,
            vec![TransformWarning::UnclosedCodeFence {
                location: SourceLocation::new(2, 3),
                marker: '~',
            }]
        );
    }

    #[test]
    fn closed_fence_has_no_warnings() {
        let report = HardBreakTransformer::new(true).transform_with_diagnostics("```\nx\n```");
        assert!(!report.diagnostics.has_warnings());
    }

    #[test]
    fn disabled_report_is_identity() {
        let report = HardBreakTransformer::new(false).transform_with_diagnostics("a\nb\n```");
        assert_eq!(report.output, "a\nb\n```");
        assert_eq!(report.lines, 3);
        assert_eq!(report.breaks_inserted, 0);
        assert!(!report.diagnostics.has_warnings());
    }
}
