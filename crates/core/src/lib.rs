#![deny(missing_docs)]
//! mdfield core: hard-break preservation for WYSIWYG Markdown and the field
//! attributes shared by the host renderer and the browser glue.

/// Code fence tracking for the hard-break pass.
pub mod code_fence;
/// Field attributes and editor mount options.
pub mod config;
/// Core error and diagnostic types.
pub mod error;
/// Soft-break to hard-break conversion.
pub mod hard_break;
/// Line classification helpers.
pub mod line;

pub use code_fence::{FenceState, LineParseOutcome, advance_fence_state, is_fence_delimiter};
pub use config::{DEFAULT_HEIGHT, FieldviewAttrs, MountOptions, parse_height};
pub use error::{FieldviewError, SourceLocation, TransformDiagnostics, TransformWarning};
pub use hard_break::{HARD_BREAK, HardBreakTransformer, TransformReport, hard_break_fix};
pub use line::{
    LineKind, classify_line, is_js_whitespace, is_plain_successor, is_structural, js_trim,
};
