//! NAPI-exposed data structures.

use mdfield_core::{TransformReport, TransformWarning};
use napi_derive::napi;

/// Outcome of a hard-break pass over one document.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct HardBreakReport {
    /// Rewritten Markdown.
    pub output: String,
    /// Number of lines in the document.
    pub lines: u32,
    /// Number of lines that received a hard break.
    pub breaks_inserted: u32,
    /// Non-fatal findings.
    pub warnings: Vec<TransformWarningInfo>,
}

/// A warning surfaced from the hard-break pass.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct TransformWarningInfo {
    /// Machine-readable warning kind.
    pub kind: String,
    /// Human-readable message.
    pub message: String,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl From<&TransformWarning> for TransformWarningInfo {
    fn from(warning: &TransformWarning) -> Self {
        let kind = match warning {
            TransformWarning::UnclosedCodeFence { .. } => "unclosed-code-fence",
        };
        let location = warning.location();
        Self {
            kind: kind.to_string(),
            message: warning.to_string(),
            line: location.line as u32,
            column: location.column as u32,
        }
    }
}

impl From<TransformReport> for HardBreakReport {
    fn from(report: TransformReport) -> Self {
        Self {
            warnings: report
                .diagnostics
                .warnings
                .iter()
                .map(TransformWarningInfo::from)
                .collect(),
            output: report.output,
            lines: report.lines as u32,
            breaks_inserted: report.breaks_inserted as u32,
        }
    }
}

/// One document in a batch.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Caller-chosen identifier (row id, field path, ...).
    pub id: String,
    /// Markdown to rewrite.
    pub markdown: String,
}

/// Rewritten document in a batch.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Identifier matching the input.
    pub id: String,
    /// Rewritten Markdown.
    pub output: String,
    /// Number of lines that received a hard break.
    pub breaks_inserted: u32,
}

/// Options for batch processing.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to number of CPU cores.
    pub max_threads: Option<u32>,
    /// Convert soft breaks. Defaults to true.
    pub hardwrap: Option<bool>,
}

/// Statistics for batch processing.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Total number of documents processed.
    pub total: u32,
    /// Number of documents whose content changed.
    pub changed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Result of batch processing containing all results and statistics.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchProcessingResult {
    /// Individual results in input order.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}
