use thiserror::Error;

/// Line/column position inside a Markdown document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors surfaced while reading field attributes or serializing host payloads.
#[derive(Debug, Error)]
pub enum FieldviewError {
    /// Attribute bag could not be deserialized.
    #[error("Invalid fieldview attributes: {0}")]
    InvalidAttributes(#[source] serde_json::Error),
    /// Height was neither a pixel count nor a `"<n>px"` string.
    #[error("Invalid editor height: {0:?}")]
    InvalidHeight(String),
    /// Payload for the host or the browser could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Non-fatal findings from a hard-break pass. They never change the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformWarning {
    /// Code fence opened but never closed; every later line was passed through.
    UnclosedCodeFence {
        /// Where the fence was opened
        location: SourceLocation,
        /// Fence marker character (backtick or tilde)
        marker: char,
    },
}

impl TransformWarning {
    /// Get the location of this warning
    pub fn location(&self) -> &SourceLocation {
        match self {
            TransformWarning::UnclosedCodeFence { location, .. } => location,
        }
    }
}

impl std::fmt::Display for TransformWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformWarning::UnclosedCodeFence { location, marker } => {
                write!(
                    f,
                    "Unclosed code fence ({}) opened at {}; remaining lines left untouched",
                    marker, location
                )
            }
        }
    }
}

/// Warnings collected during a hard-break pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformDiagnostics {
    /// List of non-fatal warnings
    pub warnings: Vec<TransformWarning>,
}

impl TransformDiagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning to the diagnostics collection
    pub fn add_warning(&mut self, warning: TransformWarning) {
        self.warnings.push(warning);
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
