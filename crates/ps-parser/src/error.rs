use std::path::PathBuf;

/// Extraction errors.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message} (line {line}, column {column})")]
    Syntax {
        path: PathBuf,
        message: String,
        line: usize,
        column: usize,
    },

    #[error("parse failed for {}: {reason}", path.display())]
    ParseFailed { path: PathBuf, reason: String },
}

impl ParserError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::Unreadable { path, .. }
            | Self::Syntax { path, .. }
            | Self::ParseFailed { path, .. } => path,
        }
    }

    /// Report the error against `path` instead of the path it was raised for.
    pub fn with_path(mut self, path: &std::path::Path) -> Self {
        match &mut self {
            Self::NotFound { path: p }
            | Self::Unreadable { path: p, .. }
            | Self::Syntax { path: p, .. }
            | Self::ParseFailed { path: p, .. } => *p = path.to_path_buf(),
        }
        self
    }

    pub fn is_retryable(&self) -> bool {
        false
    }
}
