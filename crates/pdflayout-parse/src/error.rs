//! Error types for the lopdf document model.
//!
//! [`BackendError`] is derived with [`thiserror`] and converts into the
//! core [`LayoutError`] at the [`DocumentModel`](pdflayout_core::DocumentModel)
//! boundary.

use pdflayout_core::LayoutError;
use thiserror::Error;

/// Error type for parsing and content stream interpretation.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The document structure or an object could not be parsed.
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// The document could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A font resource is unusable.
    #[error("font error: {0}")]
    Font(String),

    /// A content stream could not be interpreted.
    #[error("interpreter error: {0}")]
    Interpreter(String),

    /// A core library error.
    #[error(transparent)]
    Core(#[from] LayoutError),
}

impl From<lopdf::Error> for BackendError {
    fn from(err: lopdf::Error) -> Self {
        BackendError::Parse(err.to_string())
    }
}

impl From<BackendError> for LayoutError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Parse(msg) => LayoutError::ParseError(msg),
            BackendError::Io(e) => LayoutError::IoError(e.to_string()),
            BackendError::Font(msg) => LayoutError::FontError(msg),
            BackendError::Interpreter(msg) => LayoutError::InterpreterError(msg),
            BackendError::Core(e) => e,
        }
    }
}
