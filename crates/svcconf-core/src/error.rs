//! Shared error type across svcconf crates.

use thiserror::Error;

/// Stable error codes, one per failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed JSON text.
    Parse,
    /// Wrong document shape, duplicate key, or wrong node type for a known key.
    Schema,
    /// Invalid method name object.
    Name,
    /// A method-config block names no methods.
    EmptyNames,
    /// The caller's value factory rejected a method-config block.
    Factory,
    /// Reading the document from disk failed.
    Io,
}

impl ErrorKind {
    /// String representation used in logs and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Parse => "PARSE_ERROR",
            ErrorKind::Schema => "SCHEMA_ERROR",
            ErrorKind::Name => "NAME_ERROR",
            ErrorKind::EmptyNames => "EMPTY_NAMES",
            ErrorKind::Factory => "FACTORY_ERROR",
            ErrorKind::Io => "IO_ERROR",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SvcConfError>;

/// Unified error type used by core and table.
#[derive(Debug, Error)]
pub enum SvcConfError {
    #[error("invalid service config json: {0}")]
    Parse(String),
    #[error("schema violation: {0}")]
    Schema(String),
    #[error("invalid method name: {0}")]
    Name(String),
    #[error("methodConfig[{index}] does not name any method")]
    EmptyNames { index: usize },
    #[error("method config rejected: {0}")]
    Factory(String),
    #[error("io: {0}")]
    Io(String),
}

impl SvcConfError {
    /// Map the error to its stable code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SvcConfError::Parse(_) => ErrorKind::Parse,
            SvcConfError::Schema(_) => ErrorKind::Schema,
            SvcConfError::Name(_) => ErrorKind::Name,
            SvcConfError::EmptyNames { .. } => ErrorKind::EmptyNames,
            SvcConfError::Factory(_) => ErrorKind::Factory,
            SvcConfError::Io(_) => ErrorKind::Io,
        }
    }

    /// Prefix the message with the location it was found at.
    ///
    /// `EmptyNames` already carries its index and is returned unchanged.
    pub fn at(self, location: &str) -> Self {
        match self {
            SvcConfError::Parse(m) => SvcConfError::Parse(format!("{location}: {m}")),
            SvcConfError::Schema(m) => SvcConfError::Schema(format!("{location}: {m}")),
            SvcConfError::Name(m) => SvcConfError::Name(format!("{location}: {m}")),
            SvcConfError::Factory(m) => SvcConfError::Factory(format!("{location}: {m}")),
            SvcConfError::Io(m) => SvcConfError::Io(format!("{location}: {m}")),
            e @ SvcConfError::EmptyNames { .. } => e,
        }
    }
}
