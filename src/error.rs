//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - [`HandlerError`](crate::lookup::HandlerError) for lookup failures, which
//!   already wraps the client-level [`LookupError`](crate::lookup::LookupError)
//! - [`Error::MissingData`] is the single business-level signal: the
//!   counter logs *why* data is missing and returns this variant for every
//!   case, so callers only need to stop and report

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value required to produce an average was not available
    #[error("Required data is missing")]
    MissingData,

    /// Metadata lookup failed
    #[error("Lookup error: {0}")]
    Handler(#[from] crate::lookup::HandlerError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal I/O error (prompting for input)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// Whether this is (or wraps) [`Error::MissingData`].
    pub fn is_missing_data(&self) -> bool {
        match self {
            Self::MissingData => true,
            Self::WithContext { source, .. } => source.is_missing_data(),
            _ => false,
        }
    }
}

impl From<crate::lookup::LookupError> for Error {
    fn from(err: crate::lookup::LookupError) -> Self {
        Self::Handler(err.into())
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, crate::lookup::HandlerError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Handler(e).context(ctx))
    }
}
