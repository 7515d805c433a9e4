//! Error handling for the merge sort studio
//!
//! The trace generator and the playback controller cannot fail. Errors come
//! from the edges: reading user input, loading configuration, exporting
//! traces, and building a [`Trace`](crate::trace::Trace) from raw steps.

use thiserror::Error;

/// Main error type for studio operations
#[derive(Error, Debug)]
pub enum StudioError {
    /// Rejected user input
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// A step list must hold at least one step
    #[error("Trace must contain at least one step")]
    EmptyTrace,

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<StudioError>,
    },
}

impl StudioError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        StudioError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for StudioError {
    fn from(err: serde_json::Error) -> Self {
        StudioError::Serialization(err.to_string())
    }
}

/// Reasons an input array is rejected before it reaches the generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("No values given")]
    Empty,

    #[error("Cannot parse {token:?} as an integer")]
    Unparsable { token: String },

    #[error("Expected {expected} values, found {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("Value {value} is outside {min}..={max}")]
    OutOfRange { value: i32, min: i32, max: i32 },

    #[error("Link has no `data` parameter")]
    MissingShareData,
}

/// Result type alias for studio operations
pub type Result<T> = std::result::Result<T, StudioError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<StudioError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StudioError::Config("bad speed".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad speed");
    }

    #[test]
    fn test_error_with_context() {
        let err: Result<()> = Err(StudioError::EmptyTrace);
        let with_ctx = err.context("Failed to reset player").unwrap_err();
        assert!(with_ctx.to_string().contains("Failed to reset player"));
        assert!(with_ctx.to_string().contains("at least one step"));
    }

    #[test]
    fn test_input_error_converts() {
        let err: StudioError = InputError::WrongCount {
            expected: 12,
            found: 3,
        }
        .into();
        assert_eq!(err.to_string(), "Input error: Expected 12 values, found 3");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = InputError::OutOfRange {
            value: 120,
            min: 1,
            max: 99,
        };
        assert!(err.to_string().contains("120"));
        assert!(err.to_string().contains("1..=99"));
    }
}
