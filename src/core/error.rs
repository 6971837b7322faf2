//! Error types for FusionBedpe
//!
//! Defines all error types used throughout the library.

use thiserror::Error;

/// Main error type for FusionBedpe operations
#[derive(Debug, Error)]
pub enum FusionBedpeError {
    /// An adapter could not build a record from a raw row
    #[error("{tool} adapter failed: {source}")]
    Adapter {
        tool: &'static str,
        #[source]
        source: AdapterError,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while mapping one raw record to BEDPE
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// A column the adapter reads for its core fields is not in the input header
    #[error("required column '{column}' is absent (line {line})")]
    MissingColumn { column: String, line: usize },
}

impl AdapterError {
    pub fn missing_column(column: impl Into<String>, line: usize) -> Self {
        AdapterError::MissingColumn {
            column: column.into(),
            line,
        }
    }
}

/// Result type alias for FusionBedpe operations
pub type Result<T> = std::result::Result<T, FusionBedpeError>;

/// Result type alias for adapter operations
pub type AdapterResult<T> = std::result::Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let err = AdapterError::missing_column("LeftBreakpoint", 3);
        assert_eq!(
            err.to_string(),
            "required column 'LeftBreakpoint' is absent (line 3)"
        );
    }

    #[test]
    fn test_adapter_error_wrapping() {
        let err = FusionBedpeError::Adapter {
            tool: "star-fusion",
            source: AdapterError::missing_column("#FusionName", 2),
        };
        assert!(err.to_string().starts_with("star-fusion adapter failed"));
    }
}
