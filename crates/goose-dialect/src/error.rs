//! Error types for the dialect library.

use thiserror::Error;

/// Boxed error returned by [`VersionConnection`](crate::core::VersionConnection)
/// implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for dialect operations.
#[derive(Error, Debug)]
pub enum DialectError {
    /// The version history query failed.
    ///
    /// Every failure of the history query lands here, whatever the engine
    /// reported. The engine error is kept as the source.
    #[error("version table goose_db_version does not exist")]
    TableMissing(#[source] BoxError),

    /// A catalog was asked to require a dialect it does not know.
    #[error("Unknown dialect: '{0}'")]
    UnknownDialect(String),

    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Statement execution against the version table failed
    #[error("Database error: {message}\n  Context: {context}")]
    Database { message: String, context: String },

    /// The version history holds no applied version.
    #[error("No applied version found in goose_db_version")]
    NoAppliedVersion,

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl DialectError {
    /// Create a Database error with context about where it occurred
    pub fn database(message: impl ToString, context: impl Into<String>) -> Self {
        DialectError::Database {
            message: message.to_string(),
            context: context.into(),
        }
    }

    /// Whether this is the recoverable "create the table first" condition.
    pub fn is_table_missing(&self) -> bool {
        matches!(self, DialectError::TableMissing(_))
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
