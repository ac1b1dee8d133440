//! Error types for the Jangbu workspace.

use thiserror::Error;

/// Result type alias for Jangbu operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across Jangbu crates.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure while reading content or configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Content could not be parsed (frontmatter, config, dates).
    #[error("Parse error: {0}")]
    Parse(String),

    /// A named resource does not exist.
    #[error("Not found: {kind} '{name}'")]
    NotFound {
        /// What was looked up (e.g. "post", "content directory").
        kind: String,
        /// The identifier that failed to resolve.
        name: String,
    },

    /// Invalid configuration value.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Build a [`Error::Parse`] from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`Error::NotFound`] for a named resource.
    pub fn not_found(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Build a [`Error::Config`] from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display() {
        let err = Error::parse("bad frontmatter");
        assert_eq!(err.to_string(), "Parse error: bad frontmatter");
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("samsung-q3", "post");
        assert_eq!(err.to_string(), "Not found: post 'samsung-q3'");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
