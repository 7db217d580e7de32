use std::path::PathBuf;

use thiserror::Error;

use crate::query::QueryError;

/// Main error type for index operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("key '{0}' is already present")]
    DuplicateKey(String),

    #[error("invalid index format at line {line}: {message}")]
    InvalidFormat { line: usize, message: String },

    #[error("'{}' is not a page directory", .0.display())]
    InvalidStore(PathBuf),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for index operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn invalid_format(line: usize, message: impl Into<String>) -> Error {
        Error::InvalidFormat {
            line,
            message: message.into(),
        }
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error::Io {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_arg("docid", "must be positive");
        assert_eq!(err.to_string(), "invalid argument docid: must be positive");

        let err = Error::invalid_format(3, "missing count");
        assert_eq!(err.to_string(), "invalid index format at line 3: missing count");

        let err = Error::InvalidStore(PathBuf::from("/tmp/nowhere"));
        assert_eq!(err.to_string(), "'/tmp/nowhere' is not a page directory");
    }

    #[test]
    fn test_io_error_source_is_not_repeated() {
        use std::error::Error as _;

        let err = Error::io(
            "cannot read index file index.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "cannot read index file index.txt");
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("gone"));
    }

    #[test]
    fn test_query_error_is_transparent() {
        let err: Error = QueryError::Empty.into();
        assert_eq!(err.to_string(), QueryError::Empty.to_string());
    }
}
