use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Indicates that an error occurred while building constraints or reading the dictionary.
#[derive(Error, Debug)]
pub enum GuesserError {
    /// Indicates that the dictionary file does not exist or could not be opened.
    #[error("{}: {}", .path.display(), .source)]
    DictionaryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Indicates that a letter-spot clause did not have exactly one `:`. Holds the offending
    /// clause.
    #[error("Malformed spec {0:?}")]
    MalformedSpec(String),
    /// Indicates that a position was not a positive integer. Holds the offending token.
    #[error("Invalid position {0}")]
    InvalidPosition(String),
    /// Indicates that a letter token was longer than a single character. Holds the offending
    /// token.
    #[error("Invalid letter {0:?}")]
    InvalidLetter(String),
    /// Indicates that reading the dictionary failed after it was opened.
    #[error("Failed to read dictionary: {0}")]
    Io(#[from] io::Error),
}

impl GuesserError {
    /// Returns `true` if this error stems from the shape of the user's input, in which case the
    /// usage text should be shown.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, GuesserError::MalformedSpec(_))
    }
}

pub type Result<T> = std::result::Result<T, GuesserError>;
