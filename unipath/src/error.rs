//! Error types for the unipath library.
//!
//! This module provides the error hierarchy for all operations in the
//! unipath library, using `thiserror` for ergonomic error handling.
//!
//! Scanning and indexing failures map onto three kinds (see [`ErrorKind`]);
//! the remaining variants belong to the configuration and report layers.

use thiserror::Error;

/// Result type alias for operations that may fail with a unipath error.
///
/// # Examples
///
/// ```
/// use unipath::{Result, UniPath};
///
/// fn leaf(text: &str) -> Result<Option<String>> {
///     Ok(UniPath::parse(text)?.file_name().map(str::to_owned))
/// }
///
/// assert_eq!(leaf("a/b.txt").unwrap().as_deref(), Some("b.txt"));
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the unipath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A disallowed symbol, an out-of-window colon, a control character or
    /// an unpaired surrogate was met while scanning.
    #[error("invalid character {character:?} at offset {offset} in {fragment:?}")]
    InvalidCharacter {
        /// The rejected character (U+FFFD for an unpaired surrogate).
        character: char,
        /// Offset of the character inside the fragment, in bytes.
        offset: usize,
        /// The fragment being scanned.
        fragment: String,
    },

    /// A span consisting solely of three or more dots was produced.
    #[error("invalid path segment {segment:?}: all characters are dots")]
    InvalidSegment {
        /// The offending segment text.
        segment: String,
    },

    /// A segment index was outside `[0, len)`.
    #[error("segment index {index} out of bounds for path of {len} segment(s)")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of segments in the path.
        len: usize,
    },

    /// A slice range violated `begin <= end <= len`.
    #[error("invalid segment range {begin}..{end} for path of {len} segment(s)")]
    InvalidRange {
        /// The requested start (inclusive).
        begin: usize,
        /// The requested end (exclusive).
        end: usize,
        /// The number of segments in the path.
        len: usize,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::InvalidCharacter`].
    InvalidCharacter,
    /// See [`Error::InvalidSegment`].
    InvalidSegment,
    /// See [`Error::IndexOutOfBounds`] and [`Error::InvalidRange`].
    IndexOutOfBounds,
    /// Configuration, I/O and serialization failures.
    Other,
}

impl Error {
    /// Classify this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::{ErrorKind, UniPath};
    ///
    /// let err = UniPath::parse("a|b").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::InvalidSegment { .. } => ErrorKind::InvalidSegment,
            Self::IndexOutOfBounds { .. } | Self::InvalidRange { .. } => {
                ErrorKind::IndexOutOfBounds
            }
            Self::Io(_) | Self::Configuration(_) | Self::Serialization(_) | Self::Validation { .. } => {
                ErrorKind::Other
            }
        }
    }

    /// Check if the error was raised while scanning path text.
    #[must_use]
    pub fn is_scan_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidCharacter | ErrorKind::InvalidSegment
        )
    }

    /// Check if the error is an index or range violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use unipath::Error;
    ///
    /// let err = Error::IndexOutOfBounds { index: 3, len: 2 };
    /// assert!(err.is_out_of_bounds());
    /// ```
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        self.kind() == ErrorKind::IndexOutOfBounds
    }
}
