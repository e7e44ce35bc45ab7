//! Errors returned while building or querying an index.

use std::io;

/// Result type that is being returned from methods that can fail and thus have [`LseError`]s.
pub type LseResult<T> = Result<T, LseError>;

/// Errors that can result from building or querying a keyword index.
// [`Error`] is public, but opaque and easy to keep compatible.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct LseError(#[from] LseErrorKind);

// Accessors for anything we do want to expose publicly.
impl LseError {
    /// Borrow the inner error kind.
    pub fn kind(&self) -> &LseErrorKind {
        &self.0
    }

    /// Expose the inner error kind.
    ///
    /// This is useful for matching on the error kind.
    pub fn into_inner(self) -> LseErrorKind {
        self.0
    }
}

impl From<io::Error> for LseError {
    fn from(value: io::Error) -> Self {
        Self(LseErrorKind::Io(value))
    }
}

/// [`LseErrorKind`] describes the errors that can happen while loading input
/// or writing results.
///
/// Input failures name the source that could not be read, so a failed build
/// can be diagnosed from the message alone.
///
/// This is a non-exhaustive enum, so additional variants may be added in future. It is
/// recommended to match against the wildcard `_` instead of listing all possible variants,
/// to avoid problems when new variants are added.
#[non_exhaustive]
#[derive(thiserror::Error, Debug, displaydoc::Display)]
pub enum LseErrorKind {
    /// could not write results: {0}
    Io(#[from] io::Error),
    /// document `{document}` is unavailable: {source}
    DocumentUnavailable {
        /// Identifier of the document, as listed in the document list.
        document: String,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// document list `{path}` is unavailable: {source}
    DocumentListUnavailable {
        /// Path of the document list.
        path: String,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// noise word list `{path}` is unavailable: {source}
    NoiseWordsUnavailable {
        /// Path of the noise word list.
        path: String,
        /// The underlying I/O failure.
        source: io::Error,
    },
}
