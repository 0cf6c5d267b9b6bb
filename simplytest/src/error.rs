//! The [`error`](self) module defines the errors returned while registering
//! cases and mocks or while writing reports.

use thiserror::Error;

/// Result type alias using the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by a [`Suite`](crate::Suite).
///
/// Expectation mismatches are never returned as errors. They are emitted as
/// [`Report`](crate::Report) records instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The title of a case was empty.
    #[error("The title of a test case must not be empty")]
    EmptyTitle,

    /// A mock with the same (case-insensitive) name is already registered.
    #[error("Cannot register mocks with the same function name: {0}")]
    DuplicateMock(String),

    /// The report sink failed to write a record.
    #[error("Unable to write report: {0}")]
    Io(#[from] std::io::Error),
}
