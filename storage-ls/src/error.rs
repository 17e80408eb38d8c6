/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: The underlying cause is available through [`std::error::Error::source`].
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of listing errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The storage address is malformed (wrong scheme, host present, or empty path)
    InvalidAddress,

    /// Operation input validation issues
    InputInvalid,

    /// The storage backend failed to list buckets or objects
    BackendFailed,

    /// The consumer of listed paths signalled a failure
    ConsumerFailed,

    /// The operation was cancelled through its cancellation token
    OperationCancelled,
}

impl Error {
    /// Creates a new listing [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InvalidAddress => write!(f, "invalid storage address"),
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::BackendFailed => write!(f, "storage backend request failed"),
            ErrorKind::ConsumerFailed => write!(f, "consumer failed to accept listed path"),
            ErrorKind::OperationCancelled => write!(f, "operation cancelled"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Error returned when an operation input is missing a required field
#[derive(Debug)]
pub struct BuildError {
    field: &'static str,
    details: &'static str,
}

impl BuildError {
    pub(crate) fn missing_field(field: &'static str, details: &'static str) -> Self {
        BuildError { field, details }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` was missing: {}", self.field, self.details)
    }
}

impl std::error::Error for BuildError {}

impl From<BuildError> for Error {
    fn from(value: BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

pub(crate) fn invalid_address<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InvalidAddress, err)
}

pub(crate) fn backend_failed<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::BackendFailed, err)
}

pub(crate) fn consumer_failed<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::ConsumerFailed, err)
}

static CANCELLATION_ERROR: &str = "listing was cancelled before the next backend request completed";

pub(crate) fn operation_cancelled() -> Error {
    Error::new(ErrorKind::OperationCancelled, CANCELLATION_ERROR)
}
