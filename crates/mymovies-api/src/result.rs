//! `ApiResult` - uniform outcome of every client operation.

use std::fmt;

/// Where a failure originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The provider understood the request and reported a failure
    /// (no results, malformed query, bad credential).
    Provider,
    /// The request never produced a usable provider answer
    /// (connection error, unreadable or unparsable body).
    Transport,
}

/// Outcome of a client operation.
///
/// A `Failure` never carries partial data: reshaping happens only after the
/// provider reported success and the whole body decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum ApiResult<T> {
    /// The provider answered and the payload was decoded.
    Success {
        /// Decoded payload.
        data: T,
    },
    /// The operation failed; `message` is safe to show to the end user.
    Failure {
        /// Failure origin.
        kind: FailureKind,
        /// User-facing message.
        message: String,
    },
}

impl<T> ApiResult<T> {
    /// Wraps a payload.
    pub const fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Builds a provider-reported failure.
    pub fn provider_failure(message: impl Into<String>) -> Self {
        Self::Failure {
            kind: FailureKind::Provider,
            message: message.into(),
        }
    }

    /// Builds a transport failure.
    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self::Failure {
            kind: FailureKind::Transport,
            message: message.into(),
        }
    }

    /// Returns `true` for `Success`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Borrows the payload of a `Success`.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Borrows the message of a `Failure`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message),
        }
    }

    /// Maps the payload, leaving failures untouched.
    pub fn map<U, F>(self, f: F) -> ApiResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success { data } => ApiResult::Success { data: f(data) },
            Self::Failure { kind, message } => ApiResult::Failure { kind, message },
        }
    }

    /// Converts into a `Result` for `?`-style consumers.
    ///
    /// # Errors
    ///
    /// Returns the failure as an [`ApiFailure`].
    pub fn into_result(self) -> Result<T, ApiFailure> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { kind, message } => Err(ApiFailure { kind, message }),
        }
    }
}

/// Failure half of an [`ApiResult`] as a standalone error value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct ApiFailure {
    /// Failure origin.
    pub kind: FailureKind,
    /// User-facing message.
    pub message: String,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiFailure {}
