//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::models::ProviderResult;
use crate::providers::ProviderId;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing an HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Why a single provider attempt failed.
///
/// Every attempt ends in a populated short link or one of these reasons;
/// nothing is swallowed. The reason is carried inside the
/// [`ProviderResult`](crate::ProviderResult) so callers can log and
/// aggregate without the error ever escaping the attempt boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProviderFailure {
    /// The request exceeded the client-side timeout.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request failed in transit for another reason.
    #[error("request failed: {0}")]
    Send(String),

    /// The provider answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// The body was read but did not match the provider's documented shape.
    #[error("response body did not contain a short link")]
    BodyMismatch,
}

/// Request-scoped dispatch errors.
///
/// These are the only errors a dispatch operation returns; individual
/// provider failures are reported inside the `Ok` results.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The destination URL failed the prefix check. Surfaced before any
    /// network call is made.
    #[error("invalid destination URL: must start with http:// or https://")]
    InvalidInput,

    /// The named provider has no entry in the provider table.
    #[error("unknown provider: {0}")]
    UnknownProvider(ProviderId),

    /// Every provider in the chain failed. Carries the per-provider results
    /// so callers can still log and aggregate the failures.
    #[error("all providers failed ({} attempted)", .0.len())]
    AllProvidersFailed(Vec<ProviderResult>),
}

/// Failure categories counted across a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Destination URL rejected before any network call.
    InvalidInput,
    /// A provider call hit the client-side timeout.
    ProviderTimeout,
    /// A provider connection could not be established.
    ProviderConnect,
    /// A provider request failed in transit.
    ProviderSend,
    /// A provider answered with a non-success status.
    ProviderStatus,
    /// A provider response body could not be read.
    ProviderBody,
    /// A provider body did not match its documented shape.
    ProviderBodyMismatch,
    /// A fallback chain exhausted every provider.
    AllProvidersFailed,
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidInput => "Invalid destination URL",
            ErrorType::ProviderTimeout => "Provider timeout",
            ErrorType::ProviderConnect => "Provider connection error",
            ErrorType::ProviderSend => "Provider request error",
            ErrorType::ProviderStatus => "Provider status error",
            ErrorType::ProviderBody => "Provider body read error",
            ErrorType::ProviderBodyMismatch => "Provider body mismatch",
            ErrorType::AllProvidersFailed => "All providers failed",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ProviderFailure> for ErrorType {
    fn from(failure: &ProviderFailure) -> Self {
        match failure {
            ProviderFailure::Timeout => ErrorType::ProviderTimeout,
            ProviderFailure::Connect(_) => ErrorType::ProviderConnect,
            ProviderFailure::Send(_) => ErrorType::ProviderSend,
            ProviderFailure::Status(_) => ErrorType::ProviderStatus,
            ProviderFailure::Body(_) => ErrorType::ProviderBody,
            ProviderFailure::BodyMismatch => ErrorType::ProviderBodyMismatch,
        }
    }
}

/// Notable non-error events counted across a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// A short link was produced.
    ShortLinkCreated,
    /// A verification probe confirmed a short link redirects.
    VerifyWorking,
    /// A verification probe found a short link broken.
    VerifyBroken,
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::ShortLinkCreated => "Short link created",
            InfoType::VerifyWorking => "Short link verified working",
            InfoType::VerifyBroken => "Short link verified broken",
        }
    }
}
