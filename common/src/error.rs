//! Failure taxonomy for fetch, decode and time-sync operations.
//!
//! None of these are fatal: callers recover by substituting an invalid
//! record and keep looping.

use core::fmt;

/// Why a data source could not produce a valid record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// Connect failure, timeout, or a non-success HTTP status.
    Network,
    /// The response body was not well-formed JSON.
    Decode,
    /// Well-formed response missing a required field.
    DataInvalid,
    /// Time sync got no usable answer within its timeout.
    Sync,
}

impl FetchError {
    /// Short message for the on-screen error slide.
    pub const fn diagnostic(self) -> &'static str {
        match self {
            Self::Network => "Network error",
            Self::Decode => "Bad response",
            Self::DataInvalid => "Missing data",
            Self::Sync => "Time sync failed",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.diagnostic())
    }
}

impl core::error::Error for FetchError {}
