//! Error types for the pnrscan-core library.
//!
//! The extraction engine itself never fails: "nothing recognized" is the
//! [`UNKNOWN`](crate::pnr::UNKNOWN) sentinel, not an error. Errors only
//! exist on the reference-data feed boundary.

use thiserror::Error;

/// Main error type for the pnrscan library.
#[derive(Error, Debug)]
pub enum PnrScanError {
    /// Reference data feed error.
    #[error("reference data error: {0}")]
    ReferenceData(#[from] ReferenceDataError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building the airport-code reference set.
#[derive(Error, Debug)]
pub enum ReferenceDataError {
    /// A supplied code is not exactly three characters long.
    #[error("airport code {0:?} is not three characters")]
    BadLength(String),

    /// A supplied code contains something other than ASCII uppercase letters.
    #[error("airport code {0:?} is not uppercase ASCII letters")]
    BadCharset(String),

    /// The feed contained no codes at all.
    #[error("airport code feed is empty")]
    EmptyFeed,
}

/// Result type for the pnrscan library.
pub type Result<T> = std::result::Result<T, PnrScanError>;
