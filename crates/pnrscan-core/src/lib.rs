//! Core library for boarding-pass booking-reference recognition.
//!
//! This crate provides:
//! - Whitespace normalization for raw boarding-pass payloads
//! - An immutable IATA airport-code reference set
//! - A waterfall of confidence-ranked PNR recognition strategies
//! - Candidate deduplication, ranking, and the final acceptance gate
//!
//! The engine is a pure, synchronous computation: the same input and the
//! same reference set always produce the same result, so one
//! [`PnrExtractor`] may be shared across threads without locking.

pub mod airports;
pub mod error;
pub mod normalize;
pub mod pnr;

pub use airports::AirportCodes;
pub use error::{PnrScanError, ReferenceDataError, Result};
pub use normalize::normalize;
pub use pnr::{Candidate, ExtractionReport, PnrExtractor, PnrResult, StrategyKind, UNKNOWN};
