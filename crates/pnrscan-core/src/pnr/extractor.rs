//! Waterfall booking-reference extractor.

use serde::Serialize;
use tracing::debug;

use super::dedup::dedup_candidates;
use super::rank::choose;
use super::strategies::run_waterfall;
use super::{Candidate, PnrResult};
use crate::airports::AirportCodes;
use crate::normalize::normalize;

/// Per-call diagnostics alongside the outcome. Advisory only: callers that
/// just want the value use [`PnrExtractor::extract`].
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    /// Accepted value, or the `UNKNOWN` sentinel.
    pub value: String,
    /// Label of the pattern that produced the top candidate, if any.
    pub strategy: Option<&'static str>,
    /// Confidence of the top candidate, if any.
    pub confidence: Option<u8>,
    /// Candidates gathered before deduplication.
    pub candidates_considered: usize,
}

/// Confidence-ranked booking-reference recognizer.
///
/// Stateless between calls: `extract` is a pure function of the input text
/// and the reference set, so one instance can serve any number of threads
/// concurrently.
#[derive(Debug, Clone)]
pub struct PnrExtractor {
    airports: AirportCodes,
    positional_leniency: bool,
}

impl PnrExtractor {
    /// Create an extractor over the embedded airport-code set.
    pub fn new() -> Self {
        Self {
            airports: AirportCodes::default(),
            positional_leniency: true,
        }
    }

    /// Use a custom reference feed instead of the embedded set.
    pub fn with_airports(mut self, airports: AirportCodes) -> Self {
        self.airports = airports;
        self
    }

    /// Enable or disable the positional-leniency exception in the gate.
    pub fn with_positional_leniency(mut self, enabled: bool) -> Self {
        self.positional_leniency = enabled;
        self
    }

    /// The reference set this extractor filters against.
    pub fn airports(&self) -> &AirportCodes {
        &self.airports
    }

    /// Recognize the booking reference in one raw payload.
    pub fn extract(&self, raw: &str) -> PnrResult {
        self.run(raw).0
    }

    /// Recognize and return per-call diagnostics.
    pub fn extract_report(&self, raw: &str) -> ExtractionReport {
        let (result, winner, considered) = self.run(raw);

        ExtractionReport {
            value: result.as_str().to_string(),
            strategy: winner.as_ref().map(|c| c.strategy.label()),
            confidence: winner.as_ref().map(|c| c.confidence),
            candidates_considered: considered,
        }
    }

    fn run(&self, raw: &str) -> (PnrResult, Option<Candidate>, usize) {
        let text = normalize(raw);

        let candidates = run_waterfall(&text, &self.airports);
        let considered = candidates.len();

        let deduped = dedup_candidates(candidates);
        let (result, winner) = choose(deduped, &self.airports, self.positional_leniency);

        debug!(
            value = result.as_str(),
            strategy = winner.as_ref().map(|c| c.strategy.label()),
            confidence = winner.as_ref().map(|c| c.confidence),
            candidates_considered = considered,
            "pnr extraction"
        );

        (result, winner, considered)
    }
}

impl Default for PnrExtractor {
    fn default() -> Self {
        Self::new()
    }
}
