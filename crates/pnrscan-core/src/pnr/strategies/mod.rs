//! The four recognition strategies, ordered most specific first.
//!
//! Each strategy is a pure function `(text, airports) -> Vec<Candidate>`
//! over the normalized text. "No match" is the empty list, never an error.
//! The waterfall stops at the first tier that yields anything: the specific,
//! rarely-colliding patterns get the first shot, and the search only
//! broadens when they find nothing.

pub mod adjacency;
pub mod fallback;
pub mod secondary;
pub mod spaced;

use super::Candidate;
use super::patterns::PREAMBLE;
use crate::airports::AirportCodes;

/// Strategy signature shared by all tiers.
pub type Strategy = fn(&str, &AirportCodes) -> Vec<Candidate>;

/// Waterfall order. Index 0 runs first.
pub const WATERFALL: [Strategy; 4] = [
    spaced::recognize,
    adjacency::recognize,
    secondary::recognize,
    fallback::recognize,
];

/// Run the waterfall, short-circuiting after the first non-empty tier.
pub fn run_waterfall(text: &str, airports: &AirportCodes) -> Vec<Candidate> {
    for strategy in WATERFALL {
        let found = strategy(text, airports);
        if !found.is_empty() {
            return found;
        }
    }
    Vec::new()
}

/// Carrier/ticket preamble gate shared by the specific tiers: everything
/// before the match must be the start-of-message marker followed only by
/// uppercase letters, spaces, and slashes.
pub(crate) fn preamble_before(text: &str, start: usize) -> bool {
    PREAMBLE.is_match(&text[..start])
}
