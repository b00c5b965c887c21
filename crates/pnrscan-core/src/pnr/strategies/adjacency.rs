//! Tier 2: carrier-specific direct adjacency.
//!
//! Some payloads drop the separators entirely: prefix, reference, and the
//! origin airport code arrive as one unbroken letter run right after the
//! name header. The trailing airport code anchors the parse, so a single
//! high-confidence candidate comes out of each run.

use super::preamble_before;
use crate::airports::AirportCodes;
use crate::pnr::patterns::ADJACENT_RUN;
use crate::pnr::{Candidate, StrategyKind};

const CONFIDENCE: u8 = 90;

pub fn recognize(text: &str, airports: &AirportCodes) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for caps in ADJACENT_RUN.captures_iter(text) {
        let run = caps.get(1).expect("group 1 always present");
        if !preamble_before(text, run.start()) {
            continue;
        }

        let block = run.as_str();
        let len = block.len();

        // prefix (1-4) | reference (6) | airport code (3)
        let code = &block[len - 3..];
        if !airports.contains(code) {
            continue;
        }

        let value = &block[len - 9..len - 3];
        if airports.contains(value) {
            continue;
        }

        candidates.push(
            Candidate::new(value, CONFIDENCE, StrategyKind::DirectAdjacency, run.start())
                .with_context(text, run.start(), run.end()),
        );
    }

    candidates
}
