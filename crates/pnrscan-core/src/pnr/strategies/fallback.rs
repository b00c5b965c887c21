//! Tier 4: generic fallback patterns, usable for any carrier.
//!
//! These shapes collide with noise far more often than the carrier tiers,
//! so they only run when everything else came up empty, score low, and
//! carry their own membership filters: a value that is an airport code or a
//! route pair (origin glued to destination) is noise, not a reference.

use crate::airports::AirportCodes;
use crate::pnr::patterns::{BARE_RUN, FLIGHT_NUMBER_ADJACENT, HUB_ADJACENT};
use crate::pnr::{Candidate, StrategyKind};

const CONFIDENCE: u8 = 30;

/// A letter run this long is a name or free-text field, not a reference
/// carrier.
const MAX_RUN_LEN: usize = 20;

fn plausible(value: &str, airports: &AirportCodes) -> bool {
    !airports.contains(value) && !airports.is_route_pair(value)
}

pub fn recognize(text: &str, airports: &AirportCodes) -> Vec<Candidate> {
    // 4a: reference directly before an airline designator and flight number.
    let found = flight_number_adjacent(text, airports);
    if !found.is_empty() {
        return found;
    }

    // 4b: reference directly before a major airport code.
    let found = hub_adjacent(text, airports);
    if !found.is_empty() {
        return found;
    }

    // 4c: last resort, any bare 6-letter run.
    bare_runs(text, airports)
}

fn flight_number_adjacent(text: &str, airports: &AirportCodes) -> Vec<Candidate> {
    FLIGHT_NUMBER_ADJACENT
        .captures_iter(text)
        .filter_map(|caps| {
            let m = caps.get(0).expect("full match always present");
            let value = &caps[1];
            plausible(value, airports).then(|| {
                Candidate::new(value, CONFIDENCE, StrategyKind::GenericFlightNumber, m.start())
                    .with_context(text, m.start(), m.end())
            })
        })
        .collect()
}

fn hub_adjacent(text: &str, airports: &AirportCodes) -> Vec<Candidate> {
    HUB_ADJACENT
        .captures_iter(text)
        .filter_map(|caps| {
            let m = caps.get(0).expect("full match always present");
            let value = &caps[1];
            plausible(value, airports).then(|| {
                Candidate::new(value, CONFIDENCE, StrategyKind::GenericAirportAdjacent, m.start())
                    .with_context(text, m.start(), m.end())
            })
        })
        .collect()
}

fn bare_runs(text: &str, airports: &AirportCodes) -> Vec<Candidate> {
    let bytes = text.as_bytes();
    let mut candidates = Vec::new();

    for m in BARE_RUN.find_iter(text) {
        if run_length_around(bytes, m.start(), m.end()) >= MAX_RUN_LEN {
            continue;
        }
        let value = m.as_str();
        if !plausible(value, airports) {
            continue;
        }

        candidates.push(
            Candidate::new(value, CONFIDENCE, StrategyKind::GenericBareRun, m.start())
                .with_context(text, m.start(), m.end()),
        );
    }

    candidates
}

/// Length of the unbroken uppercase run containing `start..end`.
fn run_length_around(bytes: &[u8], start: usize, end: usize) -> usize {
    let mut lo = start;
    while lo > 0 && bytes[lo - 1].is_ascii_uppercase() {
        lo -= 1;
    }
    let mut hi = end;
    while hi < bytes.len() && bytes[hi].is_ascii_uppercase() {
        hi += 1;
    }
    hi - lo
}
