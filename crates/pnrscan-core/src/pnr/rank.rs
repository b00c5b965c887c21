//! Ranking and the acceptance gate.
//!
//! The deduplicated survivors are sorted by confidence and the top one
//! either clears the gate or the whole call resolves to the sentinel.
//! Rejection is a normal outcome here, never an error.

use super::patterns::{AIRLINE_MARKER_LEAD, TRIGRAPH_LEAD};
use super::{Candidate, PnrResult, StrategyKind};
use crate::airports::AirportCodes;

/// Low-confidence band eligible for positional corroboration.
const LENIENCY_BAND: std::ops::Range<u8> = 30..40;
/// A match this deep into the payload is past the header noise.
const LENIENCY_MIN_POSITION: usize = 5;

const THRESHOLD_DEFAULT: u8 = 30;
const THRESHOLD_STRICT: u8 = 50;

/// Minimum confidence the winning candidate must reach.
///
/// NOTE: the stricter floor keys on a label token that no strategy label
/// actually contains (the labels are plain English), so in practice every
/// tier is gated at the default floor. Kept as-is until product confirms
/// the intended behavior; `test_effective_threshold_is_uniformly_low` pins
/// what ships today.
pub(crate) fn acceptance_threshold(strategy: StrategyKind) -> u8 {
    if strategy.label().contains("générique") {
        THRESHOLD_STRICT
    } else {
        THRESHOLD_DEFAULT
    }
}

/// Sort by confidence and apply the gate. Returns the outcome plus the
/// winning candidate for diagnostics.
pub(crate) fn choose(
    mut candidates: Vec<Candidate>,
    airports: &AirportCodes,
    positional_leniency: bool,
) -> (PnrResult, Option<Candidate>) {
    candidates.sort_by(|a, b| b.confidence.cmp(&a.confidence));

    let Some(top) = candidates.into_iter().next() else {
        return (PnrResult::Unknown, None);
    };

    if positional_leniency
        && LENIENCY_BAND.contains(&top.confidence)
        && top.position > LENIENCY_MIN_POSITION
        && corroborated(&top, airports)
    {
        return (PnrResult::Found(top.value.clone()), Some(top));
    }

    if top.confidence >= acceptance_threshold(top.strategy) {
        (PnrResult::Found(top.value.clone()), Some(top))
    } else {
        (PnrResult::Unknown, Some(top))
    }
}

/// A low-confidence guess counts as corroborated when the text right after
/// it looks like a flight designator, a trigraph, or a known airport code.
fn corroborated(candidate: &Candidate, airports: &AirportCodes) -> bool {
    let after = candidate.context_after.as_str();
    AIRLINE_MARKER_LEAD.is_match(after)
        || TRIGRAPH_LEAD.is_match(after)
        || contains_airport_code(after, airports)
}

fn contains_airport_code(context: &str, airports: &AirportCodes) -> bool {
    let chars: Vec<char> = context.chars().collect();
    chars.windows(3).any(|w| {
        w.iter().all(|c| c.is_ascii_uppercase())
            && airports.contains(&w.iter().collect::<String>())
    })
}
