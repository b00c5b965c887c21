//! Tier 1: space-delimited dispersal + reference block.
//!
//! The primary carriers print the booking reference inside one unbroken
//! letter token: a short fare-basis "dispersal" fragment glued onto the
//! front of the 6-letter reference. The token sits between the passenger
//! name header and the route, so the exact start of the reference is
//! ambiguous. Every plausible split is emitted as its own candidate and the
//! dedup/ranking stages pick the winner.

use super::preamble_before;
use crate::airports::AirportCodes;
use crate::pnr::patterns::SPACED_BLOCK;
use crate::pnr::{Candidate, StrategyKind};

/// Reference length is fixed; only the dispersal length varies.
const REFERENCE_LEN: usize = 6;
const MIN_DISPERSAL: usize = 1;
const MAX_DISPERSAL: usize = 4;

/// Dispersal lengths 2 and 3 dominate the observed traffic; 1 and 4 exist
/// but are rare. The scores encode that prior, nothing more.
fn dispersal_confidence(dispersal_len: usize) -> u8 {
    match dispersal_len {
        2 | 3 => 98,
        1 => 70,
        _ => 60,
    }
}

pub fn recognize(text: &str, airports: &AirportCodes) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for caps in SPACED_BLOCK.captures_iter(text) {
        let token = caps.get(1).expect("group 1 always present");
        if !preamble_before(text, token.start()) {
            continue;
        }

        let block = token.as_str();
        for dispersal_len in MIN_DISPERSAL..=MAX_DISPERSAL {
            let end = dispersal_len + REFERENCE_LEN;
            if end > block.len() {
                break;
            }

            let value = &block[dispersal_len..end];
            if airports.contains(value) {
                continue;
            }

            candidates.push(
                Candidate::new(
                    value,
                    dispersal_confidence(dispersal_len),
                    StrategyKind::SpacedDispersal,
                    token.start(),
                )
                .with_context(text, token.start(), token.end()),
            );
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn airports() -> AirportCodes {
        AirportCodes::default()
    }

    #[test]
    fn test_eight_letter_block_splits() {
        let found = recognize("M1DOE/JOHN ABYFMKNE FIH", &airports());

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].value, "BYFMKN");
        assert_eq!(found[0].confidence, 70);
        assert_eq!(found[1].value, "YFMKNE");
        assert_eq!(found[1].confidence, 98);
        // Competing splits of one block share the block's offset.
        assert_eq!(found[0].position, found[1].position);
        assert_eq!(found[0].position, 11);
    }

    #[test]
    fn test_nine_letter_block_splits() {
        let found = recognize("M1DOE/JOHN XYZQWERTY FIH", &airports());

        let confidences: Vec<u8> = found.iter().map(|c| c.confidence).collect();
        assert_eq!(confidences, vec![70, 98, 98]);
        assert_eq!(found[2].value, "QWERTY");
    }

    #[test]
    fn test_seven_letter_block_single_split() {
        let found = recognize("M1DOE/JOHN BQWERTY FIH", &airports());

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "QWERTY");
        assert_eq!(found[0].confidence, 70);
    }

    #[test]
    fn test_requires_preamble() {
        assert!(recognize("DOE/JOHN ABYFMKNE FIH", &airports()).is_empty());
        assert!(recognize("ABYFMKNE FIH", &airports()).is_empty());
    }

    #[test]
    fn test_requires_trailing_letter_token() {
        assert!(recognize("M1DOE/JOHN ABYFMKNE", &airports()).is_empty());
        assert!(recognize("M1DOE/JOHN ABYFMKNE 123", &airports()).is_empty());
    }

    #[test]
    fn test_no_match_on_empty() {
        assert!(recognize("", &airports()).is_empty());
    }
}
