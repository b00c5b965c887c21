//! Tier 3: secondary carrier pattern family.
//!
//! Two sub-patterns for the interline layout: one anchored on the ETH
//! designator and its flight number, one on the name-header preamble with
//! the reference and route printed as separate tokens.

use super::preamble_before;
use crate::airports::AirportCodes;
use crate::pnr::patterns::{ETH_FLIGHT_ANCHOR, ROUTE_BLOCK};
use crate::pnr::{Candidate, StrategyKind};

const CONFIDENCE: u8 = 80;

pub fn recognize(text: &str, airports: &AirportCodes) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    // 3a: 6-letter block next to the ETH flight designator.
    for caps in ETH_FLIGHT_ANCHOR.captures_iter(text) {
        let m = caps.get(0).expect("full match always present");
        let value = &caps[1];
        if airports.contains(value) {
            continue;
        }

        candidates.push(
            Candidate::new(value, CONFIDENCE, StrategyKind::CarrierFlightAnchor, m.start())
                .with_context(text, m.start(), m.end()),
        );
    }

    // 3b: preamble-gated reference + airport code.
    for caps in ROUTE_BLOCK.captures_iter(text) {
        let m = caps.get(0).expect("full match always present");
        if !preamble_before(text, m.start()) {
            continue;
        }
        if !airports.contains(&caps[2]) {
            continue;
        }

        let value = &caps[1];
        if airports.contains(value) {
            continue;
        }

        // Same value found twice across the sub-patterns collapses later;
        // emit both and let dedup keep the stronger occurrence.
        candidates.push(
            Candidate::new(value, CONFIDENCE, StrategyKind::CarrierRouteBlock, m.start())
                .with_context(text, m.start(), m.end()),
        );
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
    fn test_eth_flight_anchor() {
        let found = recognize("PASS NBVCXZ ETH0845 SEAT 12A", &airports());

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "NBVCXZ");
        assert_eq!(found[0].confidence, 80);
        assert_eq!(found[0].strategy, StrategyKind::CarrierFlightAnchor);
    }

    #[test]
    fn test_eth_anchor_without_space() {
        let found = recognize("NBVCXZETH0845", &airports());

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "NBVCXZ");
        assert_eq!(found[0].position, 0);
    }

    #[test]
    fn test_eth_anchor_needs_flight_digits() {
        assert!(recognize("NBVCXZ ETHIOPIA", &airports()).is_empty());
    }

    #[test]
    fn test_route_block_after_preamble() {
        let found = recognize("M1DOE/JOHN YFMKNE FIH", &airports());

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "YFMKNE");
        assert_eq!(found[0].strategy, StrategyKind::CarrierRouteBlock);
    }

    #[test]
    fn test_route_block_requires_known_code() {
        assert!(recognize("M1DOE/JOHN YFMKNE QQQ", &airports()).is_empty());
    }

    #[test]
    fn test_route_block_requires_preamble() {
        assert!(recognize("HELLO YFMKNE FIH", &airports()).is_empty());
    }
}
