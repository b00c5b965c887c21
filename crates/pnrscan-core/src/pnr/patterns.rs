//! Regex bank for the recognition strategies.
//!
//! Inputs loosely follow the BCBP text layout but drift per vendor, so these
//! patterns are deliberately tolerant: they describe shapes, and the
//! strategies apply the airport-code membership checks on top.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Carrier/ticket preamble: the start-of-message marker (`M` plus leg
    /// count) followed only by uppercase letters, spaces, and slashes.
    /// Applied to everything before a match.
    pub static ref PREAMBLE: Regex = Regex::new(
        r"^M\d[A-Z /]*$"
    ).unwrap();

    /// Tier 1: a 7-9 letter token bounded by spaces and followed by another
    /// letter token (the dispersal + reference block).
    pub static ref SPACED_BLOCK: Regex = Regex::new(
        r" ([A-Z]{7,9}) [A-Z]"
    ).unwrap();

    /// Tier 2: an unbroken 10-13 letter run (1-4 letter prefix, 6-letter
    /// reference, 3-letter airport code).
    pub static ref ADJACENT_RUN: Regex = Regex::new(
        r"\b([A-Z]{10,13})\b"
    ).unwrap();

    /// Tier 3a: a 6-letter block next to the ETH designator and a flight
    /// number.
    pub static ref ETH_FLIGHT_ANCHOR: Regex = Regex::new(
        r"([A-Z]{6}) ?ETH\d"
    ).unwrap();

    /// Tier 3b: a 6-letter block and a 3-letter code, at most one space
    /// apart.
    pub static ref ROUTE_BLOCK: Regex = Regex::new(
        r"([A-Z]{6}) ?([A-Z]{3})\b"
    ).unwrap();

    /// Tier 4a: a 6-letter block directly before a two-letter airline
    /// designator and a flight number.
    pub static ref FLIGHT_NUMBER_ADJACENT: Regex = Regex::new(
        r"([A-Z]{6})([A-Z]{2})\d"
    ).unwrap();

    /// Tier 4b: a 6-letter block directly before one of the major airports
    /// on the network.
    pub static ref HUB_ADJACENT: Regex = Regex::new(
        r"([A-Z]{6})(FIH|FBM|GOM|FKI|BZV|PNR|LAD|JNB|NBO|ADD|EBB|KGL|LOS|ACC|CAI|CMN|CDG|BRU|AMS|LHR|IST|DXB)"
    ).unwrap();

    /// Tier 4c: any 6-letter window inside an uppercase run.
    pub static ref BARE_RUN: Regex = Regex::new(
        r"[A-Z]{6}"
    ).unwrap();

    /// Corroboration: context starts with a two-letter airline designator
    /// and a digit.
    pub static ref AIRLINE_MARKER_LEAD: Regex = Regex::new(
        r"^ ?[A-Z]{2}\d"
    ).unwrap();

    /// Corroboration: context starts with a 3-letter uppercase block.
    pub static ref TRIGRAPH_LEAD: Regex = Regex::new(
        r"^ ?[A-Z]{3}"
    ).unwrap();
}
