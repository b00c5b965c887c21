//! Immutable IATA airport-code reference set.
//!
//! Every strategy uses this set as a disambiguation filter: a value that is
//! (or decomposes into) known airport codes is never an acceptable booking
//! reference. The set is built once at process start, never mutates, and is
//! shared by plain reference into every call.

use std::collections::HashSet;

use crate::error::ReferenceDataError;

/// Default reference feed: the Congolese domestic network this recognizer
/// primarily targets, the African hubs its carriers connect through, and the
/// major intercontinental destinations seen on their boarding passes.
const DEFAULT_CODES: &[&str] = &[
    // DR Congo
    "FIH", "FBM", "GOM", "FKI", "KGA", "MJM", "KND", "BKY", "MDK", "GMA",
    "LIQ", "BDT", "KWZ", "FMI", "BUX", "IRP", "BNB", "INO", "TSH", "LJA",
    "KOO", "BSU", "KEC", "NLO",
    // Central and Southern Africa
    "BZV", "PNR", "LAD", "LUN", "NLA", "HRE", "BUQ", "LLW", "BLZ", "JNB",
    "CPT", "DUR", "GBE", "WDH", "MPM", "BEW", "MSU", "TNR", "SEZ", "MRU",
    "RUN", "LBV", "POG", "MVB", "SSG", "TMS", "BGF", "NDJ", "DLA", "NSI",
    // East Africa
    "NBO", "MBA", "EBB", "KGL", "BJM", "DAR", "ZNZ", "JRO", "ADD", "ASM",
    "JIB", "MGQ", "HGA",
    // West Africa
    "LOS", "ABV", "PHC", "ACC", "ABJ", "DKR", "DSS", "BKO", "OUA", "NIM",
    "CKY", "FNA", "ROB", "LFW", "COO", "BJL", "OXB", "RAI", "SID",
    // North Africa
    "CAI", "ALG", "TUN", "CMN", "RBA", "TIP", "KRT",
    // Europe
    "CDG", "ORY", "BRU", "AMS", "FRA", "MUC", "ZRH", "GVA", "LHR", "LGW",
    "MAN", "MAD", "BCN", "LIS", "OPO", "FCO", "MXP", "VIE", "ATH", "IST",
    "SAW", "CPH", "OSL", "ARN", "HEL", "WAW", "PRG", "BUD", "DUB", "BRS",
    // Middle East and Asia
    "DXB", "AUH", "SHJ", "DOH", "JED", "RUH", "AMM", "BEY", "TLV", "BOM",
    "DEL", "MAA", "CMB", "PEK", "PVG", "CAN", "HKG", "NRT", "HND", "ICN",
    "SIN", "KUL", "BKK", "CGK", "MNL",
    // Americas
    "JFK", "EWR", "IAD", "ATL", "ORD", "LAX", "SFO", "MIA", "IAH", "BOS",
    "YUL", "YYZ", "YVR", "MEX", "CUN", "PTY", "BOG", "LIM", "SCL", "EZE",
    "GRU", "GIG", "HAV",
];

/// Immutable set of known 3-letter airport codes.
///
/// Read-only for the lifetime of the process, so concurrent readers need no
/// synchronization.
#[derive(Debug, Clone)]
pub struct AirportCodes {
    codes: HashSet<String>,
}

impl AirportCodes {
    /// Build a set from a custom feed, validating the shape of each code.
    pub fn from_feed<I, S>(feed: I) -> Result<Self, ReferenceDataError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut codes = HashSet::new();

        for code in feed {
            let code = code.as_ref();
            if code.len() != 3 {
                return Err(ReferenceDataError::BadLength(code.to_string()));
            }
            if !code.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(ReferenceDataError::BadCharset(code.to_string()));
            }
            codes.insert(code.to_string());
        }

        if codes.is_empty() {
            return Err(ReferenceDataError::EmptyFeed);
        }

        Ok(Self { codes })
    }

    /// Exact membership test.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// True when a 6-letter value splits into two known codes, an
    /// origin-destination adjacency rather than a booking reference
    /// (e.g. `FIHGOM`).
    pub fn is_route_pair(&self, value: &str) -> bool {
        value.len() == 6
            && value.is_char_boundary(3)
            && self.contains(&value[..3])
            && self.contains(&value[3..])
    }

    /// Number of known codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for AirportCodes {
    fn default() -> Self {
        // The embedded list is static and pre-validated.
        Self {
            codes: DEFAULT_CODES.iter().map(|c| c.to_string()).collect(),
        }
    }
}
