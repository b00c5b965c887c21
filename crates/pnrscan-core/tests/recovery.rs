//! Generated-load regression guard: payloads with a planted reference in
//! the dominant dispersal-2/3 layout must be recovered almost always.

use pnrscan_core::{PnrExtractor, PnrResult};

/// Small deterministic generator so the corpus is stable across runs.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn range(&mut self, lo: usize, hi: usize) -> usize {
        lo + (self.next() as usize) % (hi - lo + 1)
    }

    fn letters(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| (b'A' + (self.next() % 26) as u8) as char)
            .collect()
    }
}

const ROUTES: [&str; 8] = ["FIH", "FBM", "GOM", "NBO", "ADD", "JNB", "CDG", "BRU"];

/// One boarding-pass-like payload with a known reference planted behind a
/// 2- or 3-letter dispersal fragment.
fn planted_payload(rng: &mut Lcg) -> (String, String) {
    let surname_len = rng.range(3, 8);
    let surname = rng.letters(surname_len);
    let given_len = rng.range(3, 7);
    let given = rng.letters(given_len);

    let dispersal_len = rng.range(2, 3);
    let dispersal = rng.letters(dispersal_len);
    let reference = rng.letters(6);

    let origin = ROUTES[rng.range(0, ROUTES.len() - 1)];
    let dest = ROUTES[rng.range(0, ROUTES.len() - 1)];
    let flight = rng.range(100, 9999);
    let seat_row = rng.range(1, 42);

    let payload = format!(
        "M1{surname}/{given} {dispersal}{reference} {origin} {dest} ET{flight} {seat_row}A"
    );

    (payload, reference)
}

#[test]
fn recovers_planted_references_at_scale() {
    let extractor = PnrExtractor::new();
    let mut rng = Lcg(0x5eed_cafe);

    let total = 10_000;
    let mut recovered = 0;

    for _ in 0..total {
        let (payload, reference) = planted_payload(&mut rng);
        if extractor.extract(&payload) == PnrResult::Found(reference.clone()) {
            recovered += 1;
        }
    }

    let rate = recovered as f64 / total as f64;
    assert!(
        rate >= 0.95,
        "recovered {recovered}/{total} ({:.1}%)",
        rate * 100.0
    );
}

#[test]
fn noise_payloads_never_panic() {
    let extractor = PnrExtractor::new();
    let mut rng = Lcg(0xdead_beef);

    for _ in 0..1_000 {
        let len = rng.range(0, 60);
        let mut noise = String::new();
        for _ in 0..len {
            let c = match rng.range(0, 5) {
                0 => ' ',
                1 => char::from(b'0' + (rng.next() % 10) as u8),
                2 => '/',
                _ => char::from(b'A' + (rng.next() % 26) as u8),
            };
            noise.push(c);
        }
        // Any outcome is fine; the engine must simply not fail.
        let _ = extractor.extract(&noise);
    }
}
