//! Whitespace normalization for raw boarding-pass payloads.

/// Collapse every whitespace run to a single space and trim both ends.
///
/// Upstream decoders hand us text with stray tabs, newlines, and padding;
/// the recognition strategies assume single-space separation. Empty input
/// yields an empty string, never an error.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = false;

    for c in raw.trim().chars() {
        if c.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(c);
            prev_space = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapses_runs() {
        assert_eq!(normalize("M1DOE/JOHN   ABYFMKNE  FIH"), "M1DOE/JOHN ABYFMKNE FIH");
    }

    #[test]
    fn test_mixed_whitespace() {
        assert_eq!(normalize("A\t\tB\r\nC"), "A B C");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize("  \n M1DOE/JOHN \t "), "M1DOE/JOHN");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n  "), "");
    }

    #[test]
    fn test_already_canonical() {
        assert_eq!(normalize("M1DOE/JOHN ABYFMKNE FIH"), "M1DOE/JOHN ABYFMKNE FIH");
    }
}
