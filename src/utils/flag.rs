//! Flag emoji derivation for region codes.

/// Offset between `'A'` and REGIONAL INDICATOR SYMBOL LETTER A (U+1F1E6).
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

/// Returns the flag emoji for a two-letter region code.
///
/// The glyph is the pair of regional indicator symbols matching the code's
/// letters, so `"ID"` yields 🇮🇩. Codes that are not exactly two ASCII letters
/// have no flag.
pub fn flag_glyph(code: &str) -> Option<String> {
    let code = code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    code.chars()
        .map(|c| char::from_u32(c.to_ascii_uppercase() as u32 + REGIONAL_INDICATOR_OFFSET))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_for_indonesia() {
        assert_eq!(flag_glyph("ID").as_deref(), Some("🇮🇩"));
    }

    #[test]
    fn test_flag_is_case_insensitive() {
        assert_eq!(flag_glyph("gb"), flag_glyph("GB"));
    }

    #[test]
    fn test_no_flag_for_invalid_codes() {
        assert!(flag_glyph("").is_none());
        assert!(flag_glyph("USA").is_none());
        assert!(flag_glyph("1A").is_none());
    }
}
