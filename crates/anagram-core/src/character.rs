// Simple case folding
//
// Rust's to_lowercase produces an iterator because some characters map to
// several characters. Keys need a one-to-one mapping so that folding never
// changes the character count of a word, so only the first character of
// each mapping is taken.

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions (e.g. `İ`),
/// returns only the first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Lowercase every character of `word` with [`simple_lower`].
///
/// The result always has the same number of characters as the input.
pub fn fold_lowercase(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_ascii() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('z'), 'z');
        assert_eq!(simple_lower('1'), '1');
    }

    #[test]
    fn lower_non_ascii() {
        assert_eq!(simple_lower('\u{00C4}'), '\u{00E4}'); // Ä -> ä
        assert_eq!(simple_lower('\u{0416}'), '\u{0436}'); // Ж -> ж
    }

    #[test]
    fn lower_multi_char_expansion_takes_first() {
        // U+0130 LATIN CAPITAL LETTER I WITH DOT ABOVE lowercases to "i\u{0307}"
        assert_eq!(simple_lower('\u{0130}'), 'i');
    }

    #[test]
    fn fold_keeps_char_count() {
        let word = "\u{0130}stanbul";
        assert_eq!(fold_lowercase(word).chars().count(), word.chars().count());
    }

    #[test]
    fn fold_mixed_case() {
        assert_eq!(fold_lowercase("RaT"), "rat");
        assert_eq!(fold_lowercase(""), "");
    }
}
