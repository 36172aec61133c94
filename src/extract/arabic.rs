//! Arabic run matching and tashkeel removal.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Arabic letters, Quranic annotation signs and vocalization marks.
    static ref ARABIC_RUN: Regex = Regex::new(
        r"[\x{0600}-\x{06FF}\x{0610}-\x{061A}\x{064B}-\x{065F}\x{0670}\x{06D6}-\x{06ED}]+"
    )
    .unwrap();
}

/// Maximal Arabic runs of `text`, in order of appearance.
pub fn arabic_runs(text: &str) -> impl Iterator<Item = &str> {
    ARABIC_RUN.find_iter(text).map(|m| m.as_str())
}

/// Returns `true` for code points removed by [strip_diacritics]:
/// Quranic annotation signs, tashkeel, extended Quranic marks and the superscript alef.
pub fn is_diacritic(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}'
        | '\u{064B}'..='\u{0652}'
        | '\u{06D6}'..='\u{06ED}'
        | '\u{0670}')
}

pub fn strip_diacritics(word: &str) -> String {
    word.chars().filter(|c| !is_diacritic(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_split_on_non_arabic() {
        let text = "مرحبا text كتاب, 123 قلم";
        let runs: Vec<&str> = arabic_runs(text).collect();
        assert_eq!(runs, vec!["مرحبا", "كتاب", "قلم"]);
    }

    #[test]
    fn runs_keep_tashkeel() {
        let runs: Vec<&str> = arabic_runs("(كِتَابٌ)").collect();
        assert_eq!(runs, vec!["كِتَابٌ"]);
    }

    #[test]
    fn no_runs_in_latin() {
        assert_eq!(arabic_runs("plain ascii, café").count(), 0);
    }

    #[test]
    fn strip_tashkeel() {
        assert_eq!(strip_diacritics("كِتَابٌ"), "كتاب");
        assert_eq!(strip_diacritics("مُحَمَّد"), "محمد");
    }

    #[test]
    fn strip_quranic_marks() {
        // small high lam-alef (U+06D9) and superscript alef (U+0670)
        assert_eq!(strip_diacritics("هٰذَا\u{06D9}"), "هذا");
        // arabic sign sallallahou (U+0610)
        assert_eq!(strip_diacritics("\u{0610}ص"), "ص");
    }

    #[test]
    fn strip_keeps_letters_outside_set() {
        // U+0653..U+065F are matched by the run pattern but not stripped
        assert_eq!(strip_diacritics("ا\u{0653}"), "ا\u{0653}");
        assert_eq!(strip_diacritics("abc"), "abc");
    }

    #[test]
    fn strip_is_idempotent() {
        for word in ["كِتَابٌ", "بِسْمِ", "ٱللَّهِ", "الرَّحْمَٰنِ", "", "abc"] {
            let once = strip_diacritics(word);
            assert_eq!(strip_diacritics(&once), once);
        }
    }

    #[test]
    fn stripped_chars_are_no_diacritics() {
        let stripped = strip_diacritics("ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ");
        assert!(!stripped.chars().any(is_diacritic));
    }
}
