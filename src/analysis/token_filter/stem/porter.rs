//! Porter stemming algorithm implementation.
//!
//! Reduces English words to their stems by rule-based suffix stripping in
//! five steps (plurals and -ed/-ing, -ational → -ate, -icate → -ic,
//! suffix removal, final -e/-ll cleanup).
//!
//! The stemmer is part of the pinned normalization configuration: a model
//! artifact records which stemmer produced its vocabulary, and inference
//! refuses to serve an artifact stemmed differently. Changing any rule
//! here is a breaking change to the artifact format in all but name.
//!
//! # Examples
//!
//! ```
//! use sentira::analysis::token_filter::stem::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if word.len() <= 2 {
            return word.to_lowercase();
        }

        let word = word.to_lowercase();

        let word = step1a(&word);
        let word = step1b(&word);
        let word = step2(&word);
        let word = step3(&word);
        let word = step4(&word);
        step5(&word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

/// Check if the character at `pos` acts as a vowel.
///
/// `y` counts as a vowel when it follows a consonant.
fn is_vowel(word: &str, pos: usize) -> bool {
    let bytes = word.as_bytes();
    if pos >= bytes.len() {
        return false;
    }

    match bytes[pos].to_ascii_lowercase() {
        b'a' | b'e' | b'i' | b'o' | b'u' => true,
        b'y' if pos > 0 => !is_vowel(word, pos - 1),
        _ => false,
    }
}

/// The measure of a word: the number of vowel-consonant patterns.
fn measure(word: &str) -> usize {
    let mut m = 0;
    let n = word.len();
    let mut i = 0;

    // Skip initial consonants
    while i < n && !is_vowel(word, i) {
        i += 1;
    }

    while i < n {
        while i < n && is_vowel(word, i) {
            i += 1;
        }

        if i >= n {
            break;
        }

        m += 1;

        while i < n && !is_vowel(word, i) {
            i += 1;
        }
    }

    m
}

fn ends_with(word: &str, suffix: &str) -> bool {
    word.len() >= suffix.len() && word[word.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

fn contains_vowel(word: &str) -> bool {
    (0..word.len()).any(|i| is_vowel(word, i))
}

fn ends_with_double_consonant(word: &str) -> bool {
    let len = word.len();
    if len < 2 {
        return false;
    }

    let bytes = word.as_bytes();
    bytes[len - 1] == bytes[len - 2] && !is_vowel(word, len - 1)
}

/// Consonant-vowel-consonant ending, where the final consonant is not
/// `w`, `x`, or `y`.
fn ends_cvc(word: &str) -> bool {
    let len = word.len();
    if len < 3 {
        return false;
    }

    !is_vowel(word, len - 3)
        && is_vowel(word, len - 2)
        && !is_vowel(word, len - 1)
        && !matches!(word.as_bytes()[len - 1], b'w' | b'x' | b'y')
}

/// Replace `old_suffix` with `new_suffix` when the remaining stem has at
/// least the given measure.
fn replace_suffix(word: &str, old_suffix: &str, new_suffix: &str, min_measure: usize) -> String {
    if ends_with(word, old_suffix) {
        let stem = &word[..word.len() - old_suffix.len()];
        if measure(stem) >= min_measure {
            return format!("{stem}{new_suffix}");
        }
    }
    word.to_string()
}

fn step1a(word: &str) -> String {
    if ends_with(word, "sses") {
        format!("{}ss", &word[..word.len() - 4])
    } else if ends_with(word, "ies") {
        format!("{}i", &word[..word.len() - 3])
    } else if ends_with(word, "ss") {
        word.to_string()
    } else if ends_with(word, "s") && word.len() > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

fn step1b(word: &str) -> String {
    let original_word = word;
    let word = if ends_with(word, "eed") {
        replace_suffix(word, "eed", "ee", 1)
    } else if ends_with(word, "ed") {
        let stem = &word[..word.len() - 2];
        if contains_vowel(stem) {
            stem.to_string()
        } else {
            word.to_string()
        }
    } else if ends_with(word, "ing") {
        let stem = &word[..word.len() - 3];
        if contains_vowel(stem) {
            stem.to_string()
        } else {
            word.to_string()
        }
    } else {
        word.to_string()
    };

    // Cleanup after -ed/-ing removal
    if word != original_word {
        if ends_with(&word, "at") || ends_with(&word, "bl") || ends_with(&word, "iz") {
            format!("{word}e")
        } else if ends_with_double_consonant(&word)
            && !ends_with(&word, "l")
            && !ends_with(&word, "s")
            && !ends_with(&word, "z")
        {
            word[..word.len() - 1].to_string()
        } else if measure(&word) == 1 && ends_cvc(&word) {
            format!("{word}e")
        } else {
            word
        }
    } else {
        word
    }
}

fn step2(word: &str) -> String {
    const SUFFIXES: &[(&str, &str)] = &[
        ("ational", "ate"),
        ("tional", "tion"),
        ("enci", "ence"),
        ("anci", "ance"),
        ("izer", "ize"),
        ("abli", "able"),
        ("alli", "al"),
        ("entli", "ent"),
        ("eli", "e"),
        ("ousli", "ous"),
        ("ization", "ize"),
        ("ation", "ate"),
        ("ator", "ate"),
        ("alism", "al"),
        ("iveness", "ive"),
        ("fulness", "ful"),
        ("ousness", "ous"),
        ("aliti", "al"),
        ("iviti", "ive"),
        ("biliti", "ble"),
    ];

    for (old_suffix, new_suffix) in SUFFIXES {
        if ends_with(word, old_suffix) {
            return replace_suffix(word, old_suffix, new_suffix, 1);
        }
    }

    word.to_string()
}

fn step3(word: &str) -> String {
    const SUFFIXES: &[(&str, &str)] = &[
        ("icate", "ic"),
        ("ative", ""),
        ("alize", "al"),
        ("iciti", "ic"),
        ("ical", "ic"),
        ("ful", ""),
        ("ness", ""),
    ];

    for (old_suffix, new_suffix) in SUFFIXES {
        if ends_with(word, old_suffix) {
            return replace_suffix(word, old_suffix, new_suffix, 1);
        }
    }

    word.to_string()
}

fn step4(word: &str) -> String {
    const SUFFIXES: &[&str] = &[
        "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion",
        "ou", "ism", "ate", "iti", "ous", "ive", "ize",
    ];

    for suffix in SUFFIXES {
        if ends_with(word, suffix) {
            let stem = &word[..word.len() - suffix.len()];
            if measure(stem) > 1 {
                // -ion only drops after s or t
                if *suffix != "ion" || ends_with(stem, "s") || ends_with(stem, "t") {
                    return stem.to_string();
                }
            }
        }
    }

    word.to_string()
}

fn step5(word: &str) -> String {
    let word = if ends_with(word, "e") {
        let stem = &word[..word.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            stem.to_string()
        } else {
            word.to_string()
        }
    } else {
        word.to_string()
    };

    if ends_with(&word, "ll") && measure(&word) > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("died"), "di");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("disabled"), "disabl");
        assert_eq!(stemmer.stem("measuring"), "measur");
        assert_eq!(stemmer.stem("itemization"), "item");
        assert_eq!(stemmer.stem("sensational"), "sensat");
        assert_eq!(stemmer.stem("traditional"), "tradit");
    }

    #[test]
    fn test_sentiment_words() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("loved"), "love");
        assert_eq!(stemmer.stem("hated"), "hate");
        assert_eq!(stemmer.stem("amazing"), "amaz");
        assert_eq!(stemmer.stem("terrible"), "terribl");
    }

    #[test]
    fn test_short_words_unchanged() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("go"), "go");
        assert_eq!(stemmer.stem("OK"), "ok");
        assert_eq!(stemmer.stem(""), "");
    }

    #[test]
    fn test_porter_measure() {
        assert_eq!(measure("tree"), 0);
        assert_eq!(measure("trees"), 1);
        assert_eq!(measure("trouble"), 1);
        assert_eq!(measure("troubles"), 2);
    }

    #[test]
    fn test_vowel_detection() {
        let word = "trouble";

        assert!(!is_vowel(word, 0)); // t
        assert!(!is_vowel(word, 1)); // r
        assert!(is_vowel(word, 2)); // o
        assert!(is_vowel(word, 3)); // u
        assert!(!is_vowel(word, 4)); // b
        assert!(!is_vowel(word, 5)); // l
        assert!(is_vowel(word, 6)); // e
    }
}
