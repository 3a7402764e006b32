//! Stopword and punctuation filtering.
//!
//! Language lists come from the `stop-words` crate. Every set also contains
//! the ASCII punctuation symbols, and any token without a single alphanumeric
//! character is treated as punctuation.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// ASCII punctuation symbols, always part of a stopword set.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Immutable set of filler words and punctuation.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::for_language("en")
    }
}

impl StopwordSet {
    /// Stopwords for a language code or name, plus punctuation.
    ///
    /// Supported: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl, ar.
    /// Unknown languages fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            other => {
                tracing::warn!("no stopword list for language '{}', using English", other);
                LANGUAGE::English
            }
        };

        Self::from_words(get(lang).iter().map(|s| s.to_string()))
    }

    /// Custom stopword list, plus punctuation.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: FxHashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        set.extend(PUNCTUATION.chars().map(String::from));
        Self { words: set }
    }

    /// Punctuation only, no language words.
    pub fn punctuation_only() -> Self {
        Self::from_words(std::iter::empty::<&str>())
    }

    /// Add extra stopwords while building the set.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Check whether a (lowercase) token is a stopword or punctuation.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word) || is_punctuation(word)
    }

    /// Number of explicit entries, punctuation symbols included
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A token is punctuation when it has no alphanumeric character.
fn is_punctuation(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let set = StopwordSet::for_language("en");

        assert!(set.contains("the"));
        assert!(set.contains("is"));
        assert!(set.contains("a"));
        assert!(!set.contains("machine"));
        assert!(!set.contains("learning"));
    }

    #[test]
    fn test_language_names_and_fallback() {
        let german = StopwordSet::for_language("German");
        assert!(german.contains("und"));
        assert!(german.contains("die"));

        let fallback = StopwordSet::for_language("klingon");
        assert!(fallback.contains("the"));
    }

    #[test]
    fn test_punctuation_always_included() {
        let set = StopwordSet::from_words(["custom"]);

        for symbol in PUNCTUATION.chars() {
            assert!(set.contains(&symbol.to_string()), "missing {:?}", symbol);
        }
        assert!(set.contains("..."));
        assert!(set.contains("\u{2014}"));
        assert!(set.contains("\u{201c}"));
        assert!(!set.contains("the"));
    }

    #[test]
    fn test_custom_words_are_lowercased() {
        let set = StopwordSet::from_words(["Custom", "WORDS"]).with_words(["Extra"]);

        assert!(set.contains("custom"));
        assert!(set.contains("words"));
        assert!(set.contains("extra"));
        assert!(!set.contains("other"));
    }

    #[test]
    fn test_alphanumeric_tokens_are_not_punctuation() {
        let set = StopwordSet::punctuation_only();

        assert!(!set.contains("3"));
        assert!(!set.contains("don't"));
        assert!(!set.contains("e-mail"));
        assert_eq!(set.len(), PUNCTUATION.chars().count());
    }
}
