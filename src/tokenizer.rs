//! Sentence and word segmentation.
//!
//! The summarizer only depends on the [`Tokenizer`] trait. The default
//! [`UnicodeTokenizer`] follows the UAX #29 boundary rules from
//! `unicode-segmentation`, then rejoins segments that were cut after a title,
//! an initial or a dotted abbreviation ("Dr. Smith", "J. K. Rowling", "U.S.").

use unicode_segmentation::UnicodeSegmentation;

/// Lowercase abbreviations that do not end a sentence when followed by a dot
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "st", "jr", "sr", "prof", "rev", "gen", "gov", "sen", "rep",
    "lt", "col", "capt", "sgt", "mt", "al", "vs", "inc", "co", "corp", "ltd",
];

/// A sentence of the source document, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Position in document order (0-based)
    pub index: usize,
    /// Byte offset of the first character in the document
    pub start: usize,
    /// Byte offset one past the last character in the document
    pub end: usize,
    /// The sentence text, equal to `document[start..end]`
    pub text: String,
}

/// Splits a document into sentences and sentences into word tokens.
///
/// Implementations must be deterministic. `words` returns lowercase tokens
/// and may include punctuation; stopword filtering happens downstream.
pub trait Tokenizer: Send + Sync {
    /// Ordered, non-overlapping sentences of `text`.
    fn sentences(&self, text: &str) -> Vec<Sentence>;

    /// Ordered lowercase word tokens of a single sentence.
    fn words(&self, sentence: &str) -> Vec<String>;
}

/// Tokenizer based on Unicode sentence and word boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl UnicodeTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for UnicodeTokenizer {
    fn sentences(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut pending: Option<usize> = None;
        let mut segments = text.split_sentence_bound_indices().peekable();

        while let Some((offset, segment)) = segments.next() {
            let span_start = *pending.get_or_insert(offset);
            if segments.peek().is_some() && ends_with_abbreviation(segment) {
                continue;
            }
            pending = None;

            let span = &text[span_start..offset + segment.len()];
            let trimmed = span.trim();
            if trimmed.is_empty() {
                continue;
            }

            let start = span_start + (span.len() - span.trim_start().len());
            let end = start + trimmed.len();

            sentences.push(Sentence {
                index: sentences.len(),
                start,
                end,
                text: trimmed.to_string(),
            });
        }

        sentences
    }

    fn words(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_word_bounds()
            .filter(|w| !w.trim().is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

/// Whether a segment's final period belongs to an abbreviation.
fn ends_with_abbreviation(segment: &str) -> bool {
    let stem = match segment.trim_end().strip_suffix('.') {
        Some(stem) => stem,
        None => return false,
    };
    let word = match stem.split_word_bounds().next_back() {
        Some(word) => word,
        None => return false,
    };

    let mut letters = word.chars().filter(|c| *c != '.');
    let single_letter = word.chars().count() == 1 && word.chars().all(char::is_alphabetic);
    let dotted = word.contains('.') && letters.all(char::is_alphabetic);

    single_letter || dotted || ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_are_verbatim_spans() {
        let text = "  The cat sat.  The cat ran fast!\nDogs bark loudly at cats?  ";
        let sentences = UnicodeTokenizer::new().sentences(text);

        assert_eq!(sentences.len(), 3);
        for (i, s) in sentences.iter().enumerate() {
            assert_eq!(s.index, i);
            assert_eq!(&text[s.start..s.end], s.text);
        }
        assert_eq!(sentences[0].text, "The cat sat.");
        assert_eq!(sentences[1].text, "The cat ran fast!");
        assert_eq!(sentences[2].text, "Dogs bark loudly at cats?");
    }

    #[test]
    fn test_titles_and_initials_do_not_split() {
        let text = "Dr. Smith met Mr. Jones. They talked. J. K. Rowling wrote it. Ask Prof. Lee.";
        let sentences = UnicodeTokenizer::new().sentences(text);

        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Dr. Smith met Mr. Jones.",
                "They talked.",
                "J. K. Rowling wrote it.",
                "Ask Prof. Lee."
            ]
        );
        for s in &sentences {
            assert_eq!(&text[s.start..s.end], s.text);
        }
    }

    #[test]
    fn test_dotted_abbreviations_and_numbers() {
        let tokenizer = UnicodeTokenizer::new();

        let texts: Vec<String> = tokenizer
            .sentences("He moved to the U.S. Then he left.")
            .into_iter()
            .map(|s| s.text)
            .collect();
        assert_eq!(texts, vec!["He moved to the U.S. Then he left."]);

        assert_eq!(tokenizer.sentences("It cost 3.14. Then it rose.").len(), 2);
        assert_eq!(tokenizer.sentences("Smith et al. Found it.").len(), 1);
    }

    #[test]
    fn test_trailing_abbreviation_ends_document() {
        let sentences = UnicodeTokenizer::new().sentences("He met Dr.");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "He met Dr.");
    }

    #[test]
    fn test_sentences_do_not_overlap() {
        let text = "One. Two. Three. Four.";
        let sentences = UnicodeTokenizer::new().sentences(text);

        assert_eq!(sentences.len(), 4);
        for pair in sentences.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_empty_and_blank_text() {
        let tokenizer = UnicodeTokenizer::new();
        assert!(tokenizer.sentences("").is_empty());
        assert!(tokenizer.sentences(" \n\t ").is_empty());
    }

    #[test]
    fn test_words_lowercase_with_punctuation() {
        let words = UnicodeTokenizer::new().words("The Cat sat, quietly.");
        assert_eq!(words, vec!["the", "cat", "sat", ",", "quietly", "."]);
    }

    #[test]
    fn test_words_keep_contractions_together() {
        let words = UnicodeTokenizer::new().words("Don't panic");
        assert_eq!(words, vec!["don't", "panic"]);
    }

    #[test]
    fn test_unicode_words() {
        let words = UnicodeTokenizer::new().words("Ünïcödé Straße");
        assert_eq!(words, vec!["ünïcödé", "straße"]);
    }
}
