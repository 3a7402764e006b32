//! Frequency-based extractive summarizer.
//!
//! A [`Summarizer`] only holds configuration: the cutoff bounds, the stopword
//! set, the output order and the tokenizer. All per-document state is built
//! inside each call, so one instance can be shared between threads.

use crate::frequency::{compute_frequencies, Cutoffs, FrequencyMap};
use crate::ranker::{score_sentences, select_top, SentenceOrder};
use crate::stopwords::StopwordSet;
use crate::summary::{RankedSentence, Summary};
use crate::tokenizer::{Sentence, Tokenizer, UnicodeTokenizer};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizerError {
    #[error("invalid cutoffs: need 0 <= min_cut < max_cut <= 1, got min_cut={min}, max_cut={max}")]
    InvalidConfiguration { min: f64, max: f64 },
    #[error("cannot select {requested} sentence(s): document has {available}")]
    InvalidSentenceCount { requested: usize, available: usize },
    #[error("document has no content words after stopword filtering")]
    EmptyDocument,
}

/// Summarizes text by picking the sentences with the heaviest content words.
#[derive(Clone)]
pub struct Summarizer {
    cutoffs: Cutoffs,
    stopwords: Arc<StopwordSet>,
    order: SentenceOrder,
    tokenizer: Arc<dyn Tokenizer>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::with_cutoffs(Cutoffs::default())
    }
}

impl fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Summarizer")
            .field("cutoffs", &self.cutoffs)
            .field("stopwords", &self.stopwords.len())
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

/// A document split into sentences and their word tokens.
struct Tokenized {
    sentences: Vec<Sentence>,
    words: Vec<Vec<String>>,
}

impl Summarizer {
    /// Create a summarizer with English stopwords and the given cutoffs.
    pub fn new(min_cut: f64, max_cut: f64) -> Result<Self, SummarizerError> {
        Ok(Self::with_cutoffs(Cutoffs::new(min_cut, max_cut)?))
    }

    /// Create a summarizer from already validated cutoffs
    pub fn with_cutoffs(cutoffs: Cutoffs) -> Self {
        Self {
            cutoffs,
            stopwords: Arc::new(StopwordSet::default()),
            order: SentenceOrder::default(),
            tokenizer: Arc::new(UnicodeTokenizer::new()),
        }
    }

    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = Arc::new(stopwords);
        self
    }

    pub fn with_order(mut self, order: SentenceOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Arc::new(tokenizer);
        self
    }

    pub fn cutoffs(&self) -> Cutoffs {
        self.cutoffs
    }

    pub fn order(&self) -> SentenceOrder {
        self.order
    }

    /// Return the `n` most important sentences of `text`, verbatim.
    ///
    /// # Errors
    /// * [`SummarizerError::EmptyDocument`] if the text has no sentences or no
    ///   content words
    /// * [`SummarizerError::InvalidSentenceCount`] if `n` is zero or larger
    ///   than the number of sentences
    pub fn summarize(&self, text: &str, n: usize) -> Result<Vec<String>, SummarizerError> {
        Ok(self.summarize_detailed(text, n)?.texts())
    }

    /// Like [`Summarizer::summarize`], keeping sentence positions and scores.
    pub fn summarize_detailed(&self, text: &str, n: usize) -> Result<Summary, SummarizerError> {
        let doc = self.tokenize(text)?;

        let available = doc.sentences.len();
        if n == 0 || n > available {
            return Err(SummarizerError::InvalidSentenceCount {
                requested: n,
                available,
            });
        }

        let freq = compute_frequencies(&doc.words, &self.stopwords, self.cutoffs)?;
        let scores = score_sentences(&doc.words, &freq);
        let selected = select_top(&scores, n, self.order);

        tracing::debug!(
            sentences = available,
            requested = n,
            order = %self.order,
            "selected summary sentences"
        );

        let mut sentences = doc.sentences;
        let ranked = selected
            .into_iter()
            .map(|i| RankedSentence {
                index: i,
                text: std::mem::take(&mut sentences[i].text),
                score: scores[i],
            })
            .collect();

        Ok(Summary::new(ranked))
    }

    /// The filtered frequency map this summarizer builds for `text`.
    pub fn frequencies(&self, text: &str) -> Result<FrequencyMap, SummarizerError> {
        let doc = self.tokenize(text)?;
        compute_frequencies(&doc.words, &self.stopwords, self.cutoffs)
    }

    /// Number of sentences the tokenizer finds in `text`.
    pub fn sentence_count(&self, text: &str) -> usize {
        self.tokenizer.sentences(text).len()
    }

    fn tokenize(&self, text: &str) -> Result<Tokenized, SummarizerError> {
        let sentences = self.tokenizer.sentences(text);
        if sentences.is_empty() {
            return Err(SummarizerError::EmptyDocument);
        }

        let words = sentences
            .iter()
            .map(|s| self.tokenizer.words(&s.text))
            .collect();

        tracing::debug!(sentences = sentences.len(), "tokenized document");
        Ok(Tokenized { sentences, words })
    }
}
