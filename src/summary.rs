//! Summary struct - the structured output of a summarization run.

use serde::{Deserialize, Serialize};

/// A sentence chosen for the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSentence {
    /// Position of the sentence in the source document
    pub index: usize,
    /// Verbatim sentence text
    pub text: String,
    /// Sum of the sentence's word weights
    pub score: f64,
}

/// Extractive summary of a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Title of the source, when one is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Where the text came from, e.g. the fetched URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Selected sentences, in the summarizer's configured order
    pub sentences: Vec<RankedSentence>,
}

impl Summary {
    /// Create a new summary
    pub fn new(sentences: Vec<RankedSentence>) -> Self {
        Self {
            title: None,
            source: None,
            sentences,
        }
    }

    /// Attach a source title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach the source location
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sentence texts in summary order
    pub fn texts(&self) -> Vec<String> {
        self.sentences.iter().map(|s| s.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the summary has any content
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
