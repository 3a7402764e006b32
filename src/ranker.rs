//! Sentence scoring and top-N selection.

use crate::frequency::FrequencyMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order in which selected sentences are returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceOrder {
    /// Ascending sentence position, as they appear in the source
    #[default]
    Document,
    /// Highest score first
    Score,
}

impl FromStr for SentenceOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "document" | "doc" => Ok(Self::Document),
            "score" | "rank" => Ok(Self::Score),
            other => Err(format!(
                "unknown sentence order '{}', expected 'document' or 'score'",
                other
            )),
        }
    }
}

impl fmt::Display for SentenceOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => f.write_str("document"),
            Self::Score => f.write_str("score"),
        }
    }
}

/// Score every sentence as the sum of its words' weights.
///
/// Words missing from the map count as zero, so a sentence may score 0.0.
pub fn score_sentences<S>(sentences: &[S], freq: &FrequencyMap) -> Vec<f64>
where
    S: AsRef<[String]>,
{
    sentences
        .iter()
        .map(|words| words.as_ref().iter().map(|w| freq.weight(w)).sum())
        .collect()
}

/// Indices of the `n` best-scoring sentences.
///
/// Ranking is by score descending; equal scores go to the lower index.
/// `n` larger than `scores.len()` returns every index.
pub fn select_top(scores: &[f64], n: usize, order: SentenceOrder) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    ranked.truncate(n);

    if order == SentenceOrder::Document {
        ranked.sort_unstable();
    }
    ranked
}
