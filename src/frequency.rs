//! Normalized word frequencies with cutoff filtering.

use crate::stopwords::StopwordSet;
use crate::summarizer::SummarizerError;
use rustc_hash::FxHashMap;

pub const DEFAULT_MIN_CUT: f64 = 0.1;
pub const DEFAULT_MAX_CUT: f64 = 0.9;

/// Normalized-frequency bounds. Words with weight `<= min` or `>= max` are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutoffs {
    min: f64,
    max: f64,
}

impl Default for Cutoffs {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_CUT,
            max: DEFAULT_MAX_CUT,
        }
    }
}

impl Cutoffs {
    /// Validate and create cutoff bounds. Requires `0 <= min < max <= 1`.
    pub fn new(min: f64, max: f64) -> Result<Self, SummarizerError> {
        let unit = 0.0..=1.0;
        if !unit.contains(&min) || !unit.contains(&max) || min >= max {
            return Err(SummarizerError::InvalidConfiguration { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether a normalized weight lies strictly inside the bounds
    pub fn admits(&self, weight: f64) -> bool {
        weight > self.min && weight < self.max
    }
}

/// Content word -> normalized weight, for a single document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyMap {
    weights: FxHashMap<String, f64>,
}

impl FrequencyMap {
    /// Weight of a word, zero when it did not survive filtering.
    pub fn weight(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(w, &v)| (w.as_str(), v))
    }

    /// Entries sorted by weight descending, then alphabetically.
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Build the frequency map for a document's tokenized sentences.
///
/// Raw counts of non-stopword tokens are divided by the largest count, then
/// every word outside the open interval `(min, max)` is removed. The most
/// frequent word has weight 1.0 and so is always removed.
pub fn compute_frequencies<S>(
    sentences: &[S],
    stopwords: &StopwordSet,
    cutoffs: Cutoffs,
) -> Result<FrequencyMap, SummarizerError>
where
    S: AsRef<[String]>,
{
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for sentence in sentences {
        for word in sentence.as_ref() {
            if stopwords.contains(word) {
                continue;
            }
            *counts.entry(word.clone()).or_insert(0) += 1;
        }
    }

    let max_n = match counts.values().copied().max() {
        Some(max_n) => max_n as f64,
        None => return Err(SummarizerError::EmptyDocument),
    };

    let weights: FxHashMap<String, f64> = counts
        .into_iter()
        .map(|(word, count)| (word, count as f64 / max_n))
        .filter(|&(_, weight)| cutoffs.admits(weight))
        .collect();

    tracing::debug!(
        max_count = max_n,
        surviving = weights.len(),
        "computed word frequencies"
    );

    Ok(FrequencyMap { weights })
}
