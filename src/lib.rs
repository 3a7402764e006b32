//! # Precis
//!
//! Extractive summaries from word frequencies, for plain text and webpages.
//!
//! ## How it works
//!
//! - **Tokenize**: split text into sentences and lowercase word tokens
//! - **Weigh**: count content words, normalize by the top count, drop words
//!   outside the `(min_cut, max_cut)` band
//! - **Rank**: score each sentence by its word weights and keep the best `n`
//!
//! ```no_run
//! use precis::Summarizer;
//!
//! let summarizer = Summarizer::new(0.1, 0.9)?;
//! let summary = summarizer.summarize("Some long article text. With sentences.", 1)?;
//! # Ok::<(), precis::SummarizerError>(())
//! ```

pub mod config;
pub mod frequency;
pub mod ranker;
pub mod scraper;
pub mod stopwords;
pub mod summarizer;
pub mod summary;
pub mod tokenizer;

pub use config::Config;
pub use frequency::{Cutoffs, FrequencyMap};
pub use ranker::SentenceOrder;
pub use stopwords::StopwordSet;
pub use summarizer::{Summarizer, SummarizerError};
pub use summary::{RankedSentence, Summary};
pub use tokenizer::{Sentence, Tokenizer, UnicodeTokenizer};
