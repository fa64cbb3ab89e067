//! Keyword extraction facade

use crate::errors::{Result, TextRankError};
use crate::graph::word::WordGraphBuilder;
use crate::nlp::{Tokenize, WordTokenizer};
use crate::pagerank::{PageRank, RankScores};
use crate::types::{Keyword, KeywordConfig};
use crate::vocab::Vocabulary;
use rustc_hash::FxHashMap;

/// Trained keyword model: the score vector plus the vocabulary needed to
/// translate node indices back into tokens.
#[derive(Debug, Clone)]
struct TrainedKeywords {
    scores: RankScores,
    vocab: Vocabulary,
}

/// Explicit trained-or-not state, checked before any method that needs a
/// score vector.
#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    Untrained,
    Trained(TrainedKeywords),
}

/// Extracts salient keywords from tokenized sentences by ranking a word
/// co-occurrence graph.
///
/// # Examples
///
/// ```
/// use textrank::{KeywordConfig, KeywordSummarizer};
///
/// let sentences = ["the cat sat", "the cat ran"];
/// let mut summarizer = KeywordSummarizer::new()
///     .with_config(KeywordConfig::default().with_min_count(1).with_min_cooccurrence(1));
/// let keywords = summarizer.summarize(&sentences, 2).unwrap();
/// assert_eq!(keywords.len(), 2);
/// ```
pub struct KeywordSummarizer {
    config: KeywordConfig,
    tokenizer: Box<dyn Tokenize>,
    pinned_vocab: Option<Vocabulary>,
    bias: Option<Vec<f64>>,
    state: State,
}

impl Default for KeywordSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordSummarizer {
    /// Create a summarizer with the default config and tokenizer
    pub fn new() -> Self {
        Self {
            config: KeywordConfig::default(),
            tokenizer: Box::new(WordTokenizer::new()),
            pinned_vocab: None,
            bias: None,
            state: State::Untrained,
        }
    }

    /// Builder method: set the configuration
    pub fn with_config(mut self, config: KeywordConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder method: inject a tokenizer
    pub fn with_tokenizer(mut self, tokenizer: impl Tokenize + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Builder method: pin the vocabulary across calls.
    ///
    /// The mapping is used verbatim; frequency filtering is skipped.
    pub fn with_vocabulary(mut self, mapping: FxHashMap<String, u32>) -> Self {
        self.pinned_vocab = Some(Vocabulary::from_mapping(mapping));
        self
    }

    /// Builder method: set a bias vector over vocabulary indices
    pub fn with_bias(mut self, bias: Vec<f64>) -> Self {
        self.bias = Some(bias);
        self
    }

    /// Train on a sentence list, replacing any prior score vector.
    pub fn train<S: AsRef<str>>(&mut self, sentences: &[S]) -> Result<()> {
        self.config.validate()?;

        let tokenized: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.tokenizer.tokenize(s.as_ref()))
            .collect();

        let vocab = match &self.pinned_vocab {
            Some(pinned) => pinned.clone(),
            None => Vocabulary::from_sentences(&tokenized, self.config.min_count)?,
        };

        let graph = WordGraphBuilder::new(self.config.window, self.config.min_cooccurrence)
            .build(&tokenized, &vocab);

        let mut solver = PageRank::new()
            .with_damping(self.config.damping)
            .with_max_iterations(self.config.max_iterations);
        if let Some(bias) = &self.bias {
            solver = solver.with_bias(bias.clone());
        }
        let scores = solver.run(&graph)?;

        self.state = State::Trained(TrainedKeywords { scores, vocab });
        Ok(())
    }

    /// Return the `topk` highest-scoring keywords, sorted by descending
    /// score with index-ascending tie-break. Node indices without a
    /// vocabulary entry (a pinned mapping with index gaps) are skipped.
    ///
    /// Fails with [`TextRankError::Untrained`] before any training call.
    pub fn keywords(&self, topk: usize) -> Result<Vec<Keyword>> {
        let State::Trained(model) = &self.state else {
            return Err(TextRankError::Untrained);
        };

        Ok(model
            .scores
            .top_n(model.scores.len())
            .into_iter()
            .filter_map(|(idx, score)| {
                model.vocab.token(idx as u32).map(|word| Keyword {
                    word: word.to_string(),
                    score,
                })
            })
            .take(topk)
            .collect())
    }

    /// Train on the sentence list and return the top keywords.
    pub fn summarize<S: AsRef<str>>(&mut self, sentences: &[S], topk: usize) -> Result<Vec<Keyword>> {
        self.train(sentences)?;
        self.keywords(topk)
    }

    /// Borrow the trained vocabulary, e.g. to pin it for a later call
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        match &self.state {
            State::Trained(model) => Some(&model.vocab),
            State::Untrained => None,
        }
    }

    /// Borrow the trained score vector
    pub fn scores(&self) -> Option<&RankScores> {
        match &self.state {
            State::Trained(model) => Some(&model.scores),
            State::Untrained => None,
        }
    }
}
