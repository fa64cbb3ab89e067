//! Key-sentence extraction facade

use crate::errors::{Result, TextRankError};
use crate::graph::sentence::SentenceGraphBuilder;
use crate::nlp::{Tokenize, WordTokenizer};
use crate::pagerank::{PageRank, RankScores};
use crate::similarity::{CosineSimilarity, Similarity, TextRankSimilarity};
use crate::types::{KeySentence, SentenceConfig, SimilarityKind};
use crate::vocab::Vocabulary;
use rustc_hash::FxHashMap;

/// Trained key-sentence model: the score vector plus the vocabulary the
/// similarity graph was filtered through.
#[derive(Debug, Clone)]
struct TrainedSentences {
    scores: RankScores,
    vocab: Vocabulary,
}

/// Explicit trained-or-not state. The trained score vector is indexed
/// positionally by sentence, so it is only meaningful against a sentence
/// list of the same length.
#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    Untrained,
    Trained(TrainedSentences),
}

/// Extracts key sentences by ranking a sentence similarity graph.
///
/// # Examples
///
/// ```
/// use textrank::{KeysentenceSummarizer, SentenceConfig};
///
/// let sentences = [
///     "the cat sat on the mat",
///     "the cat sat on a chair",
///     "rust compiles fast code",
/// ];
/// let mut summarizer = KeysentenceSummarizer::new()
///     .with_config(SentenceConfig::default().with_min_count(1).with_min_sim(0.1));
/// let top = summarizer.summarize(&sentences, 1).unwrap();
/// assert_eq!(top.len(), 1);
/// ```
pub struct KeysentenceSummarizer {
    config: SentenceConfig,
    tokenizer: Box<dyn Tokenize>,
    custom_similarity: Option<Box<dyn Similarity>>,
    pinned_vocab: Option<Vocabulary>,
    bias: Option<Vec<f64>>,
    state: State,
}

impl Default for KeysentenceSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeysentenceSummarizer {
    /// Create a summarizer with the default config and tokenizer
    pub fn new() -> Self {
        Self {
            config: SentenceConfig::default(),
            tokenizer: Box::new(WordTokenizer::new()),
            custom_similarity: None,
            pinned_vocab: None,
            bias: None,
            state: State::Untrained,
        }
    }

    /// Builder method: set the configuration
    pub fn with_config(mut self, config: SentenceConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder method: inject a tokenizer
    pub fn with_tokenizer(mut self, tokenizer: impl Tokenize + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Builder method: inject a similarity function, overriding the
    /// built-in strategy selected by the config
    pub fn with_similarity(mut self, similarity: impl Similarity + 'static) -> Self {
        self.custom_similarity = Some(Box::new(similarity));
        self
    }

    /// Builder method: pin the vocabulary across calls.
    ///
    /// The mapping is used verbatim; frequency filtering is skipped.
    pub fn with_vocabulary(mut self, mapping: FxHashMap<String, u32>) -> Self {
        self.pinned_vocab = Some(Vocabulary::from_mapping(mapping));
        self
    }

    /// Builder method: set a bias vector over sentence indices
    pub fn with_bias(mut self, bias: Vec<f64>) -> Self {
        self.bias = Some(bias);
        self
    }

    /// Train on a sentence list, replacing any prior score vector.
    pub fn train<S: AsRef<str>>(&mut self, sentences: &[S]) -> Result<()> {
        self.config.validate()?;
        if sentences.is_empty() {
            return Err(TextRankError::EmptyGraph);
        }

        let tokenized: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.tokenizer.tokenize(s.as_ref()))
            .collect();
        let vocab = match &self.pinned_vocab {
            Some(pinned) => pinned.clone(),
            None => Vocabulary::from_sentences(&tokenized, self.config.min_count)?,
        };

        // Mirror vocabulary filtering: tokens below min_count contribute
        // nothing to similarity. Duplicates are kept for TF weighting.
        let filtered: Vec<Vec<String>> = tokenized
            .into_iter()
            .map(|tokens| {
                tokens
                    .into_iter()
                    .filter(|t| vocab.index_of(t).is_some())
                    .collect()
            })
            .collect();

        let graph = SentenceGraphBuilder::new(self.config.min_sim)
            .build(&filtered, self.resolve_similarity());

        let mut solver = PageRank::new()
            .with_damping(self.config.damping)
            .with_max_iterations(self.config.max_iterations);
        if let Some(bias) = &self.bias {
            solver = solver.with_bias(bias.clone());
        }
        let scores = solver.run(&graph)?;

        self.state = State::Trained(TrainedSentences { scores, vocab });
        Ok(())
    }

    /// Return the `topk` highest-scoring sentences, sorted by descending
    /// score with index-ascending tie-break.
    ///
    /// Trains first when untrained. When already trained, the supplied
    /// list must have the same length as the training list; otherwise the
    /// positional score vector is meaningless and the call fails with
    /// [`TextRankError::StaleState`].
    pub fn summarize<S: AsRef<str>>(
        &mut self,
        sentences: &[S],
        topk: usize,
    ) -> Result<Vec<KeySentence>> {
        if let State::Trained(model) = &self.state {
            if model.scores.len() != sentences.len() {
                return Err(TextRankError::stale_state(model.scores.len(), sentences.len()));
            }
        } else {
            self.train(sentences)?;
        }

        let State::Trained(model) = &self.state else {
            return Err(TextRankError::Untrained);
        };

        Ok(model
            .scores
            .top_n(topk)
            .into_iter()
            .map(|(index, score)| KeySentence {
                index,
                score,
                sentence: sentences[index].as_ref().to_string(),
            })
            .collect())
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

    fn resolve_similarity(&self) -> &dyn Similarity {
        if let Some(custom) = &self.custom_similarity {
            return custom.as_ref();
        }
        match self.config.similarity {
            SimilarityKind::Cosine => &CosineSimilarity,
            SimilarityKind::TextRank => &TextRankSimilarity,
        }
    }
}
