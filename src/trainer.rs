use indexmap::IndexMap;

use crate::error::{Result, TokenizerError};
use crate::symbols::{merge_symbols, word_to_symbols};
use crate::vocabulary::END_OF_WORD;
use crate::{MergeTable, PreTokenizer, Vocabulary};

pub const DEFAULT_MAX_MERGES: usize = 200;
pub const DEFAULT_MIN_PAIR_FREQUENCY: usize = 2;

/// Symbol sequence of each distinct word, with its occurrence count.
type WordFrequencies = IndexMap<Vec<String>, usize>;
/// Adjacent pair counts, kept in the order each pair was first tallied.
type PairFrequencies = IndexMap<(String, String), usize>;

/// Limits applied by the [`Trainer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainerConfig {
    /// Upper bound on the number of merge rules learned.
    pub max_merges: usize,
    /// A pair seen fewer times than this is not merged and ends training.
    pub min_pair_frequency: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            max_merges: DEFAULT_MAX_MERGES,
            min_pair_frequency: DEFAULT_MIN_PAIR_FREQUENCY,
        }
    }
}

impl TrainerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_pair_frequency == 0 {
            return Err(TokenizerError::InvalidConfig(
                "min_pair_frequency must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Learns a vocabulary and an ordered merge table from a corpus.
///
/// The trainer implements the Byte Pair Encoding training algorithm:
/// 1. Lowercases the corpus and extracts words
/// 2. Registers every distinct character, then the `</w>` marker
/// 3. Represents each word as characters followed by `</w>`
/// 4. Iteratively merges the most frequent adjacent pair
/// 5. Stops at the merge cap, when no pairs remain, or when the best pair is
///    rarer than `min_pair_frequency`
///
/// # Tie-breaking
///
/// Pairs are tallied in the order they are first seen while scanning the
/// words left to right. Among pairs with the highest count, the first one
/// tallied wins.
///
/// # Examples
///
/// ```
/// use subword_bpe::Trainer;
///
/// let trainer = Trainer::new(10);
/// let (vocabulary, merges) = trainer.train(&["hello world", "hello there"]);
///
/// assert!(merges.len() <= 10);
/// assert_eq!(vocabulary.token_to_id("<START>"), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct Trainer {
    config: TrainerConfig,
    pre_tokenizer: PreTokenizer,
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MERGES)
    }
}

impl Trainer {
    /// Creates a trainer that learns at most `max_merges` rules.
    pub fn new(max_merges: usize) -> Self {
        Self {
            config: TrainerConfig {
                max_merges,
                ..TrainerConfig::default()
            },
            pre_tokenizer: PreTokenizer::default(),
        }
    }

    /// Creates a trainer from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::InvalidConfig`] if the configuration is rejected
    /// by [`TrainerConfig::validate`].
    pub fn from_config(config: TrainerConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            pre_tokenizer: PreTokenizer::default(),
        })
    }

    pub fn with_pre_tokenizer(mut self, pre_tokenizer: PreTokenizer) -> Self {
        self.pre_tokenizer = pre_tokenizer;
        self
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn pre_tokenizer(&self) -> &PreTokenizer {
        &self.pre_tokenizer
    }

    /// Trains on `training_texts` and returns the learned vocabulary and merges.
    ///
    /// Never fails. A corpus without any word characters yields a vocabulary
    /// holding only the reserved tokens and an empty merge table.
    pub fn train(&self, training_texts: &[&str]) -> (Vocabulary, MergeTable) {
        let words = self.extract_words(training_texts);
        let mut vocabulary = Self::build_initial_vocabulary(&words);
        let mut word_freqs = Self::build_word_frequencies(&words);
        let mut merges = MergeTable::new();

        log::info!(
            "training on {} words ({} distinct), initial vocabulary of {} tokens",
            words.len(),
            word_freqs.len(),
            vocabulary.len()
        );

        for _ in 0..self.config.max_merges {
            let pair_freqs = Self::compute_pair_frequencies(&word_freqs);

            let Some((best_pair, count)) = Self::find_best_pair(&pair_freqs) else {
                log::debug!("no adjacent pairs left to merge");
                break;
            };

            if count < self.config.min_pair_frequency {
                log::debug!(
                    "best pair ({:?}, {:?}) occurs {} time(s), below minimum {}",
                    best_pair.0,
                    best_pair.1,
                    count,
                    self.config.min_pair_frequency
                );
                break;
            }

            let rule = merges.push(&best_pair.0, &best_pair.1).clone();
            let id = vocabulary.register(&rule.merged);

            log::debug!(
                "merge #{}: ({:?}, {:?}) -> {:?} id={} count={}",
                merges.len(),
                rule.left,
                rule.right,
                rule.merged,
                id,
                count
            );

            word_freqs = Self::apply_merge(&word_freqs, &best_pair, &rule.merged);
        }

        log::info!(
            "training complete: {} merges learned, vocabulary of {} tokens",
            merges.len(),
            vocabulary.len()
        );

        (vocabulary, merges)
    }

    fn extract_words(&self, training_texts: &[&str]) -> Vec<String> {
        training_texts
            .iter()
            .flat_map(|text| self.pre_tokenizer.pre_tokenize(text))
            .collect()
    }

    fn build_initial_vocabulary(words: &[String]) -> Vocabulary {
        let mut vocabulary = Vocabulary::new();

        for ch in words.iter().flat_map(|word| word.chars()) {
            vocabulary.register(&ch.to_string());
        }

        if !words.is_empty() {
            vocabulary.register(END_OF_WORD);
        }

        vocabulary
    }

    fn build_word_frequencies(words: &[String]) -> WordFrequencies {
        words
            .iter()
            .map(|word| word_to_symbols(word))
            .fold(IndexMap::new(), |mut word_freqs, symbols| {
                *word_freqs.entry(symbols).or_insert(0) += 1;
                word_freqs
            })
    }

    fn compute_pair_frequencies(word_freqs: &WordFrequencies) -> PairFrequencies {
        let mut pair_freqs = IndexMap::new();

        for (symbols, &count) in word_freqs.iter() {
            for pair in symbols.windows(2) {
                *pair_freqs
                    .entry((pair[0].clone(), pair[1].clone()))
                    .or_insert(0) += count;
            }
        }

        pair_freqs
    }

    fn find_best_pair(pair_freqs: &PairFrequencies) -> Option<((String, String), usize)> {
        let mut best: Option<(&(String, String), usize)> = None;

        for (pair, &count) in pair_freqs.iter() {
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((pair, count));
            }
        }

        best.map(|(pair, count)| (pair.clone(), count))
    }

    fn apply_merge(
        word_freqs: &WordFrequencies,
        pair: &(String, String),
        merged_token: &str,
    ) -> WordFrequencies {
        word_freqs
            .iter()
            .map(|(symbols, &count)| {
                let merged_symbols = merge_symbols(symbols, &pair.0, &pair.1, merged_token);
                (merged_symbols, count)
            })
            .fold(IndexMap::new(), |mut merged_freqs, (symbols, count)| {
                *merged_freqs.entry(symbols).or_insert(0) += count;
                merged_freqs
            })
    }
}
