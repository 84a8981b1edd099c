use regex::Regex;

use crate::error::Result;

/// Default word pattern: maximal runs of ASCII letters, digits and underscore.
pub const WORD_PATTERN: &str = r"[a-z0-9_]+";

/// Splits text into the words that BPE operates on.
///
/// Text is lowercased first, then every maximal match of the word pattern is
/// kept. Punctuation, whitespace and any other characters are dropped and
/// never reach the model.
///
/// # Examples
///
/// ```
/// use subword_bpe::PreTokenizer;
///
/// let pre_tokenizer = PreTokenizer::new();
/// let words = pre_tokenizer.pre_tokenize("Hello, World!");
///
/// assert_eq!(words, vec!["hello", "world"]);
/// ```
#[derive(Clone, Debug)]
pub struct PreTokenizer {
    pattern: Regex,
}

impl Default for PreTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PreTokenizer {
    pub fn new() -> Self {
        Self::with_pattern(WORD_PATTERN).expect("built-in word pattern compiles")
    }

    /// Creates a pre-tokenizer that extracts words with a custom regex.
    ///
    /// The pattern is matched against lowercased text.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::Regex`](crate::TokenizerError::Regex) if the
    /// pattern does not compile.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)?;

        Ok(PreTokenizer { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Lowercases `text` and returns its words in order of appearance.
    pub fn pre_tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
