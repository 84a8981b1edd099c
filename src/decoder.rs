use crate::Vocabulary;
use crate::vocabulary::{END_ID, END_OF_WORD, START_ID};

/// Decodes token IDs back into subword strings and readable text.
///
/// # Examples
///
/// ```
/// use subword_bpe::{Decoder, Trainer};
///
/// let (vocabulary, _) = Trainer::new(0).train(&["hi"]);
/// let decoder = Decoder::new(vocabulary);
///
/// assert_eq!(decoder.decode_tokens(&[1, 3, 4, 5, 2]), vec!["<START>", "h", "i", "</w>", "<END>"]);
/// assert_eq!(decoder.decode(&[1, 3, 4, 5, 2]), "hi");
/// ```
pub struct Decoder {
    vocabulary: Vocabulary,
}

impl Decoder {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Decoder { vocabulary }
    }

    /// Maps each ID to its token string; unknown IDs become `<UNK>`.
    pub fn decode_tokens(&self, token_ids: &[u32]) -> Vec<String> {
        token_ids
            .iter()
            .map(|&token_id| self.vocabulary.reverse(token_id).to_string())
            .collect()
    }

    /// Rebuilds space-separated words from token IDs.
    ///
    /// `<START>` and `<END>` are skipped. A token ending in `</w>` closes the
    /// current word. `<UNK>` is kept literally since the original character
    /// is lost.
    pub fn decode(&self, token_ids: &[u32]) -> String {
        let mut text = String::new();

        for &token_id in token_ids {
            if token_id == START_ID || token_id == END_ID {
                continue;
            }

            let token = self.vocabulary.reverse(token_id);
            match token.strip_suffix(END_OF_WORD) {
                Some(word_end) => {
                    text.push_str(word_end);
                    text.push(' ');
                }
                None => text.push_str(token),
            }
        }

        text.truncate(text.trim_end().len());
        text
    }
}
