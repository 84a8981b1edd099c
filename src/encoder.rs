use crate::symbols::word_to_symbols;
use crate::vocabulary::{END_ID, START_ID};
use crate::{MergeTable, PreTokenizer, Vocabulary};

/// An encoded token paired with its string form, for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenDetail {
    pub id: u32,
    pub token: String,
}

/// Converts text into token IDs using a trained vocabulary and merge table.
///
/// Every sequence is bracketed by `<START>` and `<END>`. Symbols missing from
/// the vocabulary encode as `<UNK>`, so encoding never fails.
pub struct Encoder {
    merges: MergeTable,
    pre_tokenizer: PreTokenizer,
    vocabulary: Vocabulary,
}

impl Encoder {
    pub fn new(merges: MergeTable, pre_tokenizer: PreTokenizer, vocabulary: Vocabulary) -> Self {
        Encoder {
            merges,
            pre_tokenizer,
            vocabulary,
        }
    }

    /// Encodes `text` into `<START>`, one ID per final symbol, then `<END>`.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        let mut ids = vec![START_ID];
        ids.extend(
            self.tokenize(text)
                .iter()
                .map(|symbol| self.vocabulary.lookup(symbol)),
        );
        ids.push(END_ID);

        log::trace!("encoded {:?} into {} tokens", text, ids.len());

        ids
    }

    /// Like [`encode`](Self::encode), but pairs each ID with its token string.
    pub fn encode_with_details(&self, text: &str) -> Vec<TokenDetail> {
        self.encode(text)
            .into_iter()
            .map(|id| TokenDetail {
                id,
                token: self.vocabulary.reverse(id).to_string(),
            })
            .collect()
    }

    /// Returns the subword symbols of `text` without the control tokens.
    ///
    /// Symbols are returned as produced by the merge rules, so a character
    /// that was never seen in training is kept as-is here even though it
    /// encodes as `<UNK>`.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.pre_tokenizer
            .pre_tokenize(text)
            .iter()
            .flat_map(|word| self.merges.apply(word_to_symbols(word)))
            .collect()
    }

    /// Returns a reference to the vocabulary used by this encoder.
    ///
    /// This is useful for decoding token IDs back to text.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn merges(&self) -> &MergeTable {
        &self.merges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Trainer;
    use crate::test_utils::to_merges;

    fn trained_encoder() -> Encoder {
        let trainer = Trainer::default();
        let (vocabulary, merges) = trainer.train(&["cat chases dog dog chases cat"]);

        Encoder::new(merges, PreTokenizer::new(), vocabulary)
    }

    #[test]
    fn encode_empty_text() {
        let encoder = trained_encoder();

        let ids = encoder.encode("");

        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn encode_punctuation_only() {
        let encoder = trained_encoder();

        let ids = encoder.encode(" ,.!? ");

        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn encode_known_word_fully_merged() {
        let encoder = trained_encoder();

        let ids = encoder.encode("cat");

        assert_eq!(ids, vec![1, 15, 2]);
    }

    #[test]
    fn encode_is_case_insensitive() {
        let encoder = trained_encoder();

        let ids = encoder.encode("CAT!");

        assert_eq!(ids, vec![1, 15, 2]);
    }

    #[test]
    fn encode_multiple_words() {
        let encoder = trained_encoder();

        let ids = encoder.encode("Dog, cat.");

        assert_eq!(ids, vec![1, 24, 15, 2]);
    }

    #[test]
    fn encode_unseen_suffix_falls_back_to_characters() {
        let encoder = trained_encoder();

        let ids = encoder.encode("cats");

        // "cat" + "s" + "</w>"
        assert_eq!(ids, vec![1, 14, 7, 12, 2]);
    }

    #[test]
    fn encode_unseen_character_maps_to_unk() {
        let encoder = trained_encoder();

        let ids = encoder.encode("cat9");

        assert_eq!(ids, vec![1, 14, 0, 12, 2]);
    }

    #[test]
    fn encode_without_training_is_all_unk() {
        let encoder = Encoder::new(MergeTable::new(), PreTokenizer::new(), Vocabulary::new());

        let ids = encoder.encode("ab");

        assert_eq!(ids, vec![1, 0, 0, 0, 2]);
    }

    #[test]
    fn encode_replays_rules_in_training_order() {
        let mut vocabulary = Vocabulary::new();
        for token in ["a", "b", "c", "</w>", "abc", "ab"] {
            vocabulary.register(token);
        }
        let merges = to_merges(&[("ab", "c"), ("a", "b")]);
        let encoder = Encoder::new(merges, PreTokenizer::new(), vocabulary);

        let ids = encoder.encode("abc");

        // ("ab", "c") runs before "ab" exists, so "abc" is never formed.
        assert_eq!(ids, vec![1, 8, 5, 6, 2]);
    }

    #[test]
    fn encode_with_details_pairs_ids_and_tokens() {
        let encoder = trained_encoder();

        let details = encoder.encode_with_details("cat");

        assert_eq!(
            details,
            vec![
                TokenDetail {
                    id: 1,
                    token: "<START>".to_string()
                },
                TokenDetail {
                    id: 15,
                    token: "cat</w>".to_string()
                },
                TokenDetail {
                    id: 2,
                    token: "<END>".to_string()
                },
            ]
        );
    }

    #[test]
    fn encode_with_details_shows_unk() {
        let encoder = trained_encoder();

        let tokens: Vec<String> = encoder
            .encode_with_details("cat9")
            .into_iter()
            .map(|detail| detail.token)
            .collect();

        assert_eq!(tokens, vec!["<START>", "cat", "<UNK>", "</w>", "<END>"]);
    }

    #[test]
    fn tokenize_returns_subwords() {
        let encoder = trained_encoder();

        let symbols = encoder.tokenize("cats chases");

        assert_eq!(symbols, vec!["cat", "s", "</w>", "chases</w>"]);
    }
}
