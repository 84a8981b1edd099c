use crate::{Decoder, Encoder, MergeTable, PreTokenizer, TokenDetail, Trainer, Vocabulary};

/// A trained tokenizer: vocabulary and merge table bundled with the encoder
/// and decoder that read them.
///
/// The model is immutable once built, so a single instance can be shared
/// across threads and used for concurrent encoding.
///
/// # Examples
///
/// ```
/// use subword_bpe::BpeTokenizer;
///
/// let tokenizer = BpeTokenizer::train(&["cat chases dog dog chases cat"]);
/// let ids = tokenizer.encode("cat");
///
/// assert_eq!(ids.first(), Some(&1));
/// assert_eq!(ids.last(), Some(&2));
/// assert_eq!(tokenizer.decode(&ids), "cat");
/// ```
pub struct BpeTokenizer {
    encoder: Encoder,
    decoder: Decoder,
}

impl BpeTokenizer {
    pub fn new(vocabulary: Vocabulary, merges: MergeTable) -> Self {
        Self::with_pre_tokenizer(vocabulary, merges, PreTokenizer::new())
    }

    pub fn with_pre_tokenizer(
        vocabulary: Vocabulary,
        merges: MergeTable,
        pre_tokenizer: PreTokenizer,
    ) -> Self {
        let encoder = Encoder::new(merges, pre_tokenizer, vocabulary.clone());
        let decoder = Decoder::new(vocabulary);

        BpeTokenizer { encoder, decoder }
    }

    /// Trains a tokenizer with the default [`Trainer`] settings.
    pub fn train(training_texts: &[&str]) -> Self {
        Self::from_trainer(&Trainer::default(), training_texts)
    }

    pub fn from_trainer(trainer: &Trainer, training_texts: &[&str]) -> Self {
        let (vocabulary, merges) = trainer.train(training_texts);

        Self::with_pre_tokenizer(vocabulary, merges, trainer.pre_tokenizer().clone())
    }

    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.encoder.encode(text)
    }

    pub fn encode_with_details(&self, text: &str) -> Vec<TokenDetail> {
        self.encoder.encode_with_details(text)
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.encoder.tokenize(text)
    }

    pub fn decode(&self, ids: &[u32]) -> String {
        self.decoder.decode(ids)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.encoder.vocabulary()
    }

    pub fn merges(&self) -> &MergeTable {
        self.encoder.merges()
    }
}
