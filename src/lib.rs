//! Byte-pair-encoding subword tokenizer.
//!
//! [`Trainer`] learns a [`Vocabulary`] and an ordered [`MergeTable`] from a
//! corpus; [`Encoder`] replays those merges to turn text into token IDs, and
//! [`Decoder`] maps IDs back to subwords. [`BpeTokenizer`] bundles the three.

pub mod decoder;
pub mod encoder;
mod error;
mod merges;
mod pre_tokenizer;
mod symbols;
mod test_utils;
pub mod tokenizer;
pub mod trainer;
mod vocabulary;

pub use decoder::Decoder;
pub use encoder::{Encoder, TokenDetail};
pub use error::{Result, TokenizerError};
pub use merges::{MergeRule, MergeTable};
pub use pre_tokenizer::{PreTokenizer, WORD_PATTERN};
pub use tokenizer::BpeTokenizer;
pub use trainer::{Trainer, TrainerConfig};
pub use vocabulary::{
    END_ID, END_OF_WORD, END_TOKEN, START_ID, START_TOKEN, UNK_ID, UNK_TOKEN, Vocabulary,
};
