use thiserror::Error;

/// Errors raised while configuring a tokenizer.
///
/// Training, encoding and decoding never fail; only construction-time
/// settings are validated.
#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid word pattern: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, TokenizerError>;
