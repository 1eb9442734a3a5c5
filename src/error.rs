use thiserror::Error;

/// Raised when a [`Base69Config`](crate::config::Base69Config) cannot be built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("alphabet must contain at least 2 symbols, got {len}")]
    TooFewSymbols { len: usize },
    #[error("duplicate symbol {symbol:?} at positions {first} and {second}")]
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raised by [`Base69Codec::decode`](crate::base69::Base69Codec::decode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("invalid Base69 character {symbol:?} at position {position}")]
    InvalidCharacter { symbol: char, position: usize },
}
