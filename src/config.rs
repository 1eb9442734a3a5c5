use crate::error::ConfigError;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

/// Default symbol set. Order defines digit values: `A` is zero.
///
/// Uppercase without `I`/`O`, lowercase without `l`, digits `2`-`9`, then
/// thirteen punctuation symbols.
pub const DEFAULT_ALPHABET: &str = concat!(
    "ABCDEFGHJKLMNPQRSTUVWXYZ",
    "abcdefghijkmnopqrstuvwxyz",
    "23456789",
    "!$*+=?^~.#@&%",
);

/// Alphabet and zero-byte policy shared by encoder and decoder.
///
/// The symbol lookup is built once in [`Base69Config::new`] and never
/// changes afterwards, so a config can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base69Config {
    alphabet: Vec<char>,
    lookup: HashMap<char, u32>,
    preserve_leading_zero_bytes: bool,
}

impl Base69Config {
    pub fn new(alphabet: &str, preserve_leading_zero_bytes: bool) -> Result<Self, ConfigError> {
        let symbols: Vec<char> = alphabet.chars().collect();
        if symbols.len() < 2 {
            return Err(ConfigError::TooFewSymbols { len: symbols.len() });
        }

        let mut lookup = HashMap::with_capacity(symbols.len());
        for (index, &symbol) in symbols.iter().enumerate() {
            if let Some(&first) = lookup.get(&symbol) {
                return Err(ConfigError::DuplicateSymbol {
                    symbol,
                    first: first as usize,
                    second: index,
                });
            }
            lookup.insert(symbol, index as u32);
        }

        Ok(Self {
            alphabet: symbols,
            lookup,
            preserve_leading_zero_bytes,
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = serde_json::from_str(raw)?;
        file.into_config()
    }

    pub fn with_preserve_leading_zero_bytes(mut self, preserve: bool) -> Self {
        self.preserve_leading_zero_bytes = preserve;
        self
    }

    pub fn base(&self) -> u32 {
        self.alphabet.len() as u32
    }

    /// Symbol for digit value `value`. Panics if `value >= base`.
    pub fn symbol(&self, value: u32) -> char {
        self.alphabet[value as usize]
    }

    pub fn value_of(&self, symbol: char) -> Option<u32> {
        self.lookup.get(&symbol).copied()
    }

    pub fn zero_symbol(&self) -> char {
        self.alphabet[0]
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn preserve_leading_zero_bytes(&self) -> bool {
        self.preserve_leading_zero_bytes
    }
}

impl Default for Base69Config {
    fn default() -> Self {
        let alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        let lookup = alphabet
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u32))
            .collect();
        Self {
            alphabet,
            lookup,
            preserve_leading_zero_bytes: false,
        }
    }
}

/// On-disk shape of a config file; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub alphabet: Option<String>,
    pub preserve_leading_zero_bytes: Option<bool>,
}

impl FileConfig {
    /// Loads a JSON config file. Missing fields fall back to the defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn into_config(self) -> Result<Base69Config, ConfigError> {
        let preserve = self.preserve_leading_zero_bytes.unwrap_or(false);
        match self.alphabet {
            Some(alphabet) => Base69Config::new(&alphabet, preserve),
            None => Ok(Base69Config::default().with_preserve_leading_zero_bytes(preserve)),
        }
    }
}
