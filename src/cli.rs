//! Plumbing shared by the command-line binaries.
//!
//! Nothing here changes codec semantics: it sources input, merges options,
//! logs what it is doing and renders decoded bytes for a terminal.

use crate::{
    base69::Base69Codec,
    config::{Base69Config, FileConfig},
    result::JsonOutcome,
    util::{self, Source},
};
use anyhow::{Context, Result};
use base64::{Engine, engine::general_purpose};
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "base69", version, about = "Base69 encoder/decoder")]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Override: alphabet symbols, zero symbol first
    #[arg(long = "alphabet", global = true)]
    pub alphabet: Option<String>,

    /// Override: carry leading zero bytes as zero symbols (true|false)
    #[arg(long = "preserve-zeros", global = true)]
    pub preserve_zeros: Option<bool>,

    /// Print a JSON envelope instead of plain text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Encode a file, or the argument itself, to Base69
    Encode { input: String },
    /// Decode Base69 text from a file, or the argument itself
    Decode { input: String },
}

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub alphabet: Option<String>,
    pub preserve_leading_zero_bytes: Option<bool>,
}

impl From<&Cli> for CliOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            alphabet: cli.alphabet.clone(),
            preserve_leading_zero_bytes: cli.preserve_zeros,
        }
    }
}

/// Defaults, then the config file, then command-line overrides.
pub fn merge_config(file: Option<FileConfig>, cli: CliOverrides) -> Result<Base69Config> {
    let mut merged = file.unwrap_or_default();
    if let Some(v) = cli.alphabet {
        merged.alphabet = Some(v);
    }
    if let Some(v) = cli.preserve_leading_zero_bytes {
        merged.preserve_leading_zero_bytes = Some(v);
    }
    merged.into_config().context("invalid Base69 configuration")
}

pub fn init_logger(level: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    let _ = builder.try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextEncoding {
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "base64")]
    Base64,
}

/// Decoded bytes made printable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedText {
    pub text: String,
    pub encoding: TextEncoding,
}

/// UTF-8 when the bytes allow it, standard base64 otherwise.
pub fn render_decoded(bytes: Vec<u8>) -> DecodedText {
    match String::from_utf8(bytes) {
        Ok(text) => DecodedText {
            text,
            encoding: TextEncoding::Utf8,
        },
        Err(e) => {
            warn!("decoded output is not valid UTF-8, printing base64");
            DecodedText {
                text: general_purpose::STANDARD.encode(e.as_bytes()),
                encoding: TextEncoding::Base64,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Encoded(String),
    Decoded(DecodedText),
}

impl Output {
    pub fn text(&self) -> &str {
        match self {
            Output::Encoded(s) => s,
            Output::Decoded(d) => &d.text,
        }
    }
}

pub fn run_encode(codec: &Base69Codec, input: &str) -> Result<String> {
    let (data, source) =
        util::data_source(input).with_context(|| format!("read input {input}"))?;
    debug!("encoding {} bytes from {}", data.len(), describe(source));
    Ok(codec.encode(data))
}

pub fn run_decode(codec: &Base69Codec, input: &str) -> Result<DecodedText> {
    let (text, source) = util::text_source(input);
    debug!("decoding {} symbols from {}", text.chars().count(), describe(source));
    let bytes = codec.decode(&text).context("decode Base69 text")?;
    Ok(render_decoded(bytes))
}

/// Builds the codec from `cli` and runs its subcommand.
pub fn execute(cli: &Cli) -> Result<Output> {
    let file = match &cli.config {
        Some(path) => Some(
            FileConfig::from_json_file(path)
                .with_context(|| format!("load config {}", path.display()))?,
        ),
        None => None,
    };
    let config = merge_config(file, CliOverrides::from(cli))?;
    info!(
        "base {} alphabet, preserve leading zero bytes: {}",
        config.base(),
        config.preserve_leading_zero_bytes()
    );

    let codec = Base69Codec::new(config);
    match &cli.command {
        Command::Encode { input } => run_encode(&codec, input).map(Output::Encoded),
        Command::Decode { input } => run_decode(&codec, input).map(Output::Decoded),
    }
}

pub fn to_json(res: Result<Output>) -> Value {
    JsonOutcome::from(res.map_err(|e| format!("{e:#}"))).into()
}

fn describe(source: Source) -> &'static str {
    match source {
        Source::File => "file",
        Source::Literal => "literal argument",
    }
}
