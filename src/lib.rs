//! Base69: binary-to-text encoding over a 70-symbol alphabet.
//!
//! ```
//! use base69::{Base69Codec, Base69Config};
//!
//! let codec = Base69Codec::default();
//! let encoded = codec.encode(b"hello");
//! assert_eq!(encoded, "D97wF6o");
//! assert_eq!(codec.decode(&encoded).unwrap(), b"hello");
//!
//! let preserving = Base69Codec::new(Base69Config::default().with_preserve_leading_zero_bytes(true));
//! assert_eq!(preserving.decode(&preserving.encode(b"\x00\x01")).unwrap(), b"\x00\x01");
//! ```

pub mod base69;
pub mod cli;
pub mod config;
pub mod error;
pub mod result;
pub mod util;

pub use base69::{Base69Codec, b69decode, b69encode};
pub use config::{Base69Config, DEFAULT_ALPHABET};
pub use error::{ConfigError, DecodeError};
