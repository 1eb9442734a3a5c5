//! Base69 codec.
//!
//! The whole input is read as one big-endian unsigned integer and rewritten
//! in the configured base. Leading `0x00` bytes vanish in positional
//! notation unless [`Base69Config::preserve_leading_zero_bytes`] is set, in
//! which case each one is carried as a zero symbol in front of the digits.

use crate::{config::Base69Config, error::DecodeError};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use std::iter;

#[derive(Debug, Clone, Default)]
pub struct Base69Codec {
    config: Base69Config,
}

impl Base69Codec {
    pub fn new(config: Base69Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Base69Config {
        &self.config
    }

    /// Encodes `data`. The result always holds at least one symbol; empty
    /// input encodes to the zero symbol.
    pub fn encode(&self, data: impl AsRef<[u8]>) -> String {
        let data = data.as_ref();
        let zero = self.config.zero_symbol();
        if data.is_empty() {
            return zero.to_string();
        }

        let digits = self.int_to_string(&bytes_to_int(data));
        if !self.config.preserve_leading_zero_bytes() {
            return digits;
        }

        let leading = data.iter().take_while(|&&b| b == 0).count();
        let mut out = String::with_capacity(leading * zero.len_utf8() + digits.len());
        out.extend(iter::repeat(zero).take(leading));
        out.push_str(&digits);
        out
    }

    /// Decodes `text`, failing on empty input or at the first symbol that is
    /// not in the alphabet.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        if text.is_empty() {
            return Err(DecodeError::InvalidInput("empty string"));
        }

        if !self.config.preserve_leading_zero_bytes() {
            let n = self.string_to_int(text, 0)?;
            return Ok(int_to_bytes(&n));
        }

        let zero = self.config.zero_symbol();
        let leading = text.chars().take_while(|&c| c == zero).count();
        let core = &text[leading * zero.len_utf8()..];

        // Only zero symbols: the last one is the digit for the value zero,
        // the rest are padding for leading zero bytes.
        if core.is_empty() {
            return Ok(vec![0; leading - 1]);
        }

        let n = self.string_to_int(core, leading)?;
        let mut out = vec![0u8; leading];
        out.extend(int_to_bytes(&n));
        Ok(out)
    }

    fn int_to_string(&self, n: &BigUint) -> String {
        if n.is_zero() {
            return self.config.zero_symbol().to_string();
        }

        let base = BigUint::from(self.config.base());
        let mut digits = Vec::new();
        let mut value = n.clone();
        while !value.is_zero() {
            let (quot, rem) = value.div_rem(&base);
            let digit = u32::try_from(&rem).unwrap_or(0);
            digits.push(self.config.symbol(digit));
            value = quot;
        }
        digits.iter().rev().collect()
    }

    /// `offset` is the char position of `text` within the full input, used
    /// for error reporting.
    fn string_to_int(&self, text: &str, offset: usize) -> Result<BigUint, DecodeError> {
        let base = self.config.base();
        let mut acc = BigUint::zero();
        for (i, symbol) in text.chars().enumerate() {
            let value = self
                .config
                .value_of(symbol)
                .ok_or(DecodeError::InvalidCharacter {
                    symbol,
                    position: offset + i,
                })?;
            acc = acc * base + value;
        }
        Ok(acc)
    }
}

fn bytes_to_int(data: &[u8]) -> BigUint {
    BigUint::from_bytes_be(data)
}

/// Minimal big-endian bytes of `n`; zero is a single `0x00`.
fn int_to_bytes(n: &BigUint) -> Vec<u8> {
    if n.is_zero() {
        vec![0]
    } else {
        n.to_bytes_be()
    }
}

/// Encodes with the default configuration.
pub fn b69encode(data: impl AsRef<[u8]>) -> String {
    Base69Codec::default().encode(data)
}

/// Decodes with the default configuration.
pub fn b69decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    Base69Codec::default().decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preserving() -> Base69Codec {
        Base69Codec::new(Base69Config::default().with_preserve_leading_zero_bytes(true))
    }

    // Deterministic byte strings of assorted lengths, some with leading zeros.
    fn samples() -> Vec<Vec<u8>> {
        let mut out = vec![
            vec![],
            vec![0],
            vec![0, 0, 0],
            vec![0, 0, 1],
            vec![1],
            vec![255],
            vec![1, 0],
            vec![0, 255, 0],
            b"hello".to_vec(),
            "Lorenzo😊".as_bytes().to_vec(),
        ];
        let mut state: u32 = 0x2545_f491;
        for len in [2usize, 7, 16, 33, 64, 257] {
            let bytes = (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    (state >> 24) as u8
                })
                .collect::<Vec<u8>>();
            out.push(bytes.clone());
            let mut padded = vec![0, 0];
            padded.extend(bytes);
            out.push(padded);
        }
        out
    }

    fn strip_leading_zeros(data: &[u8]) -> Vec<u8> {
        let stripped: Vec<u8> = data.iter().copied().skip_while(|&b| b == 0).collect();
        if stripped.is_empty() { vec![0] } else { stripped }
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(b69encode(b""), "A");
        assert_eq!(b69encode(b"\x00"), "A");
        assert_eq!(b69encode(b"\x01"), "B");
        assert_eq!(b69encode(b"\xff"), "Dw");
        assert_eq!(b69encode(b"\x01\x00"), "Dx");
        assert_eq!(b69encode(b"hello"), "D97wF6o");
        assert_eq!(b69encode(b"Hello, World!"), "TUMS.*iRicm%fwbY2");
    }

    #[test]
    fn test_decode_zero_symbol() {
        assert_eq!(b69decode("A").unwrap(), vec![0]);
        assert_eq!(b69decode("AAA").unwrap(), vec![0]);
        assert_eq!(b69decode("AAB").unwrap(), vec![1]);
    }

    #[test]
    fn test_hello_round_trip() {
        assert_eq!(b69decode(&b69encode(b"hello")).unwrap(), b"hello");
    }

    #[test]
    fn test_leading_zero_bytes_dropped_by_default() {
        let codec = Base69Codec::default();
        assert_eq!(codec.encode(b"\x00\x00\x01"), "B");
        assert_eq!(codec.decode(&codec.encode(b"\x00\x00\x01")).unwrap(), b"\x01");
    }

    #[test]
    fn test_leading_zero_bytes_preserved() {
        let codec = preserving();
        assert_eq!(codec.encode(b"\x00\x00\x01"), "AAB");
        assert_eq!(
            codec.decode(&codec.encode(b"\x00\x00\x01")).unwrap(),
            b"\x00\x00\x01"
        );
    }

    #[test]
    fn test_all_zero_payloads_preserved() {
        let codec = preserving();
        assert_eq!(codec.encode(b""), "A");
        assert_eq!(codec.encode(b"\x00"), "AA");
        assert_eq!(codec.encode(b"\x00\x00"), "AAA");
        assert_eq!(codec.decode("A").unwrap(), b"");
        assert_eq!(codec.decode("AA").unwrap(), b"\x00");
        assert_eq!(codec.decode("AAA").unwrap(), b"\x00\x00");
    }

    #[test]
    fn test_round_trip_preserving() {
        let codec = preserving();
        for data in samples() {
            assert_eq!(codec.decode(&codec.encode(&data)).unwrap(), data);
        }
    }

    #[test]
    fn test_round_trip_default() {
        let codec = Base69Codec::default();
        for data in samples() {
            assert_eq!(
                codec.decode(&codec.encode(&data)).unwrap(),
                strip_leading_zeros(&data)
            );
        }
    }

    #[test]
    fn test_output_within_alphabet_and_non_empty() {
        for codec in [Base69Codec::default(), preserving()] {
            for data in samples() {
                let encoded = codec.encode(&data);
                assert!(!encoded.is_empty());
                assert!(
                    encoded
                        .chars()
                        .all(|c| codec.config().value_of(c).is_some())
                );
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let codec = Base69Codec::default();
        let first = codec.encode(b"determinism");
        codec.encode(b"something else");
        assert_eq!(codec.encode(b"determinism"), first);
        assert_eq!(codec.decode(&first).unwrap(), codec.decode(&first).unwrap());
    }

    #[test]
    fn test_digit_count_is_monotonic() {
        let codec = Base69Codec::default();
        let mut previous = 0;
        for bits in 0..200u32 {
            let n = BigUint::from(1u8) << bits;
            let len = codec.encode(n.to_bytes_be()).len();
            assert!(len >= previous, "2^{bits} encoded shorter than 2^{}", bits.saturating_sub(1));
            previous = len;
        }
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(
            b69decode(""),
            Err(DecodeError::InvalidInput("empty string"))
        );
        assert!(preserving().decode("").is_err());
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            b69decode("A0"),
            Err(DecodeError::InvalidCharacter {
                symbol: '0',
                position: 1
            })
        );
        // First offender wins.
        assert_eq!(
            b69decode("BlI"),
            Err(DecodeError::InvalidCharacter {
                symbol: 'l',
                position: 1
            })
        );
    }

    #[test]
    fn test_decode_invalid_character_after_zero_run() {
        assert_eq!(
            preserving().decode("AA O"),
            Err(DecodeError::InvalidCharacter {
                symbol: ' ',
                position: 2
            })
        );
    }

    #[test]
    fn test_custom_binary_alphabet() {
        let codec = Base69Codec::new(Base69Config::new("01", false).unwrap());
        assert_eq!(codec.encode([5u8]), "101");
        assert_eq!(codec.decode("101").unwrap(), vec![5]);
        assert_eq!(codec.decode("0000101").unwrap(), vec![5]);
    }

    #[test]
    fn test_unicode_alphabet_positions() {
        let config = Base69Config::new("😀😁😂", true).unwrap();
        let codec = Base69Codec::new(config);
        let encoded = codec.encode([0u8, 7]);
        assert_eq!(encoded, "😀😂😁");
        assert_eq!(codec.decode(&encoded).unwrap(), vec![0, 7]);
        assert_eq!(
            codec.decode("😀😀x"),
            Err(DecodeError::InvalidCharacter {
                symbol: 'x',
                position: 2
            })
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let codec = Base69Codec::default();
        let expected = codec.encode(b"shared");
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(codec.encode(b"shared"), expected));
            }
        });
    }
}
