use std::{fmt, str::FromStr};

use sha2::{Digest as _, Sha256};

/// A 32-byte seed that reproduces a generated board.
///
/// Seeds are shown and parsed as 64 lowercase hexadecimal digits. A seed can
/// also be derived from an arbitrary phrase, which hashes the phrase with
/// SHA-256.
///
/// # Examples
///
/// ```
/// use cheonja_generator::BoardSeed;
///
/// let seed = BoardSeed::from_phrase("천지현황");
/// let parsed: BoardSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

/// Errors produced when parsing a [`BoardSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input was not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// The input contained a non-hexadecimal character.
    #[display("seed contains a non-hex character")]
    InvalidDigit,
}

impl BoardSeed {
    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from a phrase.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for BoardSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: s.len() });
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SeedParseError::InvalidDigit);
        }
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| SeedParseError::InvalidDigit)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| SeedParseError::InvalidDigit)?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let hex = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
        let seed: BoardSeed = hex.parse().unwrap();
        assert_eq!(seed.to_string(), hex);
        assert_eq!(seed.into_bytes()[0], 0xc1);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let seed: BoardSeed = "AB".repeat(32).parse().unwrap();
        assert_eq!(seed.into_bytes(), [0xab; 32]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<BoardSeed>(),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        assert_eq!(
            "zz".repeat(32).parse::<BoardSeed>(),
            Err(SeedParseError::InvalidDigit)
        );
    }

    #[test]
    fn test_from_phrase_is_stable() {
        assert_eq!(BoardSeed::from_phrase("a"), BoardSeed::from_phrase("a"));
        assert_ne!(BoardSeed::from_phrase("a"), BoardSeed::from_phrase("b"));
        // SHA-256("abc")
        assert_eq!(
            BoardSeed::from_phrase("abc").to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
