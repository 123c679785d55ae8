use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Harvard spectral class of a main-sequence star, hottest to coolest.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralType {
    pub const ALL: [SpectralType; 7] = [
        SpectralType::O,
        SpectralType::B,
        SpectralType::A,
        SpectralType::F,
        SpectralType::G,
        SpectralType::K,
        SpectralType::M,
    ];

    pub fn letter(&self) -> char {
        match self {
            SpectralType::O => 'O',
            SpectralType::B => 'B',
            SpectralType::A => 'A',
            SpectralType::F => 'F',
            SpectralType::G => 'G',
            SpectralType::K => 'K',
            SpectralType::M => 'M',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.letter() == letter.to_ascii_uppercase())
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpectralParseError {
    #[error("empty spectral class")]
    Empty,
    #[error("unknown spectral type letter in `{0}` (expected one of O, B, A, F, G, K, M)")]
    UnknownType(String),
    #[error("invalid spectral subclass in `{0}` (expected a digit 0-9)")]
    InvalidSubclass(String),
}

/// Spectral type plus optional numeric subclass, e.g. `G2` or plain `K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpectralClass {
    pub spectral_type: SpectralType,
    pub subclass: Option<u8>,
}

impl SpectralClass {
    pub const fn new(spectral_type: SpectralType, subclass: Option<u8>) -> Self {
        Self {
            spectral_type,
            subclass,
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.subclass {
            Some(sub) => write!(f, "{}{}", self.spectral_type, sub),
            None => write!(f, "{}", self.spectral_type),
        }
    }
}

impl FromStr for SpectralClass {
    type Err = SpectralParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or(SpectralParseError::Empty)?;
        let spectral_type = SpectralType::from_letter(letter)
            .ok_or_else(|| SpectralParseError::UnknownType(s.to_string()))?;

        let rest = chars.as_str();
        let subclass = match rest {
            "" => None,
            digit if digit.len() == 1 => Some(
                digit
                    .parse::<u8>()
                    .map_err(|_| SpectralParseError::InvalidSubclass(s.to_string()))?,
            ),
            _ => return Err(SpectralParseError::InvalidSubclass(s.to_string())),
        };

        Ok(Self::new(spectral_type, subclass))
    }
}
