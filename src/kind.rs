use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cipher selector, without key material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CipherKind {
    Additive,
    Multiplicative,
    Affine,
    Monoalphabetic,
    Autokey,
    Vigenere,
    Playfair,
    KeylessTransposition,
    KeyedTransposition,
    DoubleTransposition,
}

impl CipherKind {
    /// Every kind, in menu order
    pub const ALL: [CipherKind; 10] = [
        Self::Additive,
        Self::Multiplicative,
        Self::Affine,
        Self::Monoalphabetic,
        Self::Autokey,
        Self::Vigenere,
        Self::Playfair,
        Self::KeylessTransposition,
        Self::KeyedTransposition,
        Self::DoubleTransposition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::Multiplicative => "multiplicative",
            Self::Affine => "affine",
            Self::Monoalphabetic => "monoalphabetic",
            Self::Autokey => "autokey",
            Self::Vigenere => "vigenere",
            Self::Playfair => "playfair",
            Self::KeylessTransposition => "keyless-transposition",
            Self::KeyedTransposition => "keyed-transposition",
            Self::DoubleTransposition => "double-transposition",
        }
    }

    /// Shape of the key material, as given on the command line
    pub fn key_hint(self) -> &'static str {
        match self {
            Self::Additive => "--key <shift>",
            Self::Multiplicative => "--key <factor coprime to 26>",
            Self::Affine => "--key <a coprime to 26> --key2 <b>",
            Self::Monoalphabetic => "--key <26-letter permutation>",
            Self::Autokey | Self::Vigenere | Self::Playfair => "--key <letters>",
            Self::KeylessTransposition => "(no key)",
            Self::KeyedTransposition => "--key <letters>",
            Self::DoubleTransposition => "--key <letters> --key2 <letters>",
        }
    }

    /// Whether the cipher takes any key material at all
    pub fn is_keyed(self) -> bool {
        self != Self::KeylessTransposition
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CipherKind {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        // Numbers follow the order of the interactive menu
        match s.to_lowercase().replace('_', "-").as_str() {
            "1" | "additive" | "caesar" | "shift" => Ok(Self::Additive),
            "2" | "multiplicative" => Ok(Self::Multiplicative),
            "3" | "affine" => Ok(Self::Affine),
            "4" | "monoalphabetic" | "substitution" => Ok(Self::Monoalphabetic),
            "5" | "autokey" => Ok(Self::Autokey),
            "6" | "vigenere" | "vigenère" => Ok(Self::Vigenere),
            "7" | "playfair" => Ok(Self::Playfair),
            "8" | "keyless-transposition" | "keyless" => Ok(Self::KeylessTransposition),
            "9" | "keyed-transposition" | "keyed" | "columnar" => Ok(Self::KeyedTransposition),
            "10" | "double-transposition" | "double" => Ok(Self::DoubleTransposition),
            _ => Err(CipherError::UnsupportedAlgorithm(format!("cipher: {}", s))),
        }
    }
}

/// Direction of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Encrypt,
    Decrypt,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("encrypt"),
            Self::Decrypt => f.write_str("decrypt"),
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "1" | "encrypt" | "enc" | "e" => Ok(Self::Encrypt),
            "2" | "decrypt" | "dec" | "d" => Ok(Self::Decrypt),
            _ => Err(CipherError::UnsupportedAlgorithm(format!("operation: {}", s))),
        }
    }
}
