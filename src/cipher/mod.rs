pub mod playfair;
pub mod running_key;
pub mod substitution;
pub mod transposition;

pub use playfair::*;
pub use running_key::*;
pub use substitution::*;
pub use transposition::*;

use crate::error::{CipherError, Result};
use crate::kind::{CipherKind, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cipher together with its key material.
///
/// One variant per [`CipherKind`]; each dispatches to its pair of pure
/// encrypt/decrypt functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cipher", rename_all = "kebab-case")]
pub enum Cipher {
    Additive { shift: i64 },
    Multiplicative { factor: i64 },
    Affine { a: i64, b: i64 },
    Monoalphabetic { key: String },
    Autokey { key: String },
    Vigenere { key: String },
    Playfair { key: String },
    KeylessTransposition,
    KeyedTransposition { key: String },
    DoubleTransposition { first: String, second: String },
}

impl Cipher {
    /// Build a cipher from textual key arguments (`--key` / `--key2`).
    ///
    /// Integer ciphers parse their keys; affine takes `a` from `key` and `b`
    /// from `key2`. Keyless transposition ignores both.
    pub fn from_parts(kind: CipherKind, key: Option<&str>, key2: Option<&str>) -> Result<Self> {
        let cipher = match kind {
            CipherKind::Additive => Self::Additive {
                shift: parse_int(kind, required(kind, "--key", key)?)?,
            },
            CipherKind::Multiplicative => Self::Multiplicative {
                factor: parse_int(kind, required(kind, "--key", key)?)?,
            },
            CipherKind::Affine => Self::Affine {
                a: parse_int(kind, required(kind, "--key", key)?)?,
                b: parse_int(kind, required(kind, "--key2", key2)?)?,
            },
            CipherKind::Monoalphabetic => Self::Monoalphabetic {
                key: required(kind, "--key", key)?.to_string(),
            },
            CipherKind::Autokey => Self::Autokey {
                key: required(kind, "--key", key)?.to_string(),
            },
            CipherKind::Vigenere => Self::Vigenere {
                key: required(kind, "--key", key)?.to_string(),
            },
            CipherKind::Playfair => Self::Playfair {
                key: required(kind, "--key", key)?.to_string(),
            },
            CipherKind::KeylessTransposition => Self::KeylessTransposition,
            CipherKind::KeyedTransposition => Self::KeyedTransposition {
                key: required(kind, "--key", key)?.to_string(),
            },
            CipherKind::DoubleTransposition => Self::DoubleTransposition {
                first: required(kind, "--key", key)?.to_string(),
                second: required(kind, "--key2", key2)?.to_string(),
            },
        };
        Ok(cipher)
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            Self::Additive { .. } => CipherKind::Additive,
            Self::Multiplicative { .. } => CipherKind::Multiplicative,
            Self::Affine { .. } => CipherKind::Affine,
            Self::Monoalphabetic { .. } => CipherKind::Monoalphabetic,
            Self::Autokey { .. } => CipherKind::Autokey,
            Self::Vigenere { .. } => CipherKind::Vigenere,
            Self::Playfair { .. } => CipherKind::Playfair,
            Self::KeylessTransposition => CipherKind::KeylessTransposition,
            Self::KeyedTransposition { .. } => CipherKind::KeyedTransposition,
            Self::DoubleTransposition { .. } => CipherKind::DoubleTransposition,
        }
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        match self {
            Self::Additive { shift } => Ok(additive_encrypt(plaintext, *shift)),
            Self::Multiplicative { factor } => multiplicative_encrypt(plaintext, *factor),
            Self::Affine { a, b } => affine_encrypt(plaintext, *a, *b),
            Self::Monoalphabetic { key } => monoalphabetic_encrypt(plaintext, key),
            Self::Autokey { key } => autokey_encrypt(plaintext, key),
            Self::Vigenere { key } => vigenere_encrypt(plaintext, key),
            Self::Playfair { key } => playfair_encrypt(plaintext, key),
            Self::KeylessTransposition => keyless_transposition_encrypt(plaintext),
            Self::KeyedTransposition { key } => keyed_transposition_encrypt(plaintext, key),
            Self::DoubleTransposition { first, second } => {
                double_transposition_encrypt(plaintext, first, second)
            }
        }
    }

    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        match self {
            Self::Additive { shift } => Ok(additive_decrypt(ciphertext, *shift)),
            Self::Multiplicative { factor } => multiplicative_decrypt(ciphertext, *factor),
            Self::Affine { a, b } => affine_decrypt(ciphertext, *a, *b),
            Self::Monoalphabetic { key } => monoalphabetic_decrypt(ciphertext, key),
            Self::Autokey { key } => autokey_decrypt(ciphertext, key),
            Self::Vigenere { key } => vigenere_decrypt(ciphertext, key),
            Self::Playfair { key } => playfair_decrypt(ciphertext, key),
            Self::KeylessTransposition => keyless_transposition_decrypt(ciphertext),
            Self::KeyedTransposition { key } => keyed_transposition_decrypt(ciphertext, key),
            Self::DoubleTransposition { first, second } => {
                double_transposition_decrypt(ciphertext, first, second)
            }
        }
    }

    pub fn apply(&self, operation: Operation, text: &str) -> Result<String> {
        match operation {
            Operation::Encrypt => self.encrypt(text),
            Operation::Decrypt => self.decrypt(text),
        }
    }

    /// Key material as command-line arguments
    pub fn key_args(&self) -> Vec<String> {
        let pair = |k: String, k2: Option<String>| {
            let mut args = vec!["--key".to_string(), k];
            if let Some(k2) = k2 {
                args.push("--key2".to_string());
                args.push(k2);
            }
            args
        };
        match self {
            Self::Additive { shift } => pair(shift.to_string(), None),
            Self::Multiplicative { factor } => pair(factor.to_string(), None),
            Self::Affine { a, b } => pair(a.to_string(), Some(b.to_string())),
            Self::Monoalphabetic { key }
            | Self::Autokey { key }
            | Self::Vigenere { key }
            | Self::Playfair { key }
            | Self::KeyedTransposition { key } => pair(key.clone(), None),
            Self::KeylessTransposition => Vec::new(),
            Self::DoubleTransposition { first, second } => {
                pair(first.clone(), Some(second.clone()))
            }
        }
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self.key_args();
        if args.is_empty() {
            write!(f, "{}", self.kind())
        } else {
            write!(f, "{} {}", self.kind(), args.join(" "))
        }
    }
}

fn required<'a>(kind: CipherKind, flag: &str, value: Option<&'a str>) -> Result<&'a str> {
    value.ok_or_else(|| CipherError::InvalidKey(format!("{} requires {}", kind, flag)))
}

fn parse_int(kind: CipherKind, value: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| {
        CipherError::InvalidKey(format!("{} key must be an integer, got {:?}", kind, value))
    })
}
