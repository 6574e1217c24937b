//! Random key material for every keyed cipher.
//!
//! Uses a seedable, non-cryptographic generator: these ciphers offer no
//! security, and a fixed seed makes classroom examples reproducible.

use crate::alphabet::{letter_at, ALPHABET, ALPHABET_LEN};
use crate::cipher::Cipher;
use crate::error::{CipherError, Result};
use crate::kind::CipherKind;
use crate::modular::gcd;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Default number of letters in generated word keys
pub const DEFAULT_KEY_LENGTH: usize = 6;

/// Options for key generation
#[derive(Debug, Clone)]
pub struct KeygenOptions {
    /// Letters per word key (running-key, Playfair, transposition)
    pub length: usize,
    /// Fixed seed for reproducible output
    pub seed: Option<u64>,
}

impl Default for KeygenOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_KEY_LENGTH,
            seed: None,
        }
    }
}

/// Generate a random, valid key for `kind`
pub fn generate_key(kind: CipherKind, options: &KeygenOptions) -> Result<Cipher> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_with(kind, options.length, &mut rng)
}

/// Generate a key from a caller-supplied generator
pub fn generate_with<R: Rng + ?Sized>(
    kind: CipherKind,
    length: usize,
    rng: &mut R,
) -> Result<Cipher> {
    if kind.is_keyed() && length == 0 {
        return Err(CipherError::InvalidKey("key length must be at least 1".into()));
    }

    let cipher = match kind {
        CipherKind::Additive => Cipher::Additive {
            shift: rng.gen_range(1..ALPHABET_LEN),
        },
        CipherKind::Multiplicative => Cipher::Multiplicative {
            factor: random_unit(rng),
        },
        CipherKind::Affine => Cipher::Affine {
            a: random_unit(rng),
            b: rng.gen_range(0..ALPHABET_LEN),
        },
        CipherKind::Monoalphabetic => Cipher::Monoalphabetic {
            key: shuffled_alphabet(rng),
        },
        CipherKind::Autokey => Cipher::Autokey {
            key: random_word(rng, length),
        },
        CipherKind::Vigenere => Cipher::Vigenere {
            key: random_word(rng, length),
        },
        CipherKind::Playfair => Cipher::Playfair {
            key: distinct_word(rng, length),
        },
        CipherKind::KeylessTransposition => {
            return Err(CipherError::UnsupportedAlgorithm(format!(
                "{} takes no key",
                kind
            )))
        }
        CipherKind::KeyedTransposition => Cipher::KeyedTransposition {
            key: distinct_word(rng, length),
        },
        CipherKind::DoubleTransposition => Cipher::DoubleTransposition {
            first: distinct_word(rng, length),
            second: distinct_word(rng, length),
        },
    };

    debug!(cipher = %kind, length, "generated key");
    Ok(cipher)
}

/// Random value in [1, 26) with an inverse mod 26
fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    let units: Vec<i64> = (1..ALPHABET_LEN)
        .filter(|&a| gcd(a, ALPHABET_LEN) == 1)
        .collect();
    units[rng.gen_range(0..units.len())]
}

fn shuffled_alphabet<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut letters: Vec<char> = ALPHABET.chars().collect();
    letters.shuffle(rng);
    letters.into_iter().collect()
}

/// Letters drawn independently (repeats allowed)
fn random_word<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| letter_at(rng.gen_range(0..ALPHABET_LEN)))
        .collect()
}

/// Distinct letters, so the column order has no ties. Capped at 26.
fn distinct_word<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let mut letters: Vec<char> = ALPHABET.chars().collect();
    letters.shuffle(rng);
    letters.into_iter().take(length).collect()
}
