//! Running-key ciphers: Vigenère (repeating key) and autokey (key followed
//! by the plaintext itself).
//!
//! Keys are normalized to uppercase letters before use. The keystream only
//! advances on uppercase letters; other characters pass through untouched.

use crate::alphabet::{index_of, letter_at, normalize};
use crate::error::{CipherError, Result};

/// Vigenère encryption: `v_i + key[i mod len(key)] mod 26`
pub fn vigenere_encrypt(plaintext: &str, key: &str) -> Result<String> {
    let shifts = key_shifts(key)?;
    let mut stream = shifts.iter().cycle();
    Ok(plaintext
        .chars()
        .map(|c| match index_of(c) {
            Some(v) => letter_at(v + stream.next().copied().unwrap_or(0)),
            None => c,
        })
        .collect())
}

/// Vigenère decryption: subtracts the same repeating keystream
pub fn vigenere_decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let shifts = key_shifts(key)?;
    let mut stream = shifts.iter().cycle();
    Ok(ciphertext
        .chars()
        .map(|c| match index_of(c) {
            Some(v) => letter_at(v - stream.next().copied().unwrap_or(0)),
            None => c,
        })
        .collect())
}

/// Autokey encryption: the keystream is the key followed by the plaintext
pub fn autokey_encrypt(plaintext: &str, key: &str) -> Result<String> {
    let mut keystream = key_shifts(key)?;
    keystream.extend(plaintext.chars().filter_map(index_of));

    let mut pos = 0;
    Ok(plaintext
        .chars()
        .map(|c| match index_of(c) {
            Some(v) => {
                let out = letter_at(v + keystream[pos]);
                pos += 1;
                out
            }
            None => c,
        })
        .collect())
}

/// Autokey decryption.
///
/// The plaintext half of the keystream is unknown up front, so decryption
/// runs strictly left to right: every recovered letter is appended to the
/// keystream and used `len(key)` positions later.
pub fn autokey_decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let mut keystream = key_shifts(key)?;
    let mut pos = 0;
    let mut out = String::with_capacity(ciphertext.len());

    for c in ciphertext.chars() {
        match index_of(c) {
            Some(v) => {
                let plain = (v - keystream[pos]).rem_euclid(26);
                keystream.push(plain);
                out.push(letter_at(plain));
                pos += 1;
            }
            None => out.push(c),
        }
    }
    Ok(out)
}

/// Normalize a key and turn it into per-position shifts
fn key_shifts(key: &str) -> Result<Vec<i64>> {
    let shifts: Vec<i64> = normalize(key).chars().filter_map(index_of).collect();
    if shifts.is_empty() {
        return Err(CipherError::InvalidKey(
            "running-key cipher needs at least one letter in the key".into(),
        ));
    }
    Ok(shifts)
}
