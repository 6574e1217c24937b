//! Monoalphabetic substitution family: additive (shift), multiplicative,
//! affine and arbitrary permutation keys.
//!
//! Uppercase letters are transformed; any other character passes through
//! unchanged.

use crate::alphabet::{index_of, letter_at, map_letters, ALPHABET_LEN};
use crate::error::{CipherError, Result};
use crate::modular::mod_inverse;

/// Additive (Caesar) encryption: `v + k mod 26`
pub fn additive_encrypt(plaintext: &str, key: i64) -> String {
    let k = key.rem_euclid(ALPHABET_LEN);
    map_letters(plaintext, |v| v + k)
}

/// Additive decryption: `v - k mod 26`
pub fn additive_decrypt(ciphertext: &str, key: i64) -> String {
    let k = key.rem_euclid(ALPHABET_LEN);
    map_letters(ciphertext, |v| v - k)
}

/// Multiplicative encryption: `v * k mod 26`.
/// Fails when `k` has no inverse mod 26, since the output could never be decrypted.
pub fn multiplicative_encrypt(plaintext: &str, key: i64) -> Result<String> {
    invertible(key)?;
    let k = key.rem_euclid(ALPHABET_LEN);
    Ok(map_letters(plaintext, |v| v * k))
}

/// Multiplicative decryption: `v * k^-1 mod 26`
pub fn multiplicative_decrypt(ciphertext: &str, key: i64) -> Result<String> {
    let inv = invertible(key)?;
    Ok(map_letters(ciphertext, |v| v * inv))
}

/// Affine encryption: `a * v + b mod 26`, requires `gcd(a, 26) == 1`
pub fn affine_encrypt(plaintext: &str, a: i64, b: i64) -> Result<String> {
    invertible(a)?;
    let a = a.rem_euclid(ALPHABET_LEN);
    let b = b.rem_euclid(ALPHABET_LEN);
    Ok(map_letters(plaintext, |v| a * v + b))
}

/// Affine decryption: `a^-1 * (v - b) mod 26`
pub fn affine_decrypt(ciphertext: &str, a: i64, b: i64) -> Result<String> {
    let inv = invertible(a)?;
    let b = b.rem_euclid(ALPHABET_LEN);
    Ok(map_letters(ciphertext, |v| inv * (v - b)))
}

/// Permutation key: letter `i` of the alphabet encrypts to `key[i]`
pub fn monoalphabetic_encrypt(plaintext: &str, key: &str) -> Result<String> {
    let table = substitution_table(key)?;
    Ok(map_letters(plaintext, |v| table[v as usize]))
}

/// Inverse of [`monoalphabetic_encrypt`]
pub fn monoalphabetic_decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let table = substitution_table(key)?;
    let mut inverse = [0i64; 26];
    for (plain, &cipher) in table.iter().enumerate() {
        inverse[cipher as usize] = plain as i64;
    }
    Ok(map_letters(ciphertext, |v| inverse[v as usize]))
}

/// Validate a permutation key and return it as alphabet indices.
///
/// The key is uppercased but otherwise taken literally: it must hold exactly
/// 26 distinct letters.
pub fn substitution_table(key: &str) -> Result<[i64; 26]> {
    let key = key.to_ascii_uppercase();
    let letters: Vec<char> = key.chars().collect();
    if letters.len() != 26 {
        return Err(CipherError::InvalidKey(format!(
            "substitution key must have 26 letters, got {}",
            letters.len()
        )));
    }

    let mut table = [0i64; 26];
    let mut seen = [false; 26];
    for (i, &c) in letters.iter().enumerate() {
        let v = index_of(c).ok_or_else(|| {
            CipherError::InvalidKey(format!("substitution key contains non-letter {:?}", c))
        })?;
        if seen[v as usize] {
            return Err(CipherError::InvalidKey(format!(
                "substitution key repeats letter {}",
                letter_at(v)
            )));
        }
        seen[v as usize] = true;
        table[i] = v;
    }
    Ok(table)
}

fn invertible(key: i64) -> Result<i64> {
    mod_inverse(key, ALPHABET_LEN).ok_or_else(|| {
        CipherError::InvalidKey(format!("{} has no inverse mod {}", key, ALPHABET_LEN))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const QWERTY: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

    #[test]
    fn test_additive_known_value() {
        assert_eq!(additive_encrypt("HELLO", 3), "KHOOR");
        assert_eq!(additive_decrypt("KHOOR", 3), "HELLO");
    }

    #[test]
    fn test_additive_key_reduced() {
        assert_eq!(additive_encrypt("HELLO", 29), "KHOOR");
        assert_eq!(additive_encrypt("HELLO", -23), "KHOOR");
        assert_eq!(additive_encrypt("XYZ", 26), "XYZ");
    }

    #[test]
    fn test_additive_passes_non_letters() {
        assert_eq!(additive_encrypt("HI, BOB!", 1), "IJ, CPC!");
        assert_eq!(additive_decrypt("IJ, CPC!", 1), "HI, BOB!");
    }

    #[test]
    fn test_multiplicative_known_value() {
        // H=7 -> 21 (V), E=4 -> 12 (M), L=11 -> 33%26=7 (H), O=14 -> 42%26=16 (Q)
        assert_eq!(multiplicative_encrypt("HELLO", 3).unwrap(), "VMHHQ");
        assert_eq!(multiplicative_decrypt("VMHHQ", 3).unwrap(), "HELLO");
    }

    #[test]
    fn test_multiplicative_rejects_non_invertible() {
        let err = multiplicative_decrypt("ABC", 4).unwrap_err();
        assert!(err.is_invalid_key());
        assert!(multiplicative_encrypt("ABC", 13).unwrap_err().is_invalid_key());
    }

    #[test]
    fn test_affine_known_value() {
        assert_eq!(affine_encrypt("HELLO", 5, 8).unwrap(), "RCLLA");
        assert_eq!(affine_decrypt("RCLLA", 5, 8).unwrap(), "HELLO");
    }

    #[test]
    fn test_affine_negative_shift() {
        let ct = affine_encrypt("ATTACKATDAWN", 7, -3).unwrap();
        assert_eq!(affine_decrypt(&ct, 7, 23).unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn test_affine_rejects_even_a() {
        assert!(affine_encrypt("HELLO", 2, 1).unwrap_err().is_invalid_key());
        assert!(affine_decrypt("HELLO", 26, 1).unwrap_err().is_invalid_key());
    }

    #[test]
    fn test_monoalphabetic_roundtrip() {
        let ct = monoalphabetic_encrypt("HELLO WORLD", QWERTY).unwrap();
        assert_eq!(ct, "ITSSG VGKSR");
        assert_eq!(monoalphabetic_decrypt(&ct, QWERTY).unwrap(), "HELLO WORLD");
    }

    #[test]
    fn test_monoalphabetic_lowercase_key_accepted() {
        let lower = QWERTY.to_ascii_lowercase();
        assert_eq!(
            monoalphabetic_encrypt("ABC", &lower).unwrap(),
            monoalphabetic_encrypt("ABC", QWERTY).unwrap()
        );
    }

    #[test]
    fn test_monoalphabetic_rejects_bad_keys() {
        assert!(monoalphabetic_encrypt("A", "ABC").unwrap_err().is_invalid_key());
        let dup = "AACDEFGHIJKLMNOPQRSTUVWXYZ";
        assert!(monoalphabetic_encrypt("A", dup).unwrap_err().is_invalid_key());
        let digit = "1BCDEFGHIJKLMNOPQRSTUVWXYZ";
        assert!(monoalphabetic_decrypt("A", digit).unwrap_err().is_invalid_key());
    }
}
