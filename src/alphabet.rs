/// The 26 uppercase letters, index 0..25
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Size of the alphabet (the modulus for every substitution cipher)
pub const ALPHABET_LEN: i64 = 26;

/// Placeholder letter used for Playfair digraph splitting and grid padding
pub const FILLER: char = 'X';

/// Strip everything that is not an ASCII letter and uppercase the rest
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Alphabet index of an uppercase letter, `None` for anything else
#[inline]
pub fn index_of(c: char) -> Option<i64> {
    if c.is_ascii_uppercase() {
        Some((c as u8 - b'A') as i64)
    } else {
        None
    }
}

/// Letter at an alphabet index; the index is reduced mod 26 first
#[inline]
pub fn letter_at(index: i64) -> char {
    (b'A' + index.rem_euclid(ALPHABET_LEN) as u8) as char
}

/// Map every uppercase letter through `f` (working on indices), passing
/// other characters through unchanged
pub fn map_letters<F>(text: &str, mut f: F) -> String
where
    F: FnMut(i64) -> i64,
{
    text.chars()
        .map(|c| match index_of(c) {
            Some(v) => letter_at(f(v)),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_and_uppercases() {
        assert_eq!(normalize("Attack at dawn!"), "ATTACKATDAWN");
        assert_eq!(normalize("  1234 -- "), "");
        assert_eq!(normalize("Ünïcode ok"), "NCODEOK");
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, c) in ALPHABET.chars().enumerate() {
            assert_eq!(index_of(c), Some(i as i64));
            assert_eq!(letter_at(i as i64), c);
        }
        assert_eq!(index_of('a'), None);
        assert_eq!(index_of(' '), None);
    }

    #[test]
    fn test_letter_at_wraps_negative() {
        assert_eq!(letter_at(-1), 'Z');
        assert_eq!(letter_at(26), 'A');
        assert_eq!(letter_at(-27), 'Z');
    }

    #[test]
    fn test_map_letters_passes_through() {
        let shifted = map_letters("AB C-z", |v| v + 1);
        assert_eq!(shifted, "BC D-z");
    }
}
