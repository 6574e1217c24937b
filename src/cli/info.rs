use crate::alphabet::{normalize, ALPHABET, ALPHABET_LEN};
use crate::cipher::{substitution_table, Cipher, PlayfairGrid, TranspositionGrid};
use crate::error::Result;
use crate::kind::CipherKind;
use crate::modular::{gcd, mod_inverse};

/// Describe the structures a cipher derives from its key.
///
/// `length` is the text length used to show transposition grid geometry.
pub fn show_info(cipher: &Cipher, length: Option<usize>) -> Result<String> {
    let mut output = String::new();
    output.push_str(&format!("Cipher: {}\n", cipher.kind()));

    match cipher {
        Cipher::Additive { shift } => {
            let k = shift.rem_euclid(ALPHABET_LEN);
            output.push_str(&format!(
                "Shift: {} (decrypt shift {})\n",
                k,
                (ALPHABET_LEN - k) % ALPHABET_LEN
            ));
        }
        Cipher::Multiplicative { factor } => {
            output.push_str(&format!("Factor: {}\n", factor));
            push_inverse(&mut output, *factor);
        }
        Cipher::Affine { a, b } => {
            output.push_str(&format!("a: {}, b: {}\n", a, b.rem_euclid(ALPHABET_LEN)));
            push_inverse(&mut output, *a);
        }
        Cipher::Monoalphabetic { key } => {
            let table = substitution_table(key)?;
            let mut inverse = ['\0'; 26];
            for (plain, &v) in table.iter().enumerate() {
                inverse[v as usize] = ALPHABET.as_bytes()[plain] as char;
            }
            let cipher_row: String = key.to_ascii_uppercase();
            let inverse_row: String = inverse.iter().collect();
            output.push_str(&format!("Plain:   {}\n", ALPHABET));
            output.push_str(&format!("Cipher:  {}\n", cipher_row));
            output.push_str(&format!("Inverse: {}\n", inverse_row));
        }
        Cipher::Autokey { key } | Cipher::Vigenere { key } => {
            let key = normalize(key);
            let shifts: Vec<String> = key.bytes().map(|b| (b - b'A').to_string()).collect();
            output.push_str(&format!("Key: {}\n", key));
            output.push_str(&format!("Shifts: {}\n", shifts.join(" ")));
            if cipher.kind() == CipherKind::Autokey {
                output.push_str("Keystream: key, then the plaintext itself\n");
            } else {
                output.push_str("Keystream: key repeated\n");
            }
        }
        Cipher::Playfair { key } => {
            output.push_str(&format!("Key: {}\n", normalize(key)));
            output.push_str("Grid:\n");
            for line in PlayfairGrid::new(key).to_string().lines() {
                output.push_str(&format!("  {}\n", line));
            }
        }
        Cipher::KeylessTransposition => match length {
            Some(len) => push_geometry(&mut output, &TranspositionGrid::keyless(len)?, len),
            None => output.push_str("Columns: ceil(sqrt(length)), pass --length for geometry\n"),
        },
        Cipher::KeyedTransposition { key } => {
            push_keyed(&mut output, "Key", key, length)?;
        }
        Cipher::DoubleTransposition { first, second } => {
            push_keyed(&mut output, "First key", first, length)?;
            // the second pass sees the padded output of the first
            let inner = match length {
                Some(len) => Some(TranspositionGrid::keyed(first, len)?.capacity()),
                None => None,
            };
            push_keyed(&mut output, "Second key", second, inner)?;
        }
    }

    Ok(output)
}

/// One line per cipher kind: menu number, name and key shape
pub fn list_ciphers() -> String {
    let mut output = String::new();
    for (i, kind) in CipherKind::ALL.iter().enumerate() {
        output.push_str(&format!("{:>2}. {:<22} {}\n", i + 1, kind.name(), kind.key_hint()));
    }
    output
}

fn push_inverse(output: &mut String, a: i64) {
    match mod_inverse(a, ALPHABET_LEN) {
        Some(inv) => output.push_str(&format!("Inverse mod 26: {}\n", inv)),
        None => output.push_str(&format!(
            "Inverse mod 26: none (gcd = {}), key is invalid\n",
            gcd(a, ALPHABET_LEN)
        )),
    }
}

fn push_keyed(output: &mut String, label: &str, key: &str, length: Option<usize>) -> Result<()> {
    // Geometry for a one-letter text still validates the key
    let grid = TranspositionGrid::keyed(key, length.unwrap_or(1))?;
    let order: Vec<String> = grid.order.iter().map(|c| (c + 1).to_string()).collect();
    output.push_str(&format!("{}: {}\n", label, normalize(key)));
    output.push_str(&format!("Column read order: {}\n", order.join(" ")));
    if let Some(len) = length {
        push_geometry(output, &grid, len);
    }
    Ok(())
}

fn push_geometry(output: &mut String, grid: &TranspositionGrid, len: usize) {
    output.push_str(&format!(
        "Grid: {} rows x {} columns, {} padding\n",
        grid.rows,
        grid.cols,
        grid.padding(len)
    ));
}
