//! Playfair digraph cipher over a 5x5 key grid (J is merged into I).
//!
//! ```text
//! key  → PlayfairGrid (key letters first-seen order, then A..Z without J)
//! text → normalize, J→I → digraphs (split doubles with X, pad odd tail with X)
//!      → row / column / rectangle rule per digraph
//! ```

use crate::alphabet::{index_of, normalize, ALPHABET, FILLER};
use crate::error::{CipherError, Result};
use std::fmt;
use tracing::debug;

/// Side length of the grid
pub const GRID_SIZE: usize = 5;

/// 5x5 arrangement of the 25 letters A..Z minus J, derived from a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairGrid {
    cells: [char; GRID_SIZE * GRID_SIZE],
    /// (row, col) per alphabet index; J shares I's cell
    positions: [(usize, usize); 26],
}

impl PlayfairGrid {
    /// Build the grid from a key. Any key works, including an empty one.
    pub fn new(key: &str) -> Self {
        let mut cells = ['\0'; GRID_SIZE * GRID_SIZE];
        let mut positions = [(0usize, 0usize); 26];
        let mut seen = [false; 26];
        let mut filled = 0;

        let candidates = prepare(key);
        for c in candidates.chars().chain(ALPHABET.chars().filter(|&c| c != 'J')) {
            let Some(v) = index_of(c) else { continue };
            if seen[v as usize] {
                continue;
            }
            seen[v as usize] = true;
            cells[filled] = c;
            positions[v as usize] = (filled / GRID_SIZE, filled % GRID_SIZE);
            filled += 1;
        }
        positions[(b'J' - b'A') as usize] = positions[(b'I' - b'A') as usize];

        debug!(key_letters = candidates.len(), "built playfair grid");
        Self { cells, positions }
    }

    /// Letters in row-major order
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Letter at (row, col)
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row * GRID_SIZE + col]
    }

    /// Grid coordinates of an uppercase letter
    pub fn position(&self, c: char) -> Option<(usize, usize)> {
        index_of(c).map(|v| self.positions[v as usize])
    }

    /// Apply the Playfair rules to one digraph. `step` is 1 to encrypt and
    /// `GRID_SIZE - 1` to decrypt.
    fn transform(&self, a: char, b: char, step: usize) -> Result<(char, char)> {
        let (row_a, col_a) = self.locate(a)?;
        let (row_b, col_b) = self.locate(b)?;

        let pair = if row_a == row_b {
            (
                self.at(row_a, (col_a + step) % GRID_SIZE),
                self.at(row_b, (col_b + step) % GRID_SIZE),
            )
        } else if col_a == col_b {
            (
                self.at((row_a + step) % GRID_SIZE, col_a),
                self.at((row_b + step) % GRID_SIZE, col_b),
            )
        } else {
            (self.at(row_a, col_b), self.at(row_b, col_a))
        };
        Ok(pair)
    }

    fn locate(&self, c: char) -> Result<(usize, usize)> {
        self.position(c)
            .ok_or_else(|| CipherError::InvalidInput(format!("{:?} is not in the grid", c)))
    }
}

impl fmt::Display for PlayfairGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(GRID_SIZE) {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Normalize text for the grid: letters only, uppercase, J folded into I
pub fn prepare(text: &str) -> String {
    normalize(text).replace('J', "I")
}

/// Split prepared text into digraphs, left to right.
///
/// A doubled letter emits `(letter, X)` and only consumes one position; a
/// lone trailing letter is padded with X.
pub fn digraphs(text: &str) -> Vec<(char, char)> {
    let letters: Vec<char> = text.chars().collect();
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let a = letters[i];
        match letters.get(i + 1) {
            Some(&b) if b != a => {
                pairs.push((a, b));
                i += 2;
            }
            _ => {
                pairs.push((a, FILLER));
                i += 1;
            }
        }
    }
    pairs
}

pub fn playfair_encrypt(plaintext: &str, key: &str) -> Result<String> {
    let text = prepare(plaintext);
    if text.is_empty() {
        return Err(CipherError::InvalidInput(
            "playfair plaintext has no letters".into(),
        ));
    }

    let grid = PlayfairGrid::new(key);
    let pairs = digraphs(&text);
    debug!(letters = text.len(), digraphs = pairs.len(), "playfair encrypt");

    let mut out = String::with_capacity(pairs.len() * 2);
    for (a, b) in pairs {
        let (x, y) = grid.transform(a, b, 1)?;
        out.push(x);
        out.push(y);
    }
    Ok(out)
}

/// Decrypt raw ciphertext digraphs. Filler letters inserted during
/// encryption are left in place.
pub fn playfair_decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let text: Vec<char> = prepare(ciphertext).chars().collect();
    if text.is_empty() {
        return Err(CipherError::InvalidInput(
            "playfair ciphertext has no letters".into(),
        ));
    }
    if text.len() % 2 != 0 {
        return Err(CipherError::InvalidInput(format!(
            "playfair ciphertext must have an even number of letters, got {}",
            text.len()
        )));
    }

    let grid = PlayfairGrid::new(key);
    let mut out = String::with_capacity(text.len());
    for pair in text.chunks_exact(2) {
        let (x, y) = grid.transform(pair[0], pair[1], GRID_SIZE - 1)?;
        out.push(x);
        out.push(y);
    }
    Ok(out)
}
