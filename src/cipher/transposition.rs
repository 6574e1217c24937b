//! Grid transposition ciphers: keyless (square-root grid), keyed (columnar,
//! key-ordered) and double (two keyed passes).
//!
//! Letters are reordered, never changed. Keyed grids are padded with X up to
//! `rows * cols`; decryption strips every trailing X, so a plaintext that
//! itself ends in X loses those letters.

use crate::alphabet::{normalize, FILLER};
use crate::error::{CipherError, Result};
use tracing::debug;

/// Geometry of a transposition grid plus the order its columns are read in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspositionGrid {
    pub rows: usize,
    pub cols: usize,
    /// Column indices in read order
    pub order: Vec<usize>,
}

impl TranspositionGrid {
    /// Square-ish grid for the keyless cipher: `cols = ceil(sqrt(len))`
    pub fn keyless(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(CipherError::InvalidInput(
                "transposition text is empty".into(),
            ));
        }
        let cols = ceil_sqrt(len);
        Ok(Self {
            rows: len.div_ceil(cols),
            cols,
            order: (0..cols).collect(),
        })
    }

    /// Grid with one column per key letter, read in key order
    pub fn keyed(key: &str, len: usize) -> Result<Self> {
        let key = key_letters(key)?;
        if len == 0 {
            return Err(CipherError::InvalidInput(
                "transposition text is empty".into(),
            ));
        }
        let cols = key.len();
        Ok(Self {
            rows: len.div_ceil(cols),
            cols,
            order: column_order(&key),
        })
    }

    /// Number of cells (`rows * cols`)
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Padding letters a text of `len` characters needs to fill the grid
    pub fn padding(&self, len: usize) -> usize {
        self.capacity().saturating_sub(len)
    }
}

/// Stable sort of column indices by key letter; equal letters keep their
/// original left-to-right order.
pub fn column_order(key: &str) -> Vec<usize> {
    let letters: Vec<char> = key.chars().collect();
    let mut order: Vec<usize> = (0..letters.len()).collect();
    order.sort_by_key(|&i| letters[i]);
    order
}

/// Smallest `c` with `c * c >= n`
fn ceil_sqrt(n: usize) -> usize {
    let mut c = (n as f64).sqrt() as usize;
    while c * c < n {
        c += 1;
    }
    while c > 0 && (c - 1) * (c - 1) >= n {
        c -= 1;
    }
    c
}

fn key_letters(key: &str) -> Result<String> {
    let key = normalize(key);
    if key.is_empty() {
        return Err(CipherError::InvalidKey(
            "transposition key needs at least one letter".into(),
        ));
    }
    Ok(key)
}

/// Deal the text round-robin into `cols` buckets and concatenate them
/// (equivalently: write row-major, read column-major, no padding).
pub fn keyless_transposition_encrypt(plaintext: &str) -> Result<String> {
    let chars: Vec<char> = plaintext.chars().collect();
    let grid = TranspositionGrid::keyless(chars.len())?;
    debug!(rows = grid.rows, cols = grid.cols, "keyless transposition");

    let mut buckets = vec![String::with_capacity(grid.rows); grid.cols];
    for (i, &c) in chars.iter().enumerate() {
        buckets[i % grid.cols].push(c);
    }
    Ok(buckets.concat())
}

/// Exact inverse of [`keyless_transposition_encrypt`]: the first
/// `len % cols` buckets hold one letter more than the rest.
pub fn keyless_transposition_decrypt(ciphertext: &str) -> Result<String> {
    let chars: Vec<char> = ciphertext.chars().collect();
    let n = chars.len();
    let grid = TranspositionGrid::keyless(n)?;

    let mut out = vec!['\0'; n];
    let mut k = 0;
    for col in 0..grid.cols {
        let bucket_len = n / grid.cols + usize::from(col < n % grid.cols);
        for row in 0..bucket_len {
            out[row * grid.cols + col] = chars[k];
            k += 1;
        }
    }
    Ok(out.into_iter().collect())
}

/// Columnar transposition: pad with X, write row-major, read whole columns
/// in key order.
pub fn keyed_transposition_encrypt(plaintext: &str, key: &str) -> Result<String> {
    let mut chars: Vec<char> = plaintext.chars().collect();
    let grid = TranspositionGrid::keyed(key, chars.len())?;
    debug!(
        rows = grid.rows,
        cols = grid.cols,
        padding = grid.padding(chars.len()),
        order = ?grid.order,
        "keyed transposition"
    );
    chars.resize(grid.capacity(), FILLER);

    let mut out = String::with_capacity(chars.len());
    for &col in &grid.order {
        for row in 0..grid.rows {
            out.push(chars[row * grid.cols + col]);
        }
    }
    Ok(out)
}

/// Inverse of [`keyed_transposition_encrypt`], then strip trailing X.
///
/// Ciphertext shorter than the grid (as left behind by the inner pass of
/// double transposition) is padded back with X before redistribution.
pub fn keyed_transposition_decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let mut chars: Vec<char> = ciphertext.chars().collect();
    let grid = TranspositionGrid::keyed(key, chars.len())?;
    chars.resize(grid.capacity(), FILLER);

    let mut cells = vec![FILLER; grid.capacity()];
    for (i, &col) in grid.order.iter().enumerate() {
        for row in 0..grid.rows {
            cells[row * grid.cols + col] = chars[i * grid.rows + row];
        }
    }

    let text: String = cells.into_iter().collect();
    Ok(text.trim_end_matches(FILLER).to_string())
}

/// Keyed transposition with `first`, then again with `second`
pub fn double_transposition_encrypt(plaintext: &str, first: &str, second: &str) -> Result<String> {
    let inner = keyed_transposition_encrypt(plaintext, first)?;
    keyed_transposition_encrypt(&inner, second)
}

/// Undo `second`, then `first`
pub fn double_transposition_decrypt(ciphertext: &str, first: &str, second: &str) -> Result<String> {
    let inner = keyed_transposition_decrypt(ciphertext, second)?;
    keyed_transposition_decrypt(&inner, first)
}
