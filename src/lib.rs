//! Cipherkit - classical (pre-modern) text ciphers
//!
//! Pure encrypt/decrypt function pairs over uppercase letter text, for
//! teaching and historical interest. None of these ciphers resist frequency
//! analysis; do not use them to protect anything.
//!
//! ## Cipher families
//!
//! - **Substitution**: additive (Caesar), multiplicative, affine, arbitrary
//!   26-letter permutation
//! - **Running key**: Vigenère, autokey
//! - **Digraph**: Playfair over a 5x5 key grid
//! - **Transposition**: keyless (square-root grid), keyed (columnar),
//!   double (two keyed passes)
//!
//! Text is expected to be normalized first (`alphabet::normalize`: letters
//! only, uppercase). Substitution and running-key ciphers pass any other
//! character through unchanged.
//!
//! ## Example
//!
//! ```
//! use cipherkit::alphabet::normalize;
//! use cipherkit::cipher::{keyed_transposition_decrypt, keyed_transposition_encrypt, Cipher};
//!
//! let text = normalize("Attack at dawn");
//! let vigenere = Cipher::Vigenere { key: "LEMON".into() };
//! assert_eq!(vigenere.encrypt(&text).unwrap(), "LXFOPVEFRNHR");
//!
//! let ct = keyed_transposition_encrypt("HELLO", "KEY").unwrap();
//! assert_eq!(keyed_transposition_decrypt(&ct, "KEY").unwrap(), "HELLO");
//! ```

pub mod alphabet;
pub mod cipher;
pub mod cli;
pub mod error;
pub mod keygen;
pub mod kind;
pub mod modular;

pub use cipher::Cipher;
pub use error::{CipherError, Result};
pub use kind::{CipherKind, Operation};
