use crate::alphabet::normalize;
use crate::cipher::Cipher;
use crate::error::{CipherError, Result};
use crate::kind::{CipherKind, Operation};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Options for the encrypt/decrypt commands
#[derive(Debug, Clone)]
pub struct CipherOptions {
    pub cipher: CipherKind,
    pub key: Option<String>,
    pub key2: Option<String>,
    pub json: bool,
}

impl Default for CipherOptions {
    fn default() -> Self {
        Self {
            cipher: CipherKind::Additive,
            key: None,
            key2: None,
            json: false,
        }
    }
}

/// Outcome of one encrypt/decrypt call
#[derive(Debug, Clone, Serialize)]
pub struct CipherReport {
    pub cipher: CipherKind,
    pub operation: Operation,
    pub input: String,
    pub output: String,
}

impl CipherReport {
    /// Human-readable line, or a JSON object when `json` is set
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            return Ok(format!("{}\n", serde_json::to_string(self)?));
        }
        let label = match self.operation {
            Operation::Encrypt => "Encrypted",
            Operation::Decrypt => "Decrypted",
        };
        Ok(format!("{} text: {}\n", label, self.output))
    }
}

/// Normalize `text` and run it through the selected cipher
pub fn run_cipher(operation: Operation, text: &str, options: &CipherOptions) -> Result<CipherReport> {
    let cipher = Cipher::from_parts(
        options.cipher,
        options.key.as_deref(),
        options.key2.as_deref(),
    )?;
    let input = normalize(text);
    debug!(cipher = %options.cipher, %operation, letters = input.len(), "running cipher");

    let output = cipher.apply(operation, &input)?;
    Ok(CipherReport {
        cipher: options.cipher,
        operation,
        input,
        output,
    })
}

/// Text from the command line, a file, or stdin, in that order of preference
pub fn read_input(text: Option<&str>, path: Option<&Path>) -> Result<String> {
    match (text, path) {
        (Some(_), Some(_)) => Err(CipherError::InvalidInput(
            "give the text either inline or with --input, not both".into(),
        )),
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn options(cipher: CipherKind, key: Option<&str>, key2: Option<&str>) -> CipherOptions {
        CipherOptions {
            cipher,
            key: key.map(String::from),
            key2: key2.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_run_cipher_normalizes_input() {
        let opts = options(CipherKind::Additive, Some("3"), None);
        let report = run_cipher(Operation::Encrypt, "Hello, world", &opts).unwrap();
        assert_eq!(report.input, "HELLOWORLD");
        assert_eq!(report.output, "KHOORZRUOG");
        assert_eq!(report.render(false).unwrap(), "Encrypted text: KHOORZRUOG\n");
    }

    #[test]
    fn test_run_cipher_decrypt_label() {
        let opts = options(CipherKind::Affine, Some("5"), Some("8"));
        let report = run_cipher(Operation::Decrypt, "rclla", &opts).unwrap();
        assert_eq!(report.render(false).unwrap(), "Decrypted text: HELLO\n");
    }

    #[test]
    fn test_json_report() {
        let opts = options(CipherKind::Vigenere, Some("LEMON"), None);
        let report = run_cipher(Operation::Encrypt, "attack at dawn", &opts).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(report.render(true).unwrap().trim()).unwrap();
        assert_eq!(json["cipher"], "vigenere");
        assert_eq!(json["operation"], "encrypt");
        assert_eq!(json["output"], "LXFOPVEFRNHR");
    }

    #[test]
    fn test_errors_surface_typed() {
        let opts = options(CipherKind::Multiplicative, Some("13"), None);
        let err = run_cipher(Operation::Decrypt, "ABC", &opts).unwrap_err();
        assert!(err.is_invalid_key());

        let opts = options(CipherKind::Playfair, Some("KEY"), None);
        let err = run_cipher(Operation::Encrypt, "1234", &opts).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_read_input_sources() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("message.txt");
        std::fs::write(&path, "from a file\n").unwrap();

        assert_eq!(read_input(Some("inline"), None).unwrap(), "inline");
        assert_eq!(read_input(None, Some(&path)).unwrap(), "from a file\n");
        assert!(read_input(Some("inline"), Some(&path)).is_err());
        assert!(matches!(
            read_input(None, Some(&dir.path().join("missing.txt"))),
            Err(CipherError::Io(_))
        ));
    }
}
