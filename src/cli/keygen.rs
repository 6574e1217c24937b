use crate::error::Result;
use crate::keygen::{generate_key, KeygenOptions};
use crate::kind::CipherKind;

/// Generate a key and render it as ready-to-paste command-line arguments,
/// or as the tagged JSON form of the cipher when `json` is set
pub fn show_keygen(kind: CipherKind, options: &KeygenOptions, json: bool) -> Result<String> {
    let cipher = generate_key(kind, options)?;
    if json {
        return Ok(format!("{}\n", serde_json::to_string(&cipher)?));
    }
    Ok(format!("{}\n", cipher.key_args().join(" ")))
}
