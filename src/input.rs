//! Raw cipher inputs as a presentation layer collects them

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grouping::explode;
use crate::product;

/// Caller-selected output options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Group the result into blocks for display (see [`explode`]).
    pub explode: bool,
}

impl Options {
    pub(crate) fn apply(&self, text: String) -> String {
        if self.explode { explode(&text) } else { text }
    }
}

/// Everything a form holds: both texts, the key, and the transpose key
/// exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CipherInput {
    pub plain_text: String,
    pub cipher_text: String,
    pub key: String,
    pub transpose_key: String,
}

impl CipherInput {
    /// Encrypt `plain_text`. Non-numeric transpose keys are reported as a
    /// `transposeKey` field error alongside any other missing input.
    pub fn encrypt(&self, options: &Options) -> Result<String> {
        let columns = product::parse_transpose_key(&self.transpose_key);
        let ciphertext = product::encrypt_checked(&self.plain_text, &self.key, columns)?;
        Ok(options.apply(ciphertext))
    }

    /// Decrypt `cipher_text`.
    pub fn decrypt(&self, options: &Options) -> Result<String> {
        let columns = product::parse_transpose_key(&self.transpose_key);
        let plaintext = product::decrypt_checked(&self.cipher_text, &self.key, columns)?;
        Ok(options.apply(plaintext))
    }
}
