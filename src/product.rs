//! Product cipher: substitution composed with columnar transposition
//!
//! Encryption substitutes then transposes; decryption undoes the
//! transposition first and the substitution second. All required inputs are
//! checked up front and every problem is reported in a single
//! [`ErrorKind::MissingInput`](crate::error::ErrorKind::MissingInput) error.

use crate::error::{CipherError, Field, FieldError, Result};
use crate::substitution::{Direction, substitute};
use crate::transposition::{MIN_COLUMNS, transpose};

/// Outcome of checking the transpose key on its own.
pub(crate) type ColumnCheck = std::result::Result<usize, FieldError>;

/// Encrypt `plain_text` with the substitution `key` and `transpose_key` columns.
pub fn encrypt(plain_text: &str, key: &str, transpose_key: Option<i64>) -> Result<String> {
    encrypt_checked(plain_text, key, check_transpose_key(transpose_key))
}

/// Decrypt `cipher_text` produced by [`encrypt`] with the same key pair.
pub fn decrypt(cipher_text: &str, key: &str, transpose_key: Option<i64>) -> Result<String> {
    decrypt_checked(cipher_text, key, check_transpose_key(transpose_key))
}

pub(crate) fn encrypt_checked(plain_text: &str, key: &str, columns: ColumnCheck) -> Result<String> {
    let columns = validate(Field::PlainText, plain_text, key, columns)?;
    let substituted = substitute(plain_text, key, Direction::Encode)?;
    transpose(&substituted, columns, Direction::Encode)
}

pub(crate) fn decrypt_checked(cipher_text: &str, key: &str, columns: ColumnCheck) -> Result<String> {
    let columns = validate(Field::CipherText, cipher_text, key, columns)?;
    let untransposed = transpose(cipher_text, columns, Direction::Decode)?;
    substitute(&untransposed, key, Direction::Decode)
}

/// Check a numeric transpose key.
pub(crate) fn check_transpose_key(transpose_key: Option<i64>) -> ColumnCheck {
    let Some(n) = transpose_key else {
        return Err(FieldError::new(
            Field::TransposeKey,
            "transpose key is required",
        ));
    };
    if n < MIN_COLUMNS as i64 {
        return Err(FieldError::new(
            Field::TransposeKey,
            format!("transpose key must be at least {}", MIN_COLUMNS),
        ));
    }
    // Widths past the text length all produce the same grid, so saturate.
    Ok(usize::try_from(n).unwrap_or(usize::MAX))
}

/// Check a transpose key as typed by a user. Blank text counts as absent.
pub(crate) fn parse_transpose_key(raw: &str) -> ColumnCheck {
    let raw = raw.trim();
    if raw.is_empty() {
        return check_transpose_key(None);
    }
    match raw.parse::<i64>() {
        Ok(n) => check_transpose_key(Some(n)),
        Err(_) => Err(FieldError::new(
            Field::TransposeKey,
            "transpose key must be a whole number",
        )),
    }
}

fn validate(text_field: Field, text: &str, key: &str, columns: ColumnCheck) -> Result<usize> {
    let mut errors = Vec::new();

    if text.is_empty() {
        let message = match text_field {
            Field::CipherText => "cipher text is required",
            _ => "plain text is required",
        };
        errors.push(FieldError::new(text_field, message));
    }
    if key.is_empty() {
        errors.push(FieldError::new(Field::Key, "key is required"));
    }

    match columns {
        Ok(columns) if errors.is_empty() => Ok(columns),
        Ok(_) => Err(CipherError::validation(errors)),
        Err(e) => {
            errors.push(e);
            Err(CipherError::validation(errors))
        }
    }
}
