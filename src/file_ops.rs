//! File encryption/decryption operations
//!
//! Reads UTF-8 text from a file, runs it through the product cipher and
//! writes the result atomically next to the destination path.

use crate::error::{CipherError, ErrorCategory, ErrorKind, Result};
use crate::input::Options;
use crate::key_reader::KeyReader;
use crate::product;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Encrypt a text file
///
/// Reads plaintext from `input_path`, encrypts it with the key from
/// `key_reader` and the raw `transpose_key`, and writes the ciphertext to
/// `output_path`.
///
/// The output file is created with mode 0o600 (read/write for owner only) on Unix systems.
pub fn encrypt_file(
    input_path: &Path,
    output_path: &Path,
    key_reader: &mut dyn KeyReader,
    transpose_key: &str,
    options: &Options,
) -> Result<()> {
    let plain_text = read_text(input_path)?;
    let key = key_reader.read_key()?;
    let columns = product::parse_transpose_key(transpose_key);
    let ciphertext = product::encrypt_checked(&plain_text, &key, columns)
        .map_err(|e| e.with_context("encryption failed"))?;
    let ciphertext = options.apply(ciphertext);
    write_file_atomic(output_path, ciphertext.as_bytes())
        .map_err(|e| e.with_context(format!("failed to write to {}", output_path.display())))?;

    Ok(())
}

/// Decrypt a text file
///
/// Reads ciphertext from `input_path`, decrypts it and writes the plaintext
/// to `output_path`. The input must be the ungrouped ciphertext: a file
/// written with `Options { explode: true }` has spaces inserted that are not
/// part of the ciphertext and will not decrypt to the original text.
///
/// The output file is created with mode 0o600 (read/write for owner only) on Unix systems.
pub fn decrypt_file(
    input_path: &Path,
    output_path: &Path,
    key_reader: &mut dyn KeyReader,
    transpose_key: &str,
    options: &Options,
) -> Result<()> {
    let cipher_text = read_text(input_path)?;
    let key = key_reader.read_key()?;
    let columns = product::parse_transpose_key(transpose_key);
    let plaintext = product::decrypt_checked(&cipher_text, &key, columns)
        .map_err(|e| e.with_context("decryption failed"))?;
    let plaintext = options.apply(plaintext);
    write_file_atomic(output_path, plaintext.as_bytes())
        .map_err(|e| e.with_context(format!("failed to write to {}", output_path.display())))?;

    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    String::from_utf8(bytes).map_err(|e| {
        CipherError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::InvalidEncoding,
            format!("{} is not valid UTF-8", path.display()),
            e,
        )
    })
}

/// Write `contents` to `path` via a tempfile in the same directory
/// (tempfile + fsync + rename), so `path` is never left half-written.
fn write_file_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut temp_file = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        CipherError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::Io,
            format!("failed to create tempfile in {}", dir.display()),
            e,
        )
    })?;

    temp_file.write_all(contents).map_err(|e| {
        CipherError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to write to tempfile",
            e,
        )
    })?;
    temp_file.flush().map_err(|e| {
        CipherError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to flush tempfile",
            e,
        )
    })?;
    temp_file.as_file().sync_all().map_err(|e| {
        CipherError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            "failed to sync file prior to rename",
            e,
        )
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp_file
            .as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(|e| {
                CipherError::with_kind_and_source(
                    ErrorCategory::Internal,
                    ErrorKind::Io,
                    "failed to set tempfile permissions",
                    e,
                )
            })?;
    }

    temp_file.persist(path).map_err(|e| {
        CipherError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::Io,
            format!("failed to rename to target file {}", path.display()),
            e,
        )
    })?;
    Ok(())
}

fn read_error(path: &Path, err: io::Error) -> CipherError {
    let category = if err.kind() == io::ErrorKind::NotFound {
        ErrorCategory::User
    } else {
        ErrorCategory::Internal
    };
    CipherError::with_kind_and_source(
        category,
        ErrorKind::Io,
        format!("failed to read from {}", path.display()),
        err,
    )
}
