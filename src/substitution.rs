//! Keyed polyalphabetic substitution
//!
//! Each ASCII letter of the text is shifted by the next character of the
//! cycled key. Policy:
//! - Case is preserved; letters shift within their own case.
//! - Any other character passes through unchanged and does not consume a
//!   key character.
//! - A key letter of either case shifts by its alphabet position (A = 0).
//!   Any other key character shifts by its scalar value modulo 26.

use crate::error::{CipherError, ErrorCategory, ErrorKind, Result};

/// Number of letters in the substitution alphabet
const ALPHABET_LEN: u32 = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Apply the substitution (or its inverse) to `text` using `key`.
pub fn substitute(text: &str, key: &str, direction: Direction) -> Result<String> {
    if key.is_empty() {
        return Err(CipherError::with_kind(
            ErrorCategory::Internal,
            ErrorKind::InvalidKey,
            "substitution key must not be empty",
        ));
    }

    let mut shifts = key.chars().map(key_shift).cycle();
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        let base = if c.is_ascii_uppercase() {
            b'A'
        } else if c.is_ascii_lowercase() {
            b'a'
        } else {
            output.push(c);
            continue;
        };

        // The key is non-empty, so the cycle never ends.
        let shift = shifts.next().unwrap_or(0);
        let shift = match direction {
            Direction::Encode => shift,
            Direction::Decode => ALPHABET_LEN - shift,
        };
        let pos = (c as u32 - base as u32 + shift) % ALPHABET_LEN;
        output.push(char::from(base + pos as u8));
    }

    Ok(output)
}

/// Shift amount contributed by one key character, in `0..26`.
fn key_shift(k: char) -> u32 {
    if k.is_ascii_uppercase() {
        k as u32 - 'A' as u32
    } else if k.is_ascii_lowercase() {
        k as u32 - 'a' as u32
    } else {
        k as u32 % ALPHABET_LEN
    }
}
