//! Columnar transposition
//!
//! Text is written row-major into a grid `columns` wide and read back
//! column-major in natural column order. The last row is padded with empty
//! cells, which are skipped on read-out, so the output always has the same
//! length as the input and the decoder can recover the grid shape from the
//! length alone.

use crate::error::{CipherError, ErrorCategory, ErrorKind, Result};
use crate::substitution::Direction;

/// Smallest column count that actually rearranges text
pub const MIN_COLUMNS: usize = 2;

/// Apply the transposition (or its inverse) to `text` over `columns` columns.
pub fn transpose(text: &str, columns: usize, direction: Direction) -> Result<String> {
    if columns < MIN_COLUMNS {
        return Err(CipherError::with_kind(
            ErrorCategory::Internal,
            ErrorKind::InvalidColumnCount,
            format!(
                "transposition needs at least {} columns, got {}",
                MIN_COLUMNS, columns
            ),
        ));
    }

    let cells: Vec<char> = text.chars().collect();
    // Beyond one column per character every extra column is empty, so the
    // grid is the same and the work stays proportional to the text.
    let columns = columns.min(cells.len().max(MIN_COLUMNS));
    let out = match direction {
        Direction::Encode => encode(&cells, columns),
        Direction::Decode => decode(&cells, columns)?,
    };
    Ok(out.into_iter().collect())
}

fn encode(cells: &[char], columns: usize) -> Vec<char> {
    let mut out = Vec::with_capacity(cells.len());
    for col in 0..columns {
        out.extend(cells.iter().skip(col).step_by(columns));
    }
    out
}

fn decode(cells: &[char], columns: usize) -> Result<Vec<char>> {
    let len = cells.len();
    let rows = len.div_ceil(columns);
    let full_columns = match len % columns {
        0 => columns,
        r => r,
    };

    let mut grid = vec!['\0'; len];
    let mut pos = 0;
    for col in 0..columns {
        let height = if col < full_columns { rows } else { rows - 1 };
        for row in 0..height {
            grid[row * columns + col] = cells[pos];
            pos += 1;
        }
    }

    if pos != len {
        return Err(CipherError::with_kind(
            ErrorCategory::Internal,
            ErrorKind::InternalInvariant,
            format!("transposition grid consumed {} of {} characters", pos, len),
        ));
    }

    Ok(grid)
}
