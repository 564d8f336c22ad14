//! Text map codec.
//!
//! ## Wire format
//!
//! One line per grid row. Every cell is written as its glyph followed by a
//! single space, including the last cell of the row:
//!
//! ```text
//! S . . \n
//! . X . \n
//! . . F \n
//! ```
//!
//! Decoding does not re-tokenize on the spaces. Lines are split on `\n`
//! only and every other character is kept as a raw cell, so a field of width `W` decodes to a grid of width `2 * W`:
//! the real cell for column `x` sits at raw column `2 * x` and raw column
//! `2 * x + 1` is a [`Cell::Separator`].

use crate::cell::Cell;
use crate::error::DecodeError;
use crate::grid::Grid;

/// Separator glyph written after every cell.
pub const SEPARATOR: char = ' ';

/// Encode a field as wire text.
pub fn encode(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.bounds().len() * 2 + grid.height().max(0) as usize);
    for row in grid.rows() {
        for cell in row {
            out.push(cell.glyph());
            out.push(SEPARATOR);
        }
        out.push('\n');
    }
    out
}

/// Decode wire text into a raw-resolution grid.
///
/// Odd raw columns become [`Cell::Separator`]; even raw columns are
/// classified by glyph. The first row fixes the width; every other row
/// must match it.
pub fn decode(payload: &str) -> Result<Grid, DecodeError> {
    let mut rows = Vec::new();
    let mut width = 0;
    for (y, line) in payload.split_terminator('\n').enumerate() {
        let row: Vec<Cell> = line
            .chars()
            .enumerate()
            .map(|(x, ch)| {
                if x % 2 == 1 {
                    Cell::Separator
                } else {
                    Cell::from_glyph(ch)
                }
            })
            .collect();
        if y == 0 {
            width = row.len();
        } else if row.len() != width {
            return Err(DecodeError::RaggedRow {
                row: y,
                expected: width,
                actual: row.len(),
            });
        }
        rows.push(row);
    }
    if width == 0 {
        return Err(DecodeError::Empty);
    }
    Ok(Grid::from_rows(width, rows))
}
