//! De la Loubère ("Siamese") construction for odd-order magic squares.
//!
//! The method places 1..n² one value at a time, stepping diagonally with
//! wraparound and sidestepping along the row when the diagonal cell is
//! taken. For odd n this fills the grid with every row, column, and
//! diagonal summing to n(n² + 1)/2.
//!
//! Reference: <https://en.wikipedia.org/wiki/Siamese_method>

use crate::error::{Error, Result};
use crate::square::{MagicSquare, MAX_ORDER};

/// Builds the odd-order magic square of order `n`.
///
/// The construction is deterministic: the same `n` always yields the same
/// square. `build(1)` is the trivial `[[1]]` square.
///
/// # Errors
/// Returns [`Error::InvalidSize`] if `n` is zero, even, or greater than
/// [`MAX_ORDER`].
pub fn build(n: usize) -> Result<MagicSquare> {
    if n < 1 || n % 2 == 0 || n > MAX_ORDER {
        return Err(Error::InvalidSize(n));
    }

    let mut sq = MagicSquare::empty(n);
    let mut row = n / 2;
    let mut col = n - 1;
    sq.set_unchecked(row, col, 1);

    for v in 2..=(n * n) as u32 {
        // One diagonal step from the current cell, wrapping each
        // coordinate that would leave the grid.
        let (cand_row, cand_col) = if row < n - 1 && col < n - 1 {
            (row + 1, col + 1)
        } else if row == n - 1 && col < n - 1 {
            (0, col + 1)
        } else if col == n - 1 && row < n - 1 {
            (row + 1, 0)
        } else {
            (0, 0)
        };

        if sq.get(cand_row, cand_col) > 0 {
            // Diagonal cell already taken: sidestep one column back with
            // wraparound, keeping the row. This tie-break pins the exact
            // square produced; other Siamese variants yield different
            // (equally magic) grids.
            col = if col == 0 { n - 1 } else { col - 1 };
        } else {
            row = cand_row;
            col = cand_col;
        }
        sq.set_unchecked(row, col, v);
    }

    Ok(sq)
}
