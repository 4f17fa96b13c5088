use std::fmt;

/// The largest supported order. Bounds `n` so that `n²` fits a cell.
pub const MAX_ORDER: usize = 65_535;

/// A magic square of odd order `n`.
///
/// A magic square is an `n x n` grid containing each integer in `1..=n²`
/// exactly once, with every row, every column, and both main diagonals
/// summing to the magic constant `n(n² + 1)/2`. The invariant is
/// established by [`crate::build`] and the square is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicSquare {
    n: usize,
    cells: Vec<u32>,
}

impl MagicSquare {
    /// Creates an all-zero `n x n` grid for the constructor to fill.
    /// Zero means "empty" during construction and never survives it.
    pub(crate) fn empty(n: usize) -> Self {
        Self {
            n,
            cells: vec![0; n * n],
        }
    }

    /// Returns the order of the square.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the value at position `(r, c)`.
    ///
    /// # Panics
    /// Panics if `r >= n` or `c >= n`.
    pub fn get(&self, r: usize, c: usize) -> u32 {
        assert!(r < self.n && c < self.n, "index out of bounds");
        self.cells[r * self.n + c]
    }

    /// Sets the value at position `(r, c)` without checking the magic property.
    pub(crate) fn set_unchecked(&mut self, r: usize, c: usize, v: u32) {
        self.cells[r * self.n + c] = v;
    }

    /// Returns the cells as a flat slice in row-major order.
    ///
    /// The cell at position (r, c) is at index `r * n + c`.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Returns an iterator over the rows of the square.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.n)
    }

    /// Returns the magic constant `n(n² + 1)/2`: the common value of every
    /// row, column, and diagonal sum.
    pub fn magic_constant(&self) -> u64 {
        let n = self.n as u64;
        n * (n * n + 1) / 2
    }

    /// Returns the square as nested rows of `i64`, the interchange form
    /// consumed by [`crate::is_magic`].
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.rows()
            .map(|row| row.iter().map(|&v| i64::from(v)).collect())
            .collect()
    }
}

/// Renders the square one row per line. Every column except the last is
/// padded with spaces to the decimal width of `n²` plus one, so columns
/// align for any order. No trailing spaces, no trailing newline.
impl fmt::Display for MagicSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.n * self.n).to_string().len() + 1;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let (last, rest) = row.split_last().expect("rows are never empty");
            for v in rest {
                write!(f, "{v:<width$}")?;
            }
            write!(f, "{last}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build;

    #[test]
    fn magic_constant_matches_known_values() {
        assert_eq!(build(1).unwrap().magic_constant(), 1);
        assert_eq!(build(3).unwrap().magic_constant(), 15);
        assert_eq!(build(5).unwrap().magic_constant(), 65);
    }

    #[test]
    fn rows_and_cells_agree() {
        let sq = build(5).unwrap();
        let flattened: Vec<u32> = sq.rows().flatten().copied().collect();
        assert_eq!(flattened, sq.cells());
    }

    #[test]
    fn display_order_one_is_bare_value() {
        assert_eq!(build(1).unwrap().to_string(), "1");
    }

    #[test]
    fn display_order_three_golden() {
        let sq = build(3).unwrap();
        assert_eq!(sq.to_string(), "4 3 8\n9 5 1\n2 7 6");
    }

    #[test]
    fn display_pads_columns_to_max_value_width() {
        let sq = build(5).unwrap();
        let rendered = sq.to_string();
        // n² = 25 is two digits, so every column except the last spans
        // three characters and every line is 3*4 + len(last) wide.
        for line in rendered.lines() {
            let last = line.split_whitespace().last().unwrap();
            assert_eq!(line.len(), 12 + last.len(), "line {line:?}");
        }
    }

    #[test]
    fn display_has_no_trailing_whitespace_or_newline() {
        for n in [1, 3, 5, 9] {
            let rendered = build(n).unwrap().to_string();
            assert!(!rendered.ends_with('\n'), "n={n}: trailing newline");
            for line in rendered.lines() {
                assert_eq!(line, line.trim_end(), "n={n}: trailing spaces");
            }
        }
    }
}
