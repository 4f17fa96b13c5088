//! Structural validation of candidate magic squares.
//!
//! The validator is independent of the constructor: it takes an arbitrary
//! grid of integers and decides whether it has the magic property. It
//! never errors; every malformed shape is just "not magic".

/// Returns true if `grid` is an odd-order magic square.
///
/// The checks short-circuit in order: the grid must have an odd, non-zero
/// number of rows; every row must be as long as there are rows and every
/// entry strictly positive; no value may repeat; and every row, column,
/// and both main diagonals must sum to `n(n² + 1)/2`.
///
/// Any input is acceptable — empty, ragged, even-sided, or containing
/// non-positive or duplicate values — and yields `false` rather than an
/// error, so untrusted grids can be tested without failure handling.
pub fn is_magic(grid: &[Vec<i64>]) -> bool {
    let n = grid.len();
    if n == 0 || n % 2 == 0 {
        return false;
    }

    for row in grid {
        if row.len() != n || row.iter().any(|&v| v <= 0) {
            return false;
        }
    }

    let mut values: Vec<i64> = grid.iter().flatten().copied().collect();
    values.sort_unstable();
    if values.windows(2).any(|pair| pair[0] == pair[1]) {
        return false;
    }

    // Sums accumulate in i128 so no i64 candidate values can overflow.
    let n_wide = n as i128;
    let target = n_wide * (n_wide * n_wide + 1) / 2;

    for i in 0..n {
        let row_sum: i128 = grid[i].iter().map(|&v| i128::from(v)).sum();
        let col_sum: i128 = grid.iter().map(|row| i128::from(row[i])).sum();
        if row_sum != target || col_sum != target {
            return false;
        }
    }

    let diag: i128 = (0..n).map(|i| i128::from(grid[i][i])).sum();
    let anti: i128 = (0..n).map(|i| i128::from(grid[i][n - 1 - i])).sum();
    diag == target && anti == target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build;

    fn golden_3x3() -> Vec<Vec<i64>> {
        vec![vec![4, 3, 8], vec![9, 5, 1], vec![2, 7, 6]]
    }

    #[test]
    fn accepts_constructed_squares() {
        for n in [1, 3, 5, 7, 9, 15] {
            let sq = build(n).unwrap();
            assert!(is_magic(&sq.to_rows()), "n={n}");
        }
    }

    #[test]
    fn accepts_hand_written_square() {
        // The canonical 3x3 square, which the constructor does not produce.
        let grid = vec![vec![8, 1, 6], vec![3, 5, 7], vec![4, 9, 2]];
        assert!(is_magic(&grid));
    }

    #[test]
    fn accepts_trivial_square() {
        assert!(is_magic(&[vec![1]]));
    }

    #[test]
    fn rejects_trivial_square_with_wrong_value() {
        // A lone positive value still has to equal the magic constant 1.
        assert!(!is_magic(&[vec![5]]));
    }

    #[test]
    fn rejects_empty_grid() {
        assert!(!is_magic(&[]));
    }

    #[test]
    fn rejects_even_sided_grid() {
        let grid = vec![vec![1, 2], vec![3, 4]];
        assert!(!is_magic(&grid));
    }

    #[test]
    fn rejects_ragged_grid() {
        let grid = vec![vec![4, 3, 8], vec![9, 5], vec![2, 7, 6]];
        assert!(!is_magic(&grid));
    }

    #[test]
    fn rejects_non_square_grid() {
        let grid = vec![vec![4, 3, 8, 1], vec![9, 5, 1, 2], vec![2, 7, 6, 3]];
        assert!(!is_magic(&grid));
    }

    #[test]
    fn rejects_zero_and_negative_values() {
        let mut grid = golden_3x3();
        grid[1][1] = 0;
        assert!(!is_magic(&grid));
        grid[1][1] = -5;
        assert!(!is_magic(&grid));
    }

    #[test]
    fn rejects_duplicate_values() {
        let mut grid = golden_3x3();
        grid[0][0] = 7;
        assert!(!is_magic(&grid));
    }

    #[test]
    fn rejects_broken_sums() {
        // Swapping two cells within a row keeps the values distinct and
        // the row sum intact, but breaks column and diagonal sums.
        let mut grid = golden_3x3();
        grid[0].swap(0, 2);
        assert!(!is_magic(&grid));
    }

    #[test]
    fn rejects_correct_sums_on_wrong_diagonal() {
        // Rows and columns sum to 15 but the diagonals do not.
        let grid = vec![vec![1, 5, 9], vec![6, 7, 2], vec![8, 3, 4]];
        assert!(!is_magic(&grid));
    }

    #[test]
    fn repeated_checks_agree() {
        let grid = golden_3x3();
        assert_eq!(is_magic(&grid), is_magic(&grid));
    }
}
