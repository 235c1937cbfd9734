use rayon::prelude::*;

use crate::matrix::{BinaryMatrix, MatrixError, BLOCK_SIZE};

/// Bring a copy of `matrix` into reduced row echelon form over GF(2).
///
/// Columns are scanned left to right, and in each column the topmost row at or below the
/// current pivot position that has a one becomes the pivot. The pivot row is then added to
/// every other row with a one in that column, both above and below it.
/// All columns are treated alike, so any trailing columns of an augmented matrix simply
/// follow the same row operations.
///
/// `matrix` itself is left unchanged.
///
/// This takes O(rows * cols * min(rows, cols) / 64) time.
///
/// # Example
/// ```
/// use gf2rref::{rref_binary, BinaryMatrix};
///
/// let m = BinaryMatrix::from_rows([[1, 1], [1, 1]]).unwrap();
/// assert_eq!(rref_binary(&m).to_rows(), [[1, 1], [0, 0]]);
/// ```
pub fn rref_binary(matrix: &BinaryMatrix) -> BinaryMatrix {
    let mut m = matrix.clone();
    let (rows, cols) = m.shape();
    if rows == 0 {
        return m;
    }

    let mut pivot_row = 0;
    for col in 0..cols {
        let Some(pivot) = (pivot_row..rows).find(|&row| m.get(row, col)) else {
            continue;
        };
        m.swap_rows(pivot_row, pivot);

        // Rows at or below the pivot are zero left of `col`, so the earlier blocks can be skipped.
        let first_block = col / BLOCK_SIZE;
        for row in 0..rows {
            if row != pivot_row && m.get(row, col) {
                m.xor_row_into(pivot_row, row, first_block);
            }
        }

        pivot_row += 1;
        if pivot_row == rows {
            break;
        }
    }
    m
}

/// Same as [`rref_binary`], but for a matrix given as rows of integers.
///
/// The rows are validated the same way as in [`BinaryMatrix::from_rows`].
pub fn rref_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Result<Vec<Vec<u8>>, MatrixError>
where
    R: AsRef<[T]>,
    T: Copy + Into<i64>,
{
    let matrix = BinaryMatrix::from_rows(rows)?;
    Ok(rref_binary(&matrix).to_rows())
}

/// Same as [`rref_binary`], but operating directly on rows with one byte per entry.
///
/// The result is always identical to that of [`rref_binary`].
pub fn rref_binary_bytes(matrix: &[Vec<u8>]) -> Result<Vec<Vec<u8>>, MatrixError> {
    let cols = matrix.first().map_or(0, Vec::len);
    for (row, entries) in matrix.iter().enumerate() {
        if entries.len() != cols {
            return Err(MatrixError::InvalidShape {
                row,
                len: entries.len(),
                expected: cols,
            });
        }
        if let Some(col) = entries.iter().position(|&value| value > 1) {
            return Err(MatrixError::InvalidInput {
                row,
                col,
                value: entries[col].into(),
            });
        }
    }

    let mut m = matrix.to_vec();
    let rows = m.len();
    let mut pivot_row = 0;
    for col in 0..cols {
        let Some(pivot) = (pivot_row..rows).find(|&row| m[row][col] != 0) else {
            continue;
        };
        m.swap(pivot_row, pivot);

        let pivot_entries = m[pivot_row].clone();
        for (row, entries) in m.iter_mut().enumerate() {
            if row != pivot_row && entries[col] != 0 {
                for (entry, &p) in entries[col..].iter_mut().zip(&pivot_entries[col..]) {
                    *entry ^= p;
                }
            }
        }

        pivot_row += 1;
        if pivot_row == rows {
            break;
        }
    }
    Ok(m)
}

/// Bring each of the given matrices into reduced row echelon form, in parallel.
///
/// The `i`th output is `rref_binary(&matrices[i])`.
pub fn rref_binary_batch(matrices: &[BinaryMatrix]) -> Vec<BinaryMatrix> {
    matrices.par_iter().map(rref_binary).collect()
}

/// The rank of `matrix` over GF(2).
pub fn rank(matrix: &BinaryMatrix) -> usize {
    let reduced = rref_binary(matrix);
    (0..reduced.rows())
        .take_while(|&row| !reduced.row_is_zero(row))
        .count()
}

impl BinaryMatrix {
    /// Whether the matrix is in reduced row echelon form.
    ///
    /// That is, the leading column of each nonzero row is strictly greater than that of the row above,
    /// every zero row is below all nonzero rows, and each leading column has no other nonzero entries.
    pub fn is_rref(&self) -> bool {
        let mut last_leading = None;
        let mut seen_zero_row = false;
        for row in 0..self.rows() {
            let Some(col) = self.leading_column(row) else {
                seen_zero_row = true;
                continue;
            };
            if seen_zero_row || last_leading.is_some_and(|last| col <= last) {
                return false;
            }
            if (0..self.rows()).any(|other| other != row && self.get(other, col)) {
                return false;
            }
            last_leading = Some(col);
        }
        true
    }
}
