use std::{error::Error, fmt::Display, mem};

use rand::{Rng, SeedableRng, rngs::SmallRng};

pub(crate) type BitBlock = u64;
pub(crate) const BLOCK_SIZE: usize = mem::size_of::<BitBlock>() * 8;

/// A dense matrix over GF(2).
///
/// The matrix
/// ```text
/// a11 a12 ... a1m
/// a21 a22 ... a2m
/// ...
/// an1 an2 ... anm
/// ```
/// is layed out row-wise, with each row right-padded with zeros to take up a whole number of blocks.
/// Within a block, column `j` occupies bit `j % BLOCK_SIZE` counted from the most significant bit,
/// so adding one row to another is a plain XOR of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMatrix {
    rows: usize,
    cols: usize,
    blocks: Vec<BitBlock>,
}
impl BinaryMatrix {
    /// Create a `rows` × `cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        BinaryMatrix {
            rows,
            cols,
            blocks: vec![0; rows * row_block_length(cols)],
        }
    }

    /// Create the `n` × `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut matrix = BinaryMatrix::zeros(n, n);
        for i in 0..n {
            matrix.set(i, i, true);
        }
        matrix
    }

    /// Build a matrix from rows of integers, each of which must be either 0 or 1.
    ///
    /// The number of columns is taken from the first row. Use [`BinaryMatrix::from_rows_with_cols`]
    /// to build a matrix with no rows but a nonzero number of columns.
    ///
    /// # Example
    /// ```
    /// use gf2rref::BinaryMatrix;
    ///
    /// let m = BinaryMatrix::from_rows([[1, 0, 1], [0, 1, 1]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.get(1, 2));
    /// ```
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Result<Self, MatrixError>
    where
        R: AsRef<[T]>,
        T: Copy + Into<i64>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        BinaryMatrix::from_rows_with_cols(cols, rows)
    }

    /// Same as [`BinaryMatrix::from_rows`], but with an explicit number of columns that every row must match.
    pub fn from_rows_with_cols<R, T>(
        cols: usize,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self, MatrixError>
    where
        R: AsRef<[T]>,
        T: Copy + Into<i64>,
    {
        let row_len = row_block_length(cols);
        let mut blocks = Vec::new();
        let mut row_count = 0;
        for (row, entries) in rows.into_iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != cols {
                return Err(MatrixError::InvalidShape {
                    row,
                    len: entries.len(),
                    expected: cols,
                });
            }

            blocks.resize(blocks.len() + row_len, 0);
            let offset = row * row_len;
            for (col, &value) in entries.iter().enumerate() {
                match Into::<i64>::into(value) {
                    0 => {}
                    1 => blocks[offset + col / BLOCK_SIZE] |= bitmask(col % BLOCK_SIZE),
                    value => {
                        log::debug!("Rejecting entry {value} at ({row}, {col})");
                        return Err(MatrixError::InvalidInput { row, col, value });
                    }
                }
            }
            row_count += 1;
        }
        Ok(BinaryMatrix {
            rows: row_count,
            cols,
            blocks,
        })
    }

    /// Create a matrix with uniformly random entries.
    pub fn random(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        BinaryMatrix::random_with_rng(rows, cols, &mut rng)
    }

    /// Create a matrix with uniformly random entries drawn from `rng`.
    pub fn random_with_rng<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let row_len = row_block_length(cols);
        let mut matrix = BinaryMatrix::zeros(rows, cols);
        for row in 0..rows {
            for i in 0..row_len {
                matrix.blocks[row * row_len + i] = rng.random::<BitBlock>() & valid_bits(cols, i);
            }
        }
        matrix
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The pair `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get the entry in the given position.
    ///
    /// # Panics
    /// If the position is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.check_position(row, col);
        self.blocks[self.block_index(row, col / BLOCK_SIZE)] & bitmask(col % BLOCK_SIZE) != 0
    }

    /// Set the entry in the given position.
    ///
    /// # Panics
    /// If the position is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.check_position(row, col);
        let block_index = self.block_index(row, col / BLOCK_SIZE);
        if value {
            self.blocks[block_index] |= bitmask(col % BLOCK_SIZE);
        } else {
            self.blocks[block_index] &= !bitmask(col % BLOCK_SIZE);
        }
    }

    /// Whether every entry of the given row is zero.
    pub fn row_is_zero(&self, row: usize) -> bool {
        self.row_blocks(row).iter().all(|&block| block == 0)
    }

    /// The column of the first nonzero entry of the given row, if any.
    pub fn leading_column(&self, row: usize) -> Option<usize> {
        self.row_blocks(row)
            .iter()
            .enumerate()
            .find(|(_, &block)| block != 0)
            .map(|(i, block)| i * BLOCK_SIZE + block.leading_zeros() as usize)
    }

    /// Convert into rows of 0s and 1s.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|row| (0..self.cols).map(|col| u8::from(self.get(row, col))).collect())
            .collect()
    }

    /// Swap the rows `row1` and `row2`.
    pub(crate) fn swap_rows(&mut self, row1: usize, row2: usize) {
        if row1 == row2 {
            return;
        }
        for i in 0..row_block_length(self.cols) {
            let a = self.block_index(row1, i);
            let b = self.block_index(row2, i);
            self.blocks.swap(a, b);
        }
    }

    /// Add row `source` to row `target`, skipping the blocks before `first_block`.
    ///
    /// The caller must ensure that `source` is zero in the skipped blocks.
    pub(crate) fn xor_row_into(&mut self, source: usize, target: usize, first_block: usize) {
        debug_assert!(self.row_blocks(source)[..first_block].iter().all(|&b| b == 0));
        for i in first_block..row_block_length(self.cols) {
            let source_block = self.blocks[self.block_index(source, i)];
            let target_index = self.block_index(target, i);
            self.blocks[target_index] ^= source_block;
        }
    }

    fn row_blocks(&self, row: usize) -> &[BitBlock] {
        assert!(row < self.rows, "Row {row} out of range for {} rows", self.rows);
        let row_len = row_block_length(self.cols);
        &self.blocks[row * row_len..(row + 1) * row_len]
    }

    /// Get the index of the i'th block of the `row`th row.
    fn block_index(&self, row: usize, i: usize) -> usize {
        debug_assert!(row < self.rows);
        debug_assert!(i < row_block_length(self.cols));
        row * row_block_length(self.cols) + i
    }

    fn check_position(&self, row: usize, col: usize) {
        assert!(
            row < self.rows && col < self.cols,
            "Position ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
    }
}
impl Display for BinaryMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                write!(f, "{}", if self.get(row, col) { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Row `row` has `len` entries where `expected` were required.
    InvalidShape {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// The entry at (`row`, `col`) is neither 0 nor 1.
    InvalidInput { row: usize, col: usize, value: i64 },
}
impl Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::InvalidShape { row, len, expected } => {
                write!(
                    f,
                    "Row {row} has {len} entries, but the matrix has {expected} columns"
                )
            }
            MatrixError::InvalidInput { row, col, value } => {
                write!(
                    f,
                    "Entry {value} at ({row}, {col}) is not an element of GF(2)"
                )
            }
        }
    }
}
impl Error for MatrixError {}

/// Get the bitmask for the i'th bit, e.g.
///
/// ```text
/// bitmask(0) -> 10000000
/// bitmask(1) -> 01000000
/// bitmask(6) -> 00000010
/// ```
///
/// # Panics
/// If `i` is greater than or equal to `BLOCK_SIZE` in debug mode.
fn bitmask(i: usize) -> BitBlock {
    debug_assert!(i < BLOCK_SIZE);
    1 << (BLOCK_SIZE - 1 - i)
}

/// Get the mask of the bits in the i'th block of a row that correspond to actual columns.
fn valid_bits(cols: usize, i: usize) -> BitBlock {
    let used = cols - i * BLOCK_SIZE;
    if used >= BLOCK_SIZE {
        BitBlock::MAX
    } else {
        !(BitBlock::MAX >> used)
    }
}

/// Get the block-length of a row with `cols` columns.
pub(crate) fn row_block_length(cols: usize) -> usize {
    cols.div_ceil(BLOCK_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmask_is_msb_first() {
        assert_eq!(bitmask(0), 1 << 63);
        assert_eq!(bitmask(63), 1);
    }

    #[test]
    fn random_keeps_padding_zero() {
        let m = BinaryMatrix::random(7, 70, 5);
        for row in 0..7 {
            assert_eq!(m.row_blocks(row)[1] & !valid_bits(70, 1), 0);
        }
    }

    #[test]
    fn leading_column_across_blocks() {
        let mut m = BinaryMatrix::zeros(2, 130);
        m.set(0, 129, true);
        m.set(1, 64, true);
        m.set(1, 100, true);
        assert_eq!(m.leading_column(0), Some(129));
        assert_eq!(m.leading_column(1), Some(64));

        m.set(0, 129, false);
        assert_eq!(m.leading_column(0), None);
        assert!(m.row_is_zero(0));
    }

    #[test]
    fn display() {
        let m = BinaryMatrix::from_rows([[1, 0, 1], [0, 1, 0]]).unwrap();
        assert_eq!(m.to_string(), "101\n010");
    }

    #[test]
    fn swap_rows() {
        let mut m = BinaryMatrix::from_rows([[1, 0], [0, 1]]).unwrap();
        m.swap_rows(0, 1);
        assert_eq!(m.to_rows(), [[0, 1], [1, 0]]);
    }

    #[test]
    #[should_panic]
    fn get_out_of_range() {
        BinaryMatrix::zeros(2, 2).get(0, 2);
    }
}
