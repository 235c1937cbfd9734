use pyo3::{exceptions::PyValueError, prelude::*};

pub mod bits;
mod matrix;
pub mod parity;
pub mod phase;
mod rref;
pub mod timing;

pub use matrix::{BinaryMatrix, MatrixError};
pub use rref::{rank, rref_binary, rref_binary_batch, rref_binary_bytes, rref_rows};

impl From<MatrixError> for PyErr {
    fn from(err: MatrixError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Bring the given matrix of 0s and 1s into reduced row echelon form over GF(2).
#[pyfunction]
#[pyo3(name = "rref_binary")]
fn py_rref_binary(matrix: Vec<Vec<i64>>) -> PyResult<Vec<Vec<i64>>> {
    // Vec<u8> would be converted to `bytes`.
    Ok(rref_rows(matrix)?
        .into_iter()
        .map(|row| row.into_iter().map(i64::from).collect())
        .collect())
}

/// The rank over GF(2) of the given matrix of 0s and 1s.
#[pyfunction]
#[pyo3(name = "rank")]
fn py_rank(matrix: Vec<Vec<i64>>) -> PyResult<usize> {
    Ok(rank(&BinaryMatrix::from_rows(matrix)?))
}

#[pymodule]
#[pyo3(name = "gf2rref")]
pub fn python_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_rref_binary, m)?)?;
    m.add_function(wrap_pyfunction!(py_rank, m)?)?;
    Ok(())
}
