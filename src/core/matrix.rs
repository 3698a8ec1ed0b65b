use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// Dense row-major matrix of `f64`, one row per example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    pub fn from_vec(rows: usize, cols: usize, values: Vec<f64>) -> Result<Matrix> {
        if values.len() != rows * cols {
            return Err(ModelError::DimensionMismatch {
                expected: rows * cols,
                actual: values.len(),
            });
        }
        Ok(Matrix { rows, cols, values })
    }

    /// Builds a matrix from rows; every row must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * cols);
        for row in &rows {
            if row.len() != cols {
                return Err(ModelError::DimensionMismatch {
                    expected: cols,
                    actual: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Matrix {
            rows: rows.len(),
            cols,
            values,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(ModelError::DimensionMismatch {
                expected: self.rows * self.cols,
                actual: row * self.cols + col,
            });
        }
        self.values[row * self.cols + col] = value;
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            Some(&self.values[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Copies a row out as a fresh feature vector.
    pub fn row(&self, row: usize) -> Option<Vec<f64>> {
        self.row_slice(row).map(<[f64]>::to_vec)
    }

    pub fn column(&self, col: usize) -> Option<Vec<f64>> {
        if col < self.cols {
            Some(
                (0..self.rows)
                    .map(|r| self.values[r * self.cols + col])
                    .collect(),
            )
        } else {
            None
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        // not chunks_exact: a zero-width matrix still has rows
        (0..self.rows).map(move |r| &self.values[r * self.cols..(r + 1) * self.cols])
    }
}
