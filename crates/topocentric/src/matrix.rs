//! Dense matrices and multiplication.
//!
//! Only small matrices are needed here (3×3 rotations applied to 3×1
//! columns), but multiplication is defined for any compatible shapes.

use glam::{DMat3, DVec3};

use crate::error::{Error, Result};

/// A dense row-major matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or `data` does not hold
    /// exactly `rows * cols` values.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 || data.len() != rows * cols {
            return Err(Error::InvalidMatrix {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from a fixed number of equally sized rows.
    pub fn from_rows<const R: usize, const C: usize>(rows: [[f64; C]; R]) -> Result<Self> {
        Self::new(R, C, rows.into_iter().flatten().collect())
    }

    /// The `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            rows: n,
            cols: n,
            data,
        }
    }

    /// A 3×1 column holding the components of `v`.
    pub fn column(v: DVec3) -> Self {
        Self {
            rows: 3,
            cols: 1,
            data: v.to_array().to_vec(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.rows && j < self.cols).then(|| self.data[i * self.cols + j])
    }

    /// Multiply `self` (m×n) by `rhs` (n×p), producing an m×p matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `self` has a different number
    /// of columns than `rhs` has rows.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::DimensionMismatch {
                left: (self.rows, self.cols),
                right: (rhs.rows, rhs.cols),
            });
        }

        let mut data = Vec::with_capacity(self.rows * rhs.cols);
        for i in 0..self.rows {
            let row = &self.data[i * self.cols..(i + 1) * self.cols];
            for j in 0..rhs.cols {
                // Fresh accumulator per output cell.
                let cell: f64 = row
                    .iter()
                    .enumerate()
                    .map(|(k, a)| a * rhs.data[k * rhs.cols + j])
                    .sum();
                data.push(cell);
            }
        }

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            data,
        })
    }

    /// Read a 3×1 matrix back as a vector.
    pub fn to_dvec3(&self) -> Option<DVec3> {
        (self.rows == 3 && self.cols == 1)
            .then(|| DVec3::new(self.data[0], self.data[1], self.data[2]))
    }
}

impl From<DMat3> for Matrix {
    fn from(m: DMat3) -> Self {
        // glam is column-major; rows are the columns of the transpose.
        let t = m.transpose();
        Self {
            rows: 3,
            cols: 3,
            data: [t.x_axis, t.y_axis, t.z_axis]
                .into_iter()
                .flat_map(|row| row.to_array())
                .collect(),
        }
    }
}

impl From<[[f64; 3]; 3]> for Matrix {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self {
            rows: 3,
            cols: 3,
            data: rows.into_iter().flatten().collect(),
        }
    }
}

/// Multiply `a` by `b`.
///
/// Free-function form of [`Matrix::multiply`].
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.multiply(b)
}
