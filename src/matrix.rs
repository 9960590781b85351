//! Small dense matrices over cyclotomic scalars or polynomials.
//!
//! Group elements, the signature matrix `I_{a,b}`, explicit column vectors and
//! coefficient matrices are all `Matrix<T>`. Storage is row-major.

use crate::cyclotomic::Conjugate;
use crate::error::{InvariantError, Result};
use num_traits::{One, Zero};
use std::fmt::{self, Display};
use std::ops::{Add, Index, Mul};

/// A dense `rows × cols` matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Create a matrix from row-major data; `data.len()` must be `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(InvariantError::DimensionMismatch {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Create a matrix from rows of equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(InvariantError::DimensionMismatch {
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Matrix {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Build entry `(i, j)` as `f(i, j)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Matrix { rows, cols, data }
    }

    /// A column vector.
    pub fn column(entries: Vec<T>) -> Self {
        Matrix {
            rows: entries.len(),
            cols: 1,
            data: entries,
        }
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if rows == cols
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True for `n × 1` matrices.
    pub fn is_column(&self) -> bool {
        self.cols == 1
    }

    /// Entry `(i, j)`, or `None` out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.rows && j < self.cols {
            self.data.get(i * self.cols + j)
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// All entries in row-major order.
    pub fn entries(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix, returning its row-major entries
    pub fn into_entries(self) -> Vec<T> {
        self.data
    }

    /// Apply `f` entrywise.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Transpose
    pub fn transpose(&self) -> Matrix<T> {
        Matrix::from_fn(self.cols, self.rows, |i, j| self[(j, i)].clone())
    }
}

impl<T: Clone + Zero> Matrix<T> {
    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Square matrix with `diagonal` on the diagonal.
    pub fn diagonal(diagonal: Vec<T>) -> Self {
        let n = diagonal.len();
        let mut result = Self::zeros(n, n);
        for (j, d) in diagonal.into_iter().enumerate() {
            result.data[j * n + j] = d;
        }
        result
    }
}

impl<T: Clone + Zero + One> Matrix<T> {
    /// `n x n` identity
    pub fn identity(n: usize) -> Self {
        Self::diagonal(vec![T::one(); n])
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One,
    for<'a> &'a T: Add<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    /// Matrix product; the inner dimensions must agree.
    pub fn mul_ref(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != other.rows {
            return Err(InvariantError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    let lhs = &self.data[i * self.cols + k];
                    let rhs = &other.data[k * other.cols + j];
                    if lhs.is_zero() || rhs.is_zero() {
                        continue;
                    }
                    let product = lhs * rhs;
                    acc = &acc + &product;
                }
                data.push(acc);
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// `self^exp` for square matrices; `exp == 0` gives the identity.
    pub fn pow(&self, exp: u32) -> Result<Matrix<T>> {
        if !self.is_square() {
            return Err(InvariantError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut result = Matrix::identity(self.rows);
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul_ref(&base)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.mul_ref(&base)?;
            }
        }
        Ok(result)
    }
}

impl<T: Clone + Conjugate> Matrix<T> {
    /// `A^†`, the conjugate transpose.
    pub fn conjugate_transpose(&self) -> Matrix<T> {
        Matrix::from_fn(self.cols, self.rows, |i, j| self[(j, i)].conjugate())
    }
}

impl<T: Conjugate> Conjugate for Matrix<T> {
    /// Entrywise conjugate, without transposing.
    fn conjugate(&self) -> Self {
        self.map(Conjugate::conjugate)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.rows && j < self.cols, "index ({}, {}) out of bounds", i, j);
        &self.data[i * self.cols + j]
    }
}

impl<T: Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[i * self.cols + j])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
