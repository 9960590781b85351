//! Hermitian symmetry of functions of two vector variables.
//!
//! `f(z, w)` is Hermitian symmetric when `f(z, w) = conj(f(w, z))`. Two
//! equivalent tests are provided:
//!
//! * [`is_hermitian_symmetric`] swaps `z ↔ w`, conjugates and compares
//!   canonical forms;
//! * [`coefficient_matrix`] writes `f = Σ C_{αβ} z^α conj(w)^β` and
//!   [`CoefficientMatrix::is_hermitian`] checks `C = C^†`.
//!
//! The coefficient matrix is indexed by all multiindices in `[0, degree]^dim`
//! and gets large quickly, so it is stored as sparse rows.

use crate::cyclotomic::{Conjugate, Cyclotomic};
use crate::error::{InvariantError, Result};
use crate::matrix::Matrix;
use crate::polynomial::Polynomial;
use crate::symbols::{MultiIndex, Variable, VectorSymbol};
use num_traits::Zero;
use std::collections::BTreeMap;
use tracing::trace;

/// True if `f(z, w) == conj(f(w, z))` as exact polynomials.
///
/// `z` and `w` must have the same dimension.
///
/// ```
/// use hermitian_invariants::hermitian::is_hermitian_symmetric;
/// use hermitian_invariants::polynomial::Polynomial;
/// use hermitian_invariants::symbols::VectorSymbol;
/// use hermitian_invariants::cyclotomic::Conjugate;
///
/// let z = VectorSymbol::new("z", 1);
/// let w = VectorSymbol::new("w", 1);
/// let zw = Polynomial::variable(z.component(0)) * Polynomial::variable(w.component(0)).conjugate();
/// assert!(is_hermitian_symmetric(&zw, &z, &w).unwrap());
/// assert!(!is_hermitian_symmetric(&Polynomial::variable(z.component(0)), &z, &w).unwrap());
/// ```
pub fn is_hermitian_symmetric(f: &Polynomial, z: &VectorSymbol, w: &VectorSymbol) -> Result<bool> {
    if z.dim() != w.dim() {
        return Err(InvariantError::DimensionMismatch {
            expected: z.dim(),
            actual: w.dim(),
        });
    }

    // Swap through a name that does not occur in f.
    let occupied = f.free_vectors();
    let mut placeholder = format!("{}'", w.name());
    while occupied.contains(&placeholder) || placeholder == z.name() {
        placeholder.push('\'');
    }

    let swapped = f
        .rename_vector(z.name(), &placeholder)
        .rename_vector(w.name(), z.name())
        .rename_vector(&placeholder, w.name());

    let symmetric = *f == swapped.conjugate();
    trace!(z = z.name(), w = w.name(), terms = f.num_terms(), symmetric, "swap-and-conjugate check");
    Ok(symmetric)
}

/// One row of a [`CoefficientMatrix`]: `(column, value)` pairs sorted by
/// column, zero values omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseRow {
    entries: Vec<(usize, Cyclotomic)>,
}

impl SparseRow {
    /// Nonzero `(column, value)` pairs
    pub fn entries(&self) -> &[(usize, Cyclotomic)] {
        &self.entries
    }

    /// Value in column `col`, if nonzero
    pub fn get(&self, col: usize) -> Option<&Cyclotomic> {
        self.entries
            .binary_search_by_key(&col, |(c, _)| *c)
            .ok()
            .map(|pos| &self.entries[pos].1)
    }

    fn insert(&mut self, col: usize, value: Cyclotomic) {
        match self.entries.binary_search_by_key(&col, |(c, _)| *c) {
            Ok(pos) => {
                let sum = self.entries[pos].1.add_ref(&value);
                if sum.is_zero() {
                    self.entries.remove(pos);
                } else {
                    self.entries[pos].1 = sum;
                }
            }
            Err(pos) if !value.is_zero() => self.entries.insert(pos, (col, value)),
            Err(_) => {}
        }
    }
}

/// The matrix `C` of `f = Σ C_{αβ} z^α conj(w)^β`.
///
/// Rows follow `α` and columns follow `β`, both in the lexicographic order of
/// `[0, degree]^dim` (last component fastest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoefficientMatrix {
    dim: usize,
    degree: u32,
    size: usize,
    rows: BTreeMap<usize, SparseRow>,
}

impl CoefficientMatrix {
    fn empty(dim: usize, degree: u32) -> Result<Self> {
        if dim == 0 {
            return Err(InvariantError::invalid("dim", "must be at least 1"));
        }
        let base = degree as usize + 1;
        let size = u32::try_from(dim)
            .ok()
            .and_then(|d| base.checked_pow(d))
            .ok_or_else(|| InvariantError::invalid("degree", "coefficient basis does not fit in usize"))?;
        Ok(CoefficientMatrix {
            dim,
            degree,
            size,
            rows: BTreeMap::new(),
        })
    }

    /// Number of rows (and columns), `(degree + 1)^dim`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of each multiindex
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Largest exponent per component
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Row/column position of a multiindex, if it lies in `[0, degree]^dim`.
    pub fn position(&self, index: &[u32]) -> Option<usize> {
        if index.len() != self.dim || index.iter().any(|&e| e > self.degree) {
            return None;
        }
        let base = self.degree as usize + 1;
        Some(index.iter().fold(0, |acc, &e| acc * base + e as usize))
    }

    /// The multiindex at row/column `pos`, if `pos < size`.
    pub fn multiindex(&self, mut pos: usize) -> Option<MultiIndex> {
        if pos >= self.size {
            return None;
        }
        let base = self.degree as usize + 1;
        let mut index = vec![0; self.dim];
        for slot in index.iter_mut().rev() {
            *slot = (pos % base) as u32;
            pos /= base;
        }
        Some(index)
    }

    /// Entry `C_{ij}`; zero when absent.
    pub fn get(&self, i: usize, j: usize) -> Cyclotomic {
        self.rows
            .get(&i)
            .and_then(|row| row.get(j))
            .cloned()
            .unwrap_or_else(Cyclotomic::zero)
    }

    /// Row `i`, if it has any nonzero entry
    pub fn row(&self, i: usize) -> Option<&SparseRow> {
        self.rows.get(&i)
    }

    /// Nonzero entries `(row, col, value)` in row-major order.
    pub fn nonzero_entries(&self) -> impl Iterator<Item = (usize, usize, &Cyclotomic)> {
        self.rows
            .iter()
            .flat_map(|(&i, row)| row.entries.iter().map(move |(j, c)| (i, *j, c)))
    }

    /// Number of nonzero entries.
    pub fn nnz(&self) -> usize {
        self.rows.values().map(|row| row.entries.len()).sum()
    }

    fn insert(&mut self, i: usize, j: usize, value: Cyclotomic) {
        let row = self.rows.entry(i).or_default();
        row.insert(j, value);
        if row.entries.is_empty() {
            self.rows.remove(&i);
        }
    }

    /// `C^†`.
    pub fn conjugate_transpose(&self) -> CoefficientMatrix {
        let mut result = CoefficientMatrix {
            dim: self.dim,
            degree: self.degree,
            size: self.size,
            rows: BTreeMap::new(),
        };
        for (i, j, c) in self.nonzero_entries() {
            result.insert(j, i, c.conjugate());
        }
        result
    }

    /// `C == C^†`.
    pub fn is_hermitian(&self) -> bool {
        self.nonzero_entries()
            .all(|(i, j, c)| self.get(j, i) == c.conjugate())
    }

    /// The full dense matrix. Only sensible for small bases.
    pub fn to_dense(&self) -> Matrix<Cyclotomic> {
        let mut rows = vec![vec![Cyclotomic::zero(); self.size]; self.size];
        for (i, j, c) in self.nonzero_entries() {
            rows[i][j] = c.clone();
        }
        Matrix::from_fn(self.size, self.size, |i, j| {
            std::mem::replace(&mut rows[i][j], Cyclotomic::zero())
        })
    }
}

/// Extract `C` with `f = Σ C_{αβ} z^α conj(w)^β`, `α, β ∈ [0, degree]^dim`.
///
/// Every term of `f` must be a product of holomorphic components of `z` and
/// conjugated components of `w` with exponents at most `degree`; anything
/// else is [`InvariantError::TermOutsideBasis`].
pub fn coefficient_matrix(
    f: &Polynomial,
    z: &VectorSymbol,
    w: &VectorSymbol,
    degree: u32,
) -> Result<CoefficientMatrix> {
    if z.dim() != w.dim() {
        return Err(InvariantError::DimensionMismatch {
            expected: z.dim(),
            actual: w.dim(),
        });
    }
    let dim = z.dim();
    let mut matrix = CoefficientMatrix::empty(dim, degree)?;

    for (monomial, coefficient) in f.terms() {
        let outside = || InvariantError::TermOutsideBasis {
            term: monomial.to_string(),
        };
        let mut alpha = vec![0u32; dim];
        let mut beta = vec![0u32; dim];
        for (var, exp) in monomial.powers() {
            match var {
                Variable::Component {
                    vector,
                    index,
                    conjugated: false,
                } if vector == z.name() && *index < dim => alpha[*index] = exp,
                Variable::Component {
                    vector,
                    index,
                    conjugated: true,
                } if vector == w.name() && *index < dim => beta[*index] = exp,
                _ => return Err(outside()),
            }
        }
        let i = matrix.position(&alpha).ok_or_else(outside)?;
        let j = matrix.position(&beta).ok_or_else(outside)?;
        matrix.insert(i, j, coefficient.clone());
    }
    Ok(matrix)
}

/// True if `matrix` is square and equals its conjugate transpose.
pub fn is_hermitian_matrix(matrix: &Matrix<Cyclotomic>) -> bool {
    matrix.is_square() && *matrix == matrix.conjugate_transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariant::phi_gamma_z_w_polarized;

    fn pair(dim: usize) -> (VectorSymbol, VectorSymbol) {
        (VectorSymbol::new("z", dim), VectorSymbol::new("w", dim))
    }

    #[test]
    fn test_dimension_mismatch() {
        let z = VectorSymbol::new("z", 2);
        let w = VectorSymbol::new("w", 3);
        assert!(is_hermitian_symmetric(&Polynomial::default(), &z, &w).is_err());
        assert!(coefficient_matrix(&Polynomial::default(), &z, &w, 1).is_err());
    }

    #[test]
    fn test_imaginary_coefficient_breaks_symmetry() {
        let (z, w) = pair(1);
        let zw = Polynomial::variable(z.component(0)) * Polynomial::variable(w.component(0).conjugate());
        let i = Polynomial::constant(Cyclotomic::i());

        assert!(is_hermitian_symmetric(&zw, &z, &w).unwrap());
        assert!(!is_hermitian_symmetric(&(&i * &zw), &z, &w).unwrap());
        assert!(!is_hermitian_symmetric(&i, &z, &w).unwrap());
    }

    #[test]
    fn test_placeholder_does_not_collide() {
        let z = VectorSymbol::new("z", 1);
        let w = VectorSymbol::new("w", 1);
        let w_prime = Polynomial::variable(Variable::component("w'", 0));
        let w_prime = &w_prime * &w_prime.conjugate();
        assert!(is_hermitian_symmetric(&w_prime, &z, &w).unwrap());
    }

    #[test]
    fn test_coefficient_matrix_layout() {
        let (z, w) = pair(2);
        // 3 z1 conj(w0)
        let f = Polynomial::constant(Cyclotomic::from_integer(3))
            * Polynomial::variable(z.component(1))
            * Polynomial::variable(w.component(0).conjugate());
        let c = coefficient_matrix(&f, &z, &w, 1).unwrap();
        assert_eq!(c.size(), 4);
        assert_eq!(c.position(&[0, 1]), Some(1));
        assert_eq!(c.multiindex(2), Some(vec![1, 0]));
        assert_eq!(c.multiindex(3), Some(vec![1, 1]));
        assert_eq!(c.multiindex(4), None);
        assert_eq!(c.multiindex(5), None);
        assert_eq!(c.get(1, 2), Cyclotomic::from_integer(3));
        assert_eq!(c.nnz(), 1);
        assert!(!c.is_hermitian());
        assert!(!is_hermitian_matrix(&c.to_dense()));
    }

    #[test]
    fn test_terms_outside_basis() {
        let (z, w) = pair(1);
        let z_bar = Polynomial::variable(z.component(0).conjugate());
        assert!(matches!(
            coefficient_matrix(&z_bar, &z, &w, 1),
            Err(InvariantError::TermOutsideBasis { .. })
        ));
        let z_sq = Polynomial::variable(z.component(0)).pow(2);
        assert!(coefficient_matrix(&z_sq, &z, &w, 1).is_err());
        assert!(coefficient_matrix(&z_sq, &z, &w, 2).is_ok());
    }

    #[test]
    fn test_polarized_invariant_matrix_is_hermitian() {
        let inv = phi_gamma_z_w_polarized(1, 1, 3, &[1, 2]).unwrap();
        let c = coefficient_matrix(&inv.phi, &inv.z, &inv.w, 3).unwrap();
        assert!(c.is_hermitian());
        assert_eq!(c.conjugate_transpose(), c);
        assert!(is_hermitian_matrix(&c.to_dense()));
        assert!(is_hermitian_symmetric(&inv.phi, &inv.z, &inv.w).unwrap());
        // constant term 1 sits at (0, 0)
        assert_eq!(c.get(0, 0), Cyclotomic::from_integer(1));
    }
}
