//! The signature-`(a, b)` Hermitian form on `C^{a+b}`.

use crate::cyclotomic::Conjugate;
use crate::error::{InvariantError, Result};
use crate::matrix::Matrix;
use crate::polynomial::Polynomial;
use num_traits::Zero;

/// `⟨z, w⟩_{a,b} = Σ_{j<a} z_j conj(w_j) − Σ_{j≥a} z_j conj(w_j)`.
///
/// Both arguments must be column vectors of the same shape with `a + b` rows.
pub fn hermitian_inner_product(
    z: &Matrix<Polynomial>,
    w: &Matrix<Polynomial>,
    a: usize,
    b: usize,
) -> Result<Polynomial> {
    for v in [z, w] {
        if !v.is_column() {
            return Err(InvariantError::NotAColumn {
                rows: v.rows(),
                cols: v.cols(),
            });
        }
    }
    if z.shape() != w.shape() {
        return Err(InvariantError::ShapeMismatch {
            left: z.shape(),
            right: w.shape(),
        });
    }
    if z.rows() != a + b {
        return Err(InvariantError::DimensionMismatch {
            expected: a + b,
            actual: z.rows(),
        });
    }

    let mut result = Polynomial::zero();
    for j in 0..a + b {
        let summand = z[(j, 0)].mul_ref(&w[(j, 0)].conjugate());
        result = if j < a {
            result.add_ref(&summand)
        } else {
            result.sub_ref(&summand)
        };
    }
    Ok(result)
}
