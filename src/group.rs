//! Cyclic diagonal groups `Γ(p; q) ⊂ U(a, b)`.
//!
//! `Γ(p; q)` is generated by `S = diag(ω^{q_0}, …, ω^{q_{n-1}})` for a
//! primitive `p`-th root of unity `ω`. See D'Angelo and Lichtblau,
//! *Spherical space forms, CR mappings, and proper maps between balls*, p. 395.

use crate::cyclotomic::{Cyclotomic, CyclotomicField};
use crate::error::{InvariantError, Result};
use crate::matrix::Matrix;
use num_traits::{One, Zero};
use tracing::trace;

/// `[k : 1 ≤ k < modulus, gcd(k, modulus) = 1]`.
pub fn coprime_set(modulus: u32) -> Vec<u32> {
    (1..modulus)
        .filter(|&k| num_integer::gcd(k, modulus) == 1)
        .collect()
}

/// `exp(2πik/p)` for every `k` in [`coprime_set(p)`](coprime_set).
pub fn primitive_roots(p: u32) -> Result<Vec<Cyclotomic>> {
    Ok(CyclotomicField::new(p)?.primitive_roots())
}

/// `ω = exp(2πi/p)`.
pub fn omega(p: u32) -> Result<Cyclotomic> {
    Ok(CyclotomicField::new(p)?.generator())
}

/// The `p` elements `S^0, …, S^{p-1}` of `Γ(p; q)`, where
/// `S = diag(omega^{q_j})`.
///
/// `q` must have length `a + b` with every entry in `[1, p-1]`. Element 0 is
/// always the identity.
///
/// ```
/// use hermitian_invariants::group::{omega, type_iii_group};
///
/// let group = type_iii_group(1, 1, 3, &[1, 2], &omega(3).unwrap()).unwrap();
/// assert_eq!(group.len(), 3);
/// ```
pub fn type_iii_group(
    a: usize,
    b: usize,
    p: u32,
    q: &[u32],
    omega: &Cyclotomic,
) -> Result<Vec<Matrix<Cyclotomic>>> {
    let n = a + b;
    if q.len() != n {
        return Err(InvariantError::DimensionMismatch {
            expected: n,
            actual: q.len(),
        });
    }
    if n == 0 {
        return Err(InvariantError::invalid("a + b", "dimension must be at least 1"));
    }
    if p == 0 {
        return Err(InvariantError::invalid("p", "group order must be at least 1"));
    }
    if let Some(&bad) = q.iter().find(|&&q_j| q_j == 0 || q_j >= p) {
        return Err(InvariantError::invalid(
            "q",
            format!("exponent {} is outside [1, {}]", bad, p.saturating_sub(1)),
        ));
    }

    let s = Matrix::diagonal(q.iter().map(|&q_j| omega.pow(q_j)).collect());
    trace!(a, b, p, ?q, "building type III group");

    let mut elements = Vec::with_capacity(p as usize);
    let mut gamma = Matrix::identity(n);
    for _ in 0..p {
        let next = gamma.mul_ref(&s)?;
        elements.push(gamma);
        gamma = next;
    }
    debug_assert!(elements.first().map_or(false, is_identity));
    Ok(elements)
}

/// `I_{a,b} = diag(1, …, 1, -1, …, -1)` with `a` ones and `b` minus ones.
pub fn indefinite_identity(a: usize, b: usize) -> Result<Matrix<Cyclotomic>> {
    if a + b == 0 {
        return Err(InvariantError::invalid("a + b", "dimension must be at least 1"));
    }
    let diagonal = std::iter::repeat(Cyclotomic::one())
        .take(a)
        .chain(std::iter::repeat(-Cyclotomic::one()).take(b))
        .collect();
    Ok(Matrix::diagonal(diagonal))
}

/// True if `matrix` preserves the signature-`(a, b)` form:
/// `γ^† I_{a,b} γ == I_{a,b}`.
///
/// Non-square matrices and matrices of size other than `a + b` are simply
/// not members.
pub fn is_in_u_ab(matrix: &Matrix<Cyclotomic>, a: usize, b: usize) -> bool {
    if !matrix.is_square() || matrix.rows() != a + b {
        return false;
    }
    let i_ab = match indefinite_identity(a, b) {
        Ok(m) => m,
        Err(_) => return false,
    };
    matrix
        .conjugate_transpose()
        .mul_ref(&i_ab)
        .and_then(|m| m.mul_ref(matrix))
        .map(|product| product == i_ab)
        .unwrap_or(false)
}

/// True if `matrix` is the identity.
pub(crate) fn is_identity(matrix: &Matrix<Cyclotomic>) -> bool {
    matrix.is_square()
        && (0..matrix.rows()).all(|i| {
            (0..matrix.cols()).all(|j| {
                let entry = &matrix[(i, j)];
                if i == j {
                    entry.is_one()
                } else {
                    entry.is_zero()
                }
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coprime_set() {
        assert_eq!(coprime_set(1), Vec::<u32>::new());
        assert_eq!(coprime_set(7), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(coprime_set(12), vec![1, 5, 7, 11]);
    }

    #[test]
    fn test_primitive_roots_have_exact_order() {
        for p in 2..10u32 {
            let roots = primitive_roots(p).unwrap();
            assert_eq!(roots.len(), coprime_set(p).len());
            for root in roots {
                assert!(root.pow(p).is_one());
                assert!((1..p).all(|k| !root.pow(k).is_one()), "p = {}", p);
            }
        }
        assert!(primitive_roots(0).is_err());
    }

    #[test]
    fn test_group_is_cyclic_with_identity() {
        let w = omega(5).unwrap();
        let group = type_iii_group(2, 1, 5, &[1, 2, 4], &w).unwrap();
        assert_eq!(group.len(), 5);
        assert!(is_identity(&group[0]));
        assert!(group[1..].iter().all(|g| !is_identity(g)));
        for (j, g) in group.iter().enumerate() {
            assert_eq!(*g, group[1].pow(j as u32).unwrap());
        }
    }

    #[test]
    fn test_group_parameter_validation() {
        let w = omega(3).unwrap();
        assert!(matches!(
            type_iii_group(1, 1, 3, &[1], &w),
            Err(InvariantError::DimensionMismatch { expected: 2, actual: 1 })
        ));
        assert!(type_iii_group(1, 0, 3, &[3], &w).is_err());
        assert!(type_iii_group(1, 0, 3, &[0], &w).is_err());
        assert!(type_iii_group(0, 0, 3, &[], &w).is_err());
    }

    #[test]
    fn test_membership_in_u_ab() {
        let w = omega(4).unwrap();
        for g in type_iii_group(1, 2, 4, &[1, 2, 3], &w).unwrap() {
            assert!(is_in_u_ab(&g, 1, 2));
            assert!(!is_in_u_ab(&g, 1, 1));
        }
        let two = Matrix::diagonal(vec![Cyclotomic::from_integer(2)]);
        assert!(!is_in_u_ab(&two, 1, 0));
        assert!(!is_in_u_ab(&Matrix::column(vec![Cyclotomic::one(); 2]), 2, 0));
    }

    #[test]
    fn test_indefinite_identity() {
        let i_ab = indefinite_identity(1, 2).unwrap();
        assert_eq!(i_ab[(0, 0)], Cyclotomic::one());
        assert_eq!(i_ab[(2, 2)], -Cyclotomic::one());
        assert!(indefinite_identity(0, 0).is_err());
    }
}
