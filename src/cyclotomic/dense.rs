//! Dense univariate helpers behind the cyclotomic field arithmetic.
//!
//! Everything here works on coefficient vectors indexed by exponent
//! (`v[k]` is the coefficient of `x^k`).

use lazy_static::lazy_static;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

lazy_static! {
    /// Memoised `Φ_n`, shared by every element of conductor `n`.
    static ref CYCLOTOMIC_CACHE: Mutex<HashMap<u32, Arc<Vec<BigInt>>>> =
        Mutex::new(HashMap::new());
}

/// Coefficients of the `n`-th cyclotomic polynomial `Φ_n`, lowest degree first.
///
/// Computed from `x^n - 1 = ∏_{d | n} Φ_d`. `n` must be at least 1.
///
/// # Example
/// ```
/// use hermitian_invariants::cyclotomic::cyclotomic_polynomial;
/// use num_bigint::BigInt;
///
/// // Φ_6 = x^2 - x + 1
/// let phi6 = cyclotomic_polynomial(6);
/// assert_eq!(phi6, vec![BigInt::from(1), BigInt::from(-1), BigInt::from(1)]);
/// ```
pub fn cyclotomic_polynomial(n: u32) -> Vec<BigInt> {
    modulus(n).as_ref().clone()
}

/// Euler's totient, i.e. the degree of `Φ_n`.
pub fn euler_phi(n: u32) -> usize {
    (1..=n).filter(|&k| num_integer::gcd(k, n) == 1).count()
}

pub(crate) fn modulus(n: u32) -> Arc<Vec<BigInt>> {
    debug_assert!(n >= 1);
    {
        let cache = CYCLOTOMIC_CACHE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(phi) = cache.get(&n) {
            return Arc::clone(phi);
        }
    }

    // x^n - 1
    let mut quotient = vec![BigInt::zero(); n as usize + 1];
    quotient[0] = -BigInt::one();
    quotient[n as usize] = BigInt::one();

    for d in (1..n).filter(|d| n % d == 0) {
        let phi_d = modulus(d);
        quotient = div_exact(&quotient, &phi_d);
    }

    let phi = Arc::new(quotient);
    let mut cache = CYCLOTOMIC_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    cache.entry(n).or_insert_with(|| Arc::clone(&phi));
    phi
}

/// Exact division by a monic integer polynomial.
fn div_exact(numerator: &[BigInt], divisor: &[BigInt]) -> Vec<BigInt> {
    let d = divisor.len() - 1;
    let mut rem = numerator.to_vec();
    if rem.len() <= d {
        return vec![BigInt::zero()];
    }
    let mut quotient = vec![BigInt::zero(); rem.len() - d];
    for i in (d..rem.len()).rev() {
        let c = rem[i].clone();
        if c.is_zero() {
            continue;
        }
        quotient[i - d] = c.clone();
        for (j, m) in divisor.iter().enumerate() {
            if !m.is_zero() {
                rem[i - d + j] -= &c * m;
            }
        }
    }
    debug_assert!(rem.iter().all(Zero::is_zero), "division by Φ_d was not exact");
    quotient
}

/// Reduce `v` modulo the monic `modulus` in place and pad/truncate it to
/// `deg(modulus)` coefficients.
pub(crate) fn reduce(v: &mut Vec<BigRational>, modulus: &[BigInt]) {
    let d = modulus.len() - 1;
    for i in (d..v.len()).rev() {
        if v[i].is_zero() {
            continue;
        }
        let c = std::mem::replace(&mut v[i], BigRational::zero());
        for (j, m) in modulus[..d].iter().enumerate() {
            if m.is_zero() {
                continue;
            }
            if m.is_one() {
                v[i - d + j] -= &c;
            } else if *m == -BigInt::one() {
                v[i - d + j] += &c;
            } else {
                v[i - d + j] -= &c * BigRational::from_integer(m.clone());
            }
        }
    }
    v.resize(d, BigRational::zero());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_small_cyclotomic_polynomials() {
        assert_eq!(cyclotomic_polynomial(1), ints(&[-1, 1]));
        assert_eq!(cyclotomic_polynomial(2), ints(&[1, 1]));
        assert_eq!(cyclotomic_polynomial(4), ints(&[1, 0, 1]));
        assert_eq!(cyclotomic_polynomial(5), ints(&[1, 1, 1, 1, 1]));
        assert_eq!(cyclotomic_polynomial(12), ints(&[1, 0, -1, 0, 1]));
    }

    #[test]
    fn test_degree_is_totient() {
        for n in 1..40 {
            assert_eq!(cyclotomic_polynomial(n).len() - 1, euler_phi(n), "n = {}", n);
        }
    }

    #[test]
    fn test_reduce_modulo_phi_4() {
        // x^3 + 2x^2 + 1 ≡ -x - 1 (mod x^2 + 1)
        let mut v: Vec<BigRational> = ints(&[1, 0, 2, 1])
            .into_iter()
            .map(BigRational::from_integer)
            .collect();
        reduce(&mut v, &modulus(4));
        assert_eq!(
            v,
            vec![
                BigRational::from_integer(BigInt::from(-1)),
                BigRational::from_integer(BigInt::from(-1)),
            ]
        );
    }
}
