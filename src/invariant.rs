//! Group-invariant product polynomials `Φ_Γ` and their radial form `θ(x)`.
//!
//! For a finite group `Γ ⊂ U(a, b)`,
//!
//! ```text
//! Φ_Γ(z)    = ∏_{γ ∈ Γ} (1 − ⟨γz, z⟩_{a,b})
//! Φ_Γ(z, w) = ∏_{γ ∈ Γ} (1 − ⟨γz, w⟩_{a,b})
//! ```
//!
//! The polarized form treats `w` as an independent variable so that symmetry
//! under `z ↔ w` plus conjugation can be tested.

use crate::cyclotomic::{Conjugate, Cyclotomic};
use crate::error::{InvariantError, Result};
use crate::group::{primitive_roots, type_iii_group};
use crate::inner_product::hermitian_inner_product;
use crate::matrix::Matrix;
use crate::polynomial::{Monomial, Polynomial};
use crate::symbols::{NamingScheme, Variable, VectorSymbol, DEFAULT_NAMING};
use num_traits::One;
use tracing::debug;

/// `Φ_Γ(z)` with the vector symbol it is written in.
#[derive(Debug, Clone)]
pub struct PhiGamma {
    /// `Φ_Γ(z)`
    pub phi: Polynomial,
    /// The vector `z`
    pub z: VectorSymbol,
}

/// Polarized `Φ_Γ(z, w)` with both vector symbols.
#[derive(Debug, Clone)]
pub struct PolarizedPhiGamma {
    /// `Φ_Γ(z, w)`
    pub phi: Polynomial,
    /// The holomorphic vector `z`
    pub z: VectorSymbol,
    /// The vector `w`, entering only through `conj(w)`
    pub w: VectorSymbol,
}

fn check_group(group: &[Matrix<Cyclotomic>], a: usize, b: usize) -> Result<()> {
    if group.is_empty() {
        return Err(InvariantError::EmptyGroup);
    }
    for gamma in group {
        if !gamma.is_square() {
            return Err(InvariantError::NotSquare {
                rows: gamma.rows(),
                cols: gamma.cols(),
            });
        }
        if gamma.rows() != a + b {
            return Err(InvariantError::DimensionMismatch {
                expected: a + b,
                actual: gamma.rows(),
            });
        }
    }
    Ok(())
}

fn orbit_product(
    z: &Matrix<Polynomial>,
    w: &Matrix<Polynomial>,
    group: &[Matrix<Cyclotomic>],
    a: usize,
    b: usize,
) -> Result<Polynomial> {
    check_group(group, a, b)?;
    let mut result = Polynomial::one();
    for gamma in group {
        let gamma_z = gamma.map(|c| Polynomial::constant(c.clone())).mul_ref(z)?;
        let factor = Polynomial::one().sub_ref(&hermitian_inner_product(&gamma_z, w, a, b)?);
        result = result.mul_ref(&factor);
    }
    Ok(result)
}

/// `∏_{γ ∈ group} (1 − ⟨γz, z⟩_{a,b})`.
///
/// The group must be non-empty and consist of square matrices of size
/// `a + b`; this is checked before anything is multiplied.
pub fn phi_gamma_product(
    z: &Matrix<Polynomial>,
    group: &[Matrix<Cyclotomic>],
    a: usize,
    b: usize,
) -> Result<Polynomial> {
    orbit_product(z, z, group, a, b)
}

/// `∏_{γ ∈ group} (1 − ⟨γz, w⟩_{a,b})`.
pub fn phi_gamma_product_polarized(
    z: &Matrix<Polynomial>,
    w: &Matrix<Polynomial>,
    group: &[Matrix<Cyclotomic>],
    a: usize,
    b: usize,
) -> Result<Polynomial> {
    orbit_product(z, w, group, a, b)
}

/// `Γ(p; q)` for the first primitive `p`-th root of unity.
fn first_root_group(a: usize, b: usize, p: u32, q: &[u32]) -> Result<Vec<Matrix<Cyclotomic>>> {
    let roots = primitive_roots(p)?;
    let omega = roots
        .first()
        .ok_or_else(|| InvariantError::invalid("p", "must be at least 2"))?;
    type_iii_group(a, b, p, q, omega)
}

/// `Φ_Γ(z)` for `Γ = Γ(p; q)`, written in the vector `z`.
pub fn phi_gamma_z(a: usize, b: usize, p: u32, q: &[u32]) -> Result<PhiGamma> {
    let mut symbols = DEFAULT_NAMING.vector_symbols(1, a + b)?.into_iter();
    let z = symbols
        .next()
        .ok_or(InvariantError::TooManyVariables { requested: 1, available: 0 })?;
    let group = first_root_group(a, b, p, q)?;
    let phi = phi_gamma_product(&z.as_explicit(), &group, a, b)?;
    debug!(a, b, p, ?q, terms = phi.num_terms(), "built Φ_Γ(z)");
    Ok(PhiGamma { phi, z })
}

/// Polarized `Φ_Γ(z, w)` for `Γ = Γ(p; q)`.
pub fn phi_gamma_z_w_polarized(a: usize, b: usize, p: u32, q: &[u32]) -> Result<PolarizedPhiGamma> {
    let symbols = DEFAULT_NAMING.vector_symbols(2, a + b)?;
    let (z, w) = match <[VectorSymbol; 2]>::try_from(symbols) {
        Ok([z, w]) => (z, w),
        Err(v) => {
            return Err(InvariantError::TooManyVariables {
                requested: 2,
                available: v.len(),
            })
        }
    };
    let group = first_root_group(a, b, p, q)?;
    let phi = phi_gamma_product_polarized(&z.as_explicit(), &w.as_explicit(), &group, a, b)?;
    debug!(a, b, p, ?q, terms = phi.num_terms(), "built polarized Φ_Γ(z, w)");
    Ok(PolarizedPhiGamma { phi, z, w })
}

/// Rewrite `Φ_Γ(z)` in the real variables `x_j = |z_j|^2`.
///
/// Every occurrence of `z_j · conj(z_j)` becomes `x_j`. Fails with
/// [`InvariantError::NotRadial`] if some component of `z` is left over.
pub fn theta_x_from_phi_gamma(
    phi: &Polynomial,
    z: &VectorSymbol,
    naming: &NamingScheme,
) -> Result<Polynomial> {
    let mut theta = Polynomial::default();
    for (monomial, coefficient) in phi.terms() {
        let mut powers: Vec<(Variable, u32)> = Vec::new();
        for (var, exp) in monomial.powers() {
            match var {
                Variable::Component { vector, index, .. } if vector == z.name() => {
                    if *index >= z.dim() {
                        return Err(InvariantError::NotRadial {
                            variable: var.to_string(),
                        });
                    }
                }
                _ => powers.push((var.clone(), exp)),
            }
        }
        for j in 0..z.dim() {
            let holo = Variable::component(z.name(), j);
            let anti = holo.conjugate();
            let (e_holo, e_anti) = (monomial.exponent(&holo), monomial.exponent(&anti));
            if e_holo != e_anti {
                let leftover = if e_holo > e_anti { holo } else { anti };
                return Err(InvariantError::NotRadial {
                    variable: leftover.to_string(),
                });
            }
            powers.push((Variable::real(naming.real_name(), j), e_holo));
        }
        theta.add_term(Monomial::from_powers(powers), coefficient.clone());
    }
    Ok(theta)
}

/// `θ(x)` for `Γ = Γ(p; q)` with the default naming.
pub fn theta_x(a: usize, b: usize, p: u32, q: &[u32]) -> Result<Polynomial> {
    let PhiGamma { phi, z } = phi_gamma_z(a, b, p, q)?;
    theta_x_from_phi_gamma(&phi, &z, &DEFAULT_NAMING)
}
