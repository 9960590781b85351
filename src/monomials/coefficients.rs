//! Coefficient symbols and generic polynomials.
//!
//! A generic polynomial of `arity` vector variables is
//! `1 + Σ c_{α_0,…,α_{arity-1}} · z^{α_0} w^{α_1} ⋯`, with one complex
//! coefficient symbol per multiindex combination. Each coefficient is split
//! into independent real and imaginary parts so that conjugation acts on the
//! polynomial exactly.

use super::{multiindex_combinations, multivariate_monomial, multivariate_monomials, vector_component_map};
use crate::cyclotomic::{Conjugate, Cyclotomic};
use crate::error::Result;
use crate::polynomial::{Monomial, Polynomial};
use crate::symbols::{subscript_label, MultiIndex, NamingScheme, Part, Variable, VectorSymbol};
use num_traits::{One, Zero};
use std::fmt::{self, Display};
use tracing::debug;

/// A complex coefficient `name_{index} = re + i·im`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoefficientSymbol {
    name: String,
    index: Vec<MultiIndex>,
}

impl CoefficientSymbol {
    /// Create the symbol `name_{index}`
    pub fn new(name: impl Into<String>, index: Vec<MultiIndex>) -> Self {
        CoefficientSymbol {
            name: name.into(),
            index,
        }
    }

    /// Base name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One multiindex per vector variable.
    pub fn index(&self) -> &[MultiIndex] {
        &self.index
    }

    /// `(0,1),(1,0)`
    pub fn subscript(&self) -> String {
        subscript_label(&self.index)
    }

    /// `c_{(0,1),(1,0)}`
    pub fn latex(&self) -> String {
        format!("{}_{{{}}}", self.name, self.subscript())
    }

    /// Real variable standing for the real part
    pub fn real_part(&self) -> Variable {
        self.part(Part::Re)
    }

    /// Real variable standing for the imaginary part
    pub fn imag_part(&self) -> Variable {
        self.part(Part::Im)
    }

    fn part(&self, part: Part) -> Variable {
        Variable::Coefficient {
            name: self.name.clone(),
            index: self.index.clone(),
            part,
        }
    }

    /// `re + i·im` as a polynomial in the two real parts.
    pub fn value(&self) -> Polynomial {
        Polynomial::variable(self.real_part())
            + Polynomial::term(Cyclotomic::i(), Monomial::var(self.imag_part()))
    }
}

impl Display for CoefficientSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.latex())
    }
}

/// One coefficient symbol per entry of
/// [`multiindex_combinations(arity, dim, degree)`](super::multiindex_combinations).
pub fn coefficient_array(
    arity: usize,
    dim: usize,
    degree: u32,
    naming: &NamingScheme,
) -> Result<Vec<CoefficientSymbol>> {
    Ok(multiindex_combinations(arity, dim, degree)?
        .into_iter()
        .map(|index| CoefficientSymbol::new(naming.coefficient_name(), index))
        .collect())
}

/// The monomial parallel to each entry of [`coefficient_array`], in the vector
/// variables named by `naming`.
pub fn monomial_map(arity: usize, dim: usize, degree: u32, naming: &NamingScheme) -> Result<Vec<Monomial>> {
    let symbols = naming.vector_symbols(arity, dim)?;
    let map = vector_component_map(&symbols)?;
    multiindex_combinations(arity, dim, degree)?
        .iter()
        .map(|combination| multivariate_monomial(&map, combination))
        .collect()
}

/// `1 + Σ coefficient · monomial` over every multiindex combination.
///
/// ```
/// use hermitian_invariants::monomials::generic_polynomial;
/// use hermitian_invariants::symbols::DEFAULT_NAMING;
///
/// let p = generic_polynomial(1, 1, 1, &DEFAULT_NAMING).unwrap();
/// // 1 + (re c₀ + i im c₀) + (re c₁ + i im c₁)·z₀
/// assert_eq!(p.num_terms(), 5);
/// ```
pub fn generic_polynomial(arity: usize, dim: usize, degree: u32, naming: &NamingScheme) -> Result<Polynomial> {
    let coefficients = coefficient_array(arity, dim, degree, naming)?;
    let monomials = monomial_map(arity, dim, degree, naming)?;

    let mut result = Polynomial::one();
    for (coefficient, monomial) in coefficients.iter().zip(monomials) {
        result = result.add_ref(&coefficient.value().mul_ref(&Polynomial::monomial(monomial)));
    }
    debug!(arity, dim, degree, terms = result.num_terms(), "assembled generic polynomial");
    Ok(result)
}

/// Sum of every monomial in `z` and `conj(z)` with per-component degree at
/// most `degree`.
pub fn polynomial_in_z_z_bar(z: &VectorSymbol, degree: u32) -> Result<Polynomial> {
    let monomials = multivariate_monomials(&[z.clone(), z.conjugate()], degree)?;
    Ok(monomials
        .into_iter()
        .fold(Polynomial::zero(), |acc, m| acc + Polynomial::monomial(m)))
}
