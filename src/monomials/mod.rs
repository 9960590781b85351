//! Multiindex enumeration and monomial construction.
//!
//! For `arity` vector variables of dimension `dim` and a per-component degree
//! bound `degree`, every monomial is described by one multiindex in
//! `[0, degree]^dim` per variable. Enumeration order is lexicographic with the
//! last component varying fastest, both inside a multiindex and across the
//! variables of a combination.
//!
//! ```
//! use hermitian_invariants::monomials::multiindex_combinations;
//!
//! let combos = multiindex_combinations(2, 1, 1).unwrap();
//! assert_eq!(combos, vec![
//!     vec![vec![0], vec![0]],
//!     vec![vec![0], vec![1]],
//!     vec![vec![1], vec![0]],
//!     vec![vec![1], vec![1]],
//! ]);
//! ```

pub mod coefficients;

pub use coefficients::{
    coefficient_array, generic_polynomial, monomial_map, polynomial_in_z_z_bar, CoefficientSymbol,
};

use crate::error::{InvariantError, Result};
use crate::polynomial::Monomial;
use crate::symbols::{MultiIndex, Variable, VectorSymbol};
use itertools::Itertools;
use num_traits::One;
use std::collections::BTreeSet;
use tracing::trace;

/// Each vector symbol paired with its ordered scalar components.
pub type ComponentMap = Vec<(VectorSymbol, Vec<Variable>)>;

/// Pair every symbol with its components.
///
/// All symbols must share one dimension, and at least one must be given.
pub fn vector_component_map(symbols: &[VectorSymbol]) -> Result<ComponentMap> {
    let first = symbols
        .first()
        .ok_or_else(|| InvariantError::invalid("symbols", "at least one vector symbol is required"))?;
    let dim = first.dim();
    symbols
        .iter()
        .map(|symbol| {
            if symbol.dim() != dim {
                return Err(InvariantError::DimensionMismatch {
                    expected: dim,
                    actual: symbol.dim(),
                });
            }
            Ok((symbol.clone(), symbol.components()))
        })
        .collect()
}

fn check_shape(arity: usize, dim: usize) -> Result<()> {
    if arity == 0 {
        return Err(InvariantError::invalid("arity", "must be at least 1"));
    }
    if dim == 0 {
        return Err(InvariantError::invalid("dim", "must be at least 1"));
    }
    Ok(())
}

/// All of `[0, degree]^dim`, `(degree + 1)^dim` tuples in lexicographic order.
pub fn multiindices(dim: usize, degree: u32) -> Result<Vec<MultiIndex>> {
    check_shape(1, dim)?;
    Ok(itertools::repeat_n(0..=degree, dim)
        .multi_cartesian_product()
        .collect())
}

/// [`multiindices`] once per variable.
pub fn multiindices_multivariate(arity: usize, dim: usize, degree: u32) -> Result<Vec<Vec<MultiIndex>>> {
    check_shape(arity, dim)?;
    let per_variable = multiindices(dim, degree)?;
    Ok(vec![per_variable; arity])
}

/// Every choice of one multiindex per variable, `(degree + 1)^(dim · arity)`
/// combinations in lexicographic order.
pub fn multiindex_combinations(arity: usize, dim: usize, degree: u32) -> Result<Vec<Vec<MultiIndex>>> {
    let per_variable = multiindices_multivariate(arity, dim, degree)?;
    let combos: Vec<Vec<MultiIndex>> = per_variable
        .into_iter()
        .map(Vec::into_iter)
        .multi_cartesian_product()
        .collect();
    trace!(arity, dim, degree, count = combos.len(), "enumerated multiindex combinations");
    Ok(combos)
}

/// `∏_k components[k]^index[k]`.
pub fn monomial(components: &[Variable], index: &[u32]) -> Result<Monomial> {
    if components.len() != index.len() {
        return Err(InvariantError::DimensionMismatch {
            expected: components.len(),
            actual: index.len(),
        });
    }
    Ok(Monomial::from_powers(
        components.iter().cloned().zip(index.iter().copied()),
    ))
}

/// The product of one [`monomial`] per variable.
pub fn multivariate_monomial(map: &ComponentMap, combination: &[MultiIndex]) -> Result<Monomial> {
    if map.len() != combination.len() {
        return Err(InvariantError::DimensionMismatch {
            expected: map.len(),
            actual: combination.len(),
        });
    }
    map.iter()
        .zip(combination)
        .try_fold(Monomial::one(), |acc, ((_, components), index)| {
            Ok(acc.mul_ref(&monomial(components, index)?))
        })
}

/// The set of monomials reachable from `symbols` with per-component degree at
/// most `degree`.
///
/// For every choice of one univariate monomial per symbol, the running product
/// is recorded after each factor, so products over any prefix of the symbols
/// are members too.
pub fn multivariate_monomials(symbols: &[VectorSymbol], degree: u32) -> Result<BTreeSet<Monomial>> {
    let map = vector_component_map(symbols)?;
    let dim = map[0].0.dim();
    let indices = multiindices(dim, degree)?;

    let per_symbol: Vec<BTreeSet<Monomial>> = map
        .iter()
        .map(|(_, components)| {
            indices
                .iter()
                .map(|index| monomial(components, index))
                .collect::<Result<BTreeSet<_>>>()
        })
        .collect::<Result<_>>()?;

    let mut result = BTreeSet::new();
    for factors in per_symbol.iter().map(|set| set.iter()).multi_cartesian_product() {
        let mut running = Monomial::one();
        for factor in factors {
            running = running.mul_ref(factor);
            result.insert(running.clone());
        }
    }
    Ok(result)
}
