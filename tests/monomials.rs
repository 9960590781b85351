//! Tests for multiindex enumeration, monomial sets and coefficient arrays

use hermitian_invariants::*;
use std::collections::BTreeSet;

fn product(vars: &[Variable]) -> Monomial {
    Monomial::from_powers(vars.iter().cloned().map(|v| (v, 1)))
}

#[test]
fn test_sixteen_monomials() {
    let z = VectorSymbol::new("z", 2);
    let w = VectorSymbol::new("w", 2);
    let result = multivariate_monomials(&[z.clone(), w.clone()], 1).unwrap();

    let (z0, z1) = (z.component(0), z.component(1));
    let (w0, w1) = (w.component(0), w.component(1));
    let expected: BTreeSet<Monomial> = [
        vec![],
        vec![w0.clone()],
        vec![w1.clone()],
        vec![z0.clone()],
        vec![z1.clone()],
        vec![w0.clone(), w1.clone()],
        vec![w0.clone(), z0.clone()],
        vec![w0.clone(), z1.clone()],
        vec![w1.clone(), z0.clone()],
        vec![w1.clone(), z1.clone()],
        vec![z0.clone(), z1.clone()],
        vec![w0.clone(), w1.clone(), z0.clone()],
        vec![w0.clone(), w1.clone(), z1.clone()],
        vec![w0.clone(), z0.clone(), z1.clone()],
        vec![w1.clone(), z0.clone(), z1.clone()],
        vec![w0, w1, z0, z1],
    ]
    .iter()
    .map(|vars| product(vars))
    .collect();

    assert_eq!(result.len(), 16);
    assert_eq!(result, expected);
}

#[test]
fn test_closure_contains_prefix_products() {
    // with three symbols every product over a prefix of the symbols is present
    let symbols = [VectorSymbol::new("z", 1), VectorSymbol::new("w", 1), VectorSymbol::new("u", 1)];
    let result = multivariate_monomials(&symbols, 2).unwrap();
    // exponents of z, w, u each in 0..=2
    assert_eq!(result.len(), 27);
    let z_squared = Monomial::var_pow(symbols[0].component(0), 2);
    assert!(result.contains(&z_squared));
}

#[test]
fn test_monomial_set_rejects_mixed_dimensions() {
    let symbols = [VectorSymbol::new("z", 2), VectorSymbol::new("w", 1)];
    assert!(matches!(
        multivariate_monomials(&symbols, 1),
        Err(InvariantError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_combination_tensor_shape() {
    let combos = multiindex_combinations(2, 1, 1).unwrap();
    // shape (4, 2, 1)
    assert_eq!(combos.len(), 4);
    assert!(combos.iter().all(|c| c.len() == 2 && c.iter().all(|m| m.len() == 1)));
    assert_eq!(
        combos,
        vec![
            vec![vec![0], vec![0]],
            vec![vec![0], vec![1]],
            vec![vec![1], vec![0]],
            vec![vec![1], vec![1]],
        ]
    );
}

#[test]
fn test_combination_cardinality() {
    for arity in 1..=3usize {
        for dim in 1..=2usize {
            for degree in 0..=2u32 {
                let combos = multiindex_combinations(arity, dim, degree).unwrap();
                assert_eq!(combos.len(), (degree as usize + 1).pow((dim * arity) as u32));
            }
        }
    }
}

#[test]
fn test_degree_zero() {
    assert_eq!(multiindices(3, 0).unwrap(), vec![vec![0, 0, 0]]);
    let set = multivariate_monomials(&[VectorSymbol::new("z", 3)], 0).unwrap();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_coefficient_array_cardinality() {
    let coeffs = coefficient_array(3, 2, 1, &DEFAULT_NAMING).unwrap();
    assert_eq!(coeffs.len(), 64);
    let distinct: BTreeSet<String> = coeffs.iter().map(|c| c.latex()).collect();
    assert_eq!(distinct.len(), 64);
    assert_eq!(coeffs[1].latex(), "c_{(0,0),(0,0),(0,1)}");
}

#[test]
fn test_generic_polynomial_uses_naming_scheme() {
    let naming = NamingScheme::new(["p", "q"], "a").unwrap();
    let poly = generic_polynomial(2, 1, 1, &naming).unwrap();
    let vectors: Vec<String> = poly.free_vectors().into_iter().collect();
    assert_eq!(vectors, vec!["p".to_string(), "q".to_string()]);
    assert!(matches!(
        generic_polynomial(3, 1, 1, &naming),
        Err(InvariantError::TooManyVariables { requested: 3, available: 2 })
    ));
}

#[test]
fn test_generic_polynomial_is_generic() {
    // every monomial of the map appears with a coefficient depending on its own symbol
    let poly = generic_polynomial(1, 2, 1, &DEFAULT_NAMING).unwrap();
    let coeffs = coefficient_array(1, 2, 1, &DEFAULT_NAMING).unwrap();
    let monomials = monomial_map(1, 2, 1, &DEFAULT_NAMING).unwrap();
    for (c, m) in coeffs.iter().zip(&monomials) {
        let re_term = Monomial::var(c.real_part()).mul_ref(m);
        assert_eq!(poly.coefficient(&re_term), Cyclotomic::from_integer(1));
        let im_term = Monomial::var(c.imag_part()).mul_ref(m);
        assert_eq!(poly.coefficient(&im_term), Cyclotomic::i());
    }
}

#[test]
fn test_component_map_order() {
    let map = vector_component_map(&[VectorSymbol::new("z", 3), VectorSymbol::new("w", 3)]).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map[0].0.name(), "z");
    assert_eq!(map[1].1[2], Variable::component("w", 2));
}
