//! Tests for polynomial construction and operations

use hermitian_invariants::*;
use num_traits::{One, Zero};

fn z(j: usize) -> Polynomial {
    Polynomial::variable(Variable::component("z", j))
}

fn w(j: usize) -> Polynomial {
    Polynomial::variable(Variable::component("w", j))
}

fn int(v: i64) -> Polynomial {
    Polynomial::constant(Cyclotomic::from_integer(v))
}

#[test]
fn test_polynomial_arithmetic() {
    // p = z0 + 1, q = z0 - 1
    let p = z(0) + int(1);
    let q = z(0) - int(1);

    // (z0 + 1) + (z0 - 1) = 2 z0
    assert_eq!(&p + &q, int(2) * z(0));

    // (z0 + 1)(z0 - 1) = z0^2 - 1
    assert_eq!(&p * &q, z(0).pow(2) - int(1));
}

#[test]
fn test_zero_polynomial() {
    let zero = Polynomial::zero();
    assert!(zero.is_zero());
    assert!(zero.is_constant());
    assert_eq!(zero.total_degree(), 0);

    // Adding zero doesn't change the polynomial
    let p = z(1) * w(0);
    assert_eq!(&p + &zero, p);
    assert!((&p * &zero).is_zero());
}

#[test]
fn test_polynomial_degree() {
    let p = z(0).pow(3) * w(1).conjugate() + z(1).pow(2) + int(5);
    assert_eq!(p.total_degree(), 4);
    assert_eq!(p.degree_in(&Variable::component("z", 0)), 3);
    assert_eq!(p.degree_in(&Variable::component("w", 1).conjugate()), 1);
    assert_eq!(p.degree_in(&Variable::component("w", 1)), 0);
    assert_eq!(p.num_terms(), 3);
}

#[test]
fn test_coefficient_extraction() {
    let omega = Cyclotomic::root_of_unity(3, 1);
    let p = Polynomial::constant(omega.clone()) * z(0) * w(0).conjugate() + int(1);
    let m = Monomial::from_powers([
        (Variable::component("z", 0), 1),
        (Variable::component("w", 0).conjugate(), 1),
    ]);
    assert_eq!(p.coefficient(&m), omega);
    assert_eq!(p.coefficient(&Monomial::one()), Cyclotomic::one());
    assert!(p.coefficient(&Monomial::var(Variable::component("z", 1))).is_zero());
}

#[test]
fn test_free_symbols() {
    let p = z(0) * w(2).conjugate() + Polynomial::variable(Variable::real("x", 0));
    let vectors: Vec<String> = p.free_vectors().into_iter().collect();
    assert_eq!(vectors, vec!["w".to_string(), "z".to_string()]);
    assert_eq!(p.free_variables().len(), 3);
}

#[test]
fn test_conjugation_is_an_involution() {
    let p = Polynomial::constant(Cyclotomic::root_of_unity(7, 3)) * z(0).pow(2) * w(1).conjugate()
        + Polynomial::constant(Cyclotomic::i()) * z(1)
        + int(-4);
    assert_eq!(p.conjugate().conjugate(), p);
    assert_ne!(p.conjugate(), p);

    // conj(f g) = conj(f) conj(g)
    let q = z(0) + w(0).conjugate();
    assert_eq!((&p * &q).conjugate(), &p.conjugate() * &q.conjugate());
}

#[test]
fn test_power_matches_repeated_multiplication() {
    let p = z(0) + w(0).conjugate() + int(2);
    let mut expected = Polynomial::one();
    for k in 0..5 {
        assert_eq!(p.pow(k), expected);
        expected = &expected * &p;
    }
}

#[test]
fn test_render_styles() {
    let p = z(0) * w(0).conjugate() - int(1);
    assert_eq!(p.render(RenderStyle::Ascii), "conj(w0)*z0 - 1");
    assert_eq!(p.render(RenderStyle::Latex), "\\overline{w_{0}} z_{0} - 1");
    assert_eq!(p.to_string(), "w\u{0305}₀·z₀ - 1");
    assert_eq!(format!("{:?}", p), "Polynomial(conj(w0)*z0 - 1)");

    let q = Polynomial::constant(Cyclotomic::one() + Cyclotomic::i()) * z(0);
    assert_eq!(q.render(RenderStyle::Ascii), "(1 + i)*z0");
}
