//! Tests for cyclotomic field arithmetic and field axioms

use hermitian_invariants::*;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

fn check_field_axioms(field: CyclotomicField) {
    let a = field.add_ref(&field.from_int(3), &field.generator());
    let b = field.root_of_unity(2);
    let c = field.from_int(-7);

    // Test additive identity
    let zero = field.zero();
    assert!(field.eq_el(&field.add_ref(&a, &zero), &a));
    assert!(field.eq_el(&field.add_ref(&zero, &a), &a));

    // Test multiplicative identity
    let one = field.one();
    assert!(field.eq_el(&field.mul_ref(&a, &one), &a));

    // Test additive inverse
    let neg_a = field.negate(a.clone());
    assert!(field.is_zero(&field.add_ref(&a, &neg_a)));

    // Test commutativity
    assert!(field.eq_el(&field.add_ref(&a, &b), &field.add_ref(&b, &a)));
    assert!(field.eq_el(&field.mul_ref(&a, &b), &field.mul_ref(&b, &a)));

    // Test associativity
    let left = field.mul_ref(&field.mul_ref(&a, &b), &c);
    let right = field.mul_ref(&a, &field.mul_ref(&b, &c));
    assert!(field.eq_el(&left, &right));

    // Test distributivity
    let left = field.mul_ref(&a, &field.add_ref(&b, &c));
    let right = field.add_ref(&field.mul_ref(&a, &b), &field.mul_ref(&a, &c));
    assert!(field.eq_el(&left, &right));
}

#[test]
fn test_field_axioms_small_conductors() {
    for n in [1, 2, 3, 4, 5, 6, 7, 8, 12] {
        check_field_axioms(CyclotomicField::new(n).unwrap());
    }
}

#[test]
fn test_zero_conductor_rejected() {
    assert!(CyclotomicField::new(0).is_err());
}

#[test]
fn test_degree_is_totient() {
    assert_eq!(CyclotomicField::new(7).unwrap().degree(), 6);
    assert_eq!(CyclotomicField::new(12).unwrap().degree(), 4);
    assert_eq!(CyclotomicField::new(1).unwrap().degree(), 1);
}

#[test]
fn test_generator_order() {
    for n in 1..=12u32 {
        let field = CyclotomicField::new(n).unwrap();
        let zeta = field.generator();
        assert!(field.is_one(&zeta.pow(n)), "ζ_{}^{} != 1", n, n);
        for k in 1..n {
            assert!(!field.is_one(&zeta.pow(k)), "ζ_{}^{} == 1", n, k);
        }
    }
}

#[test]
fn test_conjugation_is_inverse_on_roots() {
    let field = CyclotomicField::new(9).unwrap();
    for k in 0..9 {
        let root = field.root_of_unity(k);
        assert!(field.is_one(&field.mul_ref(&root, &root.conjugate())));
        assert_eq!(root.conjugate(), field.root_of_unity(-k));
    }
}

#[test]
fn test_norm_is_rational() {
    // (2 + ζ_5)(2 + conj ζ_5) is fixed by conjugation
    let z = Cyclotomic::from_integer(2) + Cyclotomic::root_of_unity(5, 1);
    let norm = &z * &z.conjugate();
    assert_eq!(norm.conjugate(), norm);
    assert!(!norm.is_rational());

    // |1 + i|^2 = 2
    let w = Cyclotomic::one() + Cyclotomic::i();
    assert_eq!((&w * &w.conjugate()).to_rational(), Some(BigRational::from_integer(BigInt::from(2))));
}

#[test]
fn test_mixed_conductors_meet_in_lcm() {
    // ζ_3 · ζ_4 = ζ_12^{4+3}
    let product = Cyclotomic::root_of_unity(3, 1) * Cyclotomic::root_of_unity(4, 1);
    assert_eq!(product, Cyclotomic::root_of_unity(12, 7));
    // ζ_6^2 = ζ_3
    assert_eq!(Cyclotomic::root_of_unity(6, 2), Cyclotomic::root_of_unity(3, 1));
    // -1 = ζ_2
    assert_eq!(Cyclotomic::root_of_unity(2, 1), -Cyclotomic::one());
}

#[test]
fn test_sum_of_all_roots_vanishes() {
    for n in 2..=10u32 {
        let sum = (0..n as i64).fold(Cyclotomic::zero(), |acc, k| acc + Cyclotomic::root_of_unity(n, k));
        assert!(sum.is_zero(), "n = {}", n);
    }
}

#[test]
fn test_display() {
    let field = CyclotomicField::new(5).unwrap();
    assert_eq!(format!("{:?}", field), "CyclotomicField<5>");
    assert_eq!(Cyclotomic::i().render(RenderStyle::Ascii), "i");
    assert_eq!(Cyclotomic::from_integer(-3).to_string(), "-3");
}
