//! Exact arithmetic in cyclotomic fields `Q(ζ_n)`.
//!
//! Group elements of `Γ(p; q)` have entries that are powers of a primitive
//! `p`-th root of unity, and the invariant polynomials built from them have
//! coefficients in `Q(ζ_p)`. This module gives those numbers a canonical form
//! so that polynomial equality is decided exactly.
//!
//! ## Representation
//!
//! A [`Cyclotomic`] of conductor `n` is the residue of a rational polynomial
//! modulo `Φ_n`, stored in the power basis `1, ζ_n, …, ζ_n^{φ(n)-1}`. Elements
//! of different conductors meet in `Q(ζ_lcm)`, so rationals, `i` and `ζ_p` can
//! be mixed freely.
//!
//! ```
//! use hermitian_invariants::cyclotomic::{Conjugate, Cyclotomic, CyclotomicField};
//! use num_traits::One;
//!
//! let field = CyclotomicField::new(7).unwrap();
//! let omega = field.generator();
//! assert!(omega.pow(7).is_one());
//! assert_eq!(omega.conjugate(), omega.pow(6));
//! assert_eq!(Cyclotomic::i().pow(2), -Cyclotomic::one());
//! ```

mod dense;

pub use dense::{cyclotomic_polynomial, euler_phi};

use crate::error::{InvariantError, Result};
use crate::render::{self, RenderStyle};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::fmt::{self, Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// Complex conjugation.
///
/// Implemented by every scalar and polynomial type so that matrices can form
/// conjugate transposes generically.
pub trait Conjugate {
    /// Return the complex conjugate of `self`.
    fn conjugate(&self) -> Self;
}

/// An element of `Q(ζ_n)` in canonical power-basis form.
#[derive(Clone)]
pub struct Cyclotomic {
    order: u32,
    coeffs: Vec<BigRational>,
}

impl Cyclotomic {
    /// Embed a rational number.
    pub fn from_rational(value: BigRational) -> Self {
        Cyclotomic {
            order: 1,
            coeffs: vec![value],
        }
    }

    /// Embed an integer.
    pub fn from_integer(value: i64) -> Self {
        Self::from_rational(BigRational::from_integer(BigInt::from(value)))
    }

    /// The imaginary unit, `ζ_4`.
    pub fn i() -> Self {
        Self::root_of_unity(4, 1)
    }

    /// `ζ_n^k = exp(2πik/n)`; `k` is taken modulo `n`.
    pub fn root_of_unity(n: u32, k: i64) -> Self {
        let n = n.max(1);
        let exp = k.rem_euclid(n as i64) as usize;
        let mut values = vec![BigRational::zero(); n as usize];
        values[exp] = BigRational::one();
        Self::from_dense(n, values)
    }

    fn from_dense(order: u32, mut values: Vec<BigRational>) -> Self {
        dense::reduce(&mut values, &dense::modulus(order));
        Cyclotomic {
            order,
            coeffs: values,
        }
    }

    /// Conductor of the field this representation lives in.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Power-basis coefficients, `coefficients()[k]` multiplying `ζ_n^k`.
    pub fn coefficients(&self) -> &[BigRational] {
        &self.coeffs
    }

    /// True if the element lies in `Q`.
    pub fn is_rational(&self) -> bool {
        self.to_rational().is_some()
    }

    /// The rational value, if the element is rational.
    pub fn to_rational(&self) -> Option<BigRational> {
        if self.coeffs[1..].iter().all(Zero::is_zero) {
            Some(self.coeffs[0].clone())
        } else {
            None
        }
    }

    /// Re-express the element in `Q(ζ_target)`. `self.order` must divide `target`.
    fn lift(&self, target: u32) -> Cyclotomic {
        if target == self.order {
            return self.clone();
        }
        debug_assert_eq!(target % self.order, 0);
        let step = (target / self.order) as usize;
        let mut values = vec![BigRational::zero(); (self.coeffs.len() - 1) * step + 1];
        for (k, c) in self.coeffs.iter().enumerate() {
            values[k * step] = c.clone();
        }
        Self::from_dense(target, values)
    }

    /// Bring two operands into a common field.
    fn unify(&self, other: &Cyclotomic) -> (Cyclotomic, Cyclotomic) {
        let order = num_integer::lcm(self.order, other.order);
        (self.lift(order), other.lift(order))
    }

    fn scale(&self, factor: &BigRational) -> Cyclotomic {
        Cyclotomic {
            order: self.order,
            coeffs: self.coeffs.iter().map(|c| c * factor).collect(),
        }
    }

    /// Sum without consuming either operand.
    pub fn add_ref(&self, other: &Cyclotomic) -> Cyclotomic {
        if self.order == other.order {
            return Cyclotomic {
                order: self.order,
                coeffs: self
                    .coeffs
                    .iter()
                    .zip(other.coeffs.iter())
                    .map(|(a, b)| a + b)
                    .collect(),
            };
        }
        let (lhs, rhs) = self.unify(other);
        lhs.add_ref(&rhs)
    }

    /// Difference without consuming either operand.
    pub fn sub_ref(&self, other: &Cyclotomic) -> Cyclotomic {
        self.add_ref(&other.neg_ref())
    }

    /// Product without consuming either operand.
    pub fn mul_ref(&self, other: &Cyclotomic) -> Cyclotomic {
        if let Some(r) = self.to_rational() {
            return other.scale(&r);
        }
        if let Some(r) = other.to_rational() {
            return self.scale(&r);
        }
        if self.order != other.order {
            let (lhs, rhs) = self.unify(other);
            return lhs.mul_ref(&rhs);
        }
        let len = self.coeffs.len() + other.coeffs.len() - 1;
        let mut values = vec![BigRational::zero(); len];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                if !b.is_zero() {
                    values[i + j] += a * b;
                }
            }
        }
        Self::from_dense(self.order, values)
    }

    /// Negation without consuming the operand.
    pub fn neg_ref(&self) -> Cyclotomic {
        Cyclotomic {
            order: self.order,
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }

    /// `self^exp` by repeated squaring.
    pub fn pow(&self, exp: u32) -> Cyclotomic {
        let mut result = Cyclotomic::one();
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul_ref(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul_ref(&base);
            }
        }
        result
    }

    /// True if the element is a sum of more than one basis term, i.e. it needs
    /// parentheses when used as a factor.
    pub(crate) fn is_compound(&self) -> bool {
        self.coeffs.iter().filter(|c| !c.is_zero()).count() > 1
    }

    /// Signed terms `(negative, magnitude)` for [`render::join_signed`].
    pub(crate) fn signed_terms(&self, style: RenderStyle) -> Vec<(bool, String)> {
        let mut terms = Vec::new();
        for (k, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let negative = render::is_negative(c);
            let body = if k == 0 {
                style.rational(c)
            } else {
                let basis = root_name(self.order, k as u32, style);
                let magnitude = style.rational(c);
                if magnitude == "1" {
                    basis
                } else {
                    format!("{}{}{}", magnitude, style.times(), basis)
                }
            };
            terms.push((negative, body));
        }
        terms
    }

    /// Render in the given style.
    pub fn render(&self, style: RenderStyle) -> String {
        render::join_signed(&self.signed_terms(style))
    }
}

fn root_name(order: u32, exp: u32, style: RenderStyle) -> String {
    if order == 4 {
        return style.power("i", exp);
    }
    let base = match style {
        RenderStyle::Unicode => format!("ζ{}", render::subscript(order as u64)),
        RenderStyle::Ascii => format!("zeta{}", order),
        RenderStyle::Latex => format!("\\zeta_{{{}}}", order),
    };
    style.power(&base, exp)
}

impl Conjugate for Cyclotomic {
    /// `ζ_n^k ↦ ζ_n^{-k}`, coefficients being rational.
    fn conjugate(&self) -> Self {
        if self.order <= 2 {
            return self.clone();
        }
        let n = self.order as usize;
        let mut values = vec![BigRational::zero(); n];
        for (k, c) in self.coeffs.iter().enumerate() {
            values[(n - k) % n] = c.clone();
        }
        Self::from_dense(self.order, values)
    }
}

impl PartialEq for Cyclotomic {
    fn eq(&self, other: &Self) -> bool {
        if self.order == other.order {
            return self.coeffs == other.coeffs;
        }
        let (lhs, rhs) = self.unify(other);
        lhs.coeffs == rhs.coeffs
    }
}

impl Eq for Cyclotomic {}

impl Zero for Cyclotomic {
    fn zero() -> Self {
        Cyclotomic::from_rational(BigRational::zero())
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }
}

impl One for Cyclotomic {
    fn one() -> Self {
        Cyclotomic::from_rational(BigRational::one())
    }
}

impl From<i64> for Cyclotomic {
    fn from(value: i64) -> Self {
        Cyclotomic::from_integer(value)
    }
}

impl From<BigRational> for Cyclotomic {
    fn from(value: BigRational) -> Self {
        Cyclotomic::from_rational(value)
    }
}

impl Add for Cyclotomic {
    type Output = Cyclotomic;
    fn add(self, rhs: Cyclotomic) -> Cyclotomic {
        self.add_ref(&rhs)
    }
}

impl<'a> Add<&'a Cyclotomic> for &'a Cyclotomic {
    type Output = Cyclotomic;
    fn add(self, rhs: &'a Cyclotomic) -> Cyclotomic {
        self.add_ref(rhs)
    }
}

impl Sub for Cyclotomic {
    type Output = Cyclotomic;
    fn sub(self, rhs: Cyclotomic) -> Cyclotomic {
        self.sub_ref(&rhs)
    }
}

impl<'a> Sub<&'a Cyclotomic> for &'a Cyclotomic {
    type Output = Cyclotomic;
    fn sub(self, rhs: &'a Cyclotomic) -> Cyclotomic {
        self.sub_ref(rhs)
    }
}

impl Mul for Cyclotomic {
    type Output = Cyclotomic;
    fn mul(self, rhs: Cyclotomic) -> Cyclotomic {
        self.mul_ref(&rhs)
    }
}

impl<'a> Mul<&'a Cyclotomic> for &'a Cyclotomic {
    type Output = Cyclotomic;
    fn mul(self, rhs: &'a Cyclotomic) -> Cyclotomic {
        self.mul_ref(rhs)
    }
}

impl Neg for Cyclotomic {
    type Output = Cyclotomic;
    fn neg(self) -> Cyclotomic {
        self.neg_ref()
    }
}

impl<'a> Neg for &'a Cyclotomic {
    type Output = Cyclotomic;
    fn neg(self) -> Cyclotomic {
        self.neg_ref()
    }
}

impl Debug for Cyclotomic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cyclotomic<{}>({})", self.order, self.render(RenderStyle::Ascii))
    }
}

impl Display for Cyclotomic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(RenderStyle::Unicode))
    }
}

/// The field `Q(ζ_n)` as a value.
///
/// This is a lightweight handle: it carries only the conductor and hands out
/// elements already expressed in `Q(ζ_n)`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CyclotomicField {
    order: u32,
}

impl CyclotomicField {
    /// Create `Q(ζ_order)`.
    ///
    /// # Example
    /// ```
    /// use hermitian_invariants::cyclotomic::CyclotomicField;
    ///
    /// let field = CyclotomicField::new(5).unwrap();
    /// assert_eq!(field.degree(), 4);
    /// assert!(CyclotomicField::new(0).is_err());
    /// ```
    pub fn new(order: u32) -> Result<Self> {
        if order == 0 {
            return Err(InvariantError::invalid("order", "conductor must be at least 1"));
        }
        Ok(CyclotomicField { order })
    }

    /// The conductor `n`.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Dimension over `Q`, i.e. `φ(n)`.
    pub fn degree(&self) -> usize {
        dense::modulus(self.order).len() - 1
    }

    fn embed(&self, el: Cyclotomic) -> Cyclotomic {
        if self.order % el.order == 0 {
            el.lift(self.order)
        } else {
            el
        }
    }

    /// Additive identity
    pub fn zero(&self) -> Cyclotomic {
        self.embed(Cyclotomic::zero())
    }

    /// Multiplicative identity
    pub fn one(&self) -> Cyclotomic {
        self.embed(Cyclotomic::one())
    }

    /// Embed an integer
    pub fn from_int(&self, value: i32) -> Cyclotomic {
        self.embed(Cyclotomic::from_integer(value as i64))
    }

    /// `ζ_n = exp(2πi/n)`.
    pub fn generator(&self) -> Cyclotomic {
        Cyclotomic::root_of_unity(self.order, 1)
    }

    /// `ζ_n^k`.
    pub fn root_of_unity(&self, k: i64) -> Cyclotomic {
        Cyclotomic::root_of_unity(self.order, k)
    }

    /// Every primitive `n`-th root of unity `ζ_n^k`, `gcd(k, n) = 1`, in
    /// increasing order of `k`.
    pub fn primitive_roots(&self) -> Vec<Cyclotomic> {
        (1..self.order)
            .filter(|&k| num_integer::gcd(k, self.order) == 1)
            .map(|k| self.root_of_unity(k as i64))
            .collect()
    }

    /// Sum of two elements
    pub fn add_ref(&self, lhs: &Cyclotomic, rhs: &Cyclotomic) -> Cyclotomic {
        lhs.add_ref(rhs)
    }

    /// Product of two elements
    pub fn mul_ref(&self, lhs: &Cyclotomic, rhs: &Cyclotomic) -> Cyclotomic {
        lhs.mul_ref(rhs)
    }

    /// Additive inverse
    pub fn negate(&self, el: Cyclotomic) -> Cyclotomic {
        -el
    }

    /// Check equality of two elements
    pub fn eq_el(&self, lhs: &Cyclotomic, rhs: &Cyclotomic) -> bool {
        lhs == rhs
    }

    /// Check if an element is zero
    pub fn is_zero(&self, el: &Cyclotomic) -> bool {
        el.is_zero()
    }

    /// Check if an element is one
    pub fn is_one(&self, el: &Cyclotomic) -> bool {
        el.is_one()
    }
}

impl Debug for CyclotomicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CyclotomicField<{}>", self.order)
    }
}

impl Display for CyclotomicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field(Q(ζ{}))", render::subscript(self.order as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let field = CyclotomicField::new(5).unwrap();

        assert!(field.is_zero(&field.zero()));
        assert!(field.is_one(&field.one()));

        let a = field.from_int(5);
        let b = field.from_int(3);
        assert!(field.eq_el(&field.add_ref(&a, &b), &field.from_int(8)));
        assert!(field.eq_el(&field.mul_ref(&a, &b), &field.from_int(15)));

        let neg_a = field.negate(a.clone());
        assert!(field.is_zero(&field.add_ref(&a, &neg_a)));
    }

    #[test]
    fn test_roots_of_unity() {
        for n in 1..=12u32 {
            let zeta = Cyclotomic::root_of_unity(n, 1);
            assert!(zeta.pow(n).is_one(), "ζ_{}^{} != 1", n, n);
            for k in 1..n {
                assert!(!zeta.pow(k).is_one(), "ζ_{} has order {} < {}", n, k, n);
            }
        }
    }

    #[test]
    fn test_sum_of_primitive_fifth_roots() {
        // 1 + ζ + ζ² + ζ³ + ζ⁴ = 0
        let field = CyclotomicField::new(5).unwrap();
        let sum = (0..5)
            .map(|k| field.root_of_unity(k))
            .fold(field.zero(), |acc, x| acc + x);
        assert!(sum.is_zero());
    }

    #[test]
    fn test_conjugation() {
        let zeta = Cyclotomic::root_of_unity(7, 2);
        assert_eq!(zeta.conjugate(), Cyclotomic::root_of_unity(7, 5));
        assert_eq!(zeta.mul_ref(&zeta.conjugate()), Cyclotomic::one());

        let i = Cyclotomic::i();
        assert_eq!(i.conjugate(), -i.clone());

        let half = Cyclotomic::from_rational(BigRational::new(BigInt::from(1), BigInt::from(2)));
        assert_eq!(half.conjugate(), half);
    }

    #[test]
    fn test_mixed_conductors() {
        // ζ_3 · ζ_4 = ζ_12^{4+3}
        let product = Cyclotomic::root_of_unity(3, 1) * Cyclotomic::root_of_unity(4, 1);
        assert_eq!(product, Cyclotomic::root_of_unity(12, 7));

        // ζ_6 = -ζ_3^2 lives in Q(ζ_3) as well
        assert_eq!(Cyclotomic::root_of_unity(6, 1), -Cyclotomic::root_of_unity(3, 2));

        // i² = -1 regardless of where it is computed
        let i12 = Cyclotomic::root_of_unity(12, 3);
        assert_eq!(i12.pow(2), Cyclotomic::from_integer(-1));
        assert_eq!(i12, Cyclotomic::i());
    }

    #[test]
    fn test_primitive_roots() {
        let field = CyclotomicField::new(12).unwrap();
        let roots = field.primitive_roots();
        assert_eq!(roots.len(), 4);
        assert_eq!(roots[0], field.generator());
        assert_eq!(roots[3], field.root_of_unity(11));

        assert!(CyclotomicField::new(1).unwrap().primitive_roots().is_empty());
    }

    #[test]
    fn test_rational_detection() {
        let zeta = Cyclotomic::root_of_unity(5, 1);
        assert!(!zeta.is_rational());
        assert!(!zeta.add_ref(&zeta.conjugate()).is_rational());
        let tail = (1..5).fold(Cyclotomic::zero(), |acc, k| acc + zeta.pow(k));
        assert_eq!(tail, Cyclotomic::from_integer(-1));
        assert_eq!(
            Cyclotomic::root_of_unity(8, 4).to_rational(),
            Some(BigRational::from_integer(BigInt::from(-1)))
        );
    }

    #[test]
    fn test_render() {
        let zeta = Cyclotomic::root_of_unity(7, 3);
        assert_eq!(zeta.render(RenderStyle::Ascii), "zeta7^3");
        assert_eq!(zeta.render(RenderStyle::Latex), "\\zeta_{7}^{3}");
        let x = Cyclotomic::from_integer(2) - Cyclotomic::i();
        assert_eq!(x.render(RenderStyle::Ascii), "2 - i");
        assert_eq!(format!("{}", CyclotomicField::new(7).unwrap()), "Field(Q(ζ₇))");
    }
}
