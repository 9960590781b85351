//! Sparse multivariate polynomials with cyclotomic coefficients.
//!
//! Terms are kept in a `BTreeMap<Monomial, Cyclotomic>` with zero coefficients
//! dropped on every update, so two polynomials are equal exactly when their
//! term maps are equal. That is the "structural equality" the Hermitian
//! symmetry check relies on.

use crate::cyclotomic::{Conjugate, Cyclotomic};
use crate::render::{self, RenderStyle};
use crate::symbols::{Variable, VectorSymbol};
use num_traits::{One, Zero};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// A product of variables with positive exponents; the empty product is `1`.
///
/// The variable map is sorted, so equal products have equal representations
/// regardless of the order the factors were multiplied in.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Monomial {
    powers: BTreeMap<Variable, u32>,
}

impl Monomial {
    /// The monomial `var^1`.
    pub fn var(var: Variable) -> Self {
        Self::var_pow(var, 1)
    }

    /// The monomial `var^exp`; exponent 0 gives `1`.
    pub fn var_pow(var: Variable, exp: u32) -> Self {
        let mut powers = BTreeMap::new();
        if exp > 0 {
            powers.insert(var, exp);
        }
        Monomial { powers }
    }

    /// Build from `(variable, exponent)` pairs; repeated variables accumulate.
    pub fn from_powers<I>(powers: I) -> Self
    where
        I: IntoIterator<Item = (Variable, u32)>,
    {
        let mut result = Monomial::one();
        for (var, exp) in powers {
            result.mul_var(var, exp);
        }
        result
    }

    fn mul_var(&mut self, var: Variable, exp: u32) {
        if exp > 0 {
            *self.powers.entry(var).or_insert(0) += exp;
        }
    }

    /// Exponent of `var` (0 if absent).
    pub fn exponent(&self, var: &Variable) -> u32 {
        self.powers.get(var).copied().unwrap_or(0)
    }

    /// `(variable, exponent)` pairs in canonical order.
    pub fn powers(&self) -> impl Iterator<Item = (&Variable, u32)> {
        self.powers.iter().map(|(v, &e)| (v, e))
    }

    /// Variables with a nonzero exponent
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.powers.keys()
    }

    /// Sum of all exponents.
    pub fn degree(&self) -> u32 {
        self.powers.values().sum()
    }

    /// Product, adding exponents
    pub fn mul_ref(&self, other: &Monomial) -> Monomial {
        let mut result = self.clone();
        for (var, &exp) in &other.powers {
            result.mul_var(var.clone(), exp);
        }
        result
    }

    /// Multiply every exponent by `exp`
    pub fn pow(&self, exp: u32) -> Monomial {
        if exp == 0 {
            return Monomial::one();
        }
        Monomial {
            powers: self.powers.iter().map(|(v, &e)| (v.clone(), e * exp)).collect(),
        }
    }

    /// Apply `f` to every variable, merging variables that collide.
    pub fn map_variables<F>(&self, mut f: F) -> Monomial
    where
        F: FnMut(&Variable) -> Variable,
    {
        Monomial::from_powers(self.powers.iter().map(|(v, &e)| (f(v), e)))
    }

    /// Render as a product of powers, `1` when empty
    pub fn render(&self, style: RenderStyle) -> String {
        if self.powers.is_empty() {
            return "1".to_string();
        }
        self.powers
            .iter()
            .map(|(v, &e)| style.power(&v.render(style), e))
            .collect::<Vec<_>>()
            .join(style.times())
    }
}

impl One for Monomial {
    fn one() -> Self {
        Monomial::default()
    }

    fn is_one(&self) -> bool {
        self.powers.is_empty()
    }
}

impl Mul for Monomial {
    type Output = Monomial;
    fn mul(self, rhs: Monomial) -> Monomial {
        self.mul_ref(&rhs)
    }
}

impl Conjugate for Monomial {
    fn conjugate(&self) -> Self {
        self.map_variables(|v| v.conjugate())
    }
}

impl Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monomial({})", self.render(RenderStyle::Ascii))
    }
}

impl Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(RenderStyle::Unicode))
    }
}

/// A finite sum of `coefficient · monomial` terms.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, Cyclotomic>,
}

impl Polynomial {
    /// A constant polynomial.
    pub fn constant(value: Cyclotomic) -> Self {
        Self::term(value, Monomial::one())
    }

    /// The polynomial consisting of one variable.
    pub fn variable(var: Variable) -> Self {
        Self::monomial(Monomial::var(var))
    }

    /// The polynomial `1 · monomial`.
    pub fn monomial(monomial: Monomial) -> Self {
        Self::term(Cyclotomic::one(), monomial)
    }

    /// A single term; a zero coefficient gives the zero polynomial.
    pub fn term(coefficient: Cyclotomic, monomial: Monomial) -> Self {
        let mut poly = Polynomial::zero();
        poly.add_term(monomial, coefficient);
        poly
    }

    /// Add `coefficient · monomial` in place, keeping the no-zero invariant.
    pub fn add_term(&mut self, monomial: Monomial, coefficient: Cyclotomic) {
        if coefficient.is_zero() {
            return;
        }
        match self.terms.entry(monomial) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(coefficient);
            }
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                let sum = slot.get().add_ref(&coefficient);
                if sum.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }

    /// `(monomial, coefficient)` pairs in canonical order.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Cyclotomic)> {
        self.terms.iter()
    }

    /// Number of nonzero terms
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Coefficient of `monomial` (zero if it does not occur).
    pub fn coefficient(&self, monomial: &Monomial) -> Cyclotomic {
        self.terms.get(monomial).cloned().unwrap_or_else(Cyclotomic::zero)
    }

    /// True for the zero polynomial and for nonzero constants.
    pub fn is_constant(&self) -> bool {
        self.terms.keys().all(|m| m.is_one())
    }

    /// Every variable occurring with a nonzero coefficient.
    pub fn free_variables(&self) -> BTreeSet<Variable> {
        self.terms
            .keys()
            .flat_map(|m| m.variables().cloned())
            .collect()
    }

    /// Names of every vector with a component occurring in the polynomial.
    pub fn free_vectors(&self) -> BTreeSet<String> {
        self.terms
            .keys()
            .flat_map(|m| m.variables())
            .filter_map(|v| v.vector_name().map(str::to_string))
            .collect()
    }

    /// Largest total degree of a term; 0 for constants and for zero.
    pub fn total_degree(&self) -> u32 {
        self.terms.keys().map(Monomial::degree).max().unwrap_or(0)
    }

    /// Largest exponent of `var` in any term.
    pub fn degree_in(&self, var: &Variable) -> u32 {
        self.terms.keys().map(|m| m.exponent(var)).max().unwrap_or(0)
    }

    /// Sum
    pub fn add_ref(&self, other: &Polynomial) -> Polynomial {
        let mut result = self.clone();
        for (m, c) in &other.terms {
            result.add_term(m.clone(), c.clone());
        }
        result
    }

    /// Difference
    pub fn sub_ref(&self, other: &Polynomial) -> Polynomial {
        let mut result = self.clone();
        for (m, c) in &other.terms {
            result.add_term(m.clone(), c.neg_ref());
        }
        result
    }

    /// Product
    pub fn mul_ref(&self, other: &Polynomial) -> Polynomial {
        let mut result = Polynomial::zero();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                result.add_term(m1.mul_ref(m2), c1.mul_ref(c2));
            }
        }
        result
    }

    /// Negation
    pub fn neg_ref(&self) -> Polynomial {
        Polynomial {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), c.neg_ref())).collect(),
        }
    }

    /// Multiply every coefficient by `factor`.
    pub fn scale(&self, factor: &Cyclotomic) -> Polynomial {
        let mut result = Polynomial::zero();
        for (m, c) in &self.terms {
            result.add_term(m.clone(), c.mul_ref(factor));
        }
        result
    }

    /// `self^exp` by repeated squaring.
    pub fn pow(&self, exp: u32) -> Polynomial {
        let mut result = Polynomial::one();
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

    /// Rewrite every monomial with `f` and collect like terms.
    pub fn map_monomials<F>(&self, mut f: F) -> Polynomial
    where
        F: FnMut(&Monomial) -> Monomial,
    {
        let mut result = Polynomial::zero();
        for (m, c) in &self.terms {
            result.add_term(f(m), c.clone());
        }
        result
    }

    /// Substitute the vector named `to` for the vector named `from`,
    /// componentwise and preserving conjugation.
    pub fn rename_vector(&self, from: &str, to: &str) -> Polynomial {
        self.map_monomials(|m| {
            m.map_variables(|v| match v {
                Variable::Component {
                    vector,
                    index,
                    conjugated,
                } if vector == from => Variable::Component {
                    vector: to.to_string(),
                    index: *index,
                    conjugated: *conjugated,
                },
                other => other.clone(),
            })
        })
    }

    /// Exchange two vectors in one pass.
    pub fn swap_vectors(&self, a: &str, b: &str) -> Polynomial {
        self.map_monomials(|m| {
            m.map_variables(|v| match v {
                Variable::Component {
                    vector,
                    index,
                    conjugated,
                } if vector == a || vector == b => Variable::Component {
                    vector: if vector == a { b.to_string() } else { a.to_string() },
                    index: *index,
                    conjugated: *conjugated,
                },
                other => other.clone(),
            })
        })
    }

    /// Render with terms ordered by descending total degree.
    pub fn render(&self, style: RenderStyle) -> String {
        let mut ordered: Vec<(&Monomial, &Cyclotomic)> = self.terms.iter().collect();
        ordered.sort_by(|(m1, _), (m2, _)| m2.degree().cmp(&m1.degree()).then_with(|| m1.cmp(m2)));

        let mut pieces: Vec<(bool, String)> = Vec::new();
        for (m, c) in ordered {
            if m.is_one() {
                if c.is_compound() {
                    pieces.push((false, format!("({})", c.render(style))));
                } else {
                    pieces.extend(c.signed_terms(style));
                }
                continue;
            }
            let monomial = m.render(style);
            if c.is_compound() {
                pieces.push((false, format!("({}){}{}", c.render(style), style.times(), monomial)));
                continue;
            }
            let (negative, magnitude) = c
                .signed_terms(style)
                .into_iter()
                .next()
                .unwrap_or((false, "0".to_string()));
            if magnitude == "1" {
                pieces.push((negative, monomial));
            } else {
                pieces.push((negative, format!("{}{}{}", magnitude, style.times(), monomial)));
            }
        }
        render::join_signed(&pieces)
    }
}

impl VectorSymbol {
    /// The symbol as an explicit column of component polynomials.
    pub fn as_explicit(&self) -> crate::matrix::Matrix<Polynomial> {
        crate::matrix::Matrix::column(
            self.components()
                .into_iter()
                .map(Polynomial::variable)
                .collect(),
        )
    }
}

impl Conjugate for Polynomial {
    /// Conjugate every coefficient and every variable.
    fn conjugate(&self) -> Self {
        let mut result = Polynomial::zero();
        for (m, c) in &self.terms {
            result.add_term(m.conjugate(), c.conjugate());
        }
        result
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::default()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::constant(Cyclotomic::one())
    }
}

impl From<Cyclotomic> for Polynomial {
    fn from(value: Cyclotomic) -> Self {
        Polynomial::constant(value)
    }
}

impl From<Variable> for Polynomial {
    fn from(var: Variable) -> Self {
        Polynomial::variable(var)
    }
}

impl From<Monomial> for Polynomial {
    fn from(monomial: Monomial) -> Self {
        Polynomial::monomial(monomial)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Polynomial) -> Polynomial {
        self.add_ref(&rhs)
    }
}

impl<'a> Add<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &'a Polynomial) -> Polynomial {
        self.add_ref(rhs)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Polynomial) -> Polynomial {
        self.sub_ref(&rhs)
    }
}

impl<'a> Sub<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: &'a Polynomial) -> Polynomial {
        self.sub_ref(rhs)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        self.mul_ref(&rhs)
    }
}

impl<'a> Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &'a Polynomial) -> Polynomial {
        self.mul_ref(rhs)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        self.neg_ref()
    }
}

impl Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial({})", self.render(RenderStyle::Ascii))
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(RenderStyle::Unicode))
    }
}
