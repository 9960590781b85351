//! Text rendering shared by scalars, polynomials and matrices.

use num_rational::BigRational;
use num_traits::{One, Signed};

/// Output flavour for human-readable expressions.
///
/// `Unicode` is what `Display` uses. `Latex` produces math-mode source that can
/// be pasted into a document; no rendering process is ever spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Sub/superscript digits and a combining overline for conjugates.
    #[default]
    Unicode,
    /// Plain ASCII (`conj(z0)`, `zeta7^3`).
    Ascii,
    /// LaTeX math mode (`\overline{z_{0}}`, `\zeta_{7}^{3}`).
    Latex,
}

impl RenderStyle {
    /// Separator placed between the factors of a product.
    pub(crate) fn times(self) -> &'static str {
        match self {
            RenderStyle::Unicode => "·",
            RenderStyle::Ascii => "*",
            RenderStyle::Latex => " ",
        }
    }

    /// `base` raised to `exp`; exponent 1 is left implicit.
    pub(crate) fn power(self, base: &str, exp: u32) -> String {
        if exp == 1 {
            return base.to_string();
        }
        match self {
            RenderStyle::Unicode => format!("{}{}", base, superscript(exp as u64)),
            RenderStyle::Ascii => format!("{}^{}", base, exp),
            RenderStyle::Latex => format!("{}^{{{}}}", base, exp),
        }
    }

    /// Absolute value of a rational coefficient.
    pub(crate) fn rational(self, value: &BigRational) -> String {
        let value = value.abs();
        if value.denom().is_one() {
            return value.numer().to_string();
        }
        match self {
            RenderStyle::Latex => format!("\\frac{{{}}}{{{}}}", value.numer(), value.denom()),
            _ => format!("{}/{}", value.numer(), value.denom()),
        }
    }
}

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

fn map_digits(n: u64, table: &[char; 10]) -> String {
    n.to_string()
        .bytes()
        .map(|b| table[(b - b'0') as usize])
        .collect()
}

/// `12` -> `¹²`
pub(crate) fn superscript(n: u64) -> String {
    map_digits(n, &SUPERSCRIPT_DIGITS)
}

/// `12` -> `₁₂`
pub(crate) fn subscript(n: u64) -> String {
    map_digits(n, &SUBSCRIPT_DIGITS)
}

/// Join `(negative, body)` pairs into `a - b + c`.
///
/// Bodies are magnitudes; the sign is carried separately so the first term can
/// render as `-a` and later ones as ` - a`. An empty list renders as `0`.
pub(crate) fn join_signed(terms: &[(bool, String)]) -> String {
    if terms.is_empty() {
        return "0".to_string();
    }
    let mut out = String::new();
    for (i, (negative, body)) in terms.iter().enumerate() {
        match (i, negative) {
            (0, true) => out.push('-'),
            (0, false) => {}
            (_, true) => out.push_str(" - "),
            (_, false) => out.push_str(" + "),
        }
        out.push_str(body);
    }
    out
}

/// Sign of a rational as the `negative` flag used by [`join_signed`].
pub(crate) fn is_negative(value: &BigRational) -> bool {
    value.is_negative()
}
