//! Scalar variables, vector placeholders and the naming scheme that produces
//! them.

use crate::cyclotomic::Conjugate;
use crate::error::{InvariantError, Result};
use crate::render::{self, RenderStyle};
use lazy_static::lazy_static;
use std::fmt::{self, Display};

/// Per-component exponents of one monomial in one vector variable.
pub type MultiIndex = Vec<u32>;

/// Which half of a complex coefficient `re + i·im` a variable stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Part {
    /// Real part
    Re,
    /// Imaginary part
    Im,
}

/// A scalar indeterminate.
///
/// Components of vector symbols are complex, so conjugation flips
/// `conjugated`. Everything else is real and fixed by conjugation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    /// `name_index`, or its conjugate.
    Component {
        /// Vector name
        vector: String,
        /// Component index
        index: usize,
        /// Whether this is `conj(name_index)`
        conjugated: bool,
    },
    /// A real scalar such as the `x_j` standing in for `|z_j|^2`.
    Real {
        /// Variable name
        name: String,
        /// Subscript
        index: usize,
    },
    /// Real or imaginary part of a coefficient symbol `name_{index}`.
    Coefficient {
        /// Coefficient name
        name: String,
        /// One multiindex per vector variable
        index: Vec<MultiIndex>,
        /// Which half of the complex coefficient
        part: Part,
    },
}

impl Variable {
    /// The `index`-th component of the vector `vector`.
    pub fn component(vector: impl Into<String>, index: usize) -> Self {
        Variable::Component {
            vector: vector.into(),
            index,
            conjugated: false,
        }
    }

    /// The `index`-th real variable named `name`.
    pub fn real(name: impl Into<String>, index: usize) -> Self {
        Variable::Real {
            name: name.into(),
            index,
        }
    }

    /// Real-valued variables are fixed by conjugation.
    pub fn is_real(&self) -> bool {
        !matches!(self, Variable::Component { .. })
    }

    /// Name of the vector this variable is a component of, if any.
    pub fn vector_name(&self) -> Option<&str> {
        match self {
            Variable::Component { vector, .. } => Some(vector.as_str()),
            _ => None,
        }
    }

    /// Render as `z_0`, `conj(z_0)`, `x_1` or a coefficient part
    pub fn render(&self, style: RenderStyle) -> String {
        match self {
            Variable::Component {
                vector,
                index,
                conjugated,
            } => match (style, *conjugated) {
                (RenderStyle::Unicode, false) => format!("{}{}", vector, render::subscript(*index as u64)),
                (RenderStyle::Unicode, true) => {
                    format!("{}\u{0305}{}", vector, render::subscript(*index as u64))
                }
                (RenderStyle::Ascii, false) => format!("{}{}", vector, index),
                (RenderStyle::Ascii, true) => format!("conj({}{})", vector, index),
                (RenderStyle::Latex, false) => format!("{}_{{{}}}", vector, index),
                (RenderStyle::Latex, true) => format!("\\overline{{{}_{{{}}}}}", vector, index),
            },
            Variable::Real { name, index } => match style {
                RenderStyle::Unicode => format!("{}{}", name, render::subscript(*index as u64)),
                RenderStyle::Ascii => format!("{}{}", name, index),
                RenderStyle::Latex => format!("{}_{{{}}}", name, index),
            },
            Variable::Coefficient { name, index, part } => {
                let symbol = format!("{}_{{{}}}", name, subscript_label(index));
                match (style, *part) {
                    (RenderStyle::Latex, Part::Re) => format!("\\operatorname{{Re}} {}", symbol),
                    (RenderStyle::Latex, Part::Im) => format!("\\operatorname{{Im}} {}", symbol),
                    (_, Part::Re) => format!("re({})", symbol),
                    (_, Part::Im) => format!("im({})", symbol),
                }
            }
        }
    }
}

impl Conjugate for Variable {
    fn conjugate(&self) -> Self {
        match self {
            Variable::Component {
                vector,
                index,
                conjugated,
            } => Variable::Component {
                vector: vector.clone(),
                index: *index,
                conjugated: !conjugated,
            },
            other => other.clone(),
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(RenderStyle::Unicode))
    }
}

/// `[[0, 1], [1, 0]]` -> `(0,1),(1,0)`
pub(crate) fn subscript_label(index: &[MultiIndex]) -> String {
    index
        .iter()
        .map(|m| {
            let inner: Vec<String> = m.iter().map(|e| e.to_string()).collect();
            format!("({})", inner.join(","))
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// A named `(dim × 1)` complex column vector, or its conjugate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VectorSymbol {
    name: String,
    dim: usize,
    conjugated: bool,
}

impl VectorSymbol {
    /// Unconjugated vector `name` in `dim` dimensions
    pub fn new(name: impl Into<String>, dim: usize) -> Self {
        VectorSymbol {
            name: name.into(),
            dim,
            conjugated: false,
        }
    }

    /// Vector name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of components
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Whether this stands for `conj(name)`
    pub fn is_conjugated(&self) -> bool {
        self.conjugated
    }

    /// The `index`-th component.
    pub fn component(&self, index: usize) -> Variable {
        Variable::Component {
            vector: self.name.clone(),
            index,
            conjugated: self.conjugated,
        }
    }

    /// The explicit entries `name_0, …, name_{dim-1}`, in order.
    pub fn components(&self) -> Vec<Variable> {
        (0..self.dim).map(|j| self.component(j)).collect()
    }
}

impl Conjugate for VectorSymbol {
    fn conjugate(&self) -> Self {
        VectorSymbol {
            name: self.name.clone(),
            dim: self.dim,
            conjugated: !self.conjugated,
        }
    }
}

impl Display for VectorSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conjugated {
            write!(f, "{}\u{0305}", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Names handed to generated vector variables, coefficient symbols and the
/// real variables of `θ(x)`.
///
/// ```
/// use hermitian_invariants::symbols::NamingScheme;
///
/// let naming = NamingScheme::default();
/// let symbols = naming.vector_symbols(2, 3).unwrap();
/// assert_eq!(symbols[0].name(), "z");
/// assert_eq!(symbols[1].name(), "w");
/// assert!(naming.vector_symbols(9, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingScheme {
    vector_names: Vec<String>,
    coefficient_name: String,
    real_name: String,
}

impl NamingScheme {
    /// Create a naming scheme from explicit vector names.
    pub fn new<I, S>(vector_names: I, coefficient_name: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vector_names: Vec<String> = vector_names.into_iter().map(Into::into).collect();
        let mut seen = std::collections::BTreeSet::new();
        for name in &vector_names {
            if name.is_empty() {
                return Err(InvariantError::invalid("vector_names", "names must be non-empty"));
            }
            if !seen.insert(name.as_str()) {
                return Err(InvariantError::invalid(
                    "vector_names",
                    format!("`{}` appears more than once", name),
                ));
            }
        }
        Ok(NamingScheme {
            vector_names,
            coefficient_name: coefficient_name.into(),
            real_name: "x".to_string(),
        })
    }

    /// Override the name of the real variables used by `θ(x)`.
    pub fn with_real_name(mut self, name: impl Into<String>) -> Self {
        self.real_name = name.into();
        self
    }

    /// Names handed out to vector variables, in order
    pub fn vector_names(&self) -> &[String] {
        &self.vector_names
    }

    /// Base name of coefficient symbols
    pub fn coefficient_name(&self) -> &str {
        &self.coefficient_name
    }

    /// Name of the real variables `x_j`
    pub fn real_name(&self) -> &str {
        &self.real_name
    }

    /// The first `arity` vector symbols, each of dimension `dim`.
    pub fn vector_symbols(&self, arity: usize, dim: usize) -> Result<Vec<VectorSymbol>> {
        if arity > self.vector_names.len() {
            return Err(InvariantError::TooManyVariables {
                requested: arity,
                available: self.vector_names.len(),
            });
        }
        Ok(self.vector_names[..arity]
            .iter()
            .map(|name| VectorSymbol::new(name.clone(), dim))
            .collect())
    }
}

impl Default for NamingScheme {
    fn default() -> Self {
        NamingScheme {
            vector_names: ["z", "w", "u", "v", "s", "t", "y", "r"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            coefficient_name: "c".to_string(),
            real_name: "x".to_string(),
        }
    }
}

lazy_static! {
    /// Eight vector names `z, w, u, v, s, t, y, r`, coefficient symbols `c`
    /// and real variables `x`.
    pub static ref DEFAULT_NAMING: NamingScheme = NamingScheme::default();
}
