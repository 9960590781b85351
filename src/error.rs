//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, InvariantError>;

/// Precondition violations and boundary failures.
///
/// Every variant is fatal for the call that produced it: the computations only
/// make sense under their preconditions, so nothing is retried or patched up.
#[derive(Error, Debug)]
pub enum InvariantError {
    /// A length or size did not match the one implied by the other inputs.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Size implied by the other inputs
        expected: usize,
        /// Size received
        actual: usize,
    },

    /// Two matrices that must share a shape do not.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        /// Shape of the left operand
        left: (usize, usize),
        /// Shape of the right operand
        right: (usize, usize),
    },

    /// A column vector was expected.
    #[error("expected a column vector, got a {rows}x{cols} matrix")]
    NotAColumn {
        /// Rows of the offending matrix
        rows: usize,
        /// Columns of the offending matrix
        cols: usize,
    },

    /// A square matrix was expected.
    #[error("expected a square matrix, got a {rows}x{cols} matrix")]
    NotSquare {
        /// Rows of the offending matrix
        rows: usize,
        /// Columns of the offending matrix
        cols: usize,
    },

    /// The group passed to an invariant builder has no elements.
    #[error("group must contain at least one element")]
    EmptyGroup,

    /// A scalar parameter is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// More vector variables were requested than the naming scheme provides.
    #[error("requested {requested} vector variables but the naming scheme has {available}")]
    TooManyVariables {
        /// Vector variables asked for
        requested: usize,
        /// Vector names in the scheme
        available: usize,
    },

    /// A component survived the `conj(z_j) z_j -> x_j` substitution.
    #[error("polynomial is not a function of |z_j|^2 alone: `{variable}` remains")]
    NotRadial {
        /// The surviving variable, rendered
        variable: String,
    },

    /// A term does not fit the requested coefficient-matrix basis.
    #[error("term `{term}` lies outside the coefficient matrix basis")]
    TermOutsideBasis {
        /// The offending term, rendered
        term: String,
    },

    /// A configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InvariantError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        InvariantError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
