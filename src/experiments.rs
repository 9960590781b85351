//! Checks run for each point of a parameter sweep.

use crate::error::{InvariantError, Result};
use crate::fuzz::GroupParameters;
use crate::group::{is_in_u_ab, primitive_roots, type_iii_group};
use crate::hermitian::{coefficient_matrix, is_hermitian_symmetric};
use crate::invariant::phi_gamma_z_w_polarized;
use crate::render::RenderStyle;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Every element of `Γ(p; q)` lies in `U(a, b)`.
///
/// Only the first primitive root is used; the others give conjugate groups.
pub fn check_group_is_subset_of_u_ab(a: usize, b: usize, p: u32, q: &[u32]) -> Result<bool> {
    info!(n = a + b, a, b, p, ?q, "checking Γ(p; q) ⊂ U(a, b)");
    let roots = primitive_roots(p)?;
    let omega = match roots.first() {
        Some(omega) => omega,
        None => return Err(InvariantError::invalid("p", "must be at least 2")),
    };
    let group = type_iii_group(a, b, p, q, omega)?;
    for (k, gamma) in group.iter().enumerate() {
        debug!(k, gamma = %gamma, "group element");
    }
    Ok(group.iter().all(|gamma| is_in_u_ab(gamma, a, b)))
}

/// The polarized invariant `Φ_Γ(z, w)` is Hermitian symmetric.
pub fn check_phi_is_hermitian_symmetric(a: usize, b: usize, p: u32, q: &[u32]) -> Result<bool> {
    let inv = phi_gamma_z_w_polarized(a, b, p, q)?;
    info!(a, b, p, ?q, terms = inv.phi.num_terms(), "checking Φ(z, w̄) = conj(Φ(w, z̄))");
    debug!(phi = %inv.phi.render(RenderStyle::Ascii), "Φ(z, w̄)");
    is_hermitian_symmetric(&inv.phi, &inv.z, &inv.w)
}

/// The coefficient matrix of `Φ_Γ(z, w)` in the basis `z^α conj(w)^β` is
/// Hermitian.
pub fn check_coefficient_matrix_is_hermitian(a: usize, b: usize, p: u32, q: &[u32]) -> Result<bool> {
    let inv = phi_gamma_z_w_polarized(a, b, p, q)?;
    // each factor is linear in every z_j conj(w_j), so exponents stay ≤ p
    let matrix = coefficient_matrix(&inv.phi, &inv.z, &inv.w, p)?;
    info!(a, b, p, ?q, size = matrix.size(), nnz = matrix.nnz(), "checking C = C^†");
    Ok(matrix.is_hermitian())
}

/// Which check to run over a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Experiment {
    /// [`check_group_is_subset_of_u_ab`]
    Group,
    /// [`check_phi_is_hermitian_symmetric`]
    Symmetry,
    /// [`check_coefficient_matrix_is_hermitian`]
    Matrix,
}

impl Experiment {
    /// Every experiment, in CLI order
    pub const ALL: [Experiment; 3] = [Experiment::Group, Experiment::Symmetry, Experiment::Matrix];

    /// Lowercase name used on the command line and in JSON
    pub fn name(self) -> &'static str {
        match self {
            Experiment::Group => "group",
            Experiment::Symmetry => "symmetry",
            Experiment::Matrix => "matrix",
        }
    }

    /// Run this check at one point.
    pub fn check(self, params: &GroupParameters) -> Result<bool> {
        let GroupParameters { a, b, p, q } = params;
        match self {
            Experiment::Group => check_group_is_subset_of_u_ab(*a, *b, *p, q),
            Experiment::Symmetry => check_phi_is_hermitian_symmetric(*a, *b, *p, q),
            Experiment::Matrix => check_coefficient_matrix_is_hermitian(*a, *b, *p, q),
        }
    }

    /// Run this check and package the outcome; errors become failed reports.
    pub fn report(self, params: &GroupParameters) -> ExperimentReport {
        let (passed, error) = match self.check(params) {
            Ok(passed) => (passed, None),
            Err(e) => {
                warn!(experiment = self.name(), %params, error = %e, "check failed to run");
                (false, Some(e.to_string()))
            }
        };
        ExperimentReport {
            experiment: self,
            parameters: params.clone(),
            passed,
            error,
        }
    }
}

impl Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Experiment {
    type Err = InvariantError;

    fn from_str(s: &str) -> Result<Self> {
        Experiment::ALL
            .iter()
            .copied()
            .find(|e| e.name() == s)
            .ok_or_else(|| {
                InvariantError::invalid("experiment", format!("unknown experiment `{}`", s))
            })
    }
}

/// Outcome of one check at one point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Which check ran
    pub experiment: Experiment,
    /// Point of the sweep
    pub parameters: GroupParameters,
    /// Whether the check held
    pub passed: bool,
    /// Error message if the check could not run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "ok" } else { "FAILED" };
        write!(f, "{} [{}] {}", status, self.experiment, self.parameters)?;
        if let Some(error) = &self.error {
            write!(f, ": {}", error)?;
        }
        Ok(())
    }
}
