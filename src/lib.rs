//! # hermitian-invariants
//!
//! Exact symbolic experiments with group-invariant polynomials attached to
//! CR hyperquadrics.
//!
//! A finite cyclic group `Γ(p; q) ⊂ U(a, b)` acts diagonally on `C^{a+b}` by
//! `p`-th roots of unity. Its orbit product
//!
//! ```text
//! Φ_Γ(z, w) = ∏_{γ ∈ Γ} (1 − ⟨γz, w⟩_{a,b})
//! ```
//!
//! is a polynomial in `z` and `conj(w)` with coefficients in the cyclotomic
//! field `Q(ζ_p)`. This crate builds such polynomials exactly and checks
//! properties of them, most importantly Hermitian symmetry
//! `Φ(z, w) = conj(Φ(w, z))`.
//!
//! ## Features
//!
//! - **Exact arithmetic**: cyclotomic fields `Q(ζ_n)` over big rationals, so
//!   equality of polynomials is decided exactly
//! - **Sparse polynomials** in vector components, their conjugates, real
//!   variables and coefficient symbols
//! - **Group generation** for `Γ(p; q)` and membership tests for `U(a, b)`
//! - **Invariants**: plain and polarized `Φ_Γ`, and the radial form `θ(x)`
//! - **Hermitian symmetry** by swap-and-conjugate or by the coefficient matrix
//! - **Monomial indexing**: multiindex enumeration, monomial sets, coefficient
//!   arrays and generic polynomials
//! - **Parameter sweeps** over all small `(a, b, p, q)`
//!
//! ## Quick Start
//!
//! ```
//! use hermitian_invariants::*;
//!
//! // Γ(3; 1, 2) acting on C^{1,1}
//! let inv = phi_gamma_z_w_polarized(1, 1, 3, &[1, 2]).unwrap();
//! assert!(is_hermitian_symmetric(&inv.phi, &inv.z, &inv.w).unwrap());
//!
//! // θ(x) = 1 - x₀³ for Γ(3; 1) acting on C
//! let theta = theta_x(1, 0, 3, &[1]).unwrap();
//! assert_eq!(theta.render(RenderStyle::Ascii), "-x0^3 + 1");
//! ```
//!
//! ## Monomials
//!
//! ```
//! use hermitian_invariants::*;
//!
//! let z = VectorSymbol::new("z", 2);
//! let w = VectorSymbol::new("w", 2);
//! let monomials = multivariate_monomials(&[z, w], 1).unwrap();
//! assert_eq!(monomials.len(), 16);
//!
//! let coefficients = coefficient_array(2, 2, 1, &DEFAULT_NAMING).unwrap();
//! assert_eq!(coefficients.len(), 16);
//! ```
//!
//! ## Parameter Sweeps
//!
//! ```
//! use hermitian_invariants::*;
//!
//! let bounds = FuzzBounds::new(2, 3).with_min_a(1).with_min_b(1);
//! let mut failures = 0;
//! run_experiment_with_fuzzed_parameters(
//!     |a, b, p, q| {
//!         if !check_phi_is_hermitian_symmetric(a, b, p, q).unwrap_or(false) {
//!             failures += 1;
//!         }
//!     },
//!     &bounds,
//! )
//! .unwrap();
//! assert_eq!(failures, 0);
//! ```
//!
//! ## Limitations
//!
//! - Polynomials are fully expanded; the size of `Φ_Γ` grows quickly with
//!   `p` and `a + b`
//! - Rendering produces text and LaTeX source only

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Algebra
pub mod cyclotomic;
pub mod error;
pub mod matrix;
pub mod polynomial;
pub mod render;
pub mod symbols;

// Invariants
pub mod group;
pub mod hermitian;
pub mod inner_product;
pub mod invariant;
pub mod monomials;

// Sweeps
pub mod experiments;
pub mod fuzz;

// Re-export main types
pub use cyclotomic::{cyclotomic_polynomial, Conjugate, Cyclotomic, CyclotomicField};
pub use error::{InvariantError, Result};
pub use matrix::Matrix;
pub use polynomial::{Monomial, Polynomial};
pub use render::RenderStyle;
pub use symbols::{MultiIndex, NamingScheme, Part, Variable, VectorSymbol, DEFAULT_NAMING};

pub use group::{coprime_set, indefinite_identity, is_in_u_ab, omega, primitive_roots, type_iii_group};
pub use hermitian::{coefficient_matrix, is_hermitian_matrix, is_hermitian_symmetric, CoefficientMatrix};
pub use inner_product::hermitian_inner_product;
pub use invariant::{
    phi_gamma_product, phi_gamma_product_polarized, phi_gamma_z, phi_gamma_z_w_polarized, theta_x,
    theta_x_from_phi_gamma, PhiGamma, PolarizedPhiGamma,
};
pub use monomials::{
    coefficient_array, generic_polynomial, monomial, monomial_map, multiindex_combinations, multiindices,
    multiindices_multivariate, multivariate_monomial, multivariate_monomials, polynomial_in_z_z_bar,
    vector_component_map, CoefficientSymbol, ComponentMap,
};

pub use experiments::{
    check_coefficient_matrix_is_hermitian, check_group_is_subset_of_u_ab, check_phi_is_hermitian_symmetric,
    Experiment, ExperimentReport,
};
pub use fuzz::{fuzzed_parameters, run_experiment_with_fuzzed_parameters, FuzzBounds, GroupParameters};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
