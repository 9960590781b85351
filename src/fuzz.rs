//! Exhaustive sweeps over small group parameters `(a, b, p, q)`.

use crate::error::{InvariantError, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::path::Path;
use tracing::{debug, info};

/// Bounds of a parameter sweep.
///
/// Every dimension `n = a + b` in `1..=max_n` is visited with
/// `a ∈ [min_a, n - min_b]`, every group order `p ∈ [n + 1, max_p]` and every
/// strictly increasing `q ⊂ {1, …, p - 1}` of length `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzBounds {
    /// Largest total dimension `a + b`
    pub max_n: usize,

    /// Largest group order
    pub max_p: u32,

    /// Smallest number of positive directions
    #[serde(default)]
    pub min_a: usize,

    /// Smallest number of negative directions
    #[serde(default)]
    pub min_b: usize,
}

impl FuzzBounds {
    /// Bounds with no lower limits on `a` or `b`
    pub fn new(max_n: usize, max_p: u32) -> Self {
        FuzzBounds {
            max_n,
            max_p,
            min_a: 0,
            min_b: 0,
        }
    }

    /// Set the smallest `a`
    pub fn with_min_a(mut self, min_a: usize) -> Self {
        self.min_a = min_a;
        self
    }

    /// Set the smallest `b`
    pub fn with_min_b(mut self, min_b: usize) -> Self {
        self.min_b = min_b;
        self
    }

    /// `max_n - 1 ≤ max_p`, so that every dimension has at least one order.
    pub fn validate(&self) -> Result<()> {
        if self.max_n.saturating_sub(1) > self.max_p as usize {
            return Err(InvariantError::invalid(
                "max_n",
                format!("max_n - 1 = {} exceeds max_p = {}", self.max_n - 1, self.max_p),
            ));
        }
        Ok(())
    }

    /// Parse bounds from JSON, e.g. `{"max_n": 3, "max_p": 4, "min_a": 1}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let bounds: FuzzBounds = serde_json::from_str(json)?;
        bounds.validate()?;
        Ok(bounds)
    }

    /// Read and validate bounds from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

impl Default for FuzzBounds {
    fn default() -> Self {
        Self::new(2, 3)
    }
}

/// One point of a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupParameters {
    /// Positive directions
    pub a: usize,
    /// Negative directions
    pub b: usize,
    /// Group order
    pub p: u32,
    /// Exponents of the generator, one per coordinate
    pub q: Vec<u32>,
}

impl GroupParameters {
    /// Total dimension `a + b`
    pub fn n(&self) -> usize {
        self.a + self.b
    }
}

impl Display for GroupParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a={}, b={}, p={}, q=({})",
            self.a,
            self.b,
            self.p,
            self.q.iter().join(", ")
        )
    }
}

/// Call `experiment(a, b, p, q)` for every point of the sweep and return the
/// number of calls.
pub fn run_experiment_with_fuzzed_parameters<F>(mut experiment: F, bounds: &FuzzBounds) -> Result<usize>
where
    F: FnMut(usize, usize, u32, &[u32]),
{
    bounds.validate()?;
    info!(
        max_n = bounds.max_n,
        max_p = bounds.max_p,
        min_a = bounds.min_a,
        min_b = bounds.min_b,
        "starting parameter sweep"
    );

    let mut calls = 0;
    for n in 1..=bounds.max_n {
        if bounds.min_b > n {
            continue;
        }
        for a in bounds.min_a..=n - bounds.min_b {
            let b = n - a;
            for p in (n as u32 + 1)..=bounds.max_p {
                for q in (1..p).combinations(n) {
                    debug!(a, b, p, ?q, "running experiment");
                    experiment(a, b, p, &q);
                    calls += 1;
                }
            }
        }
    }
    info!(calls, "parameter sweep finished");
    Ok(calls)
}

/// The sweep of [`run_experiment_with_fuzzed_parameters`] as a list.
pub fn fuzzed_parameters(bounds: &FuzzBounds) -> Result<Vec<GroupParameters>> {
    let mut points = Vec::new();
    run_experiment_with_fuzzed_parameters(
        |a, b, p, q| {
            points.push(GroupParameters {
                a,
                b,
                p,
                q: q.to_vec(),
            })
        },
        bounds,
    )?;
    Ok(points)
}
