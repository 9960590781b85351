//! Benchmark: Invariant Construction and Symmetry Checks
//!
//! Measures building the polarized `Φ_Γ(z, w)` for growing groups and the two
//! Hermitian symmetry checks on the result.
//!
//! Test groups:
//! - Γ(3; 1, 2) on C^{1,1} (tiny)
//! - Γ(5; 1, 2, 4) on C^{1,2} (small)
//! - Γ(7; 1, 2, 3, 5) on C^{2,2} (moderate)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hermitian_invariants::*;
use std::time::Duration;

fn cases() -> Vec<(&'static str, usize, usize, u32, Vec<u32>)> {
    vec![
        ("gamma_3_c11", 1, 1, 3, vec![1, 2]),
        ("gamma_5_c12", 1, 2, 5, vec![1, 2, 4]),
        ("gamma_7_c22", 2, 2, 7, vec![1, 2, 3, 5]),
    ]
}

/// Benchmark building the polarized invariant
fn bench_phi_gamma_polarized(c: &mut Criterion) {
    let mut group = c.benchmark_group("phi_gamma_polarized");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for (name, a, b, p, q) in cases() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &q, |bench, q| {
            bench.iter(|| black_box(phi_gamma_z_w_polarized(a, b, p, q).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark swap-and-conjugate against the coefficient matrix check
fn bench_symmetry_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("hermitian_symmetry");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for (name, a, b, p, q) in cases() {
        let inv = phi_gamma_z_w_polarized(a, b, p, &q).unwrap();

        group.bench_with_input(BenchmarkId::new("swap_conjugate", name), &inv, |bench, inv| {
            bench.iter(|| black_box(is_hermitian_symmetric(&inv.phi, &inv.z, &inv.w).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("coefficient_matrix", name), &inv, |bench, inv| {
            bench.iter(|| {
                let matrix = coefficient_matrix(&inv.phi, &inv.z, &inv.w, p).unwrap();
                black_box(matrix.is_hermitian())
            });
        });
    }

    group.finish();
}

/// Benchmark a complete small sweep
fn bench_fuzz_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzz_sweep");
    group.sample_size(10);

    let bounds = FuzzBounds::new(3, 4);
    group.bench_function("symmetry_n3_p4", |bench| {
        bench.iter(|| {
            let mut passed = 0;
            run_experiment_with_fuzzed_parameters(
                |a, b, p, q| {
                    if check_phi_is_hermitian_symmetric(a, b, p, q).unwrap() {
                        passed += 1;
                    }
                },
                &bounds,
            )
            .unwrap();
            black_box(passed)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_phi_gamma_polarized,
    bench_symmetry_checks,
    bench_fuzz_sweep,
);

criterion_main!(benches);
