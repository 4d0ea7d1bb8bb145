// tests/property_tests.rs

use faqa::gates::{cubic_phase, displacement, fourier, inverse_fourier, phase, squeezing, two_mode_mix};
use faqa::measurement::{expectation, expectation_by_tag, homodyne_sample};
use faqa::{FaqaError, Grid, Observable, WaveState};
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOL: f64 = 1e-9;

fn grid() -> Grid {
    Grid::symmetric(2048, 10.0).expect("valid grid")
}

fn reference_state() -> WaveState {
    WaveState::gaussian(grid(), -2.0, 0.6, 4.0).expect("valid packet")
}

/// Arbitrary complex samples, reproducible per seed.
fn noise(n: usize, seed: u64) -> Vec<Complex<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Complex::new(rng.random::<f64>() - 0.5, rng.random::<f64>() - 0.5))
        .collect()
}

fn sum_sq(amplitude: &[Complex<f64>]) -> f64 {
    amplitude.iter().map(|c| c.norm_sqr()).sum()
}

#[test]
fn construction_normalizes_arbitrary_input() -> Result<(), FaqaError> {
    for seed in 0..5 {
        let state = WaveState::new(grid(), noise(2048, seed))?;
        assert!((state.norm() - 1.0).abs() < TOL, "seed {} norm {}", seed, state.norm());
    }
    Ok(())
}

#[test]
fn fourier_round_trip_and_unitarity() {
    for (n, seed) in [(2048, 1), (1000, 2), (33, 3)] {
        let psi = noise(n, seed);
        let spectrum = fourier(&psi);
        assert!((sum_sq(&spectrum) - sum_sq(&psi)).abs() < TOL * sum_sq(&psi));
        let back = inverse_fourier(&spectrum);
        for (a, b) in psi.iter().zip(&back) {
            assert!((a - b).norm() < 1e-12);
        }
    }
}

#[test]
fn phase_gates_preserve_modulus_pointwise() {
    let state = reference_state();
    let psi = state.amplitude();
    for out in [cubic_phase(psi, state.grid(), 0.01), cubic_phase(psi, state.grid(), 2.5), phase(psi, -0.7)] {
        for (a, b) in psi.iter().zip(&out) {
            assert!((a.norm() - b.norm()).abs() < 1e-12);
        }
    }
}

#[test]
fn displacement_preserves_total_probability() {
    let psi = noise(2048, 9);
    for a in [1.2, -3.3, 25.0, 0.004] {
        let out = displacement(&psi, &grid(), a);
        assert!((sum_sq(&out) - sum_sq(&psi)).abs() < TOL * sum_sq(&psi));
    }
}

#[test]
fn squeezing_scales_norm_by_s_squared_inside_the_grid() -> Result<(), FaqaError> {
    // ψ(x/s)·sqrt(|s|) carries norm s², not 1; only interpolation error is on top.
    let state = WaveState::gaussian(grid(), 0.0, 0.6, 0.0)?;
    let out = squeezing(state.amplitude(), state.grid(), 0.8);
    let norm = sum_sq(&out) * grid().step();
    assert!((norm - 0.64).abs() < 1e-3, "norm after squeeze {}", norm);

    // The shape is still the squeezed packet: normalized ⟨x⟩ follows x0·s.
    let shifted = WaveState::gaussian(grid(), -2.0, 0.6, 0.0)?;
    let out = squeezing(shifted.amplitude(), shifted.grid(), 0.8);
    let mean = expectation(&out, shifted.grid(), Observable::Position)? / (sum_sq(&out) * grid().step());
    assert!((mean + 1.6).abs() < 1e-3, "normalized mean {}", mean);
    Ok(())
}

#[test]
fn two_mode_mix_is_jointly_norm_preserving() -> Result<(), FaqaError> {
    let psi1 = noise(512, 4);
    let psi2 = noise(512, 5);
    for theta in [0.0, 0.1, 1.0, 3.0, -2.2] {
        let (a, b) = two_mode_mix(&psi1, &psi2, theta)?;
        for i in 0..psi1.len() {
            let before = psi1[i].norm_sqr() + psi2[i].norm_sqr();
            let after = a[i].norm_sqr() + b[i].norm_sqr();
            assert!((before - after).abs() < 1e-12);
        }
    }
    Ok(())
}

#[test]
fn expectation_position_of_reference_packet() -> Result<(), FaqaError> {
    let state = reference_state();
    assert!((state.expectation_position() + 2.0).abs() < 1e-6);
    // Trapezoid and Riemann estimates are close but not required to be identical.
    let trapz = expectation(state.amplitude(), state.grid(), Observable::Position)?;
    assert!((trapz + 2.0).abs() < 1e-6);
    Ok(())
}

#[test]
fn measurements_reject_amplitude_of_wrong_length() {
    let state = reference_state();
    let truncated = &state.amplitude()[..1024];
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        expectation(truncated, state.grid(), Observable::PositionSquared),
        Err(FaqaError::DimensionMismatch { expected: 2048, found: 1024 })
    ));
    assert!(matches!(
        homodyne_sample(truncated, state.grid(), 100, &mut rng),
        Err(FaqaError::DimensionMismatch { expected: 2048, found: 1024 })
    ));
}

#[test]
fn bogus_operator_is_unsupported() {
    let state = reference_state();
    let err = expectation_by_tag(state.amplitude(), state.grid(), "bogus");
    assert_eq!(err, Err(FaqaError::UnsupportedOperator { tag: "bogus".to_string() }));
}

#[test]
fn homodyne_mean_matches_packet_centre() -> Result<(), FaqaError> {
    let state = reference_state();
    let mut rng = StdRng::seed_from_u64(2024);
    let samples = homodyne_sample(state.amplitude(), state.grid(), 10_000, &mut rng)?;
    assert_eq!(samples.len(), 10_000);

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    // |ψ|² has standard deviation σ/√2.
    let standard_error = 0.6 / 2f64.sqrt() / n.sqrt();
    // The sampler reports grid points, so allow one grid step of bias on top.
    assert!((mean + 2.0).abs() < 5.0 * standard_error + grid().step(), "mean {}", mean);
    assert!(samples.iter().all(|x| grid().contains(*x)));
    Ok(())
}
