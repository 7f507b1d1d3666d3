// tests/mapper_tests.rs

// Import necessary types from the blochsphere crate
use blochsphere::{
    AngleParameters, BlochError, MappedState, Vector3, map_state, validate_mapped_state,
};

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

const TEST_TOLERANCE: f64 = 1e-9;

// Helper to compare a direction against expected scene coordinates
fn assert_direction(state: &MappedState, expected: Vector3) {
    let actual = state.direction.vector();
    assert!(
        actual.distance(&expected) < TEST_TOLERANCE,
        "Direction mismatch for {} - Actual: {}, Expected: {}",
        state.params, actual, expected
    );
}

// Sample points across the whole slider domain, poles and bounds included
fn sample_params() -> Vec<AngleParameters> {
    let thetas = (0..=20).map(|i| PI * i as f64 / 20.0);
    thetas
        .flat_map(|theta| (0..=24).map(move |j| AngleParameters::new(theta, -PI + 2.0 * PI * j as f64 / 24.0)))
        .collect()
}

#[test]
fn test_direction_is_unit_everywhere() {
    for params in sample_params() {
        let state = map_state(&params);
        let norm = state.direction.vector().length();
        assert!((norm - 1.0).abs() < TEST_TOLERANCE, "‖direction‖ = {} at {}", norm, params);
    }
}

#[test]
fn test_amplitudes_normalized_everywhere() {
    for params in sample_params() {
        let a = map_state(&params).amplitudes;
        let norm_sq = a.alpha * a.alpha + a.beta_real * a.beta_real + a.beta_imag * a.beta_imag;
        assert!((norm_sq - 1.0).abs() < TEST_TOLERANCE, "norm² = {} at {}", norm_sq, params);
    }
}

#[test]
fn test_every_sample_validates() -> Result<(), BlochError> {
    for params in sample_params() {
        validate_mapped_state(&map_state(&params))?;
    }
    Ok(())
}

#[test]
fn test_theta_zero_is_ket_zero() {
    for phi in [-PI, -1.0, 0.0, 2.5, PI] {
        let state = map_state(&AngleParameters::new(0.0, phi));
        assert_direction(&state, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(state.amplitudes.alpha, 1.0);
        assert_eq!(state.amplitudes.beta_real, 0.0);
        assert_eq!(state.amplitudes.beta_imag, 0.0);
        assert_eq!(state.display, "|ψ⟩ = 1.0000|0⟩ + (0.0000 +0.0000i)|1⟩");
    }
}

#[test]
fn test_theta_pi_is_ket_one() {
    let state = map_state(&AngleParameters::new(PI, 0.0));
    assert_direction(&state, Vector3::new(0.0, -1.0, 0.0));
    assert!(state.amplitudes.alpha.abs() < TEST_TOLERANCE);
    // |β| = 1 at the south pole; φ only sets its phase
    assert!((state.amplitudes.beta().norm() - 1.0).abs() < TEST_TOLERANCE);
    assert_eq!(state.display, "|ψ⟩ = 0.0000|0⟩ + (1.0000 +0.0000i)|1⟩");

    // The arrow ignores φ at the pole
    let rotated = map_state(&AngleParameters::new(PI, 2.0));
    assert_direction(&rotated, Vector3::new(0.0, -1.0, 0.0));
}

#[test]
fn test_equator_plus_state() {
    let state = map_state(&AngleParameters::new(FRAC_PI_2, 0.0));
    assert_direction(&state, Vector3::new(1.0, 0.0, 0.0));
    assert!((state.amplitudes.alpha - FRAC_1_SQRT_2).abs() < TEST_TOLERANCE);
    assert!((state.amplitudes.beta_real - FRAC_1_SQRT_2).abs() < TEST_TOLERANCE);
    assert_eq!(state.amplitudes.beta_imag, 0.0);
    assert_eq!(state.display, "|ψ⟩ = 0.7071|0⟩ + (0.7071 +0.0000i)|1⟩");
}

#[test]
fn test_equator_plus_i_state() {
    let state = map_state(&AngleParameters::new(FRAC_PI_2, FRAC_PI_2));
    assert_direction(&state, Vector3::new(0.0, 0.0, 1.0));
    assert!(state.amplitudes.beta_real.abs() < TEST_TOLERANCE);
    assert!((state.amplitudes.beta_imag - FRAC_1_SQRT_2).abs() < TEST_TOLERANCE);
    assert_eq!(state.direction.describe(), Some("|+i⟩"));
}

#[test]
fn test_sign_rendering() {
    // Positive imaginary part: literal '+' before the magnitude
    let positive = map_state(&AngleParameters::new(FRAC_PI_2, FRAC_PI_2));
    assert!(positive.display.contains("(0.0000 +0.7071i)"), "got {}", positive.display);

    // Negative imaginary part: the numeral carries its own sign
    let negative = map_state(&AngleParameters::new(FRAC_PI_2, -FRAC_PI_2));
    assert!(negative.display.contains("(0.0000 -0.7071i)"), "got {}", negative.display);
    assert!(!negative.display.contains("+-"));
    assert!(!negative.display.contains("+ -"));

    // Every sample obeys the rule
    for params in sample_params() {
        let state = map_state(&params);
        let imag_part = state.display.split(' ').nth(5).unwrap_or_default();
        if state.amplitudes.beta_imag >= 0.0 {
            assert!(imag_part.starts_with('+'), "expected '+' in {}", state.display);
        } else {
            assert!(imag_part.starts_with('-'), "expected '-' in {}", state.display);
        }
    }
}

#[test]
fn test_mapping_is_deterministic() {
    let params = AngleParameters::new(1.1, -2.3);
    assert_eq!(map_state(&params), map_state(&params));
}

#[test]
fn test_direction_matches_pauli_vector() {
    // The arrow is the Bloch vector of the amplitudes, re-axed so |0⟩ is up
    for params in sample_params() {
        let state = map_state(&params);
        let pauli = state.amplitudes.bloch_vector();
        assert!(state.direction.physics().distance(&pauli) < TEST_TOLERANCE);
    }
}

#[test]
fn test_from_direction_recovers_angles() {
    let params = AngleParameters::new(1.0, -2.0);
    let recovered = AngleParameters::from_direction(&map_state(&params).direction);
    assert!((recovered.theta - params.theta).abs() < TEST_TOLERANCE);
    assert!((recovered.phi - params.phi).abs() < TEST_TOLERANCE);
}
