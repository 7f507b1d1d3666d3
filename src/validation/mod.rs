// src/validation/mod.rs

//! Checks that a derived state is a valid pure single-qubit state.

use crate::core::constants::tolerances::NORM_TOLERANCE;
use crate::core::{BlochDirection, BlochError, QuantumAmplitudes};
use crate::mapper::MappedState;

/// Checks that the arrow direction has unit length.
///
/// # Arguments
/// * `direction` - The direction to check.
/// * `tolerance` - Allowed deviation from 1.0 (defaults to 1e-9).
///
/// # Returns
/// * `Ok(())` if `‖direction‖ ≈ 1`.
/// * `Err(BlochError::Denormalized)` otherwise.
pub fn check_unit_direction(direction: &BlochDirection, tolerance: Option<f64>) -> Result<(), BlochError> {
    let tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm = direction.vector().length();
    if norm.is_nan() || (norm - 1.0).abs() > tolerance {
        return Err(BlochError::Denormalized { what: "direction", norm, tolerance });
    }
    Ok(())
}

/// Checks that `α² + βRe² + βIm² ≈ 1`.
///
/// # Arguments
/// * `amplitudes` - The amplitudes to check.
/// * `tolerance` - Allowed deviation from 1.0 (defaults to 1e-9).
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(BlochError::Denormalized)` otherwise. The reported norm is the sum
///   of squares.
pub fn check_normalization(amplitudes: &QuantumAmplitudes, tolerance: Option<f64>) -> Result<(), BlochError> {
    let tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm = amplitudes.norm_sqr();
    if norm.is_nan() || (norm - 1.0).abs() > tolerance {
        return Err(BlochError::Denormalized { what: "amplitudes", norm, tolerance });
    }
    Ok(())
}

/// Checks that the Pauli vector of the amplitudes points where the arrow
/// points.
pub fn check_consistency(
    direction: &BlochDirection,
    amplitudes: &QuantumAmplitudes,
    tolerance: Option<f64>,
) -> Result<(), BlochError> {
    let tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let expected = direction.physics();
    let actual = amplitudes.bloch_vector();
    let distance = expected.distance(&actual);
    if distance.is_nan() || distance > tolerance {
        return Err(BlochError::Inconsistent {
            message: format!(
                "amplitudes point at {} but the direction is {} (distance {:.3e})",
                actual, expected, distance
            ),
        });
    }
    Ok(())
}

/// Runs every check on a mapped state with the default tolerance.
pub fn validate_mapped_state(state: &MappedState) -> Result<(), BlochError> {
    check_unit_direction(&state.direction, None)?;
    check_normalization(&state.amplitudes, None)?;
    check_consistency(&state.direction, &state.amplitudes, None)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AngleParameters, Vector3};
    use crate::mapper::map_state;

    #[test]
    fn test_denormalized_amplitudes_rejected() {
        let amps = QuantumAmplitudes::new(1.0, 1.0, 0.0);
        match check_normalization(&amps, None) {
            Err(BlochError::Denormalized { what, norm, .. }) => {
                assert_eq!(what, "amplitudes");
                assert!((norm - 2.0).abs() < 1e-12);
            }
            other => panic!("Expected Denormalized, got {:?}", other),
        }
        // A loose tolerance lets it through
        assert!(check_normalization(&amps, Some(1.5)).is_ok());
    }

    #[test]
    fn test_nan_amplitudes_rejected() {
        let amps = QuantumAmplitudes::new(f64::NAN, 0.0, 0.0);
        assert!(check_normalization(&amps, None).is_err());
    }

    #[test]
    fn test_inconsistent_pair_rejected() {
        let state = map_state(&AngleParameters::new(0.3, 0.2));
        let flipped = BlochDirection::from_vector(-state.direction.vector());
        assert!(matches!(
            check_consistency(&flipped, &state.amplitudes, None),
            Err(BlochError::Inconsistent { .. })
        ));
    }

    #[test]
    fn test_zero_direction_rejected() {
        let zero = BlochDirection::from_vector(Vector3::ZERO);
        assert!(check_unit_direction(&zero, None).is_err());
    }

    #[test]
    fn test_mapped_state_passes() -> Result<(), BlochError> {
        validate_mapped_state(&map_state(&AngleParameters::new(2.0, -1.0)))
    }
}
