// src/core/angles.rs

use std::fmt;

use super::constants::angle_bounds::{PHI_MAX, PHI_MIN, PI, THETA_MAX, THETA_MIN};
use super::error::BlochError;
use super::state::BlochDirection;

/// The two angles that parameterize a point on the Bloch sphere.
///
/// `theta` is the polar angle measured from the |0⟩ pole, `phi` the azimuth
/// around it. Nothing here enforces the bounds unless asked to
/// ([`AngleParameters::try_new`], [`AngleParameters::clamped`]); the state
/// mapper accepts any real pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngleParameters {
    /// Polar angle θ, nominally in `[0, π]`.
    pub theta: f64,
    /// Azimuthal angle φ, nominally in `[−π, π]`.
    pub phi: f64,
}

impl AngleParameters {
    /// Creates a parameter pair without checking the bounds.
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Creates a parameter pair, rejecting non-finite or out-of-range angles.
    pub fn try_new(theta: f64, phi: f64) -> Result<Self, BlochError> {
        check_angle("theta", theta, THETA_MIN, THETA_MAX)?;
        check_angle("phi", phi, PHI_MIN, PHI_MAX)?;
        Ok(Self { theta, phi })
    }

    /// Creates a parameter pair clamped into the slider bounds.
    /// NaN collapses to the lower bound.
    pub fn clamped(theta: f64, phi: f64) -> Self {
        Self {
            theta: clamp_or_min(theta, THETA_MIN, THETA_MAX),
            phi: clamp_or_min(phi, PHI_MIN, PHI_MAX),
        }
    }

    /// Draws a point uniformly distributed over the sphere surface.
    pub fn random() -> Self {
        let u: f64 = rand::random();
        let v: f64 = rand::random();
        Self::from_unit_samples(u, v)
    }

    /// Maps two samples from `[0, 1)` to an area-uniform point on the sphere.
    pub(crate) fn from_unit_samples(u: f64, v: f64) -> Self {
        let theta = (1.0 - 2.0 * u).clamp(-1.0, 1.0).acos();
        let phi = PI * (2.0 * v - 1.0);
        Self { theta, phi }
    }

    /// Recovers the angles from a scene-space direction.
    /// At the poles the azimuth is degenerate and comes back as 0.
    pub fn from_direction(direction: &BlochDirection) -> Self {
        let v = direction.vector();
        let theta = v.y.clamp(-1.0, 1.0).acos();
        let phi = if v.x == 0.0 && v.z == 0.0 { 0.0 } else { v.z.atan2(v.x) };
        Self { theta, phi }
    }

    /// Whether both angles are finite and inside their bounds.
    pub fn is_in_domain(&self) -> bool {
        Self::try_new(self.theta, self.phi).is_ok()
    }
}

fn check_angle(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), BlochError> {
    if !value.is_finite() {
        return Err(BlochError::NonFiniteAngle { name });
    }
    if value < min || value > max {
        return Err(BlochError::AngleOutOfRange { name, value, min, max });
    }
    Ok(())
}

fn clamp_or_min(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() { min } else { value.clamp(min, max) }
}

impl fmt::Display for AngleParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "θ={:.4}, φ={:.4}", self.theta, self.phi)
    }
}
