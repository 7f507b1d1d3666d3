// src/mapper/mod.rs

//! The state mapper: two angles in, arrow direction and amplitudes out.
//!
//! ```text
//! direction = normalize(sin θ·cos φ, cos θ, sin θ·sin φ)
//! α         = cos(θ/2)
//! β         = sin(θ/2)·(cos φ + i·sin φ)
//! ```
//!
//! The mapping is total: no angle is rejected, no error can occur. Bounding
//! the inputs is the caller's job (see [`crate::controls`]).

use std::fmt;

use crate::core::{AngleParameters, BlochDirection, QuantumAmplitudes, Vector3};

/// Everything derived from one set of angles.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedState {
    /// The angles this state was derived from.
    pub params: AngleParameters,
    /// Unit direction of the state arrow, scene coordinates.
    pub direction: BlochDirection,
    /// Coefficients of |0⟩ and |1⟩.
    pub amplitudes: QuantumAmplitudes,
    /// Formatted amplitudes, e.g. `|ψ⟩ = 0.7071|0⟩ + (0.7071 +0.0000i)|1⟩`.
    pub display: String,
}

impl fmt::Display for MappedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Angles: {}", self.params)?;
        writeln!(f, "{}", self.direction)?;
        write!(f, "{}", self.display)
    }
}

/// Stateless handle over [`map_state`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StateMapper;

impl StateMapper {
    pub fn map(&self, params: &AngleParameters) -> MappedState {
        map_state(params)
    }
}

/// Maps a pair of angles to the arrow direction, the amplitudes and their
/// display string.
pub fn map_state(params: &AngleParameters) -> MappedState {
    let direction = bloch_direction(params);
    let amplitudes = amplitudes(params);
    let display = amplitudes.to_string();
    MappedState { params: *params, direction, amplitudes, display }
}

/// Scene-space direction for the given angles.
pub fn bloch_direction(params: &AngleParameters) -> BlochDirection {
    let (sin_t, cos_t) = params.theta.sin_cos();
    let (sin_p, cos_p) = params.phi.sin_cos();
    BlochDirection::from_vector(Vector3::new(sin_t * cos_p, cos_t, sin_t * sin_p))
}

/// Amplitudes for the given angles, global phase chosen so α is real.
pub fn amplitudes(params: &AngleParameters) -> QuantumAmplitudes {
    let (sin_half, cos_half) = (params.theta / 2.0).sin_cos();
    let (sin_p, cos_p) = params.phi.sin_cos();
    QuantumAmplitudes::new(cos_half, sin_half * cos_p, sin_half * sin_p)
}
