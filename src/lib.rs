// src/lib.rs

//! `blochsphere` - Interactive Bloch sphere for a single-qubit state
//!
//! Two angles (θ, φ) drive both the direction of a state arrow on the unit
//! sphere and the amplitudes of `cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩`. The
//! mapping lives in [`mapper`]; [`scene`] and [`controls`] describe the
//! picture and its sliders without tying them to a renderer, and the
//! optional `viewer` module draws them with macroquad.

pub mod core;
pub mod mapper;
pub mod validation;
pub mod scene;
pub mod controls;
#[cfg(feature = "viewer")]
pub mod viewer;

// Re-export the most common types for easier top-level use
pub use crate::core::{AngleParameters, BlochDirection, BlochError, QuantumAmplitudes, Vector3};
pub use mapper::{MappedState, StateMapper, map_state};
pub use scene::{Scene, SceneConfig};
pub use controls::{ControlPanel, Slider};
pub use validation::{
    check_consistency,
    check_normalization,
    check_unit_direction,
    validate_mapped_state,
};

// Example 1: Equal superposition on the equator
// θ = π/2 with no relative phase is the |+⟩ state, pointing along scene +x.
/// ```
/// use blochsphere::{AngleParameters, map_state, validate_mapped_state, BlochError};
/// use std::f64::consts::FRAC_PI_2;
///
/// let state = map_state(&AngleParameters::new(FRAC_PI_2, 0.0));
///
/// let d = state.direction.vector();
/// assert!((d.x - 1.0).abs() < 1e-9);
/// assert!(d.y.abs() < 1e-9 && d.z.abs() < 1e-9);
/// assert_eq!(state.display, "|ψ⟩ = 0.7071|0⟩ + (0.7071 +0.0000i)|1⟩");
///
/// validate_mapped_state(&state)?;
/// # Ok::<(), BlochError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Driving the state through the control panel
// Slider edits re-run the mapper; the scene arrow follows on apply.
/// ```
/// use blochsphere::{ControlPanel, Scene, Vector3};
/// use std::f64::consts::PI;
///
/// let mut panel = ControlPanel::new();
/// let mut scene = Scene::default();
///
/// assert!(panel.set_theta(PI));
/// scene.apply(panel.state());
///
/// // θ = π is |1⟩, the south pole
/// let tip = scene.state_arrow.direction();
/// assert!(tip.distance(&Vector3::new(0.0, -1.0, 0.0)) < 1e-9);
/// assert!(panel.state().amplitudes.alpha.abs() < 1e-9);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
