// src/controls/mod.rs

//! Bounded sliders and the panel that keeps the mapped state in sync with them.

use crate::core::AngleParameters;
use crate::core::constants::angle_bounds::{ANGLE_STEP, PHI_MAX, PHI_MIN, THETA_MAX, THETA_MIN};
use crate::mapper::{MappedState, map_state};

/// A numeric control bounded to `[min, max]` and quantized to `step`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    value: f64,
}

impl Slider {
    pub fn new(label: &'static str, min: f64, max: f64, step: f64, value: f64) -> Self {
        let mut slider = Self { label, min, max, step, value: min };
        slider.set(value);
        slider
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Moves the slider. Values at or past an end land exactly on it;
    /// anything between is snapped to the nearest multiple of `step`.
    /// Non-finite input is ignored.
    /// Returns whether the stored value changed.
    pub fn set(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let next = if value <= self.min {
            self.min
        } else if value >= self.max {
            self.max
        } else if self.step > 0.0 {
            ((value / self.step).round() * self.step).clamp(self.min, self.max)
        } else {
            value
        };
        if next == self.value {
            return false;
        }
        self.value = next;
        true
    }
}

/// Owns the angle parameters and the last mapped state.
///
/// Every slider change re-runs the mapper synchronously, so
/// [`ControlPanel::state`] always describes the current slider positions.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    pub theta: Slider,
    pub phi: Slider,
    /// Panel width in pixels.
    pub width: f32,
    /// Title of the section holding the state text.
    pub folder_title: &'static str,
    /// Label of the read-only state text.
    pub state_label: &'static str,
    params: AngleParameters,
    state: MappedState,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPanel {
    /// Creates the panel at θ = 0, φ = 0 and maps the initial state.
    pub fn new() -> Self {
        let params = AngleParameters::default();
        Self {
            theta: Slider::new("θ (rad)", THETA_MIN, THETA_MAX, ANGLE_STEP, params.theta),
            phi: Slider::new("φ (rad)", PHI_MIN, PHI_MAX, ANGLE_STEP, params.phi),
            width: 300.0,
            folder_title: "Quantum State",
            state_label: "|ψ⟩",
            params,
            state: map_state(&params),
        }
    }

    pub fn params(&self) -> AngleParameters {
        self.params
    }

    pub fn state(&self) -> &MappedState {
        &self.state
    }

    /// Text bound to the read-only state display.
    pub fn state_text(&self) -> &str {
        &self.state.display
    }

    /// Moves the θ slider; returns whether the state was recomputed.
    pub fn set_theta(&mut self, theta: f64) -> bool {
        if !self.theta.set(theta) {
            return false;
        }
        self.update_state();
        true
    }

    /// Moves the φ slider; returns whether the state was recomputed.
    pub fn set_phi(&mut self, phi: f64) -> bool {
        if !self.phi.set(phi) {
            return false;
        }
        self.update_state();
        true
    }

    /// Moves both sliders, recomputing at most once.
    pub fn set_angles(&mut self, params: AngleParameters) -> bool {
        let theta_changed = self.theta.set(params.theta);
        let phi_changed = self.phi.set(params.phi);
        if !(theta_changed || phi_changed) {
            return false;
        }
        self.update_state();
        true
    }

    /// Jumps to a uniformly random state.
    pub fn randomize(&mut self) -> bool {
        self.set_angles(AngleParameters::random())
    }

    /// Returns to |0⟩.
    pub fn reset(&mut self) -> bool {
        self.set_angles(AngleParameters::default())
    }

    fn update_state(&mut self) {
        self.params = AngleParameters::new(self.theta.value(), self.phi.value());
        self.state = map_state(&self.params);
    }
}
