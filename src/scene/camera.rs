// src/scene/camera.rs

use crate::core::Vector3;

/// A perspective camera looking at a fixed target.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view, in degrees.
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    pub position: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    /// Viewport width over height.
    pub aspect: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
            position: Vector3::new(3.0, 3.0, 3.0),
            target: Vector3::ZERO,
            up: Vector3::UNIT_Y,
            aspect: 1.0,
        }
    }
}

impl CameraConfig {
    pub fn fov_radians(&self) -> f64 {
        self.fov_degrees.to_radians()
    }

    /// Updates the aspect ratio for a new viewport size.
    /// Returns `false` and keeps the old ratio for a degenerate viewport.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if !(width > 0.0 && height > 0.0) {
            return false;
        }
        self.aspect = width / height;
        true
    }

    /// Unit vector from the camera towards its target.
    pub fn forward(&self) -> Vector3 {
        (self.target - self.position).normalize()
    }
}
