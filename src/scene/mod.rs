// src/scene/mod.rs

//! Renderer-independent description of the Bloch sphere scene.
//!
//! The scene is y-up with |0⟩ at the top. It holds a wireframe unit sphere,
//! three axis arrows and the state arrow; a renderer only has to draw the
//! line segments it exposes through a camera built from [`CameraConfig`].

pub mod arrow;
pub mod camera;
pub mod sphere;

pub use arrow::{Arrow, ArrowGeometry};
pub use camera::CameraConfig;
pub use sphere::WireSphere;

use crate::core::constants::palette;
use crate::core::{BlochError, Vector3};
use crate::mapper::MappedState;

/// A colour with `f32` channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Builds a colour from `0xRRGGBB` and an opacity.
    pub fn from_hex(hex: u32, alpha: f32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self { r: channel(16), g: channel(8), b: channel(0), a: alpha }
    }
}

/// Tunable parameters of the scene. `Default` reproduces the classic layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub background: u32,
    pub sphere_radius: f64,
    pub sphere_width_segments: usize,
    pub sphere_height_segments: usize,
    pub sphere_color: u32,
    pub sphere_opacity: f32,
    pub axis_length: f64,
    /// Colours of the Bloch x, y and z axes.
    pub axis_colors: [u32; 3],
    pub state_arrow_length: f64,
    pub state_arrow_color: u32,
    /// Points around each arrow head when drawn as lines.
    pub arrow_head_segments: usize,
    pub camera: CameraConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: palette::BACKGROUND,
            sphere_radius: 1.0,
            sphere_width_segments: 32,
            sphere_height_segments: 32,
            sphere_color: palette::SPHERE_WIRE,
            sphere_opacity: 0.3,
            axis_length: 1.5,
            axis_colors: [palette::AXIS_X, palette::AXIS_Y, palette::AXIS_Z],
            state_arrow_length: 1.2,
            state_arrow_color: palette::STATE_ARROW,
            arrow_head_segments: 12,
            camera: CameraConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Rejects configurations that cannot be drawn.
    pub fn validate(&self) -> Result<(), BlochError> {
        let invalid = |message: String| Err(BlochError::InvalidConfig { message });

        if !(self.sphere_radius.is_finite() && self.sphere_radius > 0.0) {
            return invalid(format!("sphere radius must be positive, got {}", self.sphere_radius));
        }
        if self.sphere_width_segments < 3 || self.sphere_height_segments < 2 {
            return invalid(format!(
                "sphere needs at least 3x2 segments, got {}x{}",
                self.sphere_width_segments, self.sphere_height_segments
            ));
        }
        if !(0.0..=1.0).contains(&self.sphere_opacity) {
            return invalid(format!("sphere opacity must be in [0, 1], got {}", self.sphere_opacity));
        }
        for (name, length) in [("axis", self.axis_length), ("state arrow", self.state_arrow_length)] {
            if !(length.is_finite() && length > 0.0) {
                return invalid(format!("{} length must be positive, got {}", name, length));
            }
        }
        if self.arrow_head_segments < 3 {
            return invalid(format!("arrow heads need at least 3 segments, got {}", self.arrow_head_segments));
        }
        let camera = &self.camera;
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return invalid(format!("camera fov must be in (0, 180) degrees, got {}", camera.fov_degrees));
        }
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return invalid(format!("camera clip planes invalid: near {}, far {}", camera.near, camera.far));
        }
        if camera.position.distance(&camera.target) == 0.0 {
            return invalid("camera position coincides with its target".to_string());
        }
        Ok(())
    }
}

/// One labelled coordinate axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// Bloch-sphere label (`x`, `y` or `z`).
    pub label: &'static str,
    pub arrow: Arrow,
}

/// The assembled scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Rgba,
    pub sphere: WireSphere,
    pub axes: [Axis; 3],
    pub state_arrow: Arrow,
    pub camera: CameraConfig,
    pub arrow_head_segments: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self::build(&SceneConfig::default())
    }
}

impl Scene {
    /// Builds a scene after validating `config`.
    pub fn new(config: &SceneConfig) -> Result<Self, BlochError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &SceneConfig) -> Self {
        let axis = |label, direction, color| Axis {
            label,
            arrow: Arrow::new(direction, Vector3::ZERO, config.axis_length, Rgba::from_hex(color, 1.0)),
        };
        let [x_color, y_color, z_color] = config.axis_colors;

        Self {
            background: Rgba::from_hex(config.background, 1.0),
            sphere: WireSphere::new(
                config.sphere_radius,
                config.sphere_width_segments,
                config.sphere_height_segments,
                Rgba::from_hex(config.sphere_color, config.sphere_opacity),
            ),
            // Bloch z is scene up; Bloch y comes towards the default camera.
            axes: [
                axis("x", Vector3::UNIT_X, x_color),
                axis("y", Vector3::UNIT_Z, y_color),
                axis("z", Vector3::UNIT_Y, z_color),
            ],
            state_arrow: Arrow::new(
                Vector3::UNIT_Y,
                Vector3::ZERO,
                config.state_arrow_length,
                Rgba::from_hex(config.state_arrow_color, 1.0),
            ),
            camera: config.camera.clone(),
            arrow_head_segments: config.arrow_head_segments,
        }
    }

    /// Points the state arrow at the mapped direction.
    pub fn apply(&mut self, state: &MappedState) {
        self.state_arrow.set_direction(state.direction.vector());
    }

    /// Follows a viewport resize.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        self.camera.resize(width, height)
    }

    /// Every arrow in draw order: the axes, then the state arrow.
    pub fn arrows(&self) -> impl Iterator<Item = &Arrow> {
        self.axes.iter().map(|axis| &axis.arrow).chain(std::iter::once(&self.state_arrow))
    }
}
