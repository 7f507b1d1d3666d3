// src/scene/sphere.rs

use std::f64::consts::{PI, TAU};

use super::Rgba;
use crate::core::Vector3;

/// A latitude/longitude wireframe sphere centred on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct WireSphere {
    pub radius: f64,
    pub width_segments: usize,
    pub height_segments: usize,
    pub color: Rgba,
    segments: Vec<(Vector3, Vector3)>,
}

impl WireSphere {
    pub fn new(radius: f64, width_segments: usize, height_segments: usize, color: Rgba) -> Self {
        let segments = build_segments(radius, width_segments, height_segments);
        Self { radius, width_segments, height_segments, color, segments }
    }

    /// Line segments of the wireframe: the interior latitude rings, then the
    /// meridians from pole to pole.
    pub fn segments(&self) -> &[(Vector3, Vector3)] {
        &self.segments
    }
}

fn vertex(radius: f64, u: f64, v: f64) -> Vector3 {
    let azimuth = u * TAU;
    let polar = v * PI;
    Vector3::new(
        -radius * azimuth.cos() * polar.sin(),
        radius * polar.cos(),
        radius * azimuth.sin() * polar.sin(),
    )
}

fn build_segments(radius: f64, width: usize, height: usize) -> Vec<(Vector3, Vector3)> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let point = |ix: usize, iy: usize| vertex(radius, ix as f64 / width as f64, iy as f64 / height as f64);
    let mut lines = Vec::with_capacity((height - 1) * width + width * height);

    // Rings at the poles collapse to a point, skip them.
    for iy in 1..height {
        for ix in 0..width {
            lines.push((point(ix, iy), point(ix + 1, iy)));
        }
    }
    for ix in 0..width {
        for iy in 0..height {
            lines.push((point(ix, iy), point(ix, iy + 1)));
        }
    }
    lines
}
