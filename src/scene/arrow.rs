// src/scene/arrow.rs

use super::Rgba;
use crate::core::Vector3;

/// Fraction of the arrow length taken by the head.
const HEAD_LENGTH_RATIO: f64 = 0.2;
/// Fraction of the head length used as the head's base diameter.
const HEAD_WIDTH_RATIO: f64 = 0.2;

/// A directional marker: a shaft from `origin` topped by a cone.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    origin: Vector3,
    direction: Vector3,
    length: f64,
    head_length: f64,
    head_width: f64,
    pub color: Rgba,
}

impl Arrow {
    /// Creates an arrow with the default head proportions.
    pub fn new(direction: Vector3, origin: Vector3, length: f64, color: Rgba) -> Self {
        let head_length = length * HEAD_LENGTH_RATIO;
        let mut arrow = Self {
            origin,
            direction: Vector3::UNIT_Y,
            length,
            head_length,
            head_width: head_length * HEAD_WIDTH_RATIO,
            color,
        };
        arrow.set_direction(direction);
        arrow
    }

    /// Points the arrow along `direction` (normalized here).
    /// A zero vector leaves the current direction untouched.
    pub fn set_direction(&mut self, direction: Vector3) {
        if direction.length() > 0.0 {
            self.direction = direction.normalize();
        }
    }

    /// Changes the overall length and head size.
    pub fn set_length(&mut self, length: f64, head_length: f64, head_width: f64) {
        self.length = length;
        self.head_length = head_length;
        self.head_width = head_width;
    }

    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn head_length(&self) -> f64 {
        self.head_length
    }

    pub fn head_width(&self) -> f64 {
        self.head_width
    }

    /// Point at the tip of the head.
    pub fn tip(&self) -> Vector3 {
        self.origin + self.direction * self.length
    }

    /// Line geometry with `segments` points around the head's base.
    pub fn geometry(&self, segments: usize) -> ArrowGeometry {
        let shaft_end = self.origin + self.direction * (self.length - self.head_length);
        let radius = self.head_width / 2.0;
        let u = self.direction.any_perpendicular();
        let v = self.direction.cross(&u);

        let base_ring = (0..segments)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / segments as f64;
                shaft_end + u * (radius * angle.cos()) + v * (radius * angle.sin())
            })
            .collect();

        ArrowGeometry {
            shaft_start: self.origin,
            shaft_end,
            tip: self.tip(),
            base_ring,
        }
    }
}

/// Points needed to draw an [`Arrow`] as lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowGeometry {
    pub shaft_start: Vector3,
    /// Where the shaft meets the head's base.
    pub shaft_end: Vector3,
    pub tip: Vector3,
    /// Points on the rim of the head's base.
    pub base_ring: Vec<Vector3>,
}

impl ArrowGeometry {
    /// All line segments: the shaft, the rim and one edge per rim point to the tip.
    pub fn segments(&self) -> Vec<(Vector3, Vector3)> {
        let mut lines = Vec::with_capacity(1 + 2 * self.base_ring.len());
        lines.push((self.shaft_start, self.shaft_end));
        let n = self.base_ring.len();
        for (i, p) in self.base_ring.iter().enumerate() {
            lines.push((*p, self.base_ring[(i + 1) % n]));
            lines.push((*p, self.tip));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-12;

    fn yellow() -> Rgba {
        Rgba::from_hex(0xffff00, 1.0)
    }

    #[test]
    fn test_default_head_proportions() {
        let arrow = Arrow::new(Vector3::UNIT_Y, Vector3::ZERO, 1.2, yellow());
        assert!((arrow.head_length() - 0.24).abs() < TEST_TOLERANCE);
        assert!((arrow.head_width() - 0.048).abs() < TEST_TOLERANCE);
        assert!(arrow.tip().distance(&Vector3::new(0.0, 1.2, 0.0)) < TEST_TOLERANCE);
    }

    #[test]
    fn test_set_direction_normalizes_and_ignores_zero() {
        let mut arrow = Arrow::new(Vector3::UNIT_Y, Vector3::ZERO, 1.0, yellow());
        arrow.set_direction(Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(arrow.direction(), Vector3::UNIT_Z);
        arrow.set_direction(Vector3::ZERO);
        assert_eq!(arrow.direction(), Vector3::UNIT_Z);
    }

    #[test]
    fn test_geometry_ring_is_centered_on_shaft_end() {
        let dir = Vector3::new(1.0, -2.0, 0.5).normalize();
        let arrow = Arrow::new(dir, Vector3::ZERO, 1.5, yellow());
        let geometry = arrow.geometry(16);

        assert!((geometry.shaft_end.length() - 1.2).abs() < 1e-9);
        assert_eq!(geometry.base_ring.len(), 16);
        for p in &geometry.base_ring {
            let offset = *p - geometry.shaft_end;
            assert!(offset.dot(&dir).abs() < 1e-9, "rim point not in base plane");
            assert!((offset.length() - arrow.head_width() / 2.0).abs() < 1e-9);
        }
        // shaft + rim edges + tip edges
        assert_eq!(geometry.segments().len(), 1 + 2 * 16);
    }
}
