//! Constants shared by the mapper, the controls and the scene.

/// Angle bounds and slider steps.
pub mod angle_bounds {
    /// Used for the polar and azimuthal ranges
    pub const PI: f64 = std::f64::consts::PI;
    /// Lower bound of the polar angle θ.
    pub const THETA_MIN: f64 = 0.0;
    /// Upper bound of the polar angle θ.
    pub const THETA_MAX: f64 = PI;
    /// Lower bound of the azimuthal angle φ.
    pub const PHI_MIN: f64 = -PI;
    /// Upper bound of the azimuthal angle φ.
    pub const PHI_MAX: f64 = PI;
    /// Increment of both angle sliders, in radians.
    pub const ANGLE_STEP: f64 = 0.01;
}

/// Tolerances used by validation and by approximate comparisons.
pub mod tolerances {
    /// Allowed deviation of a norm from 1.0.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Allowed deviation when naming one of the cardinal states.
    pub const CARDINAL_TOLERANCE: f64 = 0.01;
}

/// Colours of the original scene, as `0xRRGGBB`.
pub mod palette {
    pub const BACKGROUND: u32 = 0x111111;
    pub const SPHERE_WIRE: u32 = 0x00aaff;
    pub const AXIS_X: u32 = 0xff0000;
    pub const AXIS_Y: u32 = 0x0000ff;
    pub const AXIS_Z: u32 = 0x00ff00;
    pub const STATE_ARROW: u32 = 0xffff00;
}
