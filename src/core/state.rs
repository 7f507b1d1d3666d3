// src/core/state.rs

use num_complex::Complex64;
use std::fmt;

use super::constants::tolerances::CARDINAL_TOLERANCE;
use super::vector::Vector3;

/// Unit direction of the state arrow, in scene coordinates.
///
/// The scene is y-up: scene `+y` is the |0⟩ pole (physics `+z`), scene `+x`
/// is |+⟩ (physics `+x`) and scene `+z` is |+i⟩ (physics `+y`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochDirection {
    vector: Vector3,
}

impl BlochDirection {
    /// Builds a direction from any vector, normalizing it.
    pub fn from_vector(vector: Vector3) -> Self {
        Self { vector: vector.normalize() }
    }

    /// The |0⟩ pole.
    pub fn north() -> Self {
        Self { vector: Vector3::UNIT_Y }
    }

    /// Read-only access to the scene-space vector.
    pub fn vector(&self) -> Vector3 {
        self.vector
    }

    pub fn x(&self) -> f64 {
        self.vector.x
    }

    pub fn y(&self) -> f64 {
        self.vector.y
    }

    pub fn z(&self) -> f64 {
        self.vector.z
    }

    /// The same direction in physics coordinates (`x`, `y`, `z` with `z`
    /// pointing at |0⟩).
    pub fn physics(&self) -> Vector3 {
        Vector3::new(self.vector.x, self.vector.z, self.vector.y)
    }

    /// Names the cardinal state this direction points at, if any.
    pub fn describe(&self) -> Option<&'static str> {
        let p = self.physics();
        let near = |target: Vector3| p.distance(&target) < CARDINAL_TOLERANCE;
        if near(Vector3::UNIT_Z) {
            Some("|0⟩ (north pole)")
        } else if near(-Vector3::UNIT_Z) {
            Some("|1⟩ (south pole)")
        } else if near(Vector3::UNIT_X) {
            Some("|+⟩")
        } else if near(-Vector3::UNIT_X) {
            Some("|−⟩")
        } else if near(Vector3::UNIT_Y) {
            Some("|+i⟩")
        } else if near(-Vector3::UNIT_Y) {
            Some("|−i⟩")
        } else {
            None
        }
    }
}

impl fmt::Display for BlochDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Direction{}", self.vector)
    }
}

/// Amplitudes of `α|0⟩ + (βRe + i·βIm)|1⟩`.
///
/// `alpha` is real because the global phase is fixed so that the |0⟩
/// coefficient is non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumAmplitudes {
    pub alpha: f64,
    pub beta_real: f64,
    pub beta_imag: f64,
}

impl QuantumAmplitudes {
    pub fn new(alpha: f64, beta_real: f64, beta_imag: f64) -> Self {
        Self { alpha, beta_real, beta_imag }
    }

    /// The |1⟩ coefficient as a complex number.
    pub fn beta(&self) -> Complex64 {
        Complex64::new(self.beta_real, self.beta_imag)
    }

    /// The state as a two-component vector `[α, β]`.
    pub fn state_vector(&self) -> [Complex64; 2] {
        [Complex64::new(self.alpha, 0.0), self.beta()]
    }

    /// `α² + |β|²`, 1 for a valid state.
    pub fn norm_sqr(&self) -> f64 {
        self.alpha * self.alpha + self.beta().norm_sqr()
    }

    /// Probabilities of reading |0⟩ and |1⟩.
    pub fn probabilities(&self) -> (f64, f64) {
        (self.alpha * self.alpha, self.beta().norm_sqr())
    }

    /// Bloch vector from the Pauli expectation values, in physics coordinates:
    /// `(2Re(α*β), 2Im(α*β), |α|² − |β|²)`.
    pub fn bloch_vector(&self) -> Vector3 {
        let [alpha, beta] = self.state_vector();
        let alpha_conj_beta = alpha.conj() * beta;
        Vector3::new(
            2.0 * alpha_conj_beta.re,
            2.0 * alpha_conj_beta.im,
            alpha.norm_sqr() - beta.norm_sqr(),
        )
    }

    /// ASCII rendition for fonts lacking the ψ and ⟩ glyphs.
    pub fn ascii(&self) -> String {
        self.render("|psi>", "|0>", "|1>")
    }

    fn render(&self, psi: &str, ket0: &str, ket1: &str) -> String {
        let sign = if self.beta_imag >= 0.0 { "+" } else { "" };
        format!(
            "{} = {:.4}{} + ({:.4} {}{:.4}i){}",
            psi,
            no_negative_zero(self.alpha),
            ket0,
            no_negative_zero(self.beta_real),
            sign,
            no_negative_zero(self.beta_imag),
            ket1,
        )
    }
}

// `{:.4}` keeps the sign of -0.0; the display shows it as 0.0000.
fn no_negative_zero(value: f64) -> f64 {
    value + 0.0
}

impl fmt::Display for QuantumAmplitudes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("|ψ⟩", "|0⟩", "|1⟩"))
    }
}
