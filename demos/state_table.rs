//! Prints the mapped state for the cardinal points of the Bloch sphere and a
//! few random ones, without opening a window.

use blochsphere::{AngleParameters, BlochError, map_state, validate_mapped_state};
use std::f64::consts::{FRAC_PI_2, PI};

fn main() -> Result<(), BlochError> {
    println!("--- blochsphere Example: Angle to State Table ---");

    let named = [
        ("|0>", 0.0, 0.0),
        ("|1>", PI, 0.0),
        ("|+>", FRAC_PI_2, 0.0),
        ("|->", FRAC_PI_2, PI),
        ("|+i>", FRAC_PI_2, FRAC_PI_2),
        ("|-i>", FRAC_PI_2, -FRAC_PI_2),
    ];

    for (name, theta, phi) in named {
        let params = AngleParameters::try_new(theta, phi)?;
        let state = map_state(&params);
        validate_mapped_state(&state)?;
        println!("\n{}:\n{}", name, state);
    }

    println!("\nRandom states:");
    for _ in 0..3 {
        let state = map_state(&AngleParameters::random());
        validate_mapped_state(&state)?;
        let (p0, p1) = state.amplitudes.probabilities();
        println!("  {}  P(0)={:.3} P(1)={:.3}", state.display, p0, p1);
    }

    Ok(())
}
