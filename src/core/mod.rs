// src/core/mod.rs

//! Core data structures and types

pub mod angles;
pub mod constants;
pub mod error;
pub mod state;
pub mod vector;

// Re-export public types for convenient access via `blochsphere::core::TypeName`
pub use angles::AngleParameters;
pub use error::BlochError;
pub use state::{BlochDirection, QuantumAmplitudes};
pub use vector::Vector3;
