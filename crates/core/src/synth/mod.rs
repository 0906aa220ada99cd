//! Sampling stages: environmental conditions and coal composition
//!
//! Both generators take an injectable `rand::Rng` so production wires a
//! system entropy source while tests and batch runs use seeded generators.

pub mod coal;
pub mod environment;

pub use coal::synthesize_properties;
pub use environment::generate_environment;
