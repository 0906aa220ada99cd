//! Thermal field simulation, statistics, and visualization

pub mod simulator;
pub mod stats;
pub mod visualize;

pub use simulator::{environmental_multiplier, simulate};
pub use stats::TempStats;
