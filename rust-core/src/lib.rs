//! Kikuchi pattern geometry library
//!
//! This library computes the geometry of kinematical electron backscatter (Kikuchi)
//! patterns: master patterns in the stereographic projection and per-orientation
//! projections of Kikuchi lines and zone axes onto a detector.

pub mod config;
pub mod crystal;
pub mod detector;
pub mod errors;
pub mod interfaces;
pub mod projections;
pub mod simulations;

pub use errors::SimulationError;
pub use simulations::{KikuchiPatternSimulator, MasterPattern, PatternGeometry};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
