//! Lumen Core — domain layer for photographic exposure equivalence.
//!
//! This crate contains the exposure-value math, the standard-value tables
//! for each step granularity, and the equivalent-exposure search. No UI or
//! framework dependencies.

pub mod error;
pub mod exposure;
pub mod params;
pub mod settings;

// Re-exports for convenience.
pub use error::ExposureError;
pub use exposure::ev::calculate_ev;
pub use exposure::search::{SearchConstraints, find_equivalent_exposures};
pub use params::{ParameterTable, StepSize, get_parameters};
pub use settings::ExposureSettings;
