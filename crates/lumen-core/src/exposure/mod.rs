//! Exposure-value math: EV computation, inverse solvers, equivalent-exposure
//! search, and shutter/aperture text conversions.

pub mod ev;
pub mod format;
pub mod search;
pub mod solve;
