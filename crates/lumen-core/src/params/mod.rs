//! Standard camera parameter grids and step-size selection.

pub mod lookup;
pub mod options;
pub mod tables;

use serde::{Deserialize, Serialize};

pub use tables::get_parameters;

/// Step granularity of the discrete value grids.
///
/// One stop is a doubling or halving of light; the step size selects how
/// finely the standard value tables subdivide it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StepSize {
    /// Full stops.
    Full,
    /// Half stops.
    Half,
    /// Third stops. Default granularity.
    #[default]
    Third,
}

impl StepSize {
    /// Human-readable label for UI menus.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Full => "1",
            Self::Half => "1/2",
            Self::Third => "1/3",
        }
    }

    /// Parse a label back into a step size.
    ///
    /// Unknown labels fall back to [`StepSize::Third`]; that is the
    /// documented default grid, not an error.
    pub fn from_label(label: &str) -> Self {
        match label {
            "1" => Self::Full,
            "1/2" => Self::Half,
            _ => Self::Third,
        }
    }

    /// All step sizes, coarsest first.
    pub fn all() -> &'static [Self] {
        const ALL: [StepSize; 3] = [StepSize::Full, StepSize::Half, StepSize::Third];
        &ALL
    }
}

/// The three standard-value grids for one step size.
///
/// Static and read-only; shutter speeds descend from 30s, apertures and ISO
/// values ascend.
#[derive(Debug, Clone, Copy)]
pub struct ParameterTable {
    pub shutter_speeds: &'static [f64],
    pub apertures: &'static [f64],
    pub iso_values: &'static [f64],
}
