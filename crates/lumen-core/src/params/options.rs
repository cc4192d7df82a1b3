//! Display option lists derived from the parameter tables.
//!
//! Each raw grid value is paired with the label a UI menu shows for it.

use serde::{Deserialize, Serialize};

use super::{StepSize, get_parameters};

/// One selectable grid value with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterOption {
    pub value: f64,
    pub label: String,
}

/// Shutter speed options for a step size.
///
/// Speeds of one second and longer are labeled in seconds ("30s"); shorter
/// speeds as a fraction "1/N" with N = round(1/value).
pub fn shutter_speed_options(step: StepSize) -> Vec<ParameterOption> {
    get_parameters(step)
        .shutter_speeds
        .iter()
        .map(|&speed| ParameterOption {
            value: speed,
            label: if speed >= 1.0 {
                format!("{speed}s")
            } else {
                format!("1/{}", (1.0 / speed).round() as i64)
            },
        })
        .collect()
}

/// Aperture options for a step size, labeled "f/<value>".
pub fn aperture_options(step: StepSize) -> Vec<ParameterOption> {
    get_parameters(step)
        .apertures
        .iter()
        .map(|&aperture| ParameterOption {
            value: aperture,
            label: format!("f/{aperture}"),
        })
        .collect()
}

/// ISO options for a step size, labeled as the bare integer.
pub fn iso_options(step: StepSize) -> Vec<ParameterOption> {
    get_parameters(step)
        .iso_values
        .iter()
        .map(|&iso| ParameterOption {
            value: iso,
            label: format!("{iso}"),
        })
        .collect()
}
