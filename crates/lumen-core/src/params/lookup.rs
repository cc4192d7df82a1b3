//! Closest-standard-value lookup and grid snapping.

use super::ParameterTable;
use crate::settings::ExposureSettings;

/// Return the grid entry closest to `target` by absolute difference.
///
/// Exact ties keep the earlier entry in iteration order. Returns `None` for
/// an empty grid.
pub fn closest_standard_value(target: f64, values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(|prev, curr| {
        if (curr - target).abs() < (prev - target).abs() {
            curr
        } else {
            prev
        }
    })
}

/// Snap all three fields of `settings` to their nearest standard grid entry.
///
/// A field whose grid is empty passes through unchanged.
pub fn snap_to_grid(settings: ExposureSettings, table: &ParameterTable) -> ExposureSettings {
    ExposureSettings {
        shutter_speed: closest_standard_value(settings.shutter_speed, table.shutter_speeds)
            .unwrap_or(settings.shutter_speed),
        aperture: closest_standard_value(settings.aperture, table.apertures)
            .unwrap_or(settings.aperture),
        iso: closest_standard_value(settings.iso, table.iso_values).unwrap_or(settings.iso),
    }
}
