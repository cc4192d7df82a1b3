//! Standard value tables per step granularity.
//!
//! The tables cover the common photographic range: 30s to 1/4000s shutter,
//! f/1.0 to f/32 aperture, ISO 50 to 51200. Values are the ones printed on
//! camera dials, which round the exact geometric progressions (f/5.6 rather
//! than f/5.657, 1/125 rather than 1/128).

use super::{ParameterTable, StepSize};

const SHUTTER_SPEEDS_FULL: [f64; 18] = [
    30.0,
    15.0,
    8.0,
    4.0,
    2.0,
    1.0,
    1.0 / 2.0,
    1.0 / 4.0,
    1.0 / 8.0,
    1.0 / 15.0,
    1.0 / 30.0,
    1.0 / 60.0,
    1.0 / 125.0,
    1.0 / 250.0,
    1.0 / 500.0,
    1.0 / 1000.0,
    1.0 / 2000.0,
    1.0 / 4000.0,
];

const APERTURES_FULL: [f64; 11] = [1.0, 1.4, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0, 32.0];

const ISO_VALUES_FULL: [f64; 11] = [
    50.0, 100.0, 200.0, 400.0, 800.0, 1600.0, 3200.0, 6400.0, 12800.0, 25600.0, 51200.0,
];

const SHUTTER_SPEEDS_HALF: [f64; 35] = [
    30.0,
    20.0,
    15.0,
    10.0,
    8.0,
    6.0,
    4.0,
    3.0,
    2.0,
    1.5,
    1.0,
    0.7,
    1.0 / 2.0,
    1.0 / 3.0,
    1.0 / 4.0,
    1.0 / 6.0,
    1.0 / 8.0,
    1.0 / 10.0,
    1.0 / 15.0,
    1.0 / 20.0,
    1.0 / 30.0,
    1.0 / 45.0,
    1.0 / 60.0,
    1.0 / 90.0,
    1.0 / 125.0,
    1.0 / 180.0,
    1.0 / 250.0,
    1.0 / 350.0,
    1.0 / 500.0,
    1.0 / 750.0,
    1.0 / 1000.0,
    1.0 / 1500.0,
    1.0 / 2000.0,
    1.0 / 3000.0,
    1.0 / 4000.0,
];

const APERTURES_HALF: [f64; 21] = [
    1.0, 1.2, 1.4, 1.7, 2.0, 2.4, 2.8, 3.3, 4.0, 4.8, 5.6, 6.7, 8.0, 9.5, 11.0, 13.0, 16.0, 19.0,
    22.0, 27.0, 32.0,
];

const ISO_VALUES_HALF: [f64; 21] = [
    50.0, 70.0, 100.0, 140.0, 200.0, 280.0, 400.0, 560.0, 800.0, 1100.0, 1600.0, 2200.0, 3200.0,
    4500.0, 6400.0, 9000.0, 12800.0, 18000.0, 25600.0, 36000.0, 51200.0,
];

const SHUTTER_SPEEDS_THIRD: [f64; 52] = [
    30.0,
    25.0,
    20.0,
    15.0,
    13.0,
    10.0,
    8.0,
    6.0,
    5.0,
    4.0,
    3.2,
    2.5,
    2.0,
    1.6,
    1.3,
    1.0,
    0.8,
    0.6,
    1.0 / 2.0,
    1.0 / 2.5,
    1.0 / 3.0,
    1.0 / 4.0,
    1.0 / 5.0,
    1.0 / 6.0,
    1.0 / 8.0,
    1.0 / 10.0,
    1.0 / 13.0,
    1.0 / 15.0,
    1.0 / 20.0,
    1.0 / 25.0,
    1.0 / 30.0,
    1.0 / 40.0,
    1.0 / 50.0,
    1.0 / 60.0,
    1.0 / 80.0,
    1.0 / 100.0,
    1.0 / 125.0,
    1.0 / 160.0,
    1.0 / 200.0,
    1.0 / 250.0,
    1.0 / 320.0,
    1.0 / 400.0,
    1.0 / 500.0,
    1.0 / 640.0,
    1.0 / 800.0,
    1.0 / 1000.0,
    1.0 / 1250.0,
    1.0 / 1600.0,
    1.0 / 2000.0,
    1.0 / 2500.0,
    1.0 / 3200.0,
    1.0 / 4000.0,
];

const APERTURES_THIRD: [f64; 31] = [
    1.0, 1.1, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2, 2.5, 2.8, 3.2, 3.5, 4.0, 4.5, 5.0, 5.6, 6.3, 7.1, 8.0,
    9.0, 10.0, 11.0, 13.0, 14.0, 16.0, 18.0, 20.0, 22.0, 25.0, 29.0, 32.0,
];

const ISO_VALUES_THIRD: [f64; 31] = [
    50.0, 64.0, 80.0, 100.0, 125.0, 160.0, 200.0, 250.0, 320.0, 400.0, 500.0, 640.0, 800.0,
    1000.0, 1250.0, 1600.0, 2000.0, 2500.0, 3200.0, 4000.0, 5000.0, 6400.0, 8000.0, 10000.0,
    12800.0, 16000.0, 20000.0, 25600.0, 32000.0, 40000.0, 51200.0,
];

/// The standard-value grids for a step size.
pub const fn get_parameters(step: StepSize) -> ParameterTable {
    match step {
        StepSize::Full => ParameterTable {
            shutter_speeds: &SHUTTER_SPEEDS_FULL,
            apertures: &APERTURES_FULL,
            iso_values: &ISO_VALUES_FULL,
        },
        StepSize::Half => ParameterTable {
            shutter_speeds: &SHUTTER_SPEEDS_HALF,
            apertures: &APERTURES_HALF,
            iso_values: &ISO_VALUES_HALF,
        },
        StepSize::Third => ParameterTable {
            shutter_speeds: &SHUTTER_SPEEDS_THIRD,
            apertures: &APERTURES_THIRD,
            iso_values: &ISO_VALUES_THIRD,
        },
    }
}
