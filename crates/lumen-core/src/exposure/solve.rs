//! Inverse solvers: recover one exposure parameter from a target EV and the
//! other two.
//!
//! Each rearranges the EV formula for its unknown. The solvers return the
//! raw rounded value; a non-positive result means no representable parameter
//! produces the target EV at this grid point, and the caller discards it.

use super::ev::round_to;

/// ISO needed to hit `target_ev` with a fixed shutter and aperture.
///
/// ```text
/// iso = 100 × 2^(log2(aperture² / shutter) − EV)
/// ```
///
/// Rounded to the nearest integer.
pub fn required_iso(target_ev: f64, shutter: f64, aperture: f64) -> f64 {
    let aperture_term = (aperture * aperture / shutter).log2();
    (100.0 * 2f64.powf(aperture_term - target_ev)).round()
}

/// Aperture needed to hit `target_ev` with a fixed shutter and ISO.
///
/// ```text
/// aperture = sqrt(shutter × 2^(EV + log2(iso / 100)))
/// ```
///
/// Rounded to 1 decimal place.
pub fn required_aperture(target_ev: f64, shutter: f64, iso: f64) -> f64 {
    let iso_term = (iso / 100.0).log2();
    let aperture_squared = shutter * 2f64.powf(target_ev + iso_term);
    round_to(aperture_squared.sqrt(), 1)
}

/// Shutter speed needed to hit `target_ev` with a fixed aperture and ISO.
///
/// ```text
/// shutter = aperture² / 2^(EV + log2(iso / 100))
/// ```
///
/// Rounded to 4 decimal places.
pub fn required_shutter(target_ev: f64, aperture: f64, iso: f64) -> f64 {
    let iso_term = (iso / 100.0).log2();
    round_to(aperture * aperture / 2f64.powf(target_ev + iso_term), 4)
}
