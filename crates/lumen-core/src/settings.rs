//! The exposure-settings value type.
//!
//! `ExposureSettings` is one point on the exposure grid. It is an immutable
//! value type; every calculation produces a new instance rather than mutating
//! in place.

use serde::{Deserialize, Serialize};

use crate::error::ExposureError;

/// A shutter speed, aperture, and ISO triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureSettings {
    /// Shutter speed in seconds.
    pub shutter_speed: f64,
    /// Aperture as an f-number.
    pub aperture: f64,
    /// ISO sensitivity.
    pub iso: f64,
}

impl ExposureSettings {
    pub const fn new(shutter_speed: f64, aperture: f64, iso: f64) -> Self {
        Self { shutter_speed, aperture, iso }
    }

    /// Check that all three fields are strictly positive.
    ///
    /// EV is only defined for positive values; shutter speed and ISO appear
    /// as divisors and logarithm arguments. Non-finite values fail too.
    pub fn validate(&self) -> Result<(), ExposureError> {
        if !(self.shutter_speed > 0.0 && self.shutter_speed.is_finite()) {
            return Err(ExposureError::NonPositiveShutter(self.shutter_speed));
        }
        if !(self.aperture > 0.0 && self.aperture.is_finite()) {
            return Err(ExposureError::NonPositiveAperture(self.aperture));
        }
        if !(self.iso > 0.0 && self.iso.is_finite()) {
            return Err(ExposureError::NonPositiveIso(self.iso));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_positive_triple() {
        let settings = ExposureSettings::new(1.0 / 125.0, 2.8, 100.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_shutter() {
        let settings = ExposureSettings::new(0.0, 2.8, 100.0);
        assert_eq!(
            settings.validate(),
            Err(ExposureError::NonPositiveShutter(0.0))
        );
    }

    #[test]
    fn test_validate_rejects_negative_iso() {
        let settings = ExposureSettings::new(0.008, 2.8, -100.0);
        assert_eq!(settings.validate(), Err(ExposureError::NonPositiveIso(-100.0)));
    }

    #[test]
    fn test_validate_rejects_nan_aperture() {
        let settings = ExposureSettings::new(0.008, f64::NAN, 100.0);
        assert!(settings.validate().is_err());
    }
}
