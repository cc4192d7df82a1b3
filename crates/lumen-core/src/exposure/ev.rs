//! Exposure value computation.

use crate::error::ExposureError;
use crate::settings::ExposureSettings;

/// Compute the exposure value of a settings triple.
///
/// ```text
/// EV = log2(aperture² / shutter) − log2(iso / 100)
/// ```
///
/// The result is rounded to 2 decimal places. Errors if any field is not
/// strictly positive, since the logarithms are undefined there.
pub fn calculate_ev(settings: ExposureSettings) -> Result<f64, ExposureError> {
    settings.validate()?;

    let aperture_term = (settings.aperture * settings.aperture / settings.shutter_speed).log2();
    let iso_term = (settings.iso / 100.0).log2();

    Ok(round_to(aperture_term - iso_term, 2))
}

/// Round to `decimals` decimal places, halves away from zero.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_reference_exposure_is_ev_9_94() {
        // 1/125s, f/2.8, ISO 100: log2(7.84 / 0.008) = log2(980) ≈ 9.9367
        let settings = ExposureSettings::new(1.0 / 125.0, 2.8, 100.0);
        assert!((calculate_ev(settings).unwrap() - 9.94).abs() < EPSILON);
    }

    #[test]
    fn test_iso_100_is_the_neutral_sensitivity() {
        // At ISO 100 the ISO term vanishes; EV is log2(aperture²/shutter).
        let settings = ExposureSettings::new(1.0, 1.0, 100.0);
        assert_eq!(calculate_ev(settings).unwrap(), 0.0);
    }

    #[test]
    fn test_ev_increases_with_aperture() {
        let mut previous = f64::NEG_INFINITY;
        for aperture in [1.0, 1.4, 2.0, 2.8, 4.0, 8.0, 22.0] {
            let ev = calculate_ev(ExposureSettings::new(0.008, aperture, 100.0)).unwrap();
            assert!(ev > previous, "EV should rise with aperture, got {ev}");
            previous = ev;
        }
    }

    #[test]
    fn test_ev_decreases_with_shutter_and_iso() {
        let ev = |shutter, iso| {
            calculate_ev(ExposureSettings::new(shutter, 2.8, iso)).unwrap()
        };
        assert!(ev(0.004, 100.0) > ev(0.008, 100.0));
        assert!(ev(0.008, 100.0) > ev(0.008, 200.0));
        assert!(ev(0.008, 200.0) > ev(0.008, 400.0));
    }

    #[test]
    fn test_one_stop_moves_ev_by_one() {
        let base = calculate_ev(ExposureSettings::new(0.008, 2.8, 100.0)).unwrap();
        let halved = calculate_ev(ExposureSettings::new(0.004, 2.8, 100.0)).unwrap();
        assert!((halved - base - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_non_positive_inputs_error() {
        assert!(calculate_ev(ExposureSettings::new(0.0, 2.8, 100.0)).is_err());
        assert!(calculate_ev(ExposureSettings::new(0.008, -2.8, 100.0)).is_err());
        assert!(calculate_ev(ExposureSettings::new(0.008, 2.8, 0.0)).is_err());
    }

    #[test]
    fn test_result_rounds_to_two_decimals() {
        let ev = calculate_ev(ExposureSettings::new(1.0 / 125.0, 2.8, 100.0)).unwrap();
        assert_eq!(ev, round_to(ev, 2));
    }
}
