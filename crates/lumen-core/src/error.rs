/// Errors from exposure-value computation.
///
/// EV is a logarithm of the settings triple, so every field must be strictly
/// positive for the result to be defined.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ExposureError {
    #[error("shutter speed must be positive, got {0}")]
    NonPositiveShutter(f64),

    #[error("aperture must be positive, got {0}")]
    NonPositiveAperture(f64),

    #[error("ISO must be positive, got {0}")]
    NonPositiveIso(f64),
}
