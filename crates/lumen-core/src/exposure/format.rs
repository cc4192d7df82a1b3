//! Text conversions for shutter speeds and apertures.
//!
//! Parsers accept the notations photographers type ("1/250", "0.004", "f/1.8")
//! and return `None` for malformed text. They do not validate positivity;
//! callers decide what to do with a zero or negative parse.

/// Parse a shutter speed from "N/D" fraction notation or a bare decimal.
pub fn parse_shutter_speed(input: &str) -> Option<f64> {
    let input = input.trim();

    if let Some((numerator, denominator)) = input.split_once('/') {
        let n: f64 = numerator.trim().parse().ok()?;
        let d: f64 = denominator.trim().parse().ok()?;
        return Some(n / d);
    }

    input.parse().ok()
}

/// Format a shutter speed in seconds.
///
/// Speeds of 0.4s and longer render as seconds with one decimal place (a
/// bare integer count when whole); shorter speeds as "1/N" with
/// N = round(1/value).
pub fn format_shutter_speed(seconds: f64) -> String {
    if seconds >= 0.4 {
        if seconds >= 1.0 && seconds.fract() == 0.0 {
            return format!("{}s", seconds as i64);
        }
        return format!("{seconds:.1}s");
    }

    format!("1/{}", (1.0 / seconds).round() as i64)
}

/// Parse an aperture from "f/N" (any case) or a bare number.
pub fn parse_aperture(input: &str) -> Option<f64> {
    let input = input.trim().to_lowercase();
    let digits = input.strip_prefix("f/").unwrap_or(&input);
    digits.parse().ok()
}

/// Format an aperture as "f/<value>" with minimal digits.
pub fn format_aperture(f_number: f64) -> String {
    format!("f/{f_number}")
}
