//! Calculator state layer for Lumen.
//!
//! [`ExposureCalculator`] owns the current exposure parameters, lock flags,
//! step-size selection, and conversion targets, and keeps the derived EV and
//! equivalent-exposure list up to date with explicit recompute-on-write:
//! every setter that can change a dependency recomputes the derived state
//! before returning. Lock flags are pure UI state; the engine only ever sees
//! resolved fixed constraints.

use serde::Serialize;
use tracing::{debug, warn};

use lumen_core::exposure::format::{
    format_aperture, format_shutter_speed, parse_aperture, parse_shutter_speed,
};
use lumen_core::params::lookup::snap_to_grid;
use lumen_core::params::options::{
    ParameterOption, aperture_options, iso_options, shutter_speed_options,
};
use lumen_core::{
    ExposureSettings, SearchConstraints, StepSize, calculate_ev, find_equivalent_exposures,
    get_parameters,
};

// ── Conversion targets ───────────────────────────────────────────

/// Optionally-fixed parameters for the equivalence converter.
///
/// A `Some` value pins that dimension in the search; the rest vary over the
/// active step-size grids.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConversionTargets {
    pub shutter: Option<f64>,
    pub aperture: Option<f64>,
    pub iso: Option<f64>,
}

// ── Snapshot ─────────────────────────────────────────────────────

/// Serializable view of the full calculator state for a UI frontend.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorSnapshot {
    pub step_size: StepSize,
    pub settings: ExposureSettings,
    pub ev: f64,
    pub shutter_label: String,
    pub aperture_label: String,
    pub shutter_locked: bool,
    pub aperture_locked: bool,
    pub iso_locked: bool,
    pub equivalent_exposures: Vec<ExposureSettings>,
    pub shutter_options: Vec<ParameterOption>,
    pub aperture_options: Vec<ParameterOption>,
    pub iso_options: Vec<ParameterOption>,
}

// ── Calculator ───────────────────────────────────────────────────

/// Interactive exposure calculator state.
///
/// Starts at 1/125s, f/2.8, ISO 100 on the third-stop grid.
#[derive(Debug, Clone)]
pub struct ExposureCalculator {
    step_size: StepSize,
    shutter_speed: f64,
    aperture: f64,
    iso: f64,
    shutter_locked: bool,
    aperture_locked: bool,
    iso_locked: bool,
    targets: ConversionTargets,
    current_ev: f64,
    equivalents: Vec<ExposureSettings>,
}

impl Default for ExposureCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ExposureCalculator {
    pub fn new() -> Self {
        let mut calc = Self {
            step_size: StepSize::default(),
            shutter_speed: 1.0 / 125.0,
            aperture: 2.8,
            iso: 100.0,
            shutter_locked: false,
            aperture_locked: false,
            iso_locked: false,
            targets: ConversionTargets::default(),
            current_ev: 0.0,
            equivalents: Vec::new(),
        };
        calc.recompute();
        calc
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn step_size(&self) -> StepSize {
        self.step_size
    }

    pub fn shutter_speed(&self) -> f64 {
        self.shutter_speed
    }

    pub fn aperture(&self) -> f64 {
        self.aperture
    }

    pub fn iso(&self) -> f64 {
        self.iso
    }

    pub fn current_settings(&self) -> ExposureSettings {
        ExposureSettings::new(self.shutter_speed, self.aperture, self.iso)
    }

    /// EV of the current settings, recomputed on every write.
    pub fn current_ev(&self) -> f64 {
        self.current_ev
    }

    /// Equivalent exposures for the current EV and conversion targets,
    /// sorted by ISO ascending, then shutter speed ascending.
    pub fn equivalent_exposures(&self) -> &[ExposureSettings] {
        &self.equivalents
    }

    pub fn shutter_locked(&self) -> bool {
        self.shutter_locked
    }

    pub fn aperture_locked(&self) -> bool {
        self.aperture_locked
    }

    pub fn iso_locked(&self) -> bool {
        self.iso_locked
    }

    pub fn shutter_speed_options(&self) -> Vec<ParameterOption> {
        shutter_speed_options(self.step_size)
    }

    pub fn aperture_options(&self) -> Vec<ParameterOption> {
        aperture_options(self.step_size)
    }

    pub fn iso_options(&self) -> Vec<ParameterOption> {
        iso_options(self.step_size)
    }

    // ── Setters ──────────────────────────────────────────────────

    /// Switch the step granularity, re-snapping the current values to the
    /// nearest entries of the new grid.
    pub fn set_step_size(&mut self, step: StepSize) {
        self.step_size = step;
        let table = get_parameters(step);
        let snapped = snap_to_grid(self.current_settings(), &table);
        self.shutter_speed = snapped.shutter_speed;
        self.aperture = snapped.aperture;
        self.iso = snapped.iso;
        self.recompute();
    }

    pub fn set_shutter_speed(&mut self, seconds: f64) {
        if !Self::accept(seconds) {
            warn!(seconds, "ignoring invalid shutter speed");
            return;
        }
        self.shutter_speed = seconds;
        self.recompute();
    }

    /// Set the shutter speed from text ("1/250", "0.004", "30").
    ///
    /// Malformed or non-positive input is rejected and the state left
    /// untouched.
    pub fn set_shutter_speed_str(&mut self, input: &str) {
        match parse_shutter_speed(input) {
            Some(seconds) if Self::accept(seconds) => {
                self.shutter_speed = seconds;
                self.recompute();
            }
            _ => warn!(input, "ignoring unparseable shutter speed"),
        }
    }

    pub fn set_aperture(&mut self, f_number: f64) {
        if !Self::accept(f_number) {
            warn!(f_number, "ignoring invalid aperture");
            return;
        }
        self.aperture = f_number;
        self.recompute();
    }

    /// Set the aperture from text ("f/1.8" or "1.8").
    pub fn set_aperture_str(&mut self, input: &str) {
        match parse_aperture(input) {
            Some(f_number) if Self::accept(f_number) => {
                self.aperture = f_number;
                self.recompute();
            }
            _ => warn!(input, "ignoring unparseable aperture"),
        }
    }

    pub fn set_iso(&mut self, iso: f64) {
        if !Self::accept(iso) {
            warn!(iso, "ignoring invalid ISO");
            return;
        }
        self.iso = iso;
        self.recompute();
    }

    /// Replace the conversion targets driving the equivalence search.
    pub fn update_targets(&mut self, targets: ConversionTargets) {
        self.targets = targets;
        self.recompute();
    }

    /// Copy an equivalent exposure back into the current settings.
    pub fn apply(&mut self, settings: ExposureSettings) {
        if settings.validate().is_err() {
            warn!(?settings, "ignoring invalid exposure settings");
            return;
        }
        self.shutter_speed = settings.shutter_speed;
        self.aperture = settings.aperture;
        self.iso = settings.iso;
        self.recompute();
    }

    // ── Lock plumbing ────────────────────────────────────────────

    pub fn toggle_shutter_lock(&mut self) {
        self.shutter_locked = !self.shutter_locked;
    }

    pub fn toggle_aperture_lock(&mut self) {
        self.aperture_locked = !self.aperture_locked;
    }

    pub fn toggle_iso_lock(&mut self) {
        self.iso_locked = !self.iso_locked;
    }

    pub fn reset_locks(&mut self) {
        self.shutter_locked = false;
        self.aperture_locked = false;
        self.iso_locked = false;
    }

    // ── Snapshot ─────────────────────────────────────────────────

    /// Full state view for a UI frontend.
    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            step_size: self.step_size,
            settings: self.current_settings(),
            ev: self.current_ev,
            shutter_label: format_shutter_speed(self.shutter_speed),
            aperture_label: format_aperture(self.aperture),
            shutter_locked: self.shutter_locked,
            aperture_locked: self.aperture_locked,
            iso_locked: self.iso_locked,
            equivalent_exposures: self.equivalents.clone(),
            shutter_options: self.shutter_speed_options(),
            aperture_options: self.aperture_options(),
            iso_options: self.iso_options(),
        }
    }

    /// Snapshot serialized as JSON for a webview bridge.
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }

    // ── Internals ────────────────────────────────────────────────

    fn accept(value: f64) -> bool {
        value > 0.0 && value.is_finite()
    }

    fn recompute(&mut self) {
        let settings = self.current_settings();
        match calculate_ev(settings) {
            Ok(ev) => {
                self.current_ev = ev;
                let table = get_parameters(self.step_size);
                let constraints = SearchConstraints {
                    fixed_shutter: self.targets.shutter,
                    fixed_aperture: self.targets.aperture,
                    fixed_iso: self.targets.iso,
                    shutter_grid: table.shutter_speeds,
                    aperture_grid: table.apertures,
                    iso_grid: table.iso_values,
                };
                let mut results = find_equivalent_exposures(ev, &constraints);
                results.sort_by(|a, b| {
                    a.iso
                        .total_cmp(&b.iso)
                        .then(a.shutter_speed.total_cmp(&b.shutter_speed))
                });
                self.equivalents = results;
                debug!(ev, count = self.equivalents.len(), "recomputed exposure state");
            }
            Err(err) => {
                // Setters guard positivity, so this only triggers if a
                // caller constructs pathological state by hand.
                warn!(%err, "current settings have no defined EV");
                self.equivalents.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_defaults_give_reference_ev() {
        let calc = ExposureCalculator::new();
        assert_eq!(calc.step_size(), StepSize::Third);
        assert!((calc.current_ev() - 9.94).abs() < EPSILON);
    }

    #[test]
    fn test_setters_recompute_ev() {
        let mut calc = ExposureCalculator::new();
        calc.set_shutter_speed(1.0 / 250.0);
        assert!((calc.current_ev() - 10.94).abs() < EPSILON);
        calc.set_iso(200.0);
        assert!((calc.current_ev() - 9.94).abs() < EPSILON);
    }

    #[test]
    fn test_string_setters_parse_camera_notation() {
        let mut calc = ExposureCalculator::new();
        calc.set_shutter_speed_str("1/500");
        assert!((calc.shutter_speed() - 0.002).abs() < EPSILON);
        calc.set_aperture_str("f/5.6");
        assert!((calc.aperture() - 5.6).abs() < EPSILON);
    }

    #[test]
    fn test_invalid_input_leaves_state_untouched() {
        let mut calc = ExposureCalculator::new();
        let before_ev = calc.current_ev();
        calc.set_shutter_speed_str("abc");
        calc.set_shutter_speed(-1.0);
        calc.set_aperture(0.0);
        calc.set_iso(f64::NAN);
        assert_eq!(calc.current_settings(), ExposureSettings::new(1.0 / 125.0, 2.8, 100.0));
        assert_eq!(calc.current_ev(), before_ev);
    }

    #[test]
    fn test_step_change_snaps_to_new_grid() {
        let mut calc = ExposureCalculator::new();
        // 1/100 exists on the third-stop grid but not the full-stop one.
        calc.set_shutter_speed(1.0 / 100.0);
        calc.set_step_size(StepSize::Full);
        assert!((calc.shutter_speed() - 1.0 / 125.0).abs() < EPSILON);
        assert_eq!(calc.aperture(), 2.8);
        assert_eq!(calc.iso(), 100.0);
    }

    #[test]
    fn test_two_targets_solve_the_third_parameter() {
        let mut calc = ExposureCalculator::new();
        calc.update_targets(ConversionTargets {
            shutter: Some(1.0 / 125.0),
            aperture: Some(2.8),
            iso: None,
        });
        let equivalents = calc.equivalent_exposures();
        assert_eq!(equivalents.len(), 1);
        assert_eq!(equivalents[0].iso, 100.0);
    }

    #[test]
    fn test_equivalents_sorted_by_iso_then_shutter() {
        let mut calc = ExposureCalculator::new();
        calc.update_targets(ConversionTargets {
            aperture: Some(2.8),
            ..Default::default()
        });
        let equivalents = calc.equivalent_exposures();
        assert!(!equivalents.is_empty());
        for pair in equivalents.windows(2) {
            let ordered = pair[0].iso < pair[1].iso
                || (pair[0].iso == pair[1].iso
                    && pair[0].shutter_speed <= pair[1].shutter_speed);
            assert!(ordered, "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_apply_copies_settings_in() {
        let mut calc = ExposureCalculator::new();
        calc.apply(ExposureSettings::new(1.0 / 250.0, 2.0, 100.0));
        assert_eq!(calc.shutter_speed(), 1.0 / 250.0);
        assert_eq!(calc.aperture(), 2.0);
    }

    #[test]
    fn test_lock_toggles_and_reset() {
        let mut calc = ExposureCalculator::new();
        calc.toggle_shutter_lock();
        calc.toggle_iso_lock();
        assert!(calc.shutter_locked());
        assert!(!calc.aperture_locked());
        assert!(calc.iso_locked());
        calc.toggle_shutter_lock();
        assert!(!calc.shutter_locked());
        calc.toggle_aperture_lock();
        calc.reset_locks();
        assert!(!calc.shutter_locked() && !calc.aperture_locked() && !calc.iso_locked());
    }

    #[test]
    fn test_options_follow_step_size() {
        let mut calc = ExposureCalculator::new();
        assert_eq!(calc.shutter_speed_options().len(), 52);
        calc.set_step_size(StepSize::Full);
        assert_eq!(calc.shutter_speed_options().len(), 18);
    }

    #[test]
    fn test_snapshot_serializes_with_labels() {
        let calc = ExposureCalculator::new();
        let snapshot = calc.snapshot();
        assert_eq!(snapshot.shutter_label, "1/125");
        assert_eq!(snapshot.aperture_label, "f/2.8");
        let json = calc.snapshot_json().unwrap();
        assert!(json.contains("\"ev\":9.94"));
    }
}
