//! Equivalent-exposure search over the standard value grids.

use tracing::trace;

use super::ev::calculate_ev;
use super::solve::{required_aperture, required_iso, required_shutter};
use crate::settings::ExposureSettings;

/// EV match tolerance when one parameter is fixed and two grids are free.
///
/// Discrete steps shift EV by up to ~0.17 per half-stop increment, so a
/// pairwise search needs a looser band to surface any matches at all.
const PAIR_EV_TOLERANCE: f64 = 0.1;

/// EV match tolerance when all three grids are free.
///
/// The triple product yields enough combinations that a tight band still
/// returns usable results.
const GRID_EV_TOLERANCE: f64 = 0.01;

/// Fixed parameters and candidate grids for an equivalence search.
///
/// A `Some` fixed value pins that dimension; the grids supply candidates for
/// the free dimensions and default to empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConstraints<'a> {
    pub fixed_shutter: Option<f64>,
    pub fixed_aperture: Option<f64>,
    pub fixed_iso: Option<f64>,
    pub shutter_grid: &'a [f64],
    pub aperture_grid: &'a [f64],
    pub iso_grid: &'a [f64],
}

/// Find all settings combinations matching `target_ev` under `constraints`.
///
/// Dispatch, in priority order:
/// 1. two parameters fixed — solve directly for the third; zero or one
///    result (a non-positive solution is discarded);
/// 2. one fixed — enumerate the product of the two free grids within
///    [`PAIR_EV_TOLERANCE`];
/// 3. none fixed — enumerate the full triple product within
///    [`GRID_EV_TOLERANCE`].
///
/// Results come back in grid enumeration order; presentation sorting is the
/// caller's concern.
pub fn find_equivalent_exposures(
    target_ev: f64,
    constraints: &SearchConstraints<'_>,
) -> Vec<ExposureSettings> {
    let mut equivalents = Vec::new();

    match (
        constraints.fixed_shutter,
        constraints.fixed_aperture,
        constraints.fixed_iso,
    ) {
        (Some(shutter), Some(aperture), _) => {
            let iso = required_iso(target_ev, shutter, aperture);
            if iso > 0.0 {
                equivalents.push(ExposureSettings::new(shutter, aperture, iso));
            }
        }
        (Some(shutter), None, Some(iso)) => {
            let aperture = required_aperture(target_ev, shutter, iso);
            if aperture > 0.0 {
                equivalents.push(ExposureSettings::new(shutter, aperture, iso));
            }
        }
        (None, Some(aperture), Some(iso)) => {
            let shutter = required_shutter(target_ev, aperture, iso);
            if shutter > 0.0 {
                equivalents.push(ExposureSettings::new(shutter, aperture, iso));
            }
        }
        (Some(shutter), None, None) => {
            for &aperture in constraints.aperture_grid {
                for &iso in constraints.iso_grid {
                    push_if_matching(
                        &mut equivalents,
                        ExposureSettings::new(shutter, aperture, iso),
                        target_ev,
                        PAIR_EV_TOLERANCE,
                    );
                }
            }
        }
        (None, Some(aperture), None) => {
            for &shutter in constraints.shutter_grid {
                for &iso in constraints.iso_grid {
                    push_if_matching(
                        &mut equivalents,
                        ExposureSettings::new(shutter, aperture, iso),
                        target_ev,
                        PAIR_EV_TOLERANCE,
                    );
                }
            }
        }
        (None, None, Some(iso)) => {
            for &shutter in constraints.shutter_grid {
                for &aperture in constraints.aperture_grid {
                    push_if_matching(
                        &mut equivalents,
                        ExposureSettings::new(shutter, aperture, iso),
                        target_ev,
                        PAIR_EV_TOLERANCE,
                    );
                }
            }
        }
        (None, None, None) => {
            for &shutter in constraints.shutter_grid {
                for &aperture in constraints.aperture_grid {
                    for &iso in constraints.iso_grid {
                        push_if_matching(
                            &mut equivalents,
                            ExposureSettings::new(shutter, aperture, iso),
                            target_ev,
                            GRID_EV_TOLERANCE,
                        );
                    }
                }
            }
        }
    }

    trace!(target_ev, count = equivalents.len(), "equivalence search done");
    equivalents
}

/// Keep `candidate` if its EV lands within `tolerance` of the target.
///
/// An undefined EV (non-positive fixed parameter) is simply not a match.
fn push_if_matching(
    equivalents: &mut Vec<ExposureSettings>,
    candidate: ExposureSettings,
    target_ev: f64,
    tolerance: f64,
) {
    if let Ok(ev) = calculate_ev(candidate)
        && (ev - target_ev).abs() < tolerance
    {
        equivalents.push(candidate);
    }
}
