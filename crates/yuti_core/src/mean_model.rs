//! Low-precision mean-element longitude model.
//!
//! Circular, coplanar heliocentric orbits evaluated from J2000 mean
//! longitudes and daily rates, with the Moon as a direct geocentric mean
//! longitude. Accuracy is at the level of a few degrees (worse for Mercury,
//! whose orbit is far from circular) — enough to drive conjunction scans in
//! demos, benchmarks, and tests, not for observation planning.

use crate::angles::wrap_360;
use crate::julian::J2000_JD;
use crate::{Body, LongitudeSource, SourceError};

/// Validity half-window around J2000 in days (~2700 years either side).
const VALID_HALF_WINDOW_DAYS: f64 = 1_000_000.0;

/// `(semi-major axis AU, mean longitude at J2000 deg, rate deg/day)`.
const EARTH_ELEMENTS: (f64, f64, f64) = (1.000_001, 100.466_457, 0.985_609_12);

const fn heliocentric_elements(body: Body) -> Option<(f64, f64, f64)> {
    match body {
        Body::Mercury => Some((0.387_098, 252.250_906, 4.092_334_45)),
        Body::Venus => Some((0.723_330, 181.979_801, 1.602_130_34)),
        Body::Earth => Some(EARTH_ELEMENTS),
        Body::Mars => Some((1.523_679, 355.433_000, 0.524_020_68)),
        Body::Jupiter => Some((5.202_603, 34.351_519, 0.083_085_29)),
        Body::Saturn => Some((9.554_909, 50.077_444, 0.033_444_14)),
        Body::Uranus => Some((19.218_446, 314.055_005, 0.011_728_34)),
        Body::Neptune => Some((30.110_387, 304.348_665, 0.005_981_03)),
        Body::Pluto => Some((39.482_117, 238.929_038, 0.003_973_66)),
        Body::Sun | Body::Moon => None,
    }
}

/// Moon geocentric mean longitude at J2000 and daily rate.
const MOON_L0_DEG: f64 = 218.316_447_7;
const MOON_RATE_DEG_PER_DAY: f64 = 13.176_396_48;

fn xy_from_elements(elements: (f64, f64, f64), days_since_j2000: f64) -> (f64, f64) {
    let (a, l0, n) = elements;
    let l = (l0 + n * days_since_j2000).to_radians();
    (a * l.cos(), a * l.sin())
}

/// Built-in [`LongitudeSource`] backed by J2000 mean elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanElementModel;

impl MeanElementModel {
    pub fn new() -> Self {
        Self
    }
}

impl LongitudeSource for MeanElementModel {
    fn ecliptic_longitude_deg(&self, body: Body, jd_tdb: f64) -> Result<f64, SourceError> {
        if !jd_tdb.is_finite() || (jd_tdb - J2000_JD).abs() > VALID_HALF_WINDOW_DAYS {
            return Err(SourceError::EpochOutOfRange { jd_tdb });
        }
        let days = jd_tdb - J2000_JD;

        match body {
            Body::Moon => Ok(wrap_360(MOON_L0_DEG + MOON_RATE_DEG_PER_DAY * days)),
            Body::Earth => Err(SourceError::UnsupportedBody(body)),
            Body::Sun => {
                // Direction from Earth toward the origin.
                let (ex, ey) = xy_from_elements(EARTH_ELEMENTS, days);
                Ok(wrap_360(f64::atan2(-ey, -ex).to_degrees()))
            }
            _ => {
                let Some(elements) = heliocentric_elements(body) else {
                    return Err(SourceError::UnsupportedBody(body));
                };
                let (px, py) = xy_from_elements(elements, days);
                let (ex, ey) = xy_from_elements(EARTH_ELEMENTS, days);
                Ok(wrap_360(f64::atan2(py - ey, px - ex).to_degrees()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SUPPORTED: [Body; 10] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Moon,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    #[test]
    fn longitudes_in_range() {
        let model = MeanElementModel::new();
        for body in ALL_SUPPORTED {
            for jd in [J2000_JD - 100_000.0, J2000_JD, J2000_JD + 100_000.0] {
                let lon = model.ecliptic_longitude_deg(body, jd).expect("in range");
                assert!((0.0..360.0).contains(&lon), "{body} at {jd}: {lon}");
            }
        }
    }

    #[test]
    fn sun_opposes_earth_heliocentric() {
        let model = MeanElementModel::new();
        let sun = model
            .ecliptic_longitude_deg(Body::Sun, J2000_JD)
            .expect("in range");
        let (_, earth_l0, _) = EARTH_ELEMENTS;
        assert!((sun - wrap_360(earth_l0 + 180.0)).abs() < 1e-9, "sun = {sun}");
    }

    #[test]
    fn moon_mean_rate() {
        let model = MeanElementModel::new();
        let l0 = model
            .ecliptic_longitude_deg(Body::Moon, J2000_JD)
            .expect("in range");
        let l1 = model
            .ecliptic_longitude_deg(Body::Moon, J2000_JD + 1.0)
            .expect("in range");
        let rate = wrap_360(l1 - l0);
        assert!((rate - MOON_RATE_DEG_PER_DAY).abs() < 1e-9, "rate = {rate}");
    }

    #[test]
    fn outer_planet_advances_slowly() {
        let model = MeanElementModel::new();
        let l0 = model
            .ecliptic_longitude_deg(Body::Neptune, J2000_JD)
            .expect("in range");
        let l1 = model
            .ecliptic_longitude_deg(Body::Neptune, J2000_JD + 1.0)
            .expect("in range");
        // Geocentric daily motion stays small even with Earth's parallax.
        assert!((l1 - l0).abs() < 0.1, "moved {} deg", l1 - l0);
    }

    #[test]
    fn earth_unsupported() {
        let model = MeanElementModel::new();
        assert_eq!(
            model.ecliptic_longitude_deg(Body::Earth, J2000_JD),
            Err(SourceError::UnsupportedBody(Body::Earth))
        );
    }

    #[test]
    fn epoch_out_of_range() {
        let model = MeanElementModel::new();
        let jd = J2000_JD + VALID_HALF_WINDOW_DAYS + 1.0;
        assert_eq!(
            model.ecliptic_longitude_deg(Body::Sun, jd),
            Err(SourceError::EpochOutOfRange { jd_tdb: jd })
        );
    }

    #[test]
    fn deterministic() {
        let model = MeanElementModel::new();
        let a = model.ecliptic_longitude_deg(Body::Mars, J2000_JD + 321.5);
        let b = model.ecliptic_longitude_deg(Body::Mars, J2000_JD + 321.5);
        assert_eq!(a, b);
    }
}
