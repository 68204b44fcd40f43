//! Ecliptic obliquity and sidereal time.
//!
//! All functions take a UTC-scale Julian Day; the difference from UT1 is
//! below a second and ignored.

use crate::angle::normalize_degrees;
use crate::ephemeris::nutation::nutation;
use crate::time::{centuries_since_j2000, J2000_JD};
use std::f64::consts::TAU;

/// Mean obliquity of the ecliptic, degrees.
///
/// 23.439291 − 0.0130042·T − 0.00000164·T² + 0.000000504·T³, T in Julian
/// centuries since J2000.0.
pub fn obliquity(jd_ut: f64) -> f64 {
    let t = centuries_since_j2000(jd_ut);
    23.439291 - 0.0130042 * t - 0.00000164 * t * t + 0.000000504 * t * t * t
}

/// Earth Rotation Angle, degrees in [0, 360).
///
/// θ = 360° × (0.7790572732640 + 1.00273781191135448 × Du), Du = JD − 2451545.0.
/// Source: IERS Conventions 2010, Eq. 5.15.
pub fn earth_rotation_angle(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let turns = 0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du;
    (turns * TAU).rem_euclid(TAU).to_degrees()
}

/// Greenwich Mean Sidereal Time, degrees in [0, 360).
///
/// GMST = ERA + (0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
/// − 0.000029956·T⁴ − 0.0000000368·T⁵)″. Source: Capitaine et al. 2003.
pub fn greenwich_mean_sidereal_time(jd_ut: f64) -> f64 {
    let t = centuries_since_j2000(jd_ut);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    normalize_degrees(earth_rotation_angle(jd_ut) + poly_arcsec / 3600.0)
}

/// Equation of the equinoxes Δψ·cos ε, degrees.
pub fn equation_of_equinoxes(jd_ut: f64) -> f64 {
    let t = centuries_since_j2000(jd_ut);
    let (dpsi, deps) = nutation(t);
    let true_obliquity = obliquity(jd_ut) + deps / 3600.0;
    dpsi / 3600.0 * true_obliquity.to_radians().cos()
}

/// Greenwich Apparent Sidereal Time, degrees in [0, 360).
pub fn greenwich_apparent_sidereal_time(jd_ut: f64) -> f64 {
    normalize_degrees(greenwich_mean_sidereal_time(jd_ut) + equation_of_equinoxes(jd_ut))
}

/// Apparent local sidereal time at an east longitude, as hour-angle degrees.
pub fn local_sidereal_time(jd_ut: f64, longitude: f64) -> f64 {
    normalize_degrees(greenwich_apparent_sidereal_time(jd_ut) + longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obliquity_at_j2000() {
        assert_eq!(obliquity(J2000_JD), 23.439291);
    }

    #[test]
    fn obliquity_decreases_over_the_century() {
        assert!(obliquity(J2000_JD + 36525.0) < obliquity(J2000_JD));
        let expected = 23.439291 - 0.0130042 - 0.00000164 + 0.000000504;
        assert!((obliquity(J2000_JD + 36525.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn era_at_j2000_noon() {
        let era = earth_rotation_angle(J2000_JD);
        assert!((era - 280.46).abs() < 0.1, "ERA = {era}");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-01-01 0h UT: GMST = 6h39m52.27s ≈ 99.9678°.
        let gmst = greenwich_mean_sidereal_time(2_451_544.5);
        assert!((gmst - 99.9678).abs() < 0.001, "GMST = {gmst}");
    }

    #[test]
    fn apparent_differs_from_mean_by_under_twenty_arcseconds() {
        for &jd in &[2_451_545.0, 2_455_945.6, 2_460_310.5] {
            let eqeq = equation_of_equinoxes(jd);
            assert!(eqeq.abs() < 20.0 / 3600.0, "eqeq = {eqeq}");
        }
    }

    #[test]
    fn lst_adds_east_longitude() {
        let jd = 2_455_945.597_916_7;
        let gast = greenwich_apparent_sidereal_time(jd);
        let lst = local_sidereal_time(jd, 127.1188);
        assert!((normalize_degrees(gast + 127.1188) - lst).abs() < 1e-9);
        let west = local_sidereal_time(jd, -74.0);
        assert!((normalize_degrees(gast - 74.0) - west).abs() < 1e-9);
    }
}
