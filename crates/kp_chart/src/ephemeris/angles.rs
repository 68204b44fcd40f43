//! Ascendant and Midheaven by spherical trigonometry.
//!
//! Inputs and outputs in degrees; the trigonometry runs in radians.

use crate::angle::normalize_degrees;

/// `atan2(−cos(lst), sin(lst)·cos(obl) + tan(lat)·sin(obl))`, in [0, 360).
pub fn ascendant(lst: f64, lat: f64, obliquity: f64) -> f64 {
    let lst_rad = lst.to_radians();
    let lat_rad = lat.to_radians();
    let obl_rad = obliquity.to_radians();

    let y = -lst_rad.cos();
    let x = lst_rad.sin() * obl_rad.cos() + lat_rad.tan() * obl_rad.sin();

    normalize_degrees(y.atan2(x).to_degrees())
}

/// `atan2(tan(lst), cos(obl))`, in [0, 360).
pub fn midheaven(lst: f64, obliquity: f64) -> f64 {
    let lst_rad = lst.to_radians();
    let obl_rad = obliquity.to_radians();

    normalize_degrees(lst_rad.tan().atan2(obl_rad.cos()).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBL: f64 = 23.4393;

    #[test]
    fn results_are_normalized() {
        for lst in (0..360).step_by(15) {
            let lst = lst as f64 + 0.5;
            let asc = ascendant(lst, 37.38, OBL);
            let mc = midheaven(lst, OBL);
            assert!((0.0..360.0).contains(&asc), "asc {asc} at lst {lst}");
            assert!((0.0..360.0).contains(&mc), "mc {mc} at lst {lst}");
        }
    }

    #[test]
    fn equator_ascendant_at_zero_lst() {
        // lat = 0, lst = 0: atan2(-1, 0) = -90° -> 270°.
        assert!((ascendant(0.0, 0.0, OBL) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn midheaven_at_cardinal_lst() {
        assert!(midheaven(0.0, OBL).abs() < 1e-9);
        // tan(45°) = 1: atan2(1, cos ε).
        let expected = 1.0f64.atan2(OBL.to_radians().cos()).to_degrees();
        assert!((midheaven(45.0, OBL) - expected).abs() < 1e-9);
    }
}
