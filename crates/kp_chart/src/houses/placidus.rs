//! Approximate Placidus cusps.
//!
//! Houses 1, 4, 7 and 10 sit on the Ascendant, IC, Descendant and Midheaven.
//! The eight intermediate cusps are placed at one and two thirds of their
//! quadrant, along the shorter arc, plus an empirical latitude/obliquity
//! correction. This is not the semi-arc solution; the constants live in
//! [`PlacidusCorrections`] so they can be audited or replaced.

use crate::angle::{normalize_degrees, reduced_difference};
use kp_config::PlacidusSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FixedPoint {
    Asc,
    Ic,
    Dc,
    Mc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CuspPair {
    SecondEighth,
    ThirdNinth,
    FifthEleventh,
    SixthTwelfth,
}

/// One intermediate cusp: its quadrant, its step (1 or 2 thirds) and its pair.
struct IntermediateCusp {
    house: u8,
    from: FixedPoint,
    to: FixedPoint,
    step: u8,
    pair: CuspPair,
}

const INTERMEDIATE_CUSPS: [IntermediateCusp; 8] = [
    IntermediateCusp { house: 2, from: FixedPoint::Asc, to: FixedPoint::Ic, step: 1, pair: CuspPair::SecondEighth },
    IntermediateCusp { house: 3, from: FixedPoint::Asc, to: FixedPoint::Ic, step: 2, pair: CuspPair::ThirdNinth },
    IntermediateCusp { house: 5, from: FixedPoint::Ic, to: FixedPoint::Dc, step: 1, pair: CuspPair::FifthEleventh },
    IntermediateCusp { house: 6, from: FixedPoint::Ic, to: FixedPoint::Dc, step: 2, pair: CuspPair::SixthTwelfth },
    IntermediateCusp { house: 8, from: FixedPoint::Dc, to: FixedPoint::Mc, step: 1, pair: CuspPair::SecondEighth },
    IntermediateCusp { house: 9, from: FixedPoint::Dc, to: FixedPoint::Mc, step: 2, pair: CuspPair::ThirdNinth },
    IntermediateCusp { house: 11, from: FixedPoint::Mc, to: FixedPoint::Asc, step: 1, pair: CuspPair::FifthEleventh },
    IntermediateCusp { house: 12, from: FixedPoint::Mc, to: FixedPoint::Asc, step: 2, pair: CuspPair::SixthTwelfth },
];

/// Gain and per-pair multipliers of the correction term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacidusCorrections {
    pub gain: f64,
    pub houses_2_8: f64,
    pub houses_3_9: f64,
    pub houses_5_11: f64,
    pub houses_6_12: f64,
}

impl PlacidusCorrections {
    fn multiplier(&self, pair: CuspPair) -> f64 {
        match pair {
            CuspPair::SecondEighth => self.houses_2_8,
            CuspPair::ThirdNinth => self.houses_3_9,
            CuspPair::FifthEleventh => self.houses_5_11,
            CuspPair::SixthTwelfth => self.houses_6_12,
        }
    }
}

impl Default for PlacidusCorrections {
    fn default() -> Self {
        Self::from(&PlacidusSettings::default())
    }
}

impl From<&PlacidusSettings> for PlacidusCorrections {
    fn from(settings: &PlacidusSettings) -> Self {
        Self {
            gain: settings.correction_gain,
            houses_2_8: settings.houses_2_8,
            houses_3_9: settings.houses_3_9,
            houses_5_11: settings.houses_5_11,
            houses_6_12: settings.houses_6_12,
        }
    }
}

struct FixedPoints {
    asc: f64,
    ic: f64,
    dc: f64,
    mc: f64,
}

impl FixedPoints {
    fn new(asc: f64, mc: f64) -> Self {
        Self {
            asc,
            ic: normalize_degrees(mc + 180.0),
            dc: normalize_degrees(asc + 180.0),
            mc,
        }
    }

    fn get(&self, point: FixedPoint) -> f64 {
        match point {
            FixedPoint::Asc => self.asc,
            FixedPoint::Ic => self.ic,
            FixedPoint::Dc => self.dc,
            FixedPoint::Mc => self.mc,
        }
    }
}

/// Tropical cusps for houses 1..12.
pub fn placidus_cusps(
    asc: f64,
    mc: f64,
    lat: f64,
    obliquity: f64,
    corrections: &PlacidusCorrections,
) -> [f64; 12] {
    let points = FixedPoints::new(asc, mc);
    let mut cusps = [0.0; 12];
    cusps[0] = points.asc;
    cusps[3] = points.ic;
    cusps[6] = points.dc;
    cusps[9] = points.mc;

    // sin(lat)·sin(obl) is shared by every intermediate cusp.
    let tilt = lat.to_radians().sin() * obliquity.to_radians().sin();

    for cusp in &INTERMEDIATE_CUSPS {
        // Endpoints take a radians round trip before interpolation.
        let start = points.get(cusp.from).to_radians().to_degrees();
        let end = points.get(cusp.to).to_radians().to_degrees();
        let fraction = cusp.step as f64 / 3.0;

        let base = start + reduced_difference(start, end) * fraction;
        let correction = (tilt * (fraction * 90.0).to_radians().sin()).to_degrees()
            * corrections.gain
            * corrections.multiplier(cusp.pair);

        cusps[(cusp.house - 1) as usize] = normalize_degrees(base + correction);
    }

    cusps
}
