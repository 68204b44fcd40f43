//! Sidereal zodiac signs and their traditional rulers.

use super::planet::Planet;
use crate::angle::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const SIGN_SPAN: f64 = 30.0;

const SIGNS: [(Sign, &str, Planet); 12] = [
    (Sign::Aries, "Aries", Planet::Mars),
    (Sign::Taurus, "Taurus", Planet::Venus),
    (Sign::Gemini, "Gemini", Planet::Mercury),
    (Sign::Cancer, "Cancer", Planet::Moon),
    (Sign::Leo, "Leo", Planet::Sun),
    (Sign::Virgo, "Virgo", Planet::Mercury),
    (Sign::Libra, "Libra", Planet::Venus),
    (Sign::Scorpio, "Scorpio", Planet::Mars),
    (Sign::Sagittarius, "Sagittarius", Planet::Jupiter),
    (Sign::Capricorn, "Capricorn", Planet::Saturn),
    (Sign::Aquarius, "Aquarius", Planet::Saturn),
    (Sign::Pisces, "Pisces", Planet::Jupiter),
];

impl Sign {
    pub fn from_index(index: usize) -> Sign {
        SIGNS[index % 12].0
    }

    pub fn from_longitude(longitude: f64) -> Sign {
        Sign::from_index((normalize_degrees(longitude) / SIGN_SPAN) as usize)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        SIGNS[self.index()].1
    }

    /// Traditional (seven-planet) ruler.
    pub fn lord(self) -> Planet {
        SIGNS[self.index()].2
    }

    pub fn start(self) -> f64 {
        self.index() as f64 * SIGN_SPAN
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traditional_rulers() {
        assert_eq!(Sign::Aries.lord(), Planet::Mars);
        assert_eq!(Sign::Cancer.lord(), Planet::Moon);
        assert_eq!(Sign::Scorpio.lord(), Planet::Mars);
        assert_eq!(Sign::Aquarius.lord(), Planet::Saturn);
        assert_eq!(Sign::Pisces.lord(), Planet::Jupiter);
    }

    #[test]
    fn sign_from_longitude() {
        assert_eq!(Sign::from_longitude(0.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(29.999), Sign::Aries);
        assert_eq!(Sign::from_longitude(30.0), Sign::Taurus);
        assert_eq!(Sign::from_longitude(353.0661), Sign::Pisces);
        assert_eq!(Sign::from_longitude(-5.0), Sign::Pisces);
        assert_eq!(Sign::from_longitude(720.0), Sign::Aries);
    }
}
