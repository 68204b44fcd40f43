pub mod placidus;
pub mod types;

pub use placidus::PlacidusCorrections;
pub use types::{House, HouseCusps, HouseSystem, HouseTable};

use crate::angle::normalize_degrees;
use crate::ayanamsa::to_sidereal;
use crate::ephemeris::types::Angles;

/// Tropical cusps 1..12 for a house system.
pub fn tropical_cusps(
    system: HouseSystem,
    angles: &Angles,
    lat: f64,
    corrections: &PlacidusCorrections,
) -> [f64; 12] {
    match system {
        HouseSystem::Placidus => {
            placidus::placidus_cusps(angles.asc, angles.mc, lat, angles.obliquity, corrections)
        }
    }
}

/// Shift tropical cusps into the sidereal zodiac.
///
/// Houses 7 and 10 are rebuilt from the sidereal 1 and 4, so the angular
/// houses stay exact antipodal pairs after the subtraction.
pub fn sidereal_cusps(tropical: &[f64; 12], ayanamsa_offset: f64) -> HouseCusps {
    let mut cusps = tropical.map(|lon| to_sidereal(lon, ayanamsa_offset));
    cusps[6] = normalize_degrees(cusps[0] + 180.0);
    cusps[9] = normalize_degrees(cusps[3] + 180.0);
    HouseCusps::new(cusps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidereal_shift_keeps_antipodes_exact() {
        let tropical = [
            295.84, 339.1, 18.2, 47.37, 70.5, 91.8, 115.84, 159.1, 198.2, 227.37, 250.5, 271.8,
        ];
        let cusps = sidereal_cusps(&tropical, 23.85305);
        let h = |n| cusps.get(House::new(n).unwrap());
        assert_eq!(h(7), normalize_degrees(h(1) + 180.0));
        assert_eq!(h(10), normalize_degrees(h(4) + 180.0));
        assert!((h(2) - (339.1 - 23.85305)).abs() < 1e-9);
    }
}
