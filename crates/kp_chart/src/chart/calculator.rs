//! House-cusp pipeline: local time, JD, obliquity, LST, Asc/MC, cusps, ayanamsa.

use super::types::{BasicInfo, Chart, ChartAnalysis};
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::ephemeris::{ascendant, local_sidereal_time, midheaven, obliquity, Angles};
use crate::houses::{sidereal_cusps, tropical_cusps, HouseCusps, PlacidusCorrections};
use crate::kp::{Occupancy, Planet};
use crate::time::{julian_day, localize, Localization};
use std::collections::BTreeMap;
use std::sync::Arc;

const TARGET: &str = "kp_chart::calculator";

/// Stateless apart from its correction constants and diagnostics sink.
#[derive(Clone)]
pub struct ChartCalculator {
    corrections: PlacidusCorrections,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Default for ChartCalculator {
    fn default() -> Self {
        Self::new(PlacidusCorrections::default(), Arc::new(LogDiagnostics))
    }
}

impl ChartCalculator {
    pub fn new(corrections: PlacidusCorrections, diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self {
            corrections,
            diagnostics,
        }
    }

    pub fn corrections(&self) -> &PlacidusCorrections {
        &self.corrections
    }

    /// Julian Day (UT) of the chart's instant.
    pub fn julian_day(&self, chart: &Chart) -> f64 {
        let (utc, localization) = localize(chart.local_datetime(), chart.time_zone());
        match localization {
            Localization::Unique => {}
            Localization::Ambiguous => self.diagnostics.warn(
                TARGET,
                &format!(
                    "{} is ambiguous in {}, using standard time",
                    chart.local_datetime(),
                    chart.time_zone().name()
                ),
            ),
            Localization::Gap => self.diagnostics.warn(
                TARGET,
                &format!(
                    "{} does not exist in {}, using the pre-transition offset",
                    chart.local_datetime(),
                    chart.time_zone().name()
                ),
            ),
        }
        let jd = julian_day(utc);
        self.diagnostics
            .debug(TARGET, &format!("utc={} jd={jd:.6}", utc.to_rfc3339()));
        jd
    }

    /// Tropical obliquity, LST, Ascendant and Midheaven.
    pub fn compute_angles(&self, chart: &Chart) -> Angles {
        let jd_ut = self.julian_day(chart);
        let position = chart.position();
        let obl = obliquity(jd_ut);
        let lst = local_sidereal_time(jd_ut, position.lon);
        let angles = Angles {
            jd_ut,
            obliquity: obl,
            lst,
            asc: ascendant(lst, position.lat, obl),
            mc: midheaven(lst, obl),
        };
        self.diagnostics.debug(
            TARGET,
            &format!(
                "obliquity={:.6} lst={:.6} asc={:.6} mc={:.6}",
                angles.obliquity, angles.lst, angles.asc, angles.mc
            ),
        );
        angles
    }

    fn cusps_from_angles(&self, chart: &Chart, angles: &Angles) -> (HouseCusps, f64) {
        let tropical = tropical_cusps(
            chart.house_system(),
            angles,
            chart.position().lat,
            &self.corrections,
        );
        let offset = chart.ayanamsa().offset(angles.jd_ut);
        self.diagnostics.debug(
            TARGET,
            &format!("ayanamsa {}={offset:.6}", chart.ayanamsa()),
        );
        (sidereal_cusps(&tropical, offset), offset)
    }

    /// Sidereal cusps for houses 1..12.
    ///
    /// Zone and selector validation happen when the [`Chart`] is built, so the
    /// pipeline itself cannot fail.
    pub fn compute_house_cusps(&self, chart: &Chart) -> HouseCusps {
        let angles = self.compute_angles(chart);
        self.cusps_from_angles(chart, &angles).0
    }

    /// Caller-supplied sidereal planet longitudes.
    pub fn get_planet_positions(&self, chart: &Chart) -> BTreeMap<Planet, f64> {
        chart.planets().clone()
    }

    /// Supplied occupancy, or one derived from planet longitudes and cusps.
    pub fn occupancy(&self, chart: &Chart, cusps: &HouseCusps) -> Occupancy {
        if let Some(supplied) = chart.occupancy() {
            return supplied.clone();
        }
        let mut occupancy = Occupancy::default();
        for (planet, lon) in chart.planets() {
            occupancy[cusps.house_of(*lon)].push(*planet);
        }
        occupancy
    }

    pub fn analyze(&self, chart: &Chart) -> ChartAnalysis {
        let angles = self.compute_angles(chart);
        let (house_cusps, ayanamsa_offset) = self.cusps_from_angles(chart, &angles);
        let occupancy = self.occupancy(chart, &house_cusps);
        ChartAnalysis {
            basic_info: BasicInfo::from(chart),
            angles,
            ayanamsa_offset,
            house_cusps,
            planet_positions: self.get_planet_positions(chart),
            occupancy,
        }
    }
}

/// [`ChartCalculator::compute_house_cusps`] with default corrections.
pub fn compute_house_cusps(chart: &Chart) -> HouseCusps {
    ChartCalculator::default().compute_house_cusps(chart)
}

/// [`ChartCalculator::analyze`] with default corrections.
pub fn analyze(chart: &Chart) -> ChartAnalysis {
    ChartCalculator::default().analyze(chart)
}
