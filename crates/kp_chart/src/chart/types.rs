use crate::angle::{normalize_degrees, parse_angle};
use crate::ayanamsa::Ayanamsa;
use crate::diagnostics::Diagnostics;
use crate::ephemeris::{Angles, GeoPosition};
use crate::error::ChartError;
use crate::houses::{House, HouseCusps, HouseSystem};
use crate::kp::{parse_occupancy, Occupancy, Planet};
use crate::time::{parse_local_datetime, parse_time_zone};
use chrono::NaiveDateTime;
use chrono_tz::Tz;
use kp_config::ChartDefaults;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const TARGET: &str = "kp_chart::chart";

/// A chart request as received from the caller.
///
/// Every field is optional; missing selectors and coordinates are filled
/// from [`ChartDefaults`]. Only the birth instant has no default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    /// Local wall-clock time, `YYYY-MM-DDTHH:MM[:SS]`.
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub house_system: Option<String>,
    #[serde(default)]
    pub ayanamsa: Option<String>,
    /// Precomputed sidereal cusp strings (DMS) keyed by house number.
    #[serde(default)]
    pub house_angles: BTreeMap<u8, String>,
    /// Sidereal planet longitudes (DMS) keyed by any planet identifier.
    #[serde(default)]
    pub planet_angles: BTreeMap<String, String>,
    /// Comma-separated occupants keyed by house number.
    #[serde(default)]
    pub house_planets: BTreeMap<u8, String>,
}

/// An immutable chart: instant, place, selectors and optional planet data.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    local: NaiveDateTime,
    tz: Tz,
    position: GeoPosition,
    house_system: HouseSystem,
    ayanamsa: Ayanamsa,
    planets: BTreeMap<Planet, f64>,
    occupancy: Option<Occupancy>,
}

impl Chart {
    pub fn new(
        local: NaiveDateTime,
        timezone: &str,
        position: GeoPosition,
        house_system: HouseSystem,
        ayanamsa: Ayanamsa,
    ) -> Result<Self, ChartError> {
        Ok(Self {
            local,
            tz: parse_time_zone(timezone)?,
            position,
            house_system,
            ayanamsa,
            planets: BTreeMap::new(),
            occupancy: None,
        })
    }

    /// Attach sidereal planet longitudes, reduced to [0, 360).
    pub fn with_planets(mut self, planets: impl IntoIterator<Item = (Planet, f64)>) -> Self {
        self.planets = planets
            .into_iter()
            .map(|(planet, lon)| (planet, normalize_degrees(lon)))
            .collect();
        self
    }

    /// Attach caller-partitioned occupancy instead of deriving it from cusps.
    pub fn with_occupancy(mut self, occupancy: Occupancy) -> Self {
        self.occupancy = Some(occupancy);
        self
    }

    /// Build a chart from a request, filling gaps from `defaults`.
    ///
    /// Selector, zone, coordinate and date-time problems are errors. Malformed
    /// planet angles and unknown planet names are dropped with a warning.
    pub fn from_input(
        input: &ChartInput,
        defaults: &ChartDefaults,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Self, ChartError> {
        let datetime = input.datetime.as_deref().ok_or_else(|| ChartError::InvalidDateTime {
            input: String::new(),
            message: "birth date-time is required".to_string(),
        })?;
        let local = parse_local_datetime(datetime)?;
        let timezone = input.timezone.as_deref().unwrap_or(&defaults.timezone);
        let position = GeoPosition::new(
            input.latitude.unwrap_or(defaults.latitude),
            input.longitude.unwrap_or(defaults.longitude),
        )?;
        let house_system: HouseSystem = input
            .house_system
            .as_deref()
            .unwrap_or(&defaults.house_system)
            .parse()?;
        let ayanamsa: Ayanamsa = input
            .ayanamsa
            .as_deref()
            .unwrap_or(&defaults.ayanamsa)
            .parse()?;

        let mut planets = BTreeMap::new();
        for (name, angle) in &input.planet_angles {
            let planet = match name.parse::<Planet>() {
                Ok(planet) => planet,
                Err(_) => {
                    diagnostics.warn(TARGET, &format!("unknown planet {name:?} ignored"));
                    continue;
                }
            };
            match parse_angle(angle) {
                Ok(lon) if (0.0..360.0).contains(&lon) => {
                    planets.insert(planet, lon);
                }
                Ok(lon) => diagnostics.warn(
                    TARGET,
                    &format!("{planet}: {lon} outside [0, 360), lords unresolved"),
                ),
                Err(err) => diagnostics.warn(TARGET, &format!("{planet}: {err}")),
            }
        }

        let mut chart = Chart::new(local, timezone, position, house_system, ayanamsa)?
            .with_planets(planets);

        if !input.house_planets.is_empty() {
            let mut entries = Vec::with_capacity(input.house_planets.len());
            for (number, list) in &input.house_planets {
                match House::new(*number) {
                    Some(house) => entries.push((house, list.as_str())),
                    None => diagnostics.warn(
                        TARGET,
                        &format!("occupancy for house {number} ignored, houses run 1..12"),
                    ),
                }
            }
            chart = chart.with_occupancy(parse_occupancy(entries, diagnostics));
        }

        Ok(chart)
    }

    pub fn local_datetime(&self) -> NaiveDateTime {
        self.local
    }

    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    pub fn position(&self) -> GeoPosition {
        self.position
    }

    pub fn house_system(&self) -> HouseSystem {
        self.house_system
    }

    pub fn ayanamsa(&self) -> Ayanamsa {
        self.ayanamsa
    }

    pub fn planets(&self) -> &BTreeMap<Planet, f64> {
        &self.planets
    }

    pub fn occupancy(&self) -> Option<&Occupancy> {
        self.occupancy.as_ref()
    }
}

/// Echo of the chart's inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicInfo {
    pub datetime: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub house_system: HouseSystem,
    pub ayanamsa: Ayanamsa,
}

impl From<&Chart> for BasicInfo {
    fn from(chart: &Chart) -> Self {
        Self {
            datetime: chart.local.format("%Y-%m-%dT%H:%M:%S").to_string(),
            timezone: chart.tz.name().to_string(),
            latitude: chart.position.lat,
            longitude: chart.position.lon,
            house_system: chart.house_system,
            ayanamsa: chart.ayanamsa,
        }
    }
}

/// Everything the facade derives from one chart. No lordship resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAnalysis {
    pub basic_info: BasicInfo,
    pub angles: Angles,
    pub ayanamsa_offset: f64,
    pub house_cusps: HouseCusps,
    pub planet_positions: BTreeMap<Planet, f64>,
    pub occupancy: Occupancy,
}
