//! The externally consumed chart record.

use crate::angle::to_dms;
use crate::chart::BasicInfo;
use crate::houses::{House, HouseTable};
use crate::kp::{
    HouseSignificators, LordshipTriple, Planet, PlanetSignificators, Sign, SignificatorTable,
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuspRow {
    pub house: House,
    /// Computed sidereal cusp as `DDDºMM'SS"`.
    pub longitude: String,
    pub sign: Sign,
    pub meaning: &'static str,
}

impl CuspRow {
    pub fn computed(house: House, longitude: f64) -> Self {
        Self {
            house,
            longitude: to_dms(longitude),
            sign: Sign::from_longitude(longitude),
            meaning: house.meaning(),
        }
    }
}

/// Cusps, lordships and both significator views for one chart.
///
/// A failed chart keeps the same shape: no cusp rows, every lordship
/// unresolved, every significator list empty, and `error` set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub basic_info: Option<BasicInfo>,
    pub house_cusps: Vec<CuspRow>,
    pub house_lordships: BTreeMap<House, LordshipTriple>,
    pub planet_lordships: BTreeMap<Planet, LordshipTriple>,
    pub house_significators: BTreeMap<House, HouseSignificators>,
    pub planet_significators: BTreeMap<Planet, PlanetSignificators>,
    pub error: Option<String>,
}

impl ChartReport {
    pub fn new(
        basic_info: BasicInfo,
        house_cusps: Vec<CuspRow>,
        house_lords: &HouseTable<LordshipTriple>,
        planet_lords: &BTreeMap<Planet, LordshipTriple>,
        significators: &SignificatorTable,
    ) -> Self {
        Self {
            basic_info: Some(basic_info),
            house_cusps,
            ..Self::from_tables(house_lords, planet_lords, significators)
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        let house_lords = HouseTable::from_fn(|_| LordshipTriple::UNRESOLVED);
        let planet_lords: BTreeMap<_, _> = Planet::ALL
            .into_iter()
            .map(|p| (p, LordshipTriple::UNRESOLVED))
            .collect();
        Self {
            error: Some(message.into()),
            ..Self::from_tables(&house_lords, &planet_lords, &SignificatorTable::empty())
        }
    }

    fn from_tables(
        house_lords: &HouseTable<LordshipTriple>,
        planet_lords: &BTreeMap<Planet, LordshipTriple>,
        significators: &SignificatorTable,
    ) -> Self {
        Self {
            basic_info: None,
            house_cusps: Vec::new(),
            house_lordships: house_lords.iter().map(|(h, t)| (h, *t)).collect(),
            planet_lordships: planet_lords.clone(),
            house_significators: significators
                .houses()
                .iter()
                .map(|(h, s)| (h, s.clone()))
                .collect(),
            planet_significators: significators.planets().clone(),
            error: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
