//! A/B/C/D significator cascade.
//!
//! For house h: A is the sign lord of its cusp, B the planets whose nakshatra
//! lord is A, C the planets occupying h, and D the planets whose nakshatra
//! lord is any member of C. The per-planet view is built by transposing the
//! per-house view, never computed on its own.

use super::lordship::{Lord, LordshipTriple};
use super::planet::Planet;
use crate::diagnostics::Diagnostics;
use crate::houses::{House, HouseTable};
use serde::Serialize;
use std::collections::BTreeMap;

const TARGET: &str = "kp_chart::significators";

/// Planets physically present in each house, in listing order.
pub type Occupancy = HouseTable<Vec<Planet>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    A,
    B,
    C,
    D,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::A, Category::B, Category::C, Category::D];
}

/// The four category lists of one house.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HouseSignificators {
    pub a: Vec<Planet>,
    pub b: Vec<Planet>,
    pub c: Vec<Planet>,
    pub d: Vec<Planet>,
}

impl HouseSignificators {
    pub fn category(&self, category: Category) -> &[Planet] {
        match category {
            Category::A => &self.a,
            Category::B => &self.b,
            Category::C => &self.c,
            Category::D => &self.d,
        }
    }
}

/// Houses, ascending, in which a planet appears for each category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanetSignificators {
    pub a: Vec<House>,
    pub b: Vec<House>,
    pub c: Vec<House>,
    pub d: Vec<House>,
}

impl PlanetSignificators {
    pub fn category(&self, category: Category) -> &[House] {
        match category {
            Category::A => &self.a,
            Category::B => &self.b,
            Category::C => &self.c,
            Category::D => &self.d,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut Vec<House> {
        match category {
            Category::A => &mut self.a,
            Category::B => &mut self.b,
            Category::C => &mut self.c,
            Category::D => &mut self.d,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignificatorTable {
    houses: HouseTable<HouseSignificators>,
    planets: BTreeMap<Planet, PlanetSignificators>,
}

impl SignificatorTable {
    /// Every house and planet present, every category empty.
    pub fn empty() -> Self {
        Self::from_houses(HouseTable::default())
    }

    /// Run the cascade. Planets missing from `planet_lords` contribute nothing.
    pub fn derive(
        house_lords: &HouseTable<LordshipTriple>,
        planet_lords: &BTreeMap<Planet, LordshipTriple>,
        occupancy: &Occupancy,
    ) -> Self {
        let ruled_by = |lord: Planet| -> Vec<Planet> {
            Planet::ALL
                .into_iter()
                .filter(|p| {
                    planet_lords
                        .get(p)
                        .is_some_and(|t| t.nakshatra_lord == Lord::Planet(lord))
                })
                .collect()
        };

        let houses = HouseTable::from_fn(|house| {
            let sign_lord = house_lords[house].sign_lord.planet();
            let a: Vec<Planet> = sign_lord.into_iter().collect();
            let b = sign_lord.map(&ruled_by).unwrap_or_default();
            let c = occupancy[house].clone();

            let mut d: Vec<Planet> = Vec::new();
            for occupant in &c {
                for planet in ruled_by(*occupant) {
                    if !d.contains(&planet) {
                        d.push(planet);
                    }
                }
            }

            HouseSignificators { a, b, c, d }
        });

        Self::from_houses(houses)
    }

    fn from_houses(houses: HouseTable<HouseSignificators>) -> Self {
        let mut planets: BTreeMap<Planet, PlanetSignificators> = Planet::ALL
            .into_iter()
            .map(|p| (p, PlanetSignificators::default()))
            .collect();

        for (house, sigs) in houses.iter() {
            for category in Category::ALL {
                for planet in sigs.category(category) {
                    let list = planets.entry(*planet).or_default().category_mut(category);
                    if !list.contains(&house) {
                        list.push(house);
                    }
                }
            }
        }

        Self { houses, planets }
    }

    pub fn house(&self, house: House) -> &HouseSignificators {
        &self.houses[house]
    }

    pub fn planet(&self, planet: Planet) -> &PlanetSignificators {
        // The transpose seeds all nine planets.
        &self.planets[&planet]
    }

    pub fn houses(&self) -> &HouseTable<HouseSignificators> {
        &self.houses
    }

    pub fn planets(&self) -> &BTreeMap<Planet, PlanetSignificators> {
        &self.planets
    }
}

/// Parse one comma-separated occupant list such as `"달, 태양"`.
///
/// Blank entries and `-` are skipped; unknown names are dropped with a warning.
pub fn parse_occupants(input: &str, diagnostics: &dyn Diagnostics) -> Vec<Planet> {
    let mut occupants = Vec::new();
    for name in input.split(',').map(str::trim) {
        if name.is_empty() || name == "-" {
            continue;
        }
        match name.parse::<Planet>() {
            Ok(planet) if !occupants.contains(&planet) => occupants.push(planet),
            Ok(_) => {}
            Err(_) => diagnostics.warn(TARGET, &format!("unknown occupant {name:?} dropped")),
        }
    }
    occupants
}

/// Occupancy from per-house strings; houses missing from the input are empty.
pub fn parse_occupancy<'a>(
    entries: impl IntoIterator<Item = (House, &'a str)>,
    diagnostics: &dyn Diagnostics,
) -> Occupancy {
    let mut occupancy = Occupancy::default();
    for (house, list) in entries {
        occupancy[house] = parse_occupants(list, diagnostics);
    }
    occupancy
}
