use crate::angle::{normalize_degrees, reduced_difference};
use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// A house number, 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct House(u8);

impl House {
    pub const ALL: [House; 12] = [
        House(1),
        House(2),
        House(3),
        House(4),
        House(5),
        House(6),
        House(7),
        House(8),
        House(9),
        House(10),
        House(11),
        House(12),
    ];

    pub fn new(number: u8) -> Option<Self> {
        (1..=12).contains(&number).then_some(House(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position, for array storage.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The following house, 12 wrapping to 1.
    pub fn next(self) -> House {
        House(self.0 % 12 + 1)
    }

    pub fn opposite(self) -> House {
        House((self.0 + 5) % 12 + 1)
    }

    /// Traditional significations of the house.
    pub fn meaning(self) -> &'static str {
        match self.0 {
            1 => "self, appearance, temperament, first impressions",
            2 => "wealth, family, speech, food, values",
            3 => "siblings, courage, communication, short journeys",
            4 => "mother, home, property, education, inner peace",
            5 => "children, creativity, romance, speculation, intellect",
            6 => "illness, enemies, service, daily work, pets",
            7 => "spouse, partnership, marriage, open enemies",
            8 => "death, transformation, mysteries, others' wealth, longevity",
            9 => "religion, philosophy, long journeys, father, fortune",
            10 => "career, reputation, social status, government",
            11 => "friends, income, hopes, wishes, social networks",
            _ => "loss, expenses, foreign lands, spirituality, liberation, seclusion",
        }
    }
}

impl TryFrom<u8> for House {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        House::new(value).ok_or_else(|| format!("house number out of range 1..=12: {value}"))
    }
}

impl From<House> for u8 {
    fn from(house: House) -> u8 {
        house.0
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One value per house, stored by house order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseTable<T>([T; 12]);

impl<T> HouseTable<T> {
    pub fn from_fn(f: impl FnMut(House) -> T) -> Self {
        HouseTable(House::ALL.map(f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (House, &T)> {
        House::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> &[T; 12] {
        &self.0
    }
}

impl<T: Default> Default for HouseTable<T> {
    fn default() -> Self {
        HouseTable::from_fn(|_| T::default())
    }
}

impl<T> Index<House> for HouseTable<T> {
    type Output = T;

    fn index(&self, house: House) -> &T {
        &self.0[house.index()]
    }
}

impl<T> IndexMut<House> for HouseTable<T> {
    fn index_mut(&mut self, house: House) -> &mut T {
        &mut self.0[house.index()]
    }
}

/// Sidereal house cusps, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusps {
    cusps: [f64; 12],
}

impl HouseCusps {
    pub(crate) fn new(cusps: [f64; 12]) -> Self {
        Self { cusps }
    }

    pub fn get(&self, house: House) -> f64 {
        self.cusps[house.index()]
    }

    /// `(house, longitude)` pairs in house order.
    pub fn iter(&self) -> impl Iterator<Item = (House, f64)> + '_ {
        House::ALL.into_iter().map(move |h| (h, self.get(h)))
    }

    pub fn as_array(&self) -> &[f64; 12] {
        &self.cusps
    }

    /// True when cusps advance in zodiacal order (cusp 2 ahead of cusp 1).
    pub fn is_ascending(&self) -> bool {
        reduced_difference(self.cusps[0], self.cusps[1]) >= 0.0
    }

    /// House whose arc `[cusp(h), cusp(h+1))` holds the longitude.
    ///
    /// Arcs are walked in the direction the cusps run, which is backwards
    /// along the zodiac for the approximate Placidus output. Falls back to
    /// the house with the nearest preceding cusp when the arcs do not
    /// partition the circle.
    pub fn house_of(&self, longitude: f64) -> House {
        let lon = normalize_degrees(longitude);
        let ascending = self.is_ascending();
        let arc = |from: f64, to: f64| {
            if ascending {
                normalize_degrees(to - from)
            } else {
                normalize_degrees(from - to)
            }
        };

        for house in House::ALL {
            let start = self.get(house);
            if arc(start, lon) < arc(start, self.get(house.next())) {
                return house;
            }
        }
        House::ALL
            .into_iter()
            .min_by(|a, b| arc(self.get(*a), lon).total_cmp(&arc(self.get(*b), lon)))
            .unwrap_or(House(1))
    }
}

/// House-system selector. Only the approximate Placidus system is available;
/// every other code is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseSystem {
    #[serde(rename = "P")]
    Placidus,
}

const HOUSE_SYSTEMS: &[(&str, &str, HouseSystem)] = &[("P", "placidus", HouseSystem::Placidus)];

impl HouseSystem {
    pub fn code(self) -> &'static str {
        match self {
            HouseSystem::Placidus => "P",
        }
    }
}

impl FromStr for HouseSystem {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        HOUSE_SYSTEMS
            .iter()
            .find(|(code, name, _)| *code == key || name.eq_ignore_ascii_case(key))
            .map(|(_, _, system)| *system)
            .ok_or_else(|| ChartError::InvalidHouseSystem {
                system: s.to_string(),
                valid: HOUSE_SYSTEMS.iter().map(|(code, _, _)| code.to_string()).collect(),
            })
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_numbers_wrap_within_one_to_twelve() {
        assert!(House::new(0).is_none());
        assert!(House::new(13).is_none());
        let h12 = House::new(12).unwrap();
        assert_eq!(h12.next().number(), 1);
        assert_eq!(House::new(1).unwrap().opposite().number(), 7);
        assert_eq!(House::new(10).unwrap().opposite().number(), 4);
        assert_eq!(h12.opposite().number(), 6);
    }

    #[test]
    fn house_serializes_as_number() {
        let h = House::new(8).unwrap();
        assert_eq!(serde_json::to_string(&h).unwrap(), "8");
        assert_eq!(serde_json::from_str::<House>("8").unwrap(), h);
        assert!(serde_json::from_str::<House>("13").is_err());
    }

    #[test]
    fn house_system_codes() {
        assert_eq!("P".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
        assert_eq!("placidus".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
        for code in ["E", "equal", "K", "W", ""] {
            match code.parse::<HouseSystem>() {
                Err(ChartError::InvalidHouseSystem { system, valid }) => {
                    assert_eq!(system, code);
                    assert_eq!(valid, vec!["P"]);
                }
                other => panic!("{code:?} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn house_of_follows_ascending_arcs() {
        let cusps = HouseCusps::new([
            350.0, 20.0, 50.0, 80.0, 110.0, 140.0, 170.0, 200.0, 230.0, 260.0, 290.0, 320.0,
        ]);
        assert!(cusps.is_ascending());
        assert_eq!(cusps.house_of(355.0).number(), 1);
        assert_eq!(cusps.house_of(5.0).number(), 1);
        assert_eq!(cusps.house_of(20.0).number(), 2);
        assert_eq!(cusps.house_of(349.9).number(), 12);
    }

    #[test]
    fn house_of_follows_descending_arcs() {
        // Seoul 2012-01-19 11:21 sidereal cusps: they decrease house by house.
        let cusps = HouseCusps::new([
            172.7272, 156.9498, 143.9128, 75.5871, 59.0355, 46.7073, 352.7272, 336.9498,
            323.9128, 255.5871, 239.0355, 226.7073,
        ]);
        assert!(!cusps.is_ascending());
        for house in House::ALL {
            assert_eq!(cusps.house_of(cusps.get(house)), house);
        }
        assert_eq!(cusps.house_of(165.0).number(), 1);
        assert_eq!(cusps.house_of(172.8).number(), 12);
        assert_eq!(cusps.house_of(100.0).number(), 3);
        assert_eq!(cusps.house_of(0.5).number(), 6);
        assert_eq!(cusps.house_of(353.0).number(), 6);
        assert_eq!(cusps.house_of(352.0).number(), 7);
    }
}
