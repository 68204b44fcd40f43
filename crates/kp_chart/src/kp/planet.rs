//! The nine classical significators.

use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declaration order is the order in which the significator cascade scans planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

// (planet, id, two-letter code, Korean display name)
const PLANET_NAMES: &[(Planet, &str, &str, &str)] = &[
    (Planet::Sun, "sun", "Su", "태양"),
    (Planet::Moon, "moon", "Mo", "달"),
    (Planet::Mercury, "mercury", "Me", "수성"),
    (Planet::Venus, "venus", "Ve", "금성"),
    (Planet::Mars, "mars", "Ma", "화성"),
    (Planet::Jupiter, "jupiter", "Ju", "목성"),
    (Planet::Saturn, "saturn", "Sa", "토성"),
    (Planet::Rahu, "rahu", "Ra", "라후"),
    (Planet::Ketu, "ketu", "Ke", "케투"),
];

impl Planet {
    pub const ALL: [Planet; 9] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Rahu,
        Planet::Ketu,
    ];

    fn names(self) -> &'static (Planet, &'static str, &'static str, &'static str) {
        &PLANET_NAMES[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.names().1
    }

    pub fn abbreviation(self) -> &'static str {
        self.names().2
    }

    pub fn korean_name(self) -> &'static str {
        self.names().3
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Planet {
    type Err = ChartError;

    /// Accepts `sun`, `Su` or `태양` style identifiers, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        PLANET_NAMES
            .iter()
            .find(|(_, id, code, korean)| {
                id.eq_ignore_ascii_case(key) || code.eq_ignore_ascii_case(key) || *korean == key
            })
            .map(|(planet, _, _, _)| *planet)
            .ok_or_else(|| ChartError::parse(s, "unknown planet"))
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
