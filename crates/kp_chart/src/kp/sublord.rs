//! Built-in KP sub-lord table.
//!
//! Each 13°20' nakshatra is divided into nine subs proportional to the
//! Vimshottari years of their lords (120 in total), starting from the
//! nakshatra's own lord. Subs that straddle a sign boundary are split in two,
//! giving 249 divisions. Boundaries are kept in whole arcseconds so every
//! division edge is exact.

use super::lordship::{LordshipTable, RawLordship};
use super::planet::Planet;
use super::sign::Sign;
use serde::Serialize;

const ARCSEC_PER_DEGREE: f64 = 3600.0;
const SIGN_ARCSEC: u32 = 30 * 3600;
pub const NAKSHATRA_ARCSEC: u32 = 48_000;
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;
const VIMSHOTTARI_TOTAL_YEARS: u32 = 120;

pub const VIMSHOTTARI_SEQUENCE: [(Planet, u32); 9] = [
    (Planet::Ketu, 7),
    (Planet::Venus, 20),
    (Planet::Sun, 6),
    (Planet::Moon, 10),
    (Planet::Mars, 7),
    (Planet::Rahu, 18),
    (Planet::Jupiter, 16),
    (Planet::Saturn, 19),
    (Planet::Mercury, 17),
];

pub const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// One row of the sub-lord table: `[start, end)` in sidereal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubDivision {
    pub start: f64,
    pub end: f64,
    pub sign: Sign,
    pub nakshatra: &'static str,
    pub nakshatra_lord: Planet,
    pub sub_lord: Planet,
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: u32,
    end: u32,
    nakshatra: usize,
    sub_lord: Planet,
}

impl Span {
    fn to_division(self) -> SubDivision {
        SubDivision {
            start: self.start as f64 / ARCSEC_PER_DEGREE,
            end: self.end as f64 / ARCSEC_PER_DEGREE,
            sign: Sign::from_index((self.start / SIGN_ARCSEC) as usize),
            nakshatra: NAKSHATRA_NAMES[self.nakshatra],
            nakshatra_lord: VIMSHOTTARI_SEQUENCE[self.nakshatra % 9].0,
            sub_lord: self.sub_lord,
        }
    }
}

fn build_spans() -> Vec<Span> {
    let mut spans = Vec::with_capacity(249);
    for nakshatra in 0..27usize {
        let mut start = nakshatra as u32 * NAKSHATRA_ARCSEC;
        for step in 0..9 {
            let (sub_lord, years) = VIMSHOTTARI_SEQUENCE[(nakshatra + step) % 9];
            let end = start + NAKSHATRA_ARCSEC * years / VIMSHOTTARI_TOTAL_YEARS;
            let sign_end = (start / SIGN_ARCSEC + 1) * SIGN_ARCSEC;
            if start < sign_end && sign_end < end {
                spans.push(Span {
                    start,
                    end: sign_end,
                    nakshatra,
                    sub_lord,
                });
                spans.push(Span {
                    start: sign_end,
                    end,
                    nakshatra,
                    sub_lord,
                });
            } else {
                spans.push(Span {
                    start,
                    end,
                    nakshatra,
                    sub_lord,
                });
            }
            start = end;
        }
    }
    spans
}

lazy_static::lazy_static! {
    static ref SPANS: Vec<Span> = build_spans();
    static ref DIVISIONS: Vec<SubDivision> = SPANS.iter().map(|s| s.to_division()).collect();
}

/// The KP 249-division table, usable as the resolver's lookup collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct KpSubLordTable;

impl KpSubLordTable {
    pub fn new() -> Self {
        Self
    }

    pub fn divisions(&self) -> &'static [SubDivision] {
        &DIVISIONS
    }

    /// Division holding a sidereal longitude; `None` outside [0, 360).
    pub fn division_at(&self, sidereal_degree: f64) -> Option<&'static SubDivision> {
        if !sidereal_degree.is_finite() || !(0.0..360.0).contains(&sidereal_degree) {
            return None;
        }
        let arcsec = sidereal_degree * ARCSEC_PER_DEGREE;
        let idx = SPANS.partition_point(|span| (span.end as f64) <= arcsec);
        DIVISIONS.get(idx)
    }
}

impl LordshipTable for KpSubLordTable {
    fn lookup(&self, sidereal_degree: f64) -> Option<RawLordship> {
        let division = self.division_at(sidereal_degree)?;
        Some(RawLordship {
            sign_lord: division.sign.lord().abbreviation().to_string(),
            nakshatra_lord: division.nakshatra_lord.abbreviation().to_string(),
            sub_lord: division.sub_lord.abbreviation().to_string(),
        })
    }
}
