//! Resolving sidereal angles into (sign, nakshatra, sub) lord triples.
//!
//! The lookup table is an external collaborator behind [`LordshipTable`]. Its
//! identifiers are free-form strings; the resolver normalizes them into
//! [`Planet`]s and degrades anything it cannot read into [`Lord::Unresolved`].

use super::planet::Planet;
use crate::angle::parse_angle;
use crate::diagnostics::Diagnostics;
use serde::{Serialize, Serializer};
use std::fmt;

const TARGET: &str = "kp_chart::lordship";

/// Lords as reported by a lookup table, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLordship {
    pub sign_lord: String,
    pub nakshatra_lord: String,
    pub sub_lord: String,
}

/// Read-only lookup keyed by sidereal degree in [0, 360).
///
/// Implementations are shared across threads while charts are computed.
pub trait LordshipTable: Send + Sync {
    fn lookup(&self, sidereal_degree: f64) -> Option<RawLordship>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lord {
    Planet(Planet),
    #[default]
    Unresolved,
}

impl Lord {
    pub fn planet(self) -> Option<Planet> {
        match self {
            Lord::Planet(p) => Some(p),
            Lord::Unresolved => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, Lord::Planet(_))
    }
}

impl fmt::Display for Lord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lord::Planet(p) => write!(f, "{p}"),
            Lord::Unresolved => f.write_str("-"),
        }
    }
}

impl Serialize for Lord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct LordshipTriple {
    pub sign_lord: Lord,
    pub nakshatra_lord: Lord,
    pub sub_lord: Lord,
}

impl LordshipTriple {
    pub const UNRESOLVED: LordshipTriple = LordshipTriple {
        sign_lord: Lord::Unresolved,
        nakshatra_lord: Lord::Unresolved,
        sub_lord: Lord::Unresolved,
    };
}

pub struct LordshipResolver<'a> {
    table: &'a dyn LordshipTable,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> LordshipResolver<'a> {
    pub fn new(table: &'a dyn LordshipTable, diagnostics: &'a dyn Diagnostics) -> Self {
        Self { table, diagnostics }
    }

    /// Resolve a sidereal angle. Non-finite or out-of-range input is unresolved.
    pub fn resolve(&self, angle: f64) -> LordshipTriple {
        if !angle.is_finite() || !(0.0..360.0).contains(&angle) {
            self.diagnostics
                .warn(TARGET, &format!("angle {angle} outside [0, 360), lords unresolved"));
            return LordshipTriple::UNRESOLVED;
        }
        let Some(raw) = self.table.lookup(angle) else {
            self.diagnostics
                .warn(TARGET, &format!("no table entry for {angle}, lords unresolved"));
            return LordshipTriple::UNRESOLVED;
        };
        LordshipTriple {
            sign_lord: self.normalize(&raw.sign_lord),
            nakshatra_lord: self.normalize(&raw.nakshatra_lord),
            sub_lord: self.normalize(&raw.sub_lord),
        }
    }

    /// Resolve a DMS angle string; a malformed string is unresolved, not an error.
    pub fn resolve_str(&self, input: &str) -> LordshipTriple {
        match parse_angle(input) {
            Ok(angle) => self.resolve(angle),
            Err(err) => {
                self.diagnostics.warn(TARGET, &err.to_string());
                LordshipTriple::UNRESOLVED
            }
        }
    }

    fn normalize(&self, identifier: &str) -> Lord {
        let trimmed = identifier.trim();
        if trimmed.is_empty() || trimmed == "-" {
            return Lord::Unresolved;
        }
        match trimmed.parse::<Planet>() {
            Ok(planet) => Lord::Planet(planet),
            Err(_) => {
                self.diagnostics
                    .warn(TARGET, &format!("unrecognized lord identifier {trimmed:?}"));
                Lord::Unresolved
            }
        }
    }
}
