//! Krishnamurti Paddhati chart core.
//!
//! Computes sidereal house cusps from a birth instant and place, resolves
//! cusp and planet longitudes into sign/nakshatra/sub lords, and derives the
//! A/B/C/D significator tables per house and per planet.

pub mod angle;
pub mod ayanamsa;
pub mod chart;
pub mod diagnostics;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod kp;
pub mod report;
pub mod service;
pub mod time;

pub use angle::{normalize_degrees, parse_angle, to_dms, Dms};
pub use ayanamsa::{ayanamsa_offset, to_sidereal, Ayanamsa};
pub use chart::{analyze, compute_house_cusps, Chart, ChartAnalysis, ChartCalculator, ChartInput};
pub use diagnostics::{Diagnostics, Level, LogDiagnostics, NullDiagnostics, RecordingDiagnostics};
pub use ephemeris::{Angles, GeoPosition};
pub use error::ChartError;
pub use houses::{House, HouseCusps, HouseSystem, HouseTable, PlacidusCorrections};
pub use kp::{
    KpSubLordTable, Lord, LordshipResolver, LordshipTable, LordshipTriple, Planet, Sign,
    SignificatorTable,
};
pub use report::ChartReport;
pub use service::KpService;
pub use time::to_julian_day;
