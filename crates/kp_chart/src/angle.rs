//! Degree arithmetic and sexagesimal (DMS) strings.
//!
//! Angles travel between the chart pipeline and its callers as strings like
//! `353º03'58"`. Formatting always uses the `º` glyph; parsing also accepts `°`.

use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical degree glyph used on output.
pub const DEGREE_SIGN: char = 'º';

lazy_static::lazy_static! {
    // Degree glyphs, minute/second marks and whitespace all separate components.
    static ref COMPONENT_SEPARATORS: regex::Regex =
        regex::Regex::new(r#"[°º'"\s]+"#).expect("static separator pattern");
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    // A tiny negative input can round up to exactly 360.0 above.
    if normalized >= 360.0 {
        normalized = 0.0;
    }
    normalized
}

/// Signed shortest difference `to - from`, in (-180, 180].
pub fn reduced_difference(from: f64, to: f64) -> f64 {
    let mut diff = normalize_degrees(to - from);
    if diff > 180.0 {
        diff -= 360.0;
    }
    diff
}

/// An angle split into whole degrees, arcminutes and rounded arcseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: u8,
}

impl Dms {
    /// Decompose an angle after reducing it to [0, 360).
    ///
    /// Arcseconds round half-to-even; a rounded 60″ carries into the minutes,
    /// 60′ carries into the degrees, and 360° wraps to 0°.
    pub fn from_degrees(value: f64) -> Self {
        let deg = normalize_degrees(value);
        let whole = deg.trunc();
        let minutes_f = (deg - whole) * 60.0;
        let mut minutes = minutes_f.trunc() as u32;
        let mut seconds = ((minutes_f - minutes as f64) * 60.0).round_ties_even() as u32;
        let mut degrees = whole as u32;

        if seconds >= 60 {
            seconds = 0;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes = 0;
            degrees += 1;
        }

        Self {
            degrees: (degrees % 360) as u16,
            minutes: minutes as u8,
            seconds: seconds as u8,
        }
    }

    pub fn to_degrees(self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03}{}{:02}'{:02}\"",
            self.degrees, DEGREE_SIGN, self.minutes, self.seconds
        )
    }
}

/// Format an angle as `DDDºMM'SS"`.
pub fn to_dms(value: f64) -> String {
    Dms::from_degrees(value).to_string()
}

/// Parse a DMS string back to decimal degrees.
///
/// Accepts `°` or `º`, and missing minute or second components (taken as 0).
/// The result is not reduced to [0, 360); range checks belong to the caller.
pub fn parse_angle(input: &str) -> Result<f64, ChartError> {
    let mut parts = COMPONENT_SEPARATORS
        .split(input.trim())
        .filter(|p| !p.is_empty());

    let degrees = match parts.next() {
        Some(token) => parse_component(input, token)?,
        None => return Err(ChartError::parse(input, "no degree component")),
    };
    let minutes = parts
        .next()
        .map(|token| parse_component(input, token))
        .transpose()?
        .unwrap_or(0.0);
    let seconds = parts
        .next()
        .map(|token| parse_component(input, token))
        .transpose()?
        .unwrap_or(0.0);

    Ok(degrees + minutes / 60.0 + seconds / 3600.0)
}

fn parse_component(input: &str, token: &str) -> Result<f64, ChartError> {
    let value: f64 = token
        .parse()
        .map_err(|_| ChartError::parse(input, format!("{token:?} is not a number")))?;
    if !value.is_finite() {
        return Err(ChartError::parse(input, format!("{token:?} is not finite")));
    }
    Ok(value)
}
