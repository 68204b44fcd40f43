use crate::error::ChartError;
use serde::{Deserialize, Serialize};

/// Geographic position, degrees. East longitude is positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPosition {
    pub fn new(lat: f64, lon: f64) -> Result<Self, ChartError> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if !valid {
            return Err(ChartError::InvalidLocation {
                latitude: lat,
                longitude: lon,
            });
        }
        Ok(Self { lat, lon })
    }
}

/// Intermediate quantities of the house pipeline, all tropical degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Angles {
    pub jd_ut: f64,
    pub obliquity: f64,
    pub lst: f64,
    pub asc: f64,
    pub mc: f64,
}

impl Angles {
    pub fn ic(&self) -> f64 {
        crate::angle::normalize_degrees(self.mc + 180.0)
    }

    pub fn dc(&self) -> f64 {
        crate::angle::normalize_degrees(self.asc + 180.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(GeoPosition::new(37.38, 127.1188).is_ok());
        assert!(GeoPosition::new(90.0, -180.0).is_ok());
        assert!(matches!(
            GeoPosition::new(90.5, 0.0),
            Err(ChartError::InvalidLocation { .. })
        ));
        assert!(GeoPosition::new(0.0, 181.0).is_err());
        assert!(GeoPosition::new(f64::NAN, 0.0).is_err());
    }
}
