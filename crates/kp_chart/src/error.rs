use thiserror::Error;

/// Errors that abort a chart computation.
///
/// Lordship resolution never produces one of these; an unusable angle there
/// degrades to [`crate::kp::Lord::Unresolved`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Unknown time zone: {zone}")]
    TimeZone { zone: String },
    #[error("Cannot parse angle {input:?}: {message}")]
    Parse { input: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Invalid ayanamsa: {ayanamsa}. Valid ayanamsas: {valid:?}")]
    InvalidAyanamsa { ayanamsa: String, valid: Vec<String> },
    #[error("Invalid birth date-time {input:?}: {message}")]
    InvalidDateTime { input: String, message: String },
    #[error("Invalid location: latitude {latitude}, longitude {longitude}")]
    InvalidLocation { latitude: f64, longitude: f64 },
}

impl ChartError {
    pub(crate) fn parse(input: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            message: message.into(),
        }
    }
}
