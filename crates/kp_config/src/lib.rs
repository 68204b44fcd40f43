use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Request defaults applied to chart inputs that omit a field.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDefaults {
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub house_system: String,
    pub ayanamsa: String,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            timezone: "Asia/Seoul".to_string(),
            latitude: 37.38,
            longitude: 127.1188,
            house_system: "P".to_string(),
            ayanamsa: "LAHIRI".to_string(),
        }
    }
}

/// Empirical constants of the approximate Placidus cusp formula.
///
/// Each intermediate cusp gets `degrees(sin(lat)·sin(obl)·sin(90°·f)) · gain · multiplier`
/// added to its linear quadrant interpolation. The multipliers are per opposite-house pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacidusSettings {
    pub correction_gain: f64,
    pub houses_2_8: f64,
    pub houses_3_9: f64,
    pub houses_5_11: f64,
    pub houses_6_12: f64,
}

impl Default for PlacidusSettings {
    fn default() -> Self {
        Self {
            correction_gain: 2.0,
            houses_2_8: 1.2,
            houses_3_9: 1.5,
            houses_5_11: 0.8,
            houses_6_12: 1.1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KpSettings {
    pub defaults: ChartDefaults,
    pub placidus: PlacidusSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ChartDefaultsToml {
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    house_system: Option<String>,
    #[serde(default)]
    ayanamsa: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PlacidusToml {
    #[serde(default)]
    correction_gain: Option<f64>,
    #[serde(default)]
    houses_2_8: Option<f64>,
    #[serde(default)]
    houses_3_9: Option<f64>,
    #[serde(default)]
    houses_5_11: Option<f64>,
    #[serde(default)]
    houses_6_12: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    defaults: Option<ChartDefaultsToml>,
    #[serde(default)]
    placidus: Option<PlacidusToml>,
}

pub const CONFIG_ENV_VAR: &str = "KP_CONFIG";

const SEARCH_PATHS: &[&str] = &["configs/kp.toml", "../../configs/kp.toml"];

impl KpSettings {
    /// Parse settings from TOML text. Missing tables and keys keep their defaults.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let root: RootConfigToml = toml::from_str(text)
            .map_err(|e| anyhow::anyhow!("Failed to parse kp settings: {e}"))?;

        let base = ChartDefaults::default();
        let defaults = match root.defaults {
            Some(d) => ChartDefaults {
                timezone: d.timezone.unwrap_or(base.timezone),
                latitude: d.latitude.unwrap_or(base.latitude),
                longitude: d.longitude.unwrap_or(base.longitude),
                house_system: d.house_system.unwrap_or(base.house_system),
                ayanamsa: d.ayanamsa.unwrap_or(base.ayanamsa),
            },
            None => base,
        };

        let base = PlacidusSettings::default();
        let placidus = match root.placidus {
            Some(p) => PlacidusSettings {
                correction_gain: p.correction_gain.unwrap_or(base.correction_gain),
                houses_2_8: p.houses_2_8.unwrap_or(base.houses_2_8),
                houses_3_9: p.houses_3_9.unwrap_or(base.houses_3_9),
                houses_5_11: p.houses_5_11.unwrap_or(base.houses_5_11),
                houses_6_12: p.houses_6_12.unwrap_or(base.houses_6_12),
            },
            None => base,
        };

        validate(&defaults, &placidus)?;
        Ok(Self { defaults, placidus })
    }
}

fn validate(defaults: &ChartDefaults, placidus: &PlacidusSettings) -> anyhow::Result<()> {
    if !(-90.0..=90.0).contains(&defaults.latitude) {
        anyhow::bail!("defaults.latitude out of range [-90, 90]: {}", defaults.latitude);
    }
    if !(-180.0..=180.0).contains(&defaults.longitude) {
        anyhow::bail!("defaults.longitude out of range [-180, 180]: {}", defaults.longitude);
    }
    let constants = [
        ("correction_gain", placidus.correction_gain),
        ("houses_2_8", placidus.houses_2_8),
        ("houses_3_9", placidus.houses_3_9),
        ("houses_5_11", placidus.houses_5_11),
        ("houses_6_12", placidus.houses_6_12),
    ];
    for (name, value) in constants {
        if !value.is_finite() {
            anyhow::bail!("placidus.{name} must be a finite number, got {value}");
        }
    }
    Ok(())
}

/// Read and parse a settings file at an explicit path.
pub fn load_settings_from(path: &Path) -> anyhow::Result<KpSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    KpSettings::from_toml_str(&text)
}

/// Locate the settings file: `$KP_CONFIG` first, then the usual relative paths.
/// Returns built-in defaults when no file exists. A file that exists but fails to
/// parse is an error.
pub fn load_settings() -> anyhow::Result<KpSettings> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return load_settings_from(Path::new(&path));
    }
    for p in SEARCH_PATHS {
        let path = Path::new(p);
        if path.exists() {
            return load_settings_from(path);
        }
    }
    Ok(KpSettings::default())
}
