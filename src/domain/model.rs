use crate::utils::error::{EngineError, Result};
use crate::utils::validation::{validate_birth_range, validate_finite, Validate};
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Celestial bodies tracked by the engine. Earth is never returned by a
/// position source; it is synthesized as the Sun's antipodal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Earth,
    Moon,
    NorthNode,
    SouthNode,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Body {
    /// The bodies a position source must report, in fixed order.
    pub const PROVIDED: [Body; 9] = [
        Body::Sun,
        Body::Moon,
        Body::NorthNode,
        Body::SouthNode,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Earth => "Earth",
            Body::Moon => "Moon",
            Body::NorthNode => "North Node",
            Body::SouthNode => "South Node",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
        }
    }
}

/// Immutable birth input. Constructed once per request, validated before
/// the pipeline runs, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
    pub latitude: f64,
    pub longitude: f64,
}

impl BirthData {
    fn civil_date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            EngineError::ValidationError {
                field: "date".to_string(),
                value: format!("{:04}-{:02}-{:02}", self.year, self.month, self.day),
                reason: "Not a valid calendar date".to_string(),
            }
        })
    }

    fn civil_time(&self) -> Result<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second).ok_or_else(|| {
            EngineError::ValidationError {
                field: "time".to_string(),
                value: format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second),
                reason: "Not a valid time of day".to_string(),
            }
        })
    }

    /// Julian day including the fractional day from the birth time.
    ///
    /// Only meaningful after `validate()` has passed.
    pub fn julian_day(&self) -> Result<f64> {
        let date = self.civil_date()?;
        self.civil_time()?;
        // JD of 0001-01-01 00:00 UTC is 1721425.5; num_days_from_ce is 1 there.
        let jd_midnight = 1_721_424.5 + f64::from(date.num_days_from_ce());
        let day_fraction =
            f64::from(self.hour * 3600 + self.minute * 60 + self.second) / 86_400.0;
        Ok(jd_midnight + day_fraction)
    }

    /// Stable key for the result cache. Float coordinates are keyed by
    /// their bit patterns so equal inputs always collide.
    pub fn cache_key(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.year.hash(&mut hasher);
        self.month.hash(&mut hasher);
        self.day.hash(&mut hasher);
        self.hour.hash(&mut hasher);
        self.minute.hash(&mut hasher);
        self.second.hash(&mut hasher);
        self.latitude.to_bits().hash(&mut hasher);
        self.longitude.to_bits().hash(&mut hasher);
        hasher.finish()
    }
}

impl Validate for BirthData {
    fn validate(&self) -> Result<()> {
        self.civil_date()?;
        self.civil_time()?;
        validate_finite("latitude", self.latitude)?;
        validate_finite("longitude", self.longitude)?;
        validate_birth_range("latitude", self.latitude, -90.0, 90.0)?;
        validate_birth_range("longitude", self.longitude, -180.0, 180.0)?;
        Ok(())
    }
}

/// One body's ecliptic longitude, as reported by a position source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialPosition {
    pub body: Body,
    pub longitude: f64,
}

/// The 9 energy centers, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Center {
    Head,
    Ajna,
    Throat,
    Identity,
    Heart,
    Sacral,
    Spleen,
    SolarPlexus,
    Root,
}

impl Center {
    pub const ALL: [Center; 9] = [
        Center::Head,
        Center::Ajna,
        Center::Throat,
        Center::Identity,
        Center::Heart,
        Center::Sacral,
        Center::Spleen,
        Center::SolarPlexus,
        Center::Root,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Center::Head => "Head",
            Center::Ajna => "Ajna",
            Center::Throat => "Throat",
            Center::Identity => "Identity",
            Center::Heart => "Heart",
            Center::Sacral => "Sacral",
            Center::Spleen => "Spleen",
            Center::SolarPlexus => "Solar Plexus",
            Center::Root => "Root",
        }
    }
}

/// One activation produced by encoding a single body's longitude.
/// Several bodies may activate the same gate number; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateActivation {
    pub gate: u8,
    pub line: u8,
    pub color: u8,
    pub tone: u8,
    pub base: u8,
    pub body: Body,
    pub name: String,
}

/// An active channel: both endpoint gates present in the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub gates: (u8, u8),
    pub centers: (Center, Center),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterState {
    pub center: Center,
    pub defined: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyType {
    Generator,
    #[serde(rename = "Manifesting Generator")]
    ManifestingGenerator,
    Manifestor,
    Projector,
    Reflector,
}

impl EnergyType {
    pub fn label(&self) -> &'static str {
        match self {
            EnergyType::Generator => "Generator",
            EnergyType::ManifestingGenerator => "Manifesting Generator",
            EnergyType::Manifestor => "Manifestor",
            EnergyType::Projector => "Projector",
            EnergyType::Reflector => "Reflector",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Authority {
    Emotional,
    Sacral,
    Splenic,
    Ego,
    #[serde(rename = "Self-Projected")]
    SelfProjected,
    Environmental,
}

/// Connectivity class of the defined-center subgraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Definition {
    #[serde(rename = "No Definition")]
    None,
    #[serde(rename = "Single Definition")]
    Single,
    #[serde(rename = "Split Definition")]
    Split,
    #[serde(rename = "Triple Split Definition")]
    TripleSplit,
    #[serde(rename = "Quadruple Split Definition")]
    QuadrupleSplit,
}

impl Definition {
    pub fn label(&self) -> &'static str {
        match self {
            Definition::None => "No Definition",
            Definition::Single => "Single Definition",
            Definition::Split => "Split Definition",
            Definition::TripleSplit => "Triple Split Definition",
            Definition::QuadrupleSplit => "Quadruple Split Definition",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncarnationCross {
    pub name: String,
    pub description: String,
}

/// The fully assembled chart. Immutable and entirely derived: the same
/// `BirthData` always produces an identical chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignChart {
    #[serde(rename = "type")]
    pub energy_type: EnergyType,
    pub strategy: String,
    pub authority: Authority,
    pub profile: String,
    pub definition: Definition,
    pub incarnation_cross: IncarnationCross,
    pub gates: Vec<GateActivation>,
    pub channels: Vec<Channel>,
    pub centers: Vec<CenterState>,
    /// True when the positions came from the deterministic approximation
    /// rather than the remote service.
    pub approximate: bool,
}
