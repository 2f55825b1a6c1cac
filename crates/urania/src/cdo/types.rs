use crate::aspects::{Aspect, TimeLordActivation};
use crate::western::SectInfo;
use serde::{Deserialize, Serialize};

/// Position and state of a single planet in the CDO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: String,
    pub sign: String,
    /// Whole-sign house (1-12)
    pub house: u8,
    /// Absolute ecliptic longitude (0-360)
    pub degree: f64,
    /// Degree within the sign (0-30)
    pub sign_degree: f64,
    /// Daily motion in degrees (negative = retrograde)
    pub speed: f64,
    pub is_retrograde: bool,
    /// +5 domicile, +4 exaltation, -4 detriment, -5 fall, 0 peregrine
    pub dignity_score: i8,
    pub is_combust: bool,
    pub is_cazimi: bool,
}

/// The Cosmic Data Object: everything the card writer needs about one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmicDataObject {
    pub sect: SectInfo,
    pub ascendant_sign: String,
    pub ascendant_degree: f64,
    /// Ascendant within the cusp threshold of a sign boundary
    pub is_cusp_ascendant: bool,

    pub profection_house: u8,
    /// Lord of the Year
    pub time_lord: String,
    pub profection_theme: String,

    pub planets: Vec<PlanetPosition>,
    pub aspects: Vec<Aspect>,
    pub time_lord_activations: Vec<TimeLordActivation>,

    /// Planets with dignity score <= -2, in snapshot order
    pub afflicted_planets: Vec<String>,
    /// The most afflicted planet, if any
    pub primary_affliction: Option<String>,
}

impl CosmicDataObject {
    pub fn planet(&self, name: &str) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.planet == name)
    }
}

/// Compact projection of a CDO for prompt injection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdoSummary {
    pub sect: String,
    /// e.g. "Virgo at 16°"
    pub ascendant: String,
    pub is_cusp: bool,
    pub time_lord: String,
    pub profection_house: u8,
    pub profection_theme: String,
    /// e.g. "Mars Square Saturn (Applying)"
    pub major_aspect: Option<String>,
    /// e.g. "Saturn transiting square your Time Lord Mercury"
    pub time_lord_activation: Option<String>,
    pub dignity_warning: Option<String>,
    pub malefic_severity: String,
}
