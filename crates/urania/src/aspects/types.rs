use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five Ptolemaic aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

/// Default check order for aspect matching. The first definition whose orb
/// admits a separation wins, so this order is the tie-break.
pub const ASPECT_PRIORITY: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

impl AspectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Opposition => "opposition",
            AspectKind::Trine => "trine",
            AspectKind::Square => "square",
            AspectKind::Sextile => "sextile",
        }
    }

    /// Title-cased name, as used in rendered summaries ("Square").
    pub fn title(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Opposition => "Opposition",
            AspectKind::Trine => "Trine",
            AspectKind::Square => "Square",
            AspectKind::Sextile => "Sextile",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conjunction" => Ok(AspectKind::Conjunction),
            "opposition" => Ok(AspectKind::Opposition),
            "trine" => Ok(AspectKind::Trine),
            "square" => Ok(AspectKind::Square),
            "sextile" => Ok(AspectKind::Sextile),
            other => Err(format!("unknown aspect type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectNature {
    Hard,
    Soft,
    Neutral,
}

/// One row of the aspect table: exact angle, permitted orb, and nature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    /// Exact angle in degrees (0, 60, 90, 120, 180)
    pub angle: f64,
    /// Orb in degrees before any multiplier
    pub orb: f64,
    pub nature: AspectNature,
}

/// Core aspect information for one pair of longitudes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectCore {
    pub aspect_type: AspectKind,
    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub exact_angle: f64,
    /// Deviation from the exact angle, rounded to 0.01°
    pub orb: f64,
    pub is_applying: bool,
    pub nature: AspectNature,
}

/// An active aspect between two natal bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub planet1: String,
    pub planet2: String,
    pub aspect_type: AspectKind,
    /// Deviation from the exact angle, rounded to 0.01°
    pub orb: f64,
    /// Whether the aspect is applying (tightening over the next day)
    pub is_applying: bool,
    pub nature: AspectNature,
}

/// Result of matching a single separation against the aspect table.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectMatch {
    pub kind: AspectKind,
    pub angle: f64,
    /// Unrounded deviation from the exact angle
    pub deviation: f64,
    pub nature: AspectNature,
}
