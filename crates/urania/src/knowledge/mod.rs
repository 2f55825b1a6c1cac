//! Static reference data for the calculators.
//!
//! A [`KnowledgeBase`] is built once at startup (from the JSON files in
//! `knowledge/` or from the built-in tables) and then shared read-only by
//! reference with every calculator.

mod builtin;
pub mod loader;

use crate::aspects::types::AspectDefinition;
use crate::zodiac::SIGN_NAMES;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sign lists for one planet's essential dignities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DignityEntry {
    #[serde(default)]
    pub domicile: Vec<String>,
    #[serde(default)]
    pub exaltation: Vec<String>,
    #[serde(default)]
    pub detriment: Vec<String>,
    #[serde(default)]
    pub fall: Vec<String>,
}

/// Score awarded for each essential dignity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DignityScores {
    #[serde(default = "default_domicile_score")]
    pub domicile: i8,
    #[serde(default = "default_exaltation_score")]
    pub exaltation: i8,
    #[serde(default = "default_detriment_score")]
    pub detriment: i8,
    #[serde(default = "default_fall_score")]
    pub fall: i8,
}

fn default_domicile_score() -> i8 {
    5
}

fn default_exaltation_score() -> i8 {
    4
}

fn default_detriment_score() -> i8 {
    -4
}

fn default_fall_score() -> i8 {
    -5
}

impl Default for DignityScores {
    fn default() -> Self {
        Self {
            domicile: default_domicile_score(),
            exaltation: default_exaltation_score(),
            detriment: default_detriment_score(),
            fall: default_fall_score(),
        }
    }
}

/// Benefic and malefic roles for one sect. Missing roles fall back to the
/// traditional assignment in the sect resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectRoles {
    #[serde(default)]
    pub benefic_of_sect: Option<String>,
    #[serde(default)]
    pub malefic_of_sect: Option<String>,
    #[serde(default)]
    pub malefic_contrary_to_sect: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectTable {
    #[serde(default)]
    pub diurnal: Option<SectRoles>,
    #[serde(default)]
    pub nocturnal: Option<SectRoles>,
}

/// Remedy record for an afflicted planet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remedy {
    #[serde(default)]
    pub shadow_warning: String,
    #[serde(default)]
    pub traditional_remedy: String,
    #[serde(default)]
    pub modern_action: String,
}

/// Immutable reference tables shared by all calculators.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    /// Sign names in zodiacal order; always twelve entries
    pub zodiac_signs: Vec<String>,
    /// Sign -> ruling planet
    pub planetary_rulers: HashMap<String, String>,
    /// Planet -> dignity sign lists
    pub dignity_table: HashMap<String, DignityEntry>,
    pub dignity_scores: DignityScores,
    /// Aspect definitions in match priority order
    pub aspects: Vec<AspectDefinition>,
    pub sect: SectTable,
    /// Planet -> remedy record
    pub remedies: HashMap<String, Remedy>,
}

impl KnowledgeBase {
    /// The built-in tables, used when no knowledge files are available.
    pub fn builtin() -> Self {
        builtin::BUILTIN.clone()
    }

    /// Index of `sign` in the zodiac ordering.
    pub fn sign_index(&self, sign: &str) -> Option<usize> {
        self.zodiac_signs.iter().position(|s| s == sign)
    }

    /// Sign name at `index` (wrapping modulo 12).
    pub fn sign_name(&self, index: usize) -> &str {
        self.zodiac_signs
            .get(index % 12)
            .map(String::as_str)
            .unwrap_or(SIGN_NAMES[index % 12])
    }

    pub fn ruler_of(&self, sign: &str) -> Option<&str> {
        self.planetary_rulers.get(sign).map(String::as_str)
    }

    pub fn dignities_of(&self, planet: &str) -> Option<&DignityEntry> {
        self.dignity_table.get(planet)
    }

    pub fn aspect_definitions(&self) -> &[AspectDefinition] {
        &self.aspects
    }

    pub fn remedy(&self, planet: &str) -> Option<&Remedy> {
        self.remedies.get(planet)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
