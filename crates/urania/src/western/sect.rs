//! Sect: day charts and night charts assign different benefic and malefic
//! roles, which changes how harshly Saturn is read.

use crate::knowledge::{KnowledgeBase, SectRoles};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sect {
    Diurnal,
    Nocturnal,
}

impl Sect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sect::Diurnal => "Diurnal",
            Sect::Nocturnal => "Nocturnal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaleficSeverity {
    Constructive,
    Challenging,
    Difficult,
}

impl MaleficSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaleficSeverity::Constructive => "constructive",
            MaleficSeverity::Challenging => "challenging",
            MaleficSeverity::Difficult => "difficult",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectInfo {
    pub is_day_chart: bool,
    pub sect: Sect,
    pub benefic_of_sect: String,
    pub malefic_of_sect: String,
    pub malefic_contrary_to_sect: String,
    pub malefic_severity: MaleficSeverity,
}

/// Traditional roles: (benefic of sect, malefic of sect, malefic contrary to sect).
pub const DIURNAL_DEFAULTS: (&str, &str, &str) = ("Jupiter", "Saturn", "Mars");
pub const NOCTURNAL_DEFAULTS: (&str, &str, &str) = ("Venus", "Mars", "Saturn");

pub struct SectResolver<'a> {
    knowledge: &'a KnowledgeBase,
}

impl<'a> SectResolver<'a> {
    pub fn new(knowledge: &'a KnowledgeBase) -> Self {
        Self { knowledge }
    }

    pub fn resolve(&self, is_day_chart: bool) -> SectInfo {
        let (sect, roles, defaults, malefic_severity) = if is_day_chart {
            (
                Sect::Diurnal,
                self.knowledge.sect.diurnal.as_ref(),
                DIURNAL_DEFAULTS,
                // Saturn in its own sect is more manageable
                MaleficSeverity::Constructive,
            )
        } else {
            (
                Sect::Nocturnal,
                self.knowledge.sect.nocturnal.as_ref(),
                NOCTURNAL_DEFAULTS,
                MaleficSeverity::Difficult,
            )
        };

        let roles: SectRoles = roles.cloned().unwrap_or_default();

        SectInfo {
            is_day_chart,
            sect,
            benefic_of_sect: roles.benefic_of_sect.unwrap_or_else(|| defaults.0.to_string()),
            malefic_of_sect: roles.malefic_of_sect.unwrap_or_else(|| defaults.1.to_string()),
            malefic_contrary_to_sect: roles
                .malefic_contrary_to_sect
                .unwrap_or_else(|| defaults.2.to_string()),
            malefic_severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::SectTable;

    #[test]
    fn test_day_chart() {
        let kb = KnowledgeBase::builtin();
        let info = SectResolver::new(&kb).resolve(true);
        assert_eq!(info.sect, Sect::Diurnal);
        assert_eq!(info.malefic_severity, MaleficSeverity::Constructive);
        assert_eq!(info.benefic_of_sect, "Jupiter");
        assert_eq!(info.malefic_of_sect, "Saturn");
        assert_eq!(info.malefic_contrary_to_sect, "Mars");
    }

    #[test]
    fn test_night_chart() {
        let kb = KnowledgeBase::builtin();
        let info = SectResolver::new(&kb).resolve(false);
        assert_eq!(info.sect, Sect::Nocturnal);
        assert_eq!(info.malefic_severity, MaleficSeverity::Difficult);
        assert_eq!(info.benefic_of_sect, "Venus");
        assert_eq!(info.malefic_contrary_to_sect, "Saturn");
    }

    #[test]
    fn test_missing_table_uses_sect_defaults() {
        let mut kb = KnowledgeBase::builtin();
        kb.sect = SectTable::default();
        let night = SectResolver::new(&kb).resolve(false);
        assert_eq!(
            (night.benefic_of_sect.as_str(), night.malefic_of_sect.as_str(), night.malefic_contrary_to_sect.as_str()),
            NOCTURNAL_DEFAULTS
        );
        let day = SectResolver::new(&kb).resolve(true);
        assert_eq!(day.benefic_of_sect, "Jupiter");
    }

    #[test]
    fn test_serialized_labels() {
        let kb = KnowledgeBase::builtin();
        let value = serde_json::to_value(SectResolver::new(&kb).resolve(true)).unwrap();
        assert_eq!(value["sect"], "Diurnal");
        assert_eq!(value["malefic_severity"], "constructive");
    }
}
