//! Essential dignity scoring for Western astrology.
//!
//! Classifies a planet's sign as domicile, exaltation, detriment, fall, or
//! peregrine and maps that to a score in [-5, 5].

use crate::knowledge::KnowledgeBase;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DignityType {
    Domicile,
    Exaltation,
    Detriment,
    Fall,
    Peregrine,
}

/// Planets at or below this score count as afflicted.
pub const AFFLICTION_THRESHOLD: i8 = -2;

/// Score for a planet with no essential dignity (and for unknown planets).
pub const PEREGRINE_SCORE: i8 = 0;

pub fn is_afflicted(score: i8) -> bool {
    score <= AFFLICTION_THRESHOLD
}

pub struct DignitiesService<'a> {
    knowledge: &'a KnowledgeBase,
}

impl<'a> DignitiesService<'a> {
    pub fn new(knowledge: &'a KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Classify `planet` in `sign`. Checks domicile, exaltation, detriment,
    /// then fall, returning the first match.
    pub fn classify(&self, planet: &str, sign: &str) -> DignityType {
        let entry = match self.knowledge.dignities_of(planet) {
            Some(entry) => entry,
            None => return DignityType::Peregrine,
        };
        let holds = |signs: &[String]| signs.iter().any(|s| s == sign);

        if holds(&entry.domicile) {
            DignityType::Domicile
        } else if holds(&entry.exaltation) {
            DignityType::Exaltation
        } else if holds(&entry.detriment) {
            DignityType::Detriment
        } else if holds(&entry.fall) {
            DignityType::Fall
        } else {
            DignityType::Peregrine
        }
    }

    /// Dignity score for `planet` in `sign`. Planets missing from the table
    /// score as peregrine.
    pub fn score(&self, planet: &str, sign: &str) -> i8 {
        let scores = &self.knowledge.dignity_scores;
        match self.classify(planet, sign) {
            DignityType::Domicile => scores.domicile,
            DignityType::Exaltation => scores.exaltation,
            DignityType::Detriment => scores.detriment,
            DignityType::Fall => scores.fall,
            DignityType::Peregrine => PEREGRINE_SCORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_sun() {
        let kb = KnowledgeBase::builtin();
        let service = DignitiesService::new(&kb);
        assert_eq!(service.score("Sun", "Leo"), 5);
        assert_eq!(service.score("Sun", "Aries"), 4);
        assert_eq!(service.score("Sun", "Aquarius"), -4);
        assert_eq!(service.score("Sun", "Libra"), -5);
        assert_eq!(service.score("Sun", "Gemini"), 0);
    }

    #[test]
    fn test_domicile_checked_before_exaltation() {
        let kb = KnowledgeBase::builtin();
        let service = DignitiesService::new(&kb);
        // Mercury rules and is exalted in Virgo
        assert_eq!(service.classify("Mercury", "Virgo"), DignityType::Domicile);
        // Pisces is both detriment and fall for Mercury
        assert_eq!(service.score("Mercury", "Pisces"), -4);
    }

    #[test]
    fn test_unknown_planet_is_peregrine() {
        let kb = KnowledgeBase::builtin();
        let service = DignitiesService::new(&kb);
        assert_eq!(service.score("Chiron", "Aries"), PEREGRINE_SCORE);
        assert_eq!(service.classify("Pluto", "Scorpio"), DignityType::Peregrine);
    }

    #[test]
    fn test_affliction_threshold() {
        assert!(is_afflicted(-2));
        assert!(is_afflicted(-5));
        assert!(!is_afflicted(-1));
        assert!(!is_afflicted(0));
    }
}
