//! Time-lord activations: current transits aspecting the natal Lord of the Year.

use crate::aspects::calculator::{AspectCalculator, DEFAULT_ORB_MULTIPLIER};
use crate::aspects::types::AspectKind;
use crate::ephemeris::BodyPosition;
use crate::knowledge::KnowledgeBase;
use crate::zodiac::{angular_separation, round2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    High,
    Challenging,
    Supportive,
}

impl Intensity {
    /// Intensity depends only on the aspect type.
    pub fn for_aspect(kind: AspectKind) -> Self {
        match kind {
            AspectKind::Conjunction => Intensity::High,
            AspectKind::Square | AspectKind::Opposition => Intensity::Challenging,
            AspectKind::Trine | AspectKind::Sextile => Intensity::Supportive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLordActivation {
    pub transiting_planet: String,
    pub aspect_to_time_lord: AspectKind,
    pub orb: f64,
    /// True whenever the transiting body is moving at all; this does not
    /// look at whether the orb is actually closing.
    pub is_applying: bool,
    pub intensity: Intensity,
}

/// Find transits aspecting the time lord's natal position.
///
/// Returns an empty list when the time lord is not among `natal`. Orbs are
/// the knowledge-base orbs without any multiplier.
pub fn detect_time_lord_activations(
    knowledge: &KnowledgeBase,
    time_lord: &str,
    natal: &[BodyPosition],
    transits: &[BodyPosition],
) -> Vec<TimeLordActivation> {
    let natal_lord = match natal.iter().find(|b| b.name == time_lord) {
        Some(body) => body,
        None => return Vec::new(),
    };
    let calculator = AspectCalculator::new(knowledge);

    transits
        .iter()
        .filter(|transit| transit.name != time_lord)
        .filter_map(|transit| {
            let separation = angular_separation(natal_lord.longitude, transit.longitude);
            let matched = calculator.match_separation(separation, DEFAULT_ORB_MULTIPLIER)?;
            Some(TimeLordActivation {
                transiting_planet: transit.name.clone(),
                aspect_to_time_lord: matched.kind,
                orb: round2(matched.deviation),
                is_applying: transit.speed != 0.0,
                intensity: Intensity::for_aspect(matched.kind),
            })
        })
        .collect()
}
