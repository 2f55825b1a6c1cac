use crate::aspects::types::{Aspect, AspectCore, AspectMatch};
use crate::ephemeris::BodyPosition;
use crate::knowledge::KnowledgeBase;
use crate::zodiac::{angular_separation, is_node, round2};

/// Orb multiplier that applies the knowledge-base orbs unchanged.
pub const DEFAULT_ORB_MULTIPLIER: f64 = 1.0;

/// Aspect calculator
pub struct AspectCalculator<'a> {
    knowledge: &'a KnowledgeBase,
}

impl<'a> AspectCalculator<'a> {
    /// Create a new aspect calculator
    pub fn new(knowledge: &'a KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Compute aspects between every unordered pair of bodies.
    ///
    /// Nodes are skipped. Pairs are visited in input order, so the output
    /// order follows the snapshot's body order.
    pub fn detect(&self, bodies: &[BodyPosition], orb_multiplier: f64) -> Vec<Aspect> {
        let mut aspects = Vec::new();

        for (i, p1) in bodies.iter().enumerate() {
            for p2 in &bodies[i + 1..] {
                if is_node(&p1.name) || is_node(&p2.name) {
                    continue;
                }

                if let Some(core) = self.calculate_aspect(
                    p1.longitude,
                    p2.longitude,
                    p1.speed,
                    p2.speed,
                    orb_multiplier,
                ) {
                    aspects.push(Aspect {
                        planet1: p1.name.clone(),
                        planet2: p2.name.clone(),
                        aspect_type: core.aspect_type,
                        orb: core.orb,
                        is_applying: core.is_applying,
                        nature: core.nature,
                    });
                }
            }
        }

        aspects
    }

    /// Match a separation against the aspect table in priority order.
    /// The first definition whose (scaled) orb admits it wins.
    pub fn match_separation(&self, separation: f64, orb_multiplier: f64) -> Option<AspectMatch> {
        self.knowledge
            .aspect_definitions()
            .iter()
            .find_map(|definition| {
                let deviation = (separation - definition.angle).abs();
                if deviation <= definition.orb * orb_multiplier {
                    Some(AspectMatch {
                        kind: definition.kind,
                        angle: definition.angle,
                        deviation,
                        nature: definition.nature,
                    })
                } else {
                    None
                }
            })
    }

    /// Calculate the aspect (if any) between two longitudes using planet speeds
    pub fn calculate_aspect(
        &self,
        lon1: f64,
        lon2: f64,
        speed1: f64,
        speed2: f64,
        orb_multiplier: f64,
    ) -> Option<AspectCore> {
        let matched = self.match_separation(angular_separation(lon1, lon2), orb_multiplier)?;
        Some(AspectCore {
            aspect_type: matched.kind,
            exact_angle: matched.angle,
            orb: round2(matched.deviation),
            is_applying: is_aspect_applying(lon1, lon2, speed1, speed2, matched.angle),
            nature: matched.nature,
        })
    }
}

/// Determine if an aspect is applying (approaching exact) or separating.
///
/// Both bodies are projected one day forward by their own speed; the aspect
/// applies only if the projected deviation from `aspect_angle` is strictly
/// smaller than the current one.
pub fn is_aspect_applying(lon1: f64, lon2: f64, speed1: f64, speed2: f64, aspect_angle: f64) -> bool {
    let current_orb = (angular_separation(lon1, lon2) - aspect_angle).abs();

    let future_lon1 = (lon1 + speed1).rem_euclid(360.0);
    let future_lon2 = (lon2 + speed2).rem_euclid(360.0);
    let future_orb = (angular_separation(future_lon1, future_lon2) - aspect_angle).abs();

    future_orb < current_orb
}
