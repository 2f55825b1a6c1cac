use crate::aspects::{detect_time_lord_activations, AspectCalculator, DEFAULT_ORB_MULTIPLIER};
use crate::cdo::summary::summarize;
use crate::cdo::types::{CdoSummary, CosmicDataObject, PlanetPosition};
use crate::ephemeris::{validate_bodies, BodyPosition, ChartSnapshot};
use crate::error::ChartError;
use crate::knowledge::{KnowledgeBase, Remedy};
use crate::western::{
    is_afflicted, solar_proximity, DignitiesService, ProfectionCalculator, SectResolver, SolarProximity,
};
use crate::zodiac::is_node;
use chrono::{DateTime, NaiveDate, Utc};

/// Degrees from a sign boundary inside which the ascendant is on a cusp.
pub const DEFAULT_CUSP_THRESHOLD: f64 = 1.0;

/// Tunables for a CDO build. The defaults reproduce the traditional orbs
/// and a 1° cusp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildOptions {
    pub orb_multiplier: f64,
    pub cusp_threshold: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            orb_multiplier: DEFAULT_ORB_MULTIPLIER,
            cusp_threshold: DEFAULT_CUSP_THRESHOLD,
        }
    }
}

/// True when `degree` (within its sign) lies strictly inside `threshold` of
/// either sign boundary.
pub fn is_cusp(degree: f64, threshold: f64) -> bool {
    degree < threshold || degree > 30.0 - threshold
}

/// Assembles a [`CosmicDataObject`] from one chart snapshot.
pub struct CdoBuilder<'a> {
    knowledge: &'a KnowledgeBase,
    options: BuildOptions,
}

impl<'a> CdoBuilder<'a> {
    pub fn new(knowledge: &'a KnowledgeBase) -> Self {
        Self::with_options(knowledge, BuildOptions::default())
    }

    pub fn with_options(knowledge: &'a KnowledgeBase, options: BuildOptions) -> Self {
        Self { knowledge, options }
    }

    pub fn options(&self) -> BuildOptions {
        self.options
    }

    /// Build the CDO.
    ///
    /// Activations are only computed when `transits` is supplied. The
    /// snapshot (and transits) are validated first; a violation is returned
    /// as a [`ChartError`].
    pub fn build(
        &self,
        snapshot: &ChartSnapshot,
        birth_date: NaiveDate,
        reference: DateTime<Utc>,
        transits: Option<&[BodyPosition]>,
    ) -> Result<CosmicDataObject, ChartError> {
        snapshot.validate()?;
        if let Some(transits) = transits {
            validate_bodies(transits)?;
        }

        let profection = ProfectionCalculator::new(self.knowledge).profect(
            birth_date,
            reference.date_naive(),
            &snapshot.ascendant_sign,
        );
        let sect = SectResolver::new(self.knowledge).resolve(snapshot.is_day_chart);
        let is_cusp_ascendant = is_cusp(snapshot.ascendant_degree, self.options.cusp_threshold);

        let sun_longitude = snapshot.sun()?.longitude;
        let dignities = DignitiesService::new(self.knowledge);

        let mut planets = Vec::with_capacity(snapshot.planets.len());
        let mut afflicted_planets = Vec::new();

        for body in snapshot.planets.iter().filter(|b| !is_node(&b.name)) {
            let dignity_score = dignities.score(&body.name, &body.sign);

            let proximity = if body.name == "Sun" {
                SolarProximity::Clear
            } else {
                solar_proximity(body.longitude, sun_longitude)
            };

            if is_afflicted(dignity_score) {
                afflicted_planets.push(body.name.clone());
            }

            planets.push(PlanetPosition {
                planet: body.name.clone(),
                sign: body.sign.clone(),
                house: body.house,
                degree: body.longitude,
                sign_degree: body.sign_degree,
                speed: body.speed,
                is_retrograde: body.is_retrograde(),
                dignity_score,
                is_combust: proximity.is_combust(),
                is_cazimi: proximity.is_cazimi(),
            });
        }

        let aspects = AspectCalculator::new(self.knowledge).detect(&snapshot.planets, self.options.orb_multiplier);

        let time_lord_activations = match transits {
            Some(transits) => {
                detect_time_lord_activations(self.knowledge, &profection.time_lord, &snapshot.planets, transits)
            }
            None => Vec::new(),
        };

        // min_by_key keeps the first of equal minima, so ties go to snapshot order
        let primary_affliction = planets
            .iter()
            .filter(|p| is_afflicted(p.dignity_score))
            .min_by_key(|p| p.dignity_score)
            .map(|p| p.planet.clone());

        Ok(CosmicDataObject {
            sect,
            ascendant_sign: snapshot.ascendant_sign.clone(),
            ascendant_degree: snapshot.ascendant_degree,
            is_cusp_ascendant,
            profection_house: profection.house,
            time_lord: profection.time_lord,
            profection_theme: profection.theme,
            planets,
            aspects,
            time_lord_activations,
            afflicted_planets,
            primary_affliction,
        })
    }

    /// Summarize a CDO built against the same knowledge base.
    pub fn summarize(&self, cdo: &CosmicDataObject) -> CdoSummary {
        summarize(self.knowledge, cdo)
    }

    /// Remedy records for each afflicted planet, in afflicted-list order.
    /// Planets without a remedy entry are skipped.
    pub fn remedies_for_afflictions<'c>(&self, cdo: &'c CosmicDataObject) -> Vec<(&'c str, &'a Remedy)> {
        cdo.afflicted_planets
            .iter()
            .filter_map(|planet| {
                self.knowledge
                    .remedy(planet)
                    .map(|remedy| (planet.as_str(), remedy))
            })
            .collect()
    }
}
