use crate::aspects::{Aspect, AspectNature, TimeLordActivation};
use crate::cdo::types::{CdoSummary, CosmicDataObject};
use crate::knowledge::KnowledgeBase;

/// "Mars Square Saturn (Applying)"
pub fn render_aspect(aspect: &Aspect) -> String {
    format!(
        "{} {} {} ({})",
        aspect.planet1,
        aspect.aspect_type.title(),
        aspect.planet2,
        if aspect.is_applying { "Applying" } else { "Separating" }
    )
}

/// "Saturn transiting square your Time Lord Mercury"
pub fn render_activation(activation: &TimeLordActivation, time_lord: &str) -> String {
    format!(
        "{} transiting {} your Time Lord {}",
        activation.transiting_planet, activation.aspect_to_time_lord, time_lord
    )
}

/// Reduce a CDO to the handful of facts injected into the card prompt.
pub fn summarize(knowledge: &KnowledgeBase, cdo: &CosmicDataObject) -> CdoSummary {
    let major_aspect = cdo
        .aspects
        .iter()
        .find(|a| a.nature == AspectNature::Hard)
        .map(render_aspect);

    let time_lord_activation = cdo
        .time_lord_activations
        .first()
        .map(|a| render_activation(a, &cdo.time_lord));

    let dignity_warning = cdo.primary_affliction.as_deref().and_then(|planet| {
        knowledge
            .remedy(planet)
            .map(|remedy| format!("{} afflicted: {}", planet, remedy.shadow_warning))
    });

    CdoSummary {
        sect: cdo.sect.sect.as_str().to_string(),
        ascendant: format!("{} at {:.0}°", cdo.ascendant_sign, cdo.ascendant_degree),
        is_cusp: cdo.is_cusp_ascendant,
        time_lord: cdo.time_lord.clone(),
        profection_house: cdo.profection_house,
        profection_theme: cdo.profection_theme.clone(),
        major_aspect,
        time_lord_activation,
        dignity_warning,
        malefic_severity: cdo.sect.malefic_severity.as_str().to_string(),
    }
}
