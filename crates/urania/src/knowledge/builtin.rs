//! Built-in reference tables used whenever a knowledge file is missing or
//! unreadable. They mirror the shipped `knowledge/*.json` files.

use super::{DignityEntry, DignityScores, KnowledgeBase, Remedy, SectRoles, SectTable};
use crate::aspects::types::{AspectDefinition, AspectKind, AspectNature};
use crate::zodiac::SIGN_NAMES;
use std::collections::HashMap;

lazy_static::lazy_static! {
    pub(crate) static ref BUILTIN: KnowledgeBase = KnowledgeBase {
        zodiac_signs: zodiac_signs(),
        planetary_rulers: planetary_rulers(),
        dignity_table: dignity_table(),
        dignity_scores: DignityScores::default(),
        aspects: aspect_definitions(),
        sect: sect_table(),
        remedies: remedies(),
    };
}

pub(crate) fn zodiac_signs() -> Vec<String> {
    SIGN_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Traditional rulerships, no outer planets.
pub(crate) fn planetary_rulers() -> HashMap<String, String> {
    const RULERS: &[(&str, &str)] = &[
        ("Aries", "Mars"),
        ("Taurus", "Venus"),
        ("Gemini", "Mercury"),
        ("Cancer", "Moon"),
        ("Leo", "Sun"),
        ("Virgo", "Mercury"),
        ("Libra", "Venus"),
        ("Scorpio", "Mars"),
        ("Sagittarius", "Jupiter"),
        ("Capricorn", "Saturn"),
        ("Aquarius", "Saturn"),
        ("Pisces", "Jupiter"),
    ];
    RULERS
        .iter()
        .map(|(sign, ruler)| (sign.to_string(), ruler.to_string()))
        .collect()
}

fn entry(domicile: &[&str], exaltation: &[&str], detriment: &[&str], fall: &[&str]) -> DignityEntry {
    let owned = |signs: &[&str]| signs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    DignityEntry {
        domicile: owned(domicile),
        exaltation: owned(exaltation),
        detriment: owned(detriment),
        fall: owned(fall),
    }
}

pub(crate) fn dignity_table() -> HashMap<String, DignityEntry> {
    let mut table = HashMap::new();
    table.insert("Sun".to_string(), entry(&["Leo"], &["Aries"], &["Aquarius"], &["Libra"]));
    table.insert("Moon".to_string(), entry(&["Cancer"], &["Taurus"], &["Capricorn"], &["Scorpio"]));
    table.insert(
        "Mercury".to_string(),
        entry(&["Gemini", "Virgo"], &["Virgo"], &["Sagittarius", "Pisces"], &["Pisces"]),
    );
    table.insert(
        "Venus".to_string(),
        entry(&["Taurus", "Libra"], &["Pisces"], &["Scorpio", "Aries"], &["Virgo"]),
    );
    table.insert(
        "Mars".to_string(),
        entry(&["Aries", "Scorpio"], &["Capricorn"], &["Libra", "Taurus"], &["Cancer"]),
    );
    table.insert(
        "Jupiter".to_string(),
        entry(&["Sagittarius", "Pisces"], &["Cancer"], &["Gemini", "Virgo"], &["Capricorn"]),
    );
    table.insert(
        "Saturn".to_string(),
        entry(&["Capricorn", "Aquarius"], &["Libra"], &["Cancer", "Leo"], &["Aries"]),
    );
    table
}

pub(crate) fn aspect_definitions() -> Vec<AspectDefinition> {
    vec![
        AspectDefinition { kind: AspectKind::Conjunction, angle: 0.0, orb: 8.0, nature: AspectNature::Neutral },
        AspectDefinition { kind: AspectKind::Opposition, angle: 180.0, orb: 8.0, nature: AspectNature::Hard },
        AspectDefinition { kind: AspectKind::Trine, angle: 120.0, orb: 6.0, nature: AspectNature::Soft },
        AspectDefinition { kind: AspectKind::Square, angle: 90.0, orb: 6.0, nature: AspectNature::Hard },
        AspectDefinition { kind: AspectKind::Sextile, angle: 60.0, orb: 4.0, nature: AspectNature::Soft },
    ]
}

fn roles(benefic: &str, malefic: &str, contrary: &str) -> SectRoles {
    SectRoles {
        benefic_of_sect: Some(benefic.to_string()),
        malefic_of_sect: Some(malefic.to_string()),
        malefic_contrary_to_sect: Some(contrary.to_string()),
    }
}

pub(crate) fn sect_table() -> SectTable {
    SectTable {
        diurnal: Some(roles("Jupiter", "Saturn", "Mars")),
        nocturnal: Some(roles("Venus", "Mars", "Saturn")),
    }
}

pub(crate) fn remedies() -> HashMap<String, Remedy> {
    const REMEDIES: &[(&str, &str, &str, &str)] = &[
        (
            "Sun",
            "Bruised ego and a wobbling sense of authority",
            "Offer water to the rising Sun on Sundays",
            "Lead one small project end to end and own the result",
        ),
        (
            "Moon",
            "Mood swings and emotional overwhelm",
            "Wear silver or pearl on Mondays",
            "Journal before bed and protect your sleep window",
        ),
        (
            "Mercury",
            "Miscommunication, scattered focus, and tech glitches",
            "Donate green items on Wednesdays",
            "Reread every important message before you hit send",
        ),
        (
            "Venus",
            "Overspending and people-pleasing in relationships",
            "Offer white flowers on Fridays",
            "Set one spending limit and one boundary this week",
        ),
        (
            "Mars",
            "Impulsive anger and burnout from pushing too hard",
            "Recite the Hanuman Chalisa on Tuesdays",
            "Put the heat into a hard workout instead of an argument",
        ),
        (
            "Jupiter",
            "Overconfidence and promising more than you can deliver",
            "Donate yellow lentils on Thursdays",
            "Commit to less and finish what you already started",
        ),
        (
            "Saturn",
            "Delays, heaviness, and fear of failure",
            "Feed crows or donate black sesame on Saturdays",
            "Turn the big task into a fifteen-minute daily habit",
        ),
    ];
    REMEDIES
        .iter()
        .map(|(planet, warning, traditional, modern)| {
            (
                planet.to_string(),
                Remedy {
                    shadow_warning: warning.to_string(),
                    traditional_remedy: traditional.to_string(),
                    modern_action: modern.to_string(),
                },
            )
        })
        .collect()
}
