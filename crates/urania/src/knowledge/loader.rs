//! JSON loading for the knowledge base.
//!
//! The strict entry points return [`KnowledgeError`]; [`KnowledgeBase::load_or_default`]
//! logs and substitutes the built-in tables instead, so a bad file never
//! stops the engine from producing a chart.

use super::{builtin, DignityEntry, DignityScores, KnowledgeBase, Remedy, SectTable};
use crate::aspects::types::{AspectDefinition, AspectKind, AspectNature, ASPECT_PRIORITY};
use crate::error::KnowledgeError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const ASTRO_LOGIC_FILE: &str = "astro_logic.json";
pub const REMEDIES_FILE: &str = "remedies.json";

/// On-disk shape of `astro_logic.json`. Absent tables fall back to the
/// built-in ones.
#[derive(Debug, Deserialize)]
struct AstroLogicFile {
    #[serde(default)]
    zodiac_signs: Option<Vec<String>>,
    #[serde(default)]
    planetary_rulers: Option<HashMap<String, String>>,
    #[serde(default)]
    dignity_table: Option<HashMap<String, DignityEntry>>,
    #[serde(default)]
    dignity_scores: Option<DignityScores>,
    #[serde(default)]
    aspect_definitions: Option<HashMap<String, AspectSpec>>,
    #[serde(default)]
    aspect_priority: Option<Vec<String>>,
    #[serde(default)]
    sect_benefics_malefics: Option<SectTable>,
}

#[derive(Debug, Deserialize)]
struct AspectSpec {
    angle: f64,
    orb: f64,
    nature: AspectNature,
}

fn invalid(table: &str, message: impl Into<String>) -> KnowledgeError {
    KnowledgeError::InvalidTable {
        table: table.to_string(),
        message: message.into(),
    }
}

fn parse_kind(table: &str, name: &str) -> Result<AspectKind, KnowledgeError> {
    name.parse::<AspectKind>().map_err(|e| invalid(table, e))
}

/// Order aspect definitions by the explicit priority list (file override or
/// [`ASPECT_PRIORITY`]). Defined aspects missing from an override are
/// appended in default order.
fn order_aspects(
    specs: HashMap<String, AspectSpec>,
    priority: Option<Vec<String>>,
) -> Result<Vec<AspectDefinition>, KnowledgeError> {
    let mut defined: HashMap<AspectKind, AspectSpec> = HashMap::new();
    for (name, spec) in specs {
        let kind = parse_kind("aspect_definitions", &name)?;
        if !spec.angle.is_finite() || !(0.0..=180.0).contains(&spec.angle) {
            return Err(invalid("aspect_definitions", format!("{} angle {} outside [0, 180]", name, spec.angle)));
        }
        if !spec.orb.is_finite() || spec.orb < 0.0 {
            return Err(invalid("aspect_definitions", format!("{} orb {} must be non-negative", name, spec.orb)));
        }
        defined.insert(kind, spec);
    }

    let mut order: Vec<AspectKind> = match priority {
        Some(names) => names
            .iter()
            .map(|name| parse_kind("aspect_priority", name))
            .collect::<Result<_, _>>()?,
        None => ASPECT_PRIORITY.to_vec(),
    };
    for kind in ASPECT_PRIORITY {
        if defined.contains_key(&kind) && !order.contains(&kind) {
            log::warn!("aspect_priority omits {}, checking it last", kind);
            order.push(kind);
        }
    }

    let mut aspects = Vec::with_capacity(defined.len());
    for kind in order {
        if let Some(spec) = defined.remove(&kind) {
            aspects.push(AspectDefinition {
                kind,
                angle: spec.angle,
                orb: spec.orb,
                nature: spec.nature,
            });
        }
    }
    Ok(aspects)
}

fn builtin_specs() -> HashMap<String, AspectSpec> {
    builtin::aspect_definitions()
        .into_iter()
        .map(|d| {
            (
                d.kind.as_str().to_string(),
                AspectSpec {
                    angle: d.angle,
                    orb: d.orb,
                    nature: d.nature,
                },
            )
        })
        .collect()
}

fn check_score(name: &str, value: i8) -> Result<(), KnowledgeError> {
    if (-5..=5).contains(&value) {
        Ok(())
    } else {
        Err(invalid("dignity_scores", format!("{} score {} outside [-5, 5]", name, value)))
    }
}

/// Parse `astro_logic.json`. Remedies stay at the built-in set.
pub fn parse_astro_logic(json: &str) -> Result<KnowledgeBase, KnowledgeError> {
    let file: AstroLogicFile = serde_json::from_str(json).map_err(|e| KnowledgeError::InvalidJson {
        name: ASTRO_LOGIC_FILE.to_string(),
        message: e.to_string(),
    })?;

    let zodiac_signs = file.zodiac_signs.unwrap_or_else(builtin::zodiac_signs);
    if zodiac_signs.len() != 12 {
        return Err(invalid(
            "zodiac_signs",
            format!("expected 12 signs, found {}", zodiac_signs.len()),
        ));
    }

    let dignity_scores = file.dignity_scores.unwrap_or_default();
    check_score("domicile", dignity_scores.domicile)?;
    check_score("exaltation", dignity_scores.exaltation)?;
    check_score("detriment", dignity_scores.detriment)?;
    check_score("fall", dignity_scores.fall)?;

    let aspects = match (file.aspect_definitions, file.aspect_priority) {
        (Some(specs), priority) => order_aspects(specs, priority)?,
        // Priority override on its own reorders the built-in definitions
        (None, Some(priority)) => order_aspects(builtin_specs(), Some(priority))?,
        (None, None) => builtin::aspect_definitions(),
    };

    Ok(KnowledgeBase {
        zodiac_signs,
        planetary_rulers: file.planetary_rulers.unwrap_or_else(builtin::planetary_rulers),
        dignity_table: file.dignity_table.unwrap_or_else(builtin::dignity_table),
        dignity_scores,
        aspects,
        sect: file.sect_benefics_malefics.unwrap_or_else(builtin::sect_table),
        remedies: builtin::remedies(),
    })
}

/// Parse `remedies.json`: an object keyed by planet name.
pub fn parse_remedies(json: &str) -> Result<HashMap<String, Remedy>, KnowledgeError> {
    serde_json::from_str(json).map_err(|e| KnowledgeError::InvalidJson {
        name: REMEDIES_FILE.to_string(),
        message: e.to_string(),
    })
}

fn read(path: &Path) -> Result<String, KnowledgeError> {
    fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
        path: path.display().to_string(),
        source,
    })
}

impl KnowledgeBase {
    /// Build from the contents of both knowledge files.
    pub fn from_json(astro_logic: &str, remedies: &str) -> Result<Self, KnowledgeError> {
        let mut kb = parse_astro_logic(astro_logic)?;
        kb.remedies = parse_remedies(remedies)?;
        Ok(kb)
    }

    /// Load both files from `dir`, failing on the first problem.
    pub fn load(dir: &Path) -> Result<Self, KnowledgeError> {
        let logic = read(&dir.join(ASTRO_LOGIC_FILE))?;
        let remedies = read(&dir.join(REMEDIES_FILE))?;
        let kb = Self::from_json(&logic, &remedies)?;
        log::info!("Loaded knowledge base from {}", dir.display());
        Ok(kb)
    }

    /// Load both files from `dir`, substituting built-in tables for any file
    /// that is missing or malformed.
    pub fn load_or_default(dir: &Path) -> Self {
        let logic_path = dir.join(ASTRO_LOGIC_FILE);
        let mut kb = match read(&logic_path).and_then(|text| parse_astro_logic(&text)) {
            Ok(kb) => kb,
            Err(e) => {
                log::warn!("{}; using built-in astro logic tables", e);
                Self::builtin()
            }
        };

        let remedies_path = dir.join(REMEDIES_FILE);
        match read(&remedies_path).and_then(|text| parse_remedies(&text)) {
            Ok(remedies) => kb.remedies = remedies,
            Err(e) => log::warn!("{}; using built-in remedies", e),
        }

        log::info!(
            "Knowledge base ready: {} aspects, {} dignity entries, {} remedies",
            kb.aspects.len(),
            kb.dignity_table.len(),
            kb.remedies.len()
        );
        kb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_builtin_tables() {
        let kb = parse_astro_logic("{}").unwrap();
        assert_eq!(kb, KnowledgeBase::builtin());
    }

    #[test]
    fn test_priority_override_reorders_aspects() {
        let json = r#"{
            "aspect_definitions": {
                "conjunction": {"angle": 0, "orb": 8, "nature": "neutral"},
                "square": {"angle": 90, "orb": 6, "nature": "hard"},
                "trine": {"angle": 120, "orb": 6, "nature": "soft"}
            },
            "aspect_priority": ["square", "conjunction"]
        }"#;
        let kb = parse_astro_logic(json).unwrap();
        let kinds: Vec<_> = kb.aspects.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![AspectKind::Square, AspectKind::Conjunction, AspectKind::Trine]);
    }

    #[test]
    fn test_priority_alone_reorders_builtin_aspects() {
        let kb = parse_astro_logic(r#"{"aspect_priority": ["sextile", "square"]}"#).unwrap();
        let kinds: Vec<_> = kb.aspects.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AspectKind::Sextile,
                AspectKind::Square,
                AspectKind::Conjunction,
                AspectKind::Opposition,
                AspectKind::Trine,
            ]
        );
        let square = &kb.aspects[1];
        assert_eq!(square.angle, 90.0);
        assert_eq!(square.orb, 6.0);
        assert_eq!(square.nature, AspectNature::Hard);
    }

    #[test]
    fn test_priority_alone_rejects_unknown_names() {
        let err = parse_astro_logic(r#"{"aspect_priority": ["quincunx"]}"#).unwrap_err();
        assert!(matches!(err, KnowledgeError::InvalidTable { .. }));
    }

    #[test]
    fn test_unknown_aspect_is_rejected() {
        let json = r#"{"aspect_definitions": {"quincunx": {"angle": 150, "orb": 2, "nature": "neutral"}}}"#;
        let err = parse_astro_logic(json).unwrap_err();
        assert!(matches!(err, KnowledgeError::InvalidTable { .. }));
    }

    #[test]
    fn test_wrong_sign_count_is_rejected() {
        let err = parse_astro_logic(r#"{"zodiac_signs": ["Aries"]}"#).unwrap_err();
        assert!(err.to_string().contains("expected 12 signs"));
    }

    #[test]
    fn test_out_of_range_score_is_rejected() {
        let err = parse_astro_logic(r#"{"dignity_scores": {"domicile": 9}}"#).unwrap_err();
        assert!(matches!(err, KnowledgeError::InvalidTable { .. }));
    }

    #[test]
    fn test_partial_scores_keep_defaults() {
        let kb = parse_astro_logic(r#"{"dignity_scores": {"domicile": 3}}"#).unwrap();
        assert_eq!(kb.dignity_scores.domicile, 3);
        assert_eq!(kb.dignity_scores.fall, -5);
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_remedies("{not json").unwrap_err();
        assert!(matches!(err, KnowledgeError::InvalidJson { .. }));
    }

    #[test]
    fn test_load_or_default_missing_dir() {
        crate::test_log::init();
        let kb = KnowledgeBase::load_or_default(Path::new("/nonexistent/urania/knowledge"));
        assert_eq!(kb, KnowledgeBase::builtin());
        assert!(crate::test_log::warned("using built-in astro logic tables"));
        assert!(crate::test_log::warned("using built-in remedies"));
    }

    #[test]
    fn test_omitted_priority_kind_warns() {
        crate::test_log::init();
        parse_astro_logic(r#"{"aspect_priority": ["opposition", "trine", "square", "sextile"]}"#).unwrap();
        assert!(crate::test_log::warned("aspect_priority omits conjunction"));
    }
}
