use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use urania::aspects::DEFAULT_ORB_MULTIPLIER;
use urania::cdo::{BuildOptions, DEFAULT_CUSP_THRESHOLD};

/// Environment variable that overrides `[knowledge] dir`.
pub const KNOWLEDGE_DIR_ENV: &str = "URANIA_KNOWLEDGE_DIR";

const CONFIG_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub knowledge_dir: PathBuf,
    pub orb_multiplier: f64,
    pub cusp_threshold: f64,
    pub log_level: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            knowledge_dir: default_knowledge_dir(),
            orb_multiplier: DEFAULT_ORB_MULTIPLIER,
            cusp_threshold: DEFAULT_CUSP_THRESHOLD,
            log_level: default_log_level(),
        }
    }
}

impl EngineSettings {
    pub fn to_build_options(&self) -> BuildOptions {
        BuildOptions {
            orb_multiplier: self.orb_multiplier,
            cusp_threshold: self.cusp_threshold,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct KnowledgeToml {
    #[serde(default = "default_knowledge_dir")]
    dir: PathBuf,
}

impl Default for KnowledgeToml {
    fn default() -> Self {
        Self {
            dir: default_knowledge_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct EngineToml {
    #[serde(default = "default_orb_multiplier")]
    orb_multiplier: f64,
    #[serde(default = "default_cusp_threshold")]
    cusp_threshold: f64,
}

impl Default for EngineToml {
    fn default() -> Self {
        Self {
            orb_multiplier: default_orb_multiplier(),
            cusp_threshold: default_cusp_threshold(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingToml {
    #[serde(default = "default_log_level")]
    level: String,
}

impl Default for LoggingToml {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    knowledge: KnowledgeToml,
    #[serde(default)]
    engine: EngineToml,
    #[serde(default)]
    logging: LoggingToml,
}

fn default_knowledge_dir() -> PathBuf {
    PathBuf::from("crates/urania/knowledge")
}

fn default_orb_multiplier() -> f64 {
    DEFAULT_ORB_MULTIPLIER
}

fn default_cusp_threshold() -> f64 {
    DEFAULT_CUSP_THRESHOLD
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Try the usual relative locations of `configs/urania.toml` (workspace root
/// or a crate directory two levels down).
pub fn read_config_toml_text() -> anyhow::Result<String> {
    for p in &CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load urania.toml from {:?}", CONFIG_PATHS);
}

/// Parse and validate settings from TOML text. Does not consult the
/// environment.
pub fn parse_engine_settings(text: &str) -> anyhow::Result<EngineSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;
    let RootConfigToml {
        knowledge,
        engine,
        logging,
    } = root;

    if !engine.orb_multiplier.is_finite() || engine.orb_multiplier <= 0.0 {
        anyhow::bail!(
            "engine.orb_multiplier must be a positive number, got {}",
            engine.orb_multiplier
        );
    }
    if !(engine.cusp_threshold > 0.0 && engine.cusp_threshold < 15.0) {
        anyhow::bail!(
            "engine.cusp_threshold must be between 0 and 15 degrees, got {}",
            engine.cusp_threshold
        );
    }

    Ok(EngineSettings {
        knowledge_dir: knowledge.dir,
        orb_multiplier: engine.orb_multiplier,
        cusp_threshold: engine.cusp_threshold,
        log_level: logging.level,
    })
}

fn apply_env_overrides(settings: &mut EngineSettings) {
    if let Some(dir) = env::var_os(KNOWLEDGE_DIR_ENV).filter(|v| !v.is_empty()) {
        settings.knowledge_dir = PathBuf::from(dir);
    }
}

/// Read `configs/urania.toml`, validate it, and apply the
/// `URANIA_KNOWLEDGE_DIR` override.
pub fn load_engine_settings() -> anyhow::Result<EngineSettings> {
    let text = read_config_toml_text()?;
    let mut settings = parse_engine_settings(&text)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = parse_engine_settings("").unwrap();
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.to_build_options(), BuildOptions::default());
    }

    #[test]
    fn test_full_file() {
        let text = r#"
            [knowledge]
            dir = "/srv/urania/knowledge"

            [engine]
            orb_multiplier = 1.25
            cusp_threshold = 2.0

            [logging]
            level = "debug"
        "#;
        let settings = parse_engine_settings(text).unwrap();
        assert_eq!(settings.knowledge_dir, PathBuf::from("/srv/urania/knowledge"));
        assert_eq!(settings.log_level, "debug");
        let options = settings.to_build_options();
        assert_eq!(options.orb_multiplier, 1.25);
        assert_eq!(options.cusp_threshold, 2.0);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let settings = parse_engine_settings("[engine]\norb_multiplier = 0.8\n").unwrap();
        assert_eq!(settings.orb_multiplier, 0.8);
        assert_eq!(settings.cusp_threshold, DEFAULT_CUSP_THRESHOLD);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_rejects_bad_engine_values() {
        assert!(parse_engine_settings("[engine]\norb_multiplier = 0.0\n").is_err());
        assert!(parse_engine_settings("[engine]\norb_multiplier = -1.0\n").is_err());
        assert!(parse_engine_settings("[engine]\norb_multiplier = nan\n").is_err());
        assert!(parse_engine_settings("[engine]\ncusp_threshold = 0.0\n").is_err());
        assert!(parse_engine_settings("[engine]\ncusp_threshold = 15.0\n").is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = parse_engine_settings("[engine\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse urania.toml"));
    }
}
