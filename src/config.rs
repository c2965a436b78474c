use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level trainer configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DoomsdayConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Drill settings.
    #[serde(default)]
    pub drill: DrillToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrillToml {
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_end_year")]
    pub end_year: i32,
    #[serde(default = "default_anchor_rule")]
    pub anchor_rule: String,
    #[serde(default)]
    pub questions: Option<usize>,
}

impl Default for DrillToml {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            end_year: default_end_year(),
            anchor_rule: default_anchor_rule(),
            questions: None,
        }
    }
}

fn default_start_year() -> i32 {
    doomsday_calendar::DEFAULT_START_YEAR
}
fn default_end_year() -> i32 {
    doomsday_calendar::DEFAULT_END_YEAR
}
fn default_anchor_rule() -> String {
    "periodic".to_string()
}

impl DoomsdayConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config: DoomsdayConfig = toml::from_str("").unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.drill.start_year, 1900);
        assert_eq!(config.drill.end_year, 2100);
        assert_eq!(config.drill.anchor_rule, "periodic");
        assert_eq!(config.drill.questions, None);
    }

    #[test]
    fn full_file() {
        let config: DoomsdayConfig = toml::from_str(
            r#"
            seed = 42
            [drill]
            start_year = 1700
            end_year = 2399
            anchor_rule = "table"
            questions = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.drill.start_year, 1700);
        assert_eq!(config.drill.end_year, 2399);
        assert_eq!(config.drill.anchor_rule, "table");
        assert_eq!(config.drill.questions, Some(10));
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<DoomsdayConfig, _> = toml::from_str("[drill]\nstreak = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7\n[drill]\nend_year = 2000").unwrap();
        let config = DoomsdayConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.drill.start_year, 1900);
        assert_eq!(config.drill.end_year, 2000);
    }

    #[test]
    fn load_missing_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = DoomsdayConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read config file"));
    }

    #[test]
    fn sample_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("doomsday.toml");
        let config = DoomsdayConfig::load(&path).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.drill.questions, Some(10));
    }
}
