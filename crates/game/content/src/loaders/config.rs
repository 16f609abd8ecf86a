//! Combat rules loader.

use std::path::Path;

use battler_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`CombatConfig`] from TOML files.
///
/// ```toml
/// roll_policy = "prioritized"   # or "legacy"
/// ```
///
/// Missing keys fall back to their defaults, so an empty file is valid.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse combat rules TOML: {}", e))?;

        tracing::debug!(roll_policy = %config.roll_policy, "combat rules loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use battler_core::RollPolicy;

    use super::*;

    #[test]
    fn empty_rules_use_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, CombatConfig::default());
    }

    #[test]
    fn reads_roll_policy_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "roll_policy = \"legacy\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.roll_policy, RollPolicy::Legacy);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = ConfigLoader::parse("roll_policy = \"random\"").unwrap_err();
        assert!(err.to_string().contains("combat rules"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
