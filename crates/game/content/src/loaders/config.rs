//! Rules configuration loader.

use std::path::Path;

use loremaster_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Omitted keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Like [`ConfigLoader::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<RulesConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no rules config, using defaults");
            return Ok(RulesConfig::default());
        }
        Self::load(path)
    }

    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let config: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let mut values = config.free_assign_values;
        values.sort_unstable();
        if values.windows(2).any(|pair| pair[0] == pair[1]) {
            anyhow::bail!(
                "free_assign_values must be distinct, got {:?}",
                config.free_assign_values
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("skill_point_pool = 24\n").unwrap();
        assert_eq!(config.skill_point_pool, 24);
        assert_eq!(config.combat_point_pool, 3);
        assert_eq!(config.free_assign_values, [7, 6, 5]);
    }

    #[test]
    fn duplicate_free_assign_values_are_rejected() {
        assert!(ConfigLoader::parse("free_assign_values = [7, 7, 5]\n").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = ConfigLoader::load_or_default(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config, RulesConfig::default());
    }
}
