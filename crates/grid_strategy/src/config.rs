use crate::{
    error::{GridError, Result},
    spans::Alignment,
    strategy::StrategyName,
};
use serde::{Deserialize, Serialize};
use std::{env, path::Path};

pub const ENV_STRATEGY: &str = "GRID_STRATEGY";
pub const ENV_ALIGNMENT: &str = "GRID_ALIGNMENT";

/// Top-level configuration file
///
/// ```toml
/// [layout]
/// strategy = "square"      # "square" | "rectangular"
/// alignment = "center"     # "center" | "left" | "right" | "justified"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LayoutConfig {
    #[serde(default = "default_strategy")]
    pub strategy: String,
    #[serde(default = "default_alignment")]
    pub alignment: String,
}

fn default_strategy() -> String {
    StrategyName::default().to_string()
}

fn default_alignment() -> String {
    Alignment::default().to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            alignment: default_alignment(),
        }
    }
}

impl Config {
    /// Reads a TOML configuration file.
    ///
    /// Names are not checked here; later overrides may still replace them.
    /// Call [`Config::validate`] once every layer has been applied.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GridError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            GridError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Overrides fields from `GRID_STRATEGY` / `GRID_ALIGNMENT`.
    /// Unset or blank variables leave the current value alone.
    pub fn apply_env(mut self) -> Self {
        if let Ok(strategy) = env::var(ENV_STRATEGY)
            && !strategy.trim().is_empty()
        {
            self.layout.strategy = strategy.trim().to_string();
        }
        if let Ok(alignment) = env::var(ENV_ALIGNMENT)
            && !alignment.trim().is_empty()
        {
            self.layout.alignment = alignment.trim().to_string();
        }

        self
    }

    pub fn validate(&self) -> Result<()> {
        self.strategy_name()?;
        self.alignment()?;
        Ok(())
    }

    pub fn strategy_name(&self) -> Result<StrategyName> {
        StrategyName::parse(&self.layout.strategy)
    }

    pub fn alignment(&self) -> Result<Alignment> {
        Alignment::parse(&self.layout.alignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("grid.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.strategy_name().unwrap(), StrategyName::Square);
        assert_eq!(config.alignment().unwrap(), Alignment::Center);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[layout]\nstrategy = \"rectangular\"\nalignment = \"justified\"\n",
        );

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.strategy_name().unwrap(), StrategyName::Rectangular);
        assert_eq!(config.alignment().unwrap(), Alignment::Justified);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[layout]\nalignment = \"left\"\n");

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.layout.strategy, "square");
        assert_eq!(config.alignment().unwrap(), Alignment::Left);

        let path = write_config(&dir, "");
        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_strategy_rejected_on_validate() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[layout]\nstrategy = \"hexagonal\"\n");

        // Loading keeps the raw name so a later layer can replace it
        let mut config = Config::load_from_file(&path).unwrap();
        assert!(matches!(config.validate(), Err(GridError::UnknownStrategy(_))));

        config.layout.strategy = "rectangular".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[layout\nstrategy = ");

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load_from_file("nonexistent/grid.toml").unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
    }

    // Environment is process-global: every env mutation lives in this test.
    #[test]
    fn test_apply_env() {
        let orig_strategy = env::var(ENV_STRATEGY).ok();
        let orig_alignment = env::var(ENV_ALIGNMENT).ok();

        unsafe {
            env::set_var(ENV_STRATEGY, " rectangular ");
            env::set_var(ENV_ALIGNMENT, "   \t  ");
        }
        let config = Config::default().apply_env();
        assert_eq!(config.strategy_name().unwrap(), StrategyName::Rectangular);
        assert_eq!(config.alignment().unwrap(), Alignment::Center);

        unsafe {
            env::set_var(ENV_ALIGNMENT, "sideways");
        }
        let config = Config::default().apply_env();
        assert_eq!(config.layout.alignment, "sideways");
        assert!(matches!(
            config.validate(),
            Err(GridError::UnknownAlignment(_))
        ));

        // Cleanup
        unsafe {
            env::remove_var(ENV_STRATEGY);
            env::remove_var(ENV_ALIGNMENT);
            if let Some(value) = orig_strategy {
                env::set_var(ENV_STRATEGY, value);
            }
            if let Some(value) = orig_alignment {
                env::set_var(ENV_ALIGNMENT, value);
            }
        }
    }
}
