//! Configuration file handling.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use qbreak_editor::DEFAULT_ROTATION_STEP;
use qbreak_grid::GridConfig;

use crate::SessionArgs;

/// Settings for an editing session.
///
/// ```yaml
/// grid:
///   wires: 3
///   columns: 16
/// rotation_step: 0.3927
/// shots: 100
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QbreakConfig {
    /// Grid dimensions.
    pub grid: GridConfig,
    /// Radians turned by `rot+` / `rot-`.
    pub rotation_step: f64,
    /// Measurements taken by `run`.
    pub shots: u32,
}

impl Default for QbreakConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            rotation_step: DEFAULT_ROTATION_STEP,
            shots: 1,
        }
    }
}

impl QbreakConfig {
    /// Parse a YAML configuration.
    pub fn from_yaml(source: &str) -> Result<Self> {
        let config: Self =
            serde_yaml_ng::from_str(source).context("Invalid configuration file")?;
        config.validate()?;
        Ok(config)
    }

    /// Default configuration path (`~/.qbreak/config.yaml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".qbreak").join("config.yaml"))
    }

    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default path is read
    /// when present and built-in defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(p) => p,
                None => {
                    debug!("No configuration file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration: {}", path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_yaml(&source).with_context(|| format!("In {}", path.display()))
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, args: &SessionArgs, shots: Option<u32>) -> Result<Self> {
        if let Some(wires) = args.wires {
            self.grid.wires = wires;
        }
        if let Some(columns) = args.columns {
            self.grid.columns = columns;
        }
        if let Some(step) = args.rotation_step {
            self.rotation_step = step;
        }
        if let Some(shots) = shots {
            self.shots = shots;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if !self.rotation_step.is_finite() {
            anyhow::bail!("Rotation step must be a finite number of radians");
        }
        if self.shots == 0 {
            anyhow::bail!("Shots must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QbreakConfig::default();
        assert_eq!(config.grid.wires, 3);
        assert_eq!(config.grid.columns, 16);
        assert_eq!(config.shots, 1);
        assert_eq!(config.rotation_step, DEFAULT_ROTATION_STEP);
    }

    #[test]
    fn test_partial_yaml() {
        let config = QbreakConfig::from_yaml("grid:\n  wires: 5\nshots: 64\n").unwrap();
        assert_eq!(config.grid.wires, 5);
        assert_eq!(config.grid.columns, 16);
        assert_eq!(config.shots, 64);
    }

    #[test]
    fn test_rejects_zero_shots() {
        assert!(QbreakConfig::from_yaml("shots: 0\n").is_err());
    }
}
