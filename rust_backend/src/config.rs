//! Analysis configuration file support.
//!
//! This module reads analysis defaults from TOML configuration files. Every
//! section and key is optional; omitted values fall back to the defaults below.
//!
//! ```toml
//! [hotspot]
//! default_distance_threshold = 1000.0
//! distance_column = "distance"
//!
//! [distribution]
//! range_edges = [0.0, 100.0, 500.0, 1000.0, 2000.0, 5000.0]
//! ```

use anyhow::Context;
use qtty::Meters;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithms::weights::DEFAULT_DISTANCE_THRESHOLD;
use crate::error::{AnalysisError, AnalysisResult};

/// Analysis configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub hotspot: HotspotSettings,
    #[serde(default)]
    pub distribution: DistributionSettings,
}

/// Gi* analysis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotSettings {
    /// Fixed neighborhood radius in meters when the request names none.
    #[serde(default = "default_distance_threshold")]
    pub default_distance_threshold: f64,
    /// Column holding per-point catchment radii.
    #[serde(default = "default_distance_column")]
    pub distance_column: String,
}

/// Distance distribution settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSettings {
    /// Bin edges in meters; bins are `(e_k, e_k+1]` plus a final open bin.
    #[serde(default = "default_range_edges")]
    pub range_edges: Vec<f64>,
}

fn default_distance_threshold() -> f64 {
    DEFAULT_DISTANCE_THRESHOLD.value()
}

fn default_distance_column() -> String {
    "distance".to_string()
}

fn default_range_edges() -> Vec<f64> {
    vec![0.0, 100.0, 500.0, 1000.0, 2000.0, 5000.0]
}

impl Default for HotspotSettings {
    fn default() -> Self {
        Self {
            default_distance_threshold: default_distance_threshold(),
            distance_column: default_distance_column(),
        }
    }
}

impl Default for DistributionSettings {
    fn default() -> Self {
        Self {
            range_edges: default_range_edges(),
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> AnalysisResult<Self> {
        let config: AnalysisConfig = toml::from_str(content).map_err(|e| {
            AnalysisError::Config(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load analysis configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(AnalysisConfig)` if successful
    /// * `Err(AnalysisError::Config)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> AnalysisResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))
            .map_err(|e| AnalysisError::Config(format!("{:#}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Load configuration, falling back to defaults.
    ///
    /// A missing file logs a warning; an unreadable or invalid one logs an
    /// error. Neither aborts the caller.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("Config file not found: {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `geo_hotspot.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// Defaults are returned when none exists.
    pub fn from_default_location() -> Self {
        let search_paths = [
            PathBuf::from("geo_hotspot.toml"),
            PathBuf::from("rust_backend/geo_hotspot.toml"),
            PathBuf::from("../geo_hotspot.toml"),
        ];

        match search_paths.iter().find(|p| p.exists()) {
            Some(path) => Self::load_or_default(path),
            None => {
                log::debug!("No geo_hotspot.toml found in standard locations, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> AnalysisResult<()> {
        let threshold = self.hotspot.default_distance_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(AnalysisError::Config(format!(
                "hotspot.default_distance_threshold must be a non-negative number, got {}",
                threshold
            )));
        }

        if self.hotspot.distance_column.is_empty() {
            return Err(AnalysisError::Config(
                "hotspot.distance_column must not be empty".to_string(),
            ));
        }

        let edges = &self.distribution.range_edges;
        if edges.is_empty() {
            return Err(AnalysisError::Config(
                "distribution.range_edges must not be empty".to_string(),
            ));
        }
        if edges.iter().any(|e| !e.is_finite()) || edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(AnalysisError::Config(
                "distribution.range_edges must be finite and strictly increasing".to_string(),
            ));
        }

        Ok(())
    }

    pub fn default_threshold(&self) -> Meters {
        Meters::new(self.hotspot.default_distance_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AnalysisConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.default_threshold().value(), 1000.0);
        assert_eq!(config.hotspot.distance_column, "distance");
        assert_eq!(config.distribution.range_edges.len(), 6);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[hotspot]
default_distance_threshold = 5000.0
"#;

        let config = AnalysisConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.hotspot.default_distance_threshold, 5000.0);
        assert_eq!(config.hotspot.distance_column, "distance");
    }

    #[test]
    fn test_negative_threshold_is_rejected() {
        let toml = r#"
[hotspot]
default_distance_threshold = -1.0
"#;

        assert!(matches!(
            AnalysisConfig::from_toml_str(toml),
            Err(AnalysisError::Config(_))
        ));
    }

    #[test]
    fn test_unsorted_edges_are_rejected() {
        let toml = r#"
[distribution]
range_edges = [0.0, 500.0, 100.0]
"#;

        assert!(AnalysisConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[hotspot]\ndistance_column = \"radius_m\"\n\n[distribution]\nrange_edges = [0.0, 250.0]\n"
        )
        .unwrap();

        let config = AnalysisConfig::from_file(file.path()).unwrap();
        assert_eq!(config.hotspot.distance_column, "radius_m");
        assert_eq!(config.distribution.range_edges, vec![0.0, 250.0]);
    }

    #[test]
    fn test_from_file_missing_reports_path() {
        let err = AnalysisConfig::from_file("/nonexistent/geo_hotspot.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/geo_hotspot.toml"), "{err}");
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = AnalysisConfig::load_or_default("/nonexistent/geo_hotspot.toml");
        assert_eq!(config, AnalysisConfig::default());

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[hotspot\nbroken").unwrap();
        let config = AnalysisConfig::load_or_default(file.path());
        assert_eq!(config, AnalysisConfig::default());
    }
}
