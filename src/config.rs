//! YAML configuration file support for votematch.
//!
//! A single YAML file selects the matching algorithm (metric and
//! missing-value policy) and how scores are presented.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # votematch configuration
//! version: "1.0"
//! name: "municipal elections"
//!
//! algorithm:
//!   metric: "directional"          # manhattan | directional | euclidean
//!   use_parallel: false
//!   missing_value:
//!     method: "relative_maximum"   # neutral | relative_maximum | absolute_maximum
//!     bias: "positive"             # positive | negative
//!
//! score:
//!   multiplier: 100
//!   unit: "%"
//! ```

use std::fs;
use std::path::Path;

use distance::{DistanceMetric, MissingValueOptions};
use matcher::{MatchingAlgorithm, MatchingAlgorithmOptions, ScoreFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VoteMatchConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Matching algorithm configuration
    #[serde(default)]
    pub algorithm: AlgorithmYamlConfig,

    /// Score presentation
    #[serde(default)]
    pub score: ScoreFormat,
}

impl VoteMatchConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: VoteMatchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        if !self.score.multiplier.is_finite() || self.score.multiplier <= 0.0 {
            return Err(ConfigLoadError::Validation(format!(
                "score.multiplier must be a positive number (got {})",
                self.score.multiplier
            )));
        }

        Ok(())
    }

    /// The algorithm options this configuration describes.
    pub fn algorithm_options(&self) -> MatchingAlgorithmOptions {
        MatchingAlgorithmOptions::new(self.algorithm.metric, self.algorithm.missing_value)
            .with_parallel(self.algorithm.use_parallel)
    }

    /// Build a matching algorithm without a projector.
    pub fn build_algorithm(&self) -> MatchingAlgorithm {
        MatchingAlgorithm::new(self.algorithm_options())
    }

    pub fn score_format(&self) -> ScoreFormat {
        self.score.clone()
    }
}

impl Default for VoteMatchConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            algorithm: AlgorithmYamlConfig::default(),
            score: ScoreFormat::default(),
        }
    }
}

/// Matching algorithm YAML configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AlgorithmYamlConfig {
    #[serde(default)]
    pub metric: DistanceMetric,

    #[serde(default)]
    pub missing_value: MissingValueOptions,

    #[serde(default)]
    pub use_parallel: bool,
}
