//! Classifier configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default minimum number of stopword hits before a variant scores at all
pub const DEFAULT_MIN_MATCHES: usize = 2;

/// Default ratio the winning base language must exceed over the runner-up
pub const DEFAULT_CONFIDENCE_MARGIN: f64 = 2.0;

/// Default scale constant, `sqrt(2) / 10`
pub const DEFAULT_SCALE_CONSTANT: f64 = std::f64::consts::SQRT_2 / 10.0;

/// Tunables for scoring and winner selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Counts below this threshold score zero
    pub min_matches: usize,
    /// Required winner/runner-up confidence ratio for a confident verdict
    pub required_confidence_margin: f64,
    /// Multiplier `K` in `K * count / sqrt(words)`
    pub confidence_scale_constant: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_matches: DEFAULT_MIN_MATCHES,
            required_confidence_margin: DEFAULT_CONFIDENCE_MARGIN,
            confidence_scale_constant: DEFAULT_SCALE_CONSTANT,
        }
    }
}

impl ClassifierConfig {
    /// Create a builder starting from the defaults
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::default()
    }

    /// Check that the numeric settings are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let margin = self.required_confidence_margin;
        if !margin.is_finite() || margin <= 0.0 {
            return Err(ConfigError::InvalidMargin(margin));
        }

        let scale = self.confidence_scale_constant;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::InvalidScale(scale));
        }

        Ok(())
    }
}

/// Builder for [`ClassifierConfig`]
#[derive(Debug, Default)]
pub struct ClassifierConfigBuilder {
    config: ClassifierConfig,
}

impl ClassifierConfigBuilder {
    /// Set the minimum match threshold
    pub fn min_matches(mut self, min_matches: usize) -> Self {
        self.config.min_matches = min_matches;
        self
    }

    /// Set the required confidence margin
    pub fn required_confidence_margin(mut self, margin: f64) -> Self {
        self.config.required_confidence_margin = margin;
        self
    }

    /// Set the confidence scale constant
    pub fn confidence_scale_constant(mut self, scale: f64) -> Self {
        self.config.confidence_scale_constant = scale;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<ClassifierConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
