//! Configuration for the parsing pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the tara parser.
///
/// Components receive this at construction; nothing reads configuration
/// from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Similarity threshold for fuzzy keyword matching (0.0 - 1.0).
    pub fuzzy_match_threshold: f64,

    /// Coordinate-based extraction settings.
    pub position: PositionConfig,

    /// Validation settings.
    pub validation: ValidationConfig,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            fuzzy_match_threshold: 0.8,
            position: PositionConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

/// Settings for spatial (bounding-box) extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    /// Vertical tolerance in pixels for two words to count as the same row.
    pub y_tolerance: i32,

    /// Minimum horizontal gap in pixels between a label's right edge and a
    /// value candidate.
    pub x_min_offset: i32,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            y_tolerance: 80,
            x_min_offset: 50,
        }
    }
}

/// Settings for slip validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Allowed discrepancy in kg between net and gross - tare.
    pub weight_tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            weight_tolerance: 10.0,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.fuzzy_match_threshold, 0.8);
        assert_eq!(config.position.y_tolerance, 80);
        assert_eq!(config.position.x_min_offset, 50);
        assert_eq!(config.validation.weight_tolerance, 10.0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ParserConfig =
            serde_json::from_str(r#"{"fuzzy_match_threshold": 0.9}"#).unwrap();
        assert_eq!(config.fuzzy_match_threshold, 0.9);
        assert_eq!(config.position.y_tolerance, 80);
        assert_eq!(config.validation.weight_tolerance, 10.0);
    }
}
