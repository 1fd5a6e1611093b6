//! Configuration for graph building and layout

use serde::{Deserialize, Serialize};

/// Positioning mode for members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Rows by generation (tabular tree view)
    #[default]
    Grid,
    /// Writer in the middle, everyone else on a circle ("relations around me")
    Radial,
}

/// Configuration for the family graph pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Distance between neighbours in a generation row
    pub horizontal_spacing: f64,

    /// Distance between generation rows
    pub vertical_spacing: f64,

    /// Circle radius for the radial layout
    pub radial_radius: f64,

    /// Canvas center, x
    pub center_x: f64,

    /// Canvas center, y
    pub center_y: f64,

    /// Layout used when the caller does not pick one
    pub layout: LayoutMode,

    /// Run the description heuristics (years, gender, occupation, location)
    pub enrich_attributes: bool,
}

impl GraphConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
            ("radial_radius", self.radial_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number", name));
            }
        }
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err("canvas center must be finite".to_string());
        }
        Ok(())
    }

    /// Compact preset: tighter rows and a small circle
    pub fn compact() -> Self {
        Self {
            horizontal_spacing: 120.0,
            vertical_spacing: 100.0,
            radial_radius: 140.0,
            ..Self::default()
        }
    }

    /// Spacious preset for large canvases
    pub fn spacious() -> Self {
        Self {
            horizontal_spacing: 280.0,
            vertical_spacing: 200.0,
            radial_radius: 300.0,
            center_x: 600.0,
            center_y: 450.0,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 200.0,
            vertical_spacing: 150.0,
            radial_radius: 200.0,
            center_x: 400.0,
            center_y: 300.0,
            layout: LayoutMode::Grid,
            enrich_attributes: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GraphConfig::default().validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(GraphConfig::compact().validate().is_ok());
        assert!(GraphConfig::spacious().validate().is_ok());
    }

    #[test]
    fn test_zero_spacing_rejected() {
        let mut config = GraphConfig::default();
        config.vertical_spacing = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GraphConfig::from_toml("layout = \"radial\"\nradial_radius = 250.0\n").unwrap();
        assert_eq!(config.layout, LayoutMode::Radial);
        assert_eq!(config.radial_radius, 250.0);
        assert_eq!(config.horizontal_spacing, 200.0);
        assert!(config.enrich_attributes);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GraphConfig::spacious();
        let parsed = GraphConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
