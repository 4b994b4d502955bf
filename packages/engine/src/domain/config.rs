use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::font::FontDescriptor;

/// Default wall thickness in pixels.
pub const BOUND_THICKNESS: f64 = 100.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("`{0}` must be at least 1")]
    ZeroCount(&'static str),
}

/// Demo settings handed over by the host page as JSON.
///
/// Every field is optional in the JSON; missing ones keep the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub label: String,
    pub body_count: u32,
    /// Distance kept from the viewport edges when spawning text bodies
    pub spawn_margin: f64,
    pub font: FontDescriptor,
    pub bound_thickness: f64,
    pub position_iterations: u32,
    pub constraint_iterations: u32,
    pub pixels_per_meter: f64,
    /// Acceleration (m/s²) of a unit gravity vector
    pub gravity_scale: f64,
    pub debug_overlay: bool,
    pub request_button_id: String,
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            label: "Hello World".to_string(),
            body_count: 10,
            spawn_margin: 200.0,
            font: FontDescriptor::default(),
            bound_thickness: BOUND_THICKNESS,
            position_iterations: 10,
            constraint_iterations: 10,
            pixels_per_meter: 50.0,
            gravity_scale: 9.81,
            debug_overlay: true,
            request_button_id: "request-btn".to_string(),
            seed: None,
        }
    }
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("font.size", self.font.size)?;
        positive("bound_thickness", self.bound_thickness)?;
        positive("pixels_per_meter", self.pixels_per_meter)?;
        if !self.spawn_margin.is_finite() {
            return Err(ConfigError::NotPositive { field: "spawn_margin", value: self.spawn_margin });
        }
        if !self.gravity_scale.is_finite() {
            return Err(ConfigError::NotPositive { field: "gravity_scale", value: self.gravity_scale });
        }
        if self.position_iterations == 0 {
            return Err(ConfigError::ZeroCount("position_iterations"));
        }
        if self.constraint_iterations == 0 {
            return Err(ConfigError::ZeroCount("constraint_iterations"));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = DemoConfig::from_json("{}").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.body_count, 10);
        assert_eq!(config.bound_thickness, 100.0);
        assert_eq!(config.font.css(), "500 50px Telma");
    }

    #[test]
    fn partial_font_override_keeps_other_fields() {
        let config = DemoConfig::from_json(r#"{"label":"Tilt me","font":{"size":32}}"#).unwrap();
        assert_eq!(config.label, "Tilt me");
        assert_eq!(config.font.size, 32.0);
        assert_eq!(config.font.family, "Telma");
        assert_eq!(config.font.weight, 500);
    }

    #[test]
    fn rejects_non_positive_sizes() {
        let err = DemoConfig::from_json(r#"{"bound_thickness":0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { field: "bound_thickness", .. }));

        let err = DemoConfig::from_json(r#"{"font":{"size":-4}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { field: "font.size", .. }));
    }

    #[test]
    fn rejects_zero_iterations() {
        let err = DemoConfig::from_json(r#"{"constraint_iterations":0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCount("constraint_iterations")));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(DemoConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }
}
