use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunable constants for the manipulation engine.
///
/// Missing fields fall back to their defaults when deserializing, so a config
/// file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scale_min: f32,
    pub scale_max: f32,
    /// Movement in px before a mouse contact stops being a tap
    pub pointer_drag_threshold: f32,
    /// Movement in px before a touch contact stops being a tap
    pub touch_drag_threshold: f32,
    /// Scale change per pixel of corner-handle travel (edges use twice this)
    pub resize_sensitivity: f32,
    pub handle_radius: f32,
    /// Side length of an object's box in px
    pub object_size: f32,
    pub move_step: f32,
    pub zoom_step: f32,
    pub rotate_step: f32,
    pub wheel_step: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scale_min: 0.5,
            scale_max: 2.0,
            pointer_drag_threshold: 3.0,
            touch_drag_threshold: 5.0,
            resize_sensitivity: 0.005,
            handle_radius: 10.0,
            object_size: 80.0,
            move_step: 10.0,
            zoom_step: 0.1,
            rotate_step: 15.0,
            wheel_step: 0.1,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale_min.is_finite() && self.scale_max.is_finite())
            || self.scale_min <= 0.0
            || self.scale_min > self.scale_max
        {
            return Err(ConfigError::ScaleBounds {
                min: self.scale_min,
                max: self.scale_max,
            });
        }

        let non_negative = [
            ("pointer_drag_threshold", self.pointer_drag_threshold),
            ("touch_drag_threshold", self.touch_drag_threshold),
            ("resize_sensitivity", self.resize_sensitivity),
            ("handle_radius", self.handle_radius),
            ("object_size", self.object_size),
            ("move_step", self.move_step),
            ("zoom_step", self.zoom_step),
            ("rotate_step", self.rotate_step),
            ("wheel_step", self.wheel_step),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "scale_max": 3.0 }"#).unwrap();
        assert_eq!(config.scale_max, 3.0);
        assert_eq!(config.scale_min, 0.5);
        assert_eq!(config.touch_drag_threshold, 5.0);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = EngineConfig::from_json_str(r#"{ "scale_min": 4.0, "scale_max": 1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ScaleBounds { .. }));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let err = EngineConfig::from_json_str(r#"{ "pointer_drag_threshold": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "pointer_drag_threshold", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            EngineConfig::from_json_str("{ nope"),
            Err(ConfigError::Parse(_))
        ));
    }
}
