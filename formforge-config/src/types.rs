//! Configuration types

use formforge_drag::{ActivationConstraint, PreviewPolicy};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Top-level formforge configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// `EnvFilter` directive used when neither `--debug` nor `RUST_LOG` is set
    pub log_level: String,
    pub drag: DragSettings,
    pub export: ExportSettings,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            drag: DragSettings::default(),
            export: ExportSettings::default(),
        }
    }
}

impl BuilderConfig {
    /// Check values that deserialize fine but make no sense.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::invalid_value("log_level", "must not be empty"));
        }
        let tolerance = self.drag.activation_tolerance_px;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::invalid_value(
                "drag.activation_tolerance_px",
                format!("must be a non-negative number, got {tolerance}"),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    pub preview_policy: PreviewPolicy,
    pub activation_delay_ms: u64,
    pub activation_tolerance_px: f64,
}

impl Default for DragSettings {
    fn default() -> Self {
        let activation = ActivationConstraint::default();
        Self {
            preview_policy: PreviewPolicy::default(),
            activation_delay_ms: activation.delay_ms,
            activation_tolerance_px: activation.tolerance_px,
        }
    }
}

impl DragSettings {
    /// Constraint gating recorded presses in `formforge drag`.
    pub fn activation(&self) -> ActivationConstraint {
        ActivationConstraint {
            delay_ms: self.activation_delay_ms,
            tolerance_px: self.activation_tolerance_px,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_pointer_sensor() {
        let config = BuilderConfig::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.drag.preview_policy, PreviewPolicy::Optimistic);
        assert_eq!(config.drag.activation(), ActivationConstraint::default());
        assert!(config.export.pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_tolerance_is_rejected() {
        let mut config = BuilderConfig::default();
        config.drag.activation_tolerance_px = -1.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref key, .. } if key == "drag.activation_tolerance_px"
        ));
    }

    #[test]
    fn test_blank_log_level_is_rejected() {
        let config = BuilderConfig {
            log_level: "  ".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
