use crate::{ConfigError, PUMP_ANGLE_PER_SPEED};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};

/// Tunables of the process. The topology itself is fixed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// Interval between two ticks
    pub tick_interval_ms: u64,

    /// Initial text of the level input
    pub default_level: String,

    /// Initial text of the speed input
    pub default_speed: String,

    /// Pump rotation in degrees per unit of speed and tick
    pub pump_angle_per_speed: f64,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 30,
            default_level: "100".into(),
            default_speed: "1.0".into(),
            pump_angle_per_speed: PUMP_ANGLE_PER_SPEED,
        }
    }
}

impl ProcessConfig {
    pub fn load_from_json<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&data).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values which would stall or break the process
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidTickInterval {
                tick_interval_ms: self.tick_interval_ms,
            });
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: ProcessConfig = serde_json::from_str(r#"{ "tick_interval_ms": 50 }"#).unwrap();
        assert_eq!(cfg.tick_interval(), Duration::from_millis(50));
        assert_eq!(cfg.default_level, "100");
        assert_eq!(cfg.default_speed, "1.0");
        assert_eq!(cfg.pump_angle_per_speed, 15.);
    }

    #[test]
    fn test_load_from_json() {
        let path = std::env::temp_dir().join(format!("procsim_cfg_{}.json", std::process::id()));
        fs::write(&path, r#"{ "default_speed": "2.5" }"#).unwrap();

        let cfg = ProcessConfig::load_from_json(&path).unwrap();
        assert_eq!(cfg.default_speed, "2.5");
        assert_eq!(cfg.tick_interval_ms, 30);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_zero_tick_interval_fails() {
        let path =
            std::env::temp_dir().join(format!("procsim_cfg_zero_{}.json", std::process::id()));
        fs::write(&path, r#"{ "tick_interval_ms": 0 }"#).unwrap();

        let err = ProcessConfig::load_from_json(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTickInterval { tick_interval_ms: 0 }
        ));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_validate() {
        assert!(ProcessConfig::default().validate().is_ok());
        let cfg = ProcessConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = ProcessConfig::load_from_json("/nonexistent/procsim.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
