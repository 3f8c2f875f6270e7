use crate::lifecycle::ConfigError;
use serde::Deserialize;

/// Environment variable overriding [`ControllerConfig::buffer_size`].
pub const BUFFER_SIZE_ENV: &str = "SPACE_SHARE_BUFFER_SIZE";

const DEFAULT_BUFFER_SIZE: usize = 32;

/// Tunables for the local cloud controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Capacity of the controller's request channel. Must be greater than zero.
    pub buffer_size: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ControllerConfig {
    /// Loads the defaults, overridden by `SPACE_SHARE_BUFFER_SIZE` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(BUFFER_SIZE_ENV) {
            config.buffer_size = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBufferSize(raw.clone()))?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::InvalidBufferSize("0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_override() {
        let config = ControllerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ControllerConfig::default());
        assert_eq!(config.buffer_size, 32);
    }

    #[test]
    fn test_override_from_lookup() {
        let config = ControllerConfig::from_lookup(|key| {
            (key == BUFFER_SIZE_ENV).then(|| " 8 ".to_string())
        })
        .unwrap();
        assert_eq!(config.buffer_size, 8);
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        let zero = ControllerConfig::from_lookup(|_| Some("0".to_string()));
        assert_eq!(zero, Err(ConfigError::InvalidBufferSize("0".to_string())));

        let garbage = ControllerConfig::from_lookup(|_| Some("lots".to_string()));
        assert_eq!(garbage, Err(ConfigError::InvalidBufferSize("lots".to_string())));
    }
}
