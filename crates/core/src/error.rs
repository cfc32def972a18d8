//! Error taxonomy
//!
//! Only the startup errors are ever returned to the caller. Sensor errors
//! are logged and absorbed by the sampler.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    /// One metric source failed this tick; its metrics read as unavailable
    #[error("sensor '{source_id}' unavailable: {reason}")]
    SensorUnavailable { source_id: String, reason: String },

    /// A sprite failed to load at startup
    #[error("sprite '{name}' could not be loaded from {}: {reason}", .path.display())]
    ResourceMissing {
        name: String,
        path: PathBuf,
        reason: String,
    },

    /// The configuration cannot be used (e.g. the resource root is not a directory)
    #[error("invalid configuration: {0}")]
    ConfigurationInvalid(String),
}

impl StatusError {
    pub fn sensor(source_id: &str, err: anyhow::Error) -> Self {
        StatusError::SensorUnavailable {
            source_id: source_id.to_string(),
            reason: format!("{:#}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_error_message() {
        let err = StatusError::sensor("battery", anyhow::anyhow!("no BAT0"));
        assert_eq!(err.to_string(), "sensor 'battery' unavailable: no BAT0");
    }

    #[test]
    fn test_resource_error_names_the_path() {
        let missing = StatusError::ResourceMissing {
            name: "stbar.png".to_string(),
            path: PathBuf::from("/tmp/graphics/stbar.png"),
            reason: "not found".to_string(),
        };
        assert!(missing.to_string().contains("/tmp/graphics/stbar.png"));
        assert_eq!(
            StatusError::ConfigurationInvalid("bad".to_string()).to_string(),
            "invalid configuration: bad"
        );
    }
}
