use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Position API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid config value for {field}='{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid birth data: {field}='{value}': {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Position source '{source_name}' failed: {message}")]
    PositionSourceError {
        source_name: String,
        message: String,
    },

    #[error("Chart processing error: {message}")]
    ProcessingError { message: String },
}

impl EngineError {
    /// True for failures that the engine absorbs by moving on to the
    /// next position source instead of surfacing to the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::ApiError(_) | EngineError::PositionSourceError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EngineError::ApiError(_) => {
                "The position service could not be reached. The chart was computed from the built-in approximation instead.".to_string()
            }
            EngineError::ValidationError { field, reason, .. } => {
                format!("Birth data field '{}' is invalid: {}", field, reason)
            }
            EngineError::MissingConfigError { field } => {
                format!("Configuration is missing the '{}' field", field)
            }
            EngineError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_source_errors_are_recoverable() {
        let err = EngineError::PositionSourceError {
            source_name: "remote".to_string(),
            message: "timed out".to_string(),
        };
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_validation_errors_are_not_recoverable() {
        let err = EngineError::ValidationError {
            field: "latitude".to_string(),
            value: "1234".to_string(),
            reason: "out of range".to_string(),
        };
        assert!(!err.is_recoverable());
        assert!(err.user_friendly_message().contains("latitude"));
    }
}
