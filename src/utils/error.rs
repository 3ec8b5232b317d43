use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeetsError {
    #[error("Venue request failed: {message}")]
    FetchError {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Venue response could not be decoded: {message}")]
    DecodeError {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl MeetsError {
    pub fn fetch(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::FetchError {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn decode(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::DecodeError {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::FetchError { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::DecodeError { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::FetchError { .. } => {
                "Check network connectivity and that the bikermeets service is reachable"
            }
            Self::DecodeError { .. } => {
                "The upstream response format may have changed; check the service endpoint"
            }
            Self::IoError(_) => "Check file permissions and that the path exists",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration value and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MeetsError>;
