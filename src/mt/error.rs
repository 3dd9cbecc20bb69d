/// Error types for the machine translation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Provider misconfiguration (missing API token, bad request)
    ConfigError(String),
    /// Malformed language code
    InvalidLocale(String),
    /// Transport-level failure reaching the translation service
    NetworkError(String),
    /// The service answered but translation failed or the response was
    /// unusable
    TranslationError(String),
    /// General error with context
    Other(String),
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::InvalidLocale(msg) => write!(f, "Invalid locale: {}", msg),
            MtError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            MtError::TranslationError(msg) => write!(f, "Translation error: {}", msg),
            MtError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(e: reqwest::Error) -> Self {
        MtError::NetworkError(e.to_string())
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;
