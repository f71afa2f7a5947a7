use thiserror::Error;

/// Errors surfaced by the recommendation engine and its boundary helpers
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The country/city catalog is missing or holds no entries.
    /// No candidates can ever be produced without it.
    #[error("catalog missing or empty: {message}")]
    CatalogUnavailable { message: String },

    /// Rejected at the boundary before reaching the engine
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("trip not found: {id}")]
    TripNotFound { id: u64 },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("TOML error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, RecommendError>;

impl RecommendError {
    pub fn catalog_unavailable<S: Into<String>>(message: S) -> Self {
        Self::CatalogUnavailable {
            message: message.into(),
        }
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// 400-class failures: the caller can fix them by changing its input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RecommendError::CatalogUnavailable { .. }
                | RecommendError::InvalidInput { .. }
                | RecommendError::TripNotFound { .. }
        )
    }

    /// Message safe to show to the end user.
    /// Names the missing precondition, never internals.
    pub fn user_message(&self) -> String {
        match self {
            RecommendError::CatalogUnavailable { message } => {
                format!("Catalog missing or empty ({message}). Add cities to the country catalog file.")
            }
            RecommendError::InvalidInput { message } => message.clone(),
            RecommendError::TripNotFound { .. } => "trip not found".to_string(),
            RecommendError::Config { message } => format!("Invalid engine configuration: {message}"),
            RecommendError::Io { .. } => "Unable to read an input file.".to_string(),
            RecommendError::Json { source } => format!("Malformed JSON input: {source}"),
            RecommendError::Toml { source } => format!("Malformed configuration file: {source}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_unavailable_is_client_error() {
        let err = RecommendError::catalog_unavailable("no entries");
        assert!(err.is_client_error());
        assert!(err.user_message().contains("Catalog missing or empty"));
        assert_eq!(err.to_string(), "catalog missing or empty: no entries");
    }

    #[test]
    fn config_error_is_not_client_error() {
        let err = RecommendError::config("per_country_cap must be at least 1");
        assert!(!err.is_client_error());
    }
}
