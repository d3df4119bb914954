//! Error types for merakiop

use thiserror::Error;

/// Result type alias for merakiop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the library and CLI
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Snmp(#[from] SnmpError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Administrator inputs rejected before any request was sent
    #[error(transparent)]
    AdminRejected(#[from] crate::admin::AdminRequestError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Dashboard API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON response (status {status})")]
    InvalidJson { status: u16 },

    #[error("Invalid response (status {status}): {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("Invalid organization '{0}' for this API key")]
    OrganizationNotPermitted(String),

    #[error("An organization must be selected to complete this request. Run `merakiop org set <ORG>`.")]
    OrganizationRequired,

    #[error("No entry with {key} = {value}")]
    LookupExhausted { key: String, value: String },

    #[error("Network error: {0}")]
    Network(String),
}

impl ApiError {
    /// HTTP status carried by a response-validation failure
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::InvalidJson { status } | ApiError::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// SNMP input errors. Agent and transport failures are soft and never surface here.
#[derive(Debug, Error)]
pub enum SnmpError {
    #[error("Invalid MAC address '{0}'")]
    InvalidMac(String),

    #[error("Invalid OID '{0}'")]
    InvalidOid(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `merakiop init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("API key not configured. Run `merakiop init` to set up your API key.")]
    MissingApiKey,

    #[error("SNMP credentials not configured. Run `merakiop init` to add them.")]
    MissingSnmpCredentials,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
