//! Configuration management for merakiop

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use async_snmp::{AuthProtocol, PrivProtocol};

use crate::error::{ConfigError, Result};
use crate::snmp::SnmpCredentials;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Meraki Dashboard API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Default organization (name or id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,

    /// Dashboard API base URL override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    /// Cloud SNMP credentials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snmp: Option<SnmpConfig>,
}

/// SNMPv3 settings as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnmpConfig {
    pub user: String,
    pub auth_password: String,
    pub priv_password: String,

    /// Authentication protocol (MD5, SHA, SHA-256, ...)
    #[serde(default = "default_auth_protocol")]
    pub auth_protocol: String,

    /// Privacy protocol (DES, AES, AES-256, ...)
    #[serde(default = "default_priv_protocol")]
    pub priv_protocol: String,
}

fn default_auth_protocol() -> String {
    "SHA".to_string()
}

fn default_priv_protocol() -> String {
    "AES".to_string()
}

impl SnmpConfig {
    pub fn new(
        user: impl Into<String>,
        auth_password: impl Into<String>,
        priv_password: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            auth_password: auth_password.into(),
            priv_password: priv_password.into(),
            auth_protocol: default_auth_protocol(),
            priv_protocol: default_priv_protocol(),
        }
    }

    /// Parse the stored protocol names into poller credentials
    pub fn credentials(&self) -> Result<SnmpCredentials> {
        let auth: AuthProtocol = self
            .auth_protocol
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("{}", e)))?;
        let privacy: PrivProtocol = self
            .priv_protocol
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("{}", e)))?;

        Ok(SnmpCredentials::new(
            self.user.clone(),
            self.auth_password.clone(),
            self.priv_password.clone(),
        )
        .with_protocols(auth, privacy))
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".merakiop").join("config.yaml"))
    }

    /// Resolve an explicit path or fall back to the default
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load configuration from `path`, or the default path when `None`
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::default_path()?)
    }

    /// Save configuration to `path`, or the default path when `None`
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file holds the API key and SNMP secrets
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Validate that an API key is present and return it
    pub fn validate_auth(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingApiKey.into())
    }

    /// SNMP credentials, or `MissingSnmpCredentials`
    pub fn snmp_credentials(&self) -> Result<SnmpCredentials> {
        self.snmp
            .as_ref()
            .ok_or(ConfigError::MissingSnmpCredentials)?
            .credentials()
    }
}
