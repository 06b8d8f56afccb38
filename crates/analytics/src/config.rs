//! Analytics configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional - when any piece is missing or invalid the adapter runs
//! permanently in fallback mode, serving placeholder data:
//!
//! - `GA4_PROPERTY_ID` - Numeric GA4 property id to report against
//! - `GA4_CREDENTIALS` - Inline service-account key JSON
//! - `GA4_CREDENTIALS_FILE` - Path to a service-account key file
//!   (used when `GA4_CREDENTIALS` is not set)

use thiserror::Error;

use meridian_core::PropertyId;

use crate::ga4::ServiceAccountKey;

/// Configuration errors that can occur during loading.
///
/// These never propagate out of [`Ga4Config::from_env`]; they exist to give
/// the rejection log messages a precise cause.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Unreadable credentials file {0}: {1}")]
    UnreadableFile(String, String),
}

/// GA4 reporting configuration.
///
/// Implements `Debug` manually to keep the credential key out of logs.
#[derive(Clone)]
pub struct Ga4Config {
    /// Property the reports target.
    pub property_id: PropertyId,
    /// Service-account key used to construct the Data API client.
    pub credentials: ServiceAccountKey,
}

impl std::fmt::Debug for Ga4Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ga4Config")
            .field("property_id", &self.property_id)
            .field("client_email", &self.credentials.client_email)
            .finish_non_exhaustive()
    }
}

impl Ga4Config {
    /// Load GA4 configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// Returns `None` when the property id or credentials are absent (a
    /// supported deployment mode, logged at debug) or invalid (logged at
    /// warn). Never errors: a misconfigured dashboard still boots and
    /// serves placeholder analytics.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        match Self::try_from_env() {
            Ok(Some(config)) => Some(config),
            Ok(None) => {
                tracing::debug!("GA4 not configured, analytics will serve placeholder data");
                None
            }
            Err(error) => {
                tracing::warn!(%error, "GA4 configuration rejected, analytics will serve placeholder data");
                None
            }
        }
    }

    fn try_from_env() -> Result<Option<Self>, ConfigError> {
        let property = get_optional_env("GA4_PROPERTY_ID");
        let credentials_json = load_credentials_json()?;

        let (Some(property), Some(json)) = (property, credentials_json) else {
            return Ok(None);
        };

        let property_id = PropertyId::parse(property)
            .map_err(|e| ConfigError::InvalidEnvVar("GA4_PROPERTY_ID".to_string(), e.to_string()))?;
        let credentials = ServiceAccountKey::from_json(&json)
            .map_err(|e| ConfigError::InvalidEnvVar("GA4_CREDENTIALS".to_string(), e.to_string()))?;

        Ok(Some(Self {
            property_id,
            credentials,
        }))
    }
}

/// Load the credentials JSON from the inline variable or the key file.
fn load_credentials_json() -> Result<Option<String>, ConfigError> {
    if let Some(inline) = get_optional_env("GA4_CREDENTIALS") {
        return Ok(Some(inline));
    }

    let Some(path) = get_optional_env("GA4_CREDENTIALS_FILE") else {
        return Ok(None);
    };
    std::fs::read_to_string(&path)
        .map(Some)
        .map_err(|e| ConfigError::UnreadableFile(path, e.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
