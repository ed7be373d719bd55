use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Default Graph API base URL
pub const WHATSAPP_DEFAULT_BASE: &str = "https://graph.facebook.com";
/// Default Graph API version
pub const WHATSAPP_DEFAULT_API_VERSION: &str = "v19.0";

const ENV_ACCESS_TOKEN: &str = "WHATSAPP_ACCESS_TOKEN";
const ENV_API_BASE: &str = "WHATSAPP_API_BASE";
const ENV_API_VERSION: &str = "WHATSAPP_API_VERSION";

fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration for the WhatsApp Cloud API client
///
/// Debug output automatically redacts `access_token` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct WhatsAppConfig {
    api_base: String,
    api_version: String,
    access_token: Option<SecretString>,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            api_base: env_trimmed(ENV_API_BASE).unwrap_or_else(|| WHATSAPP_DEFAULT_BASE.into()),
            api_version: env_trimmed(ENV_API_VERSION)
                .unwrap_or_else(|| WHATSAPP_DEFAULT_API_VERSION.into()),
            access_token: env_trimmed(ENV_ACCESS_TOKEN).map(SecretString::from),
        }
    }
}

impl WhatsAppConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `WHATSAPP_ACCESS_TOKEN` for bearer authentication
    /// - `WHATSAPP_API_BASE` for a custom base URL (defaults to `https://graph.facebook.com`)
    /// - `WHATSAPP_API_VERSION` for the Graph API version (defaults to `v19.0`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the Graph API version segment (e.g. `v19.0`)
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the access token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(SecretString::from(token.into()));
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the configured API version
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    fn token(&self) -> Option<&str> {
        self.access_token
            .as_ref()
            .map(|s| s.expose_secret().trim())
            .filter(|s| !s.is_empty())
    }
}

/// Configuration trait for the WhatsApp client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::WhatsAppError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), crate::error::WhatsAppError>;
}

impl Config for WhatsAppConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::WhatsAppError> {
        use crate::error::WhatsAppError;

        let mut h = HeaderMap::new();
        if let Some(token) = self.token() {
            h.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| WhatsAppError::Config("Invalid access token value".into()))?,
            );
        }
        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let version = self.api_version.trim_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{version}/{path}")
    }

    fn validate_auth(&self) -> Result<(), crate::error::WhatsAppError> {
        if self.token().is_some() {
            return Ok(());
        }
        Err(crate::error::WhatsAppError::Config(format!(
            "Missing WhatsApp credentials: set {ENV_ACCESS_TOKEN} environment variable"
        )))
    }
}
