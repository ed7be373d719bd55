use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures::StreamExt;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, multipart::Form};
use serde_json::Value;
use tokio::io::AsyncWriteExt;

use crate::{
    config::Config,
    error::{WhatsAppError, http_error},
};

/// Payload attached to a request
#[derive(Debug, Default)]
pub enum RequestBody {
    /// No payload
    #[default]
    None,
    /// JSON body
    Json(Value),
    /// URL query parameters
    Query(Vec<(String, String)>),
    /// `multipart/form-data` body
    Multipart(Form),
}

/// Result of [`Client::download_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    /// HTTP status of the download
    pub status_code: u16,
    /// Where the body was written
    pub path: PathBuf,
}

/// WhatsApp Cloud API client
///
/// The client is generic over a [`Config`] implementation that provides authentication
/// and API configuration. Requests are sent one at a time and never retried.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl Client<crate::config::WhatsAppConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables:
    /// - `WHATSAPP_ACCESS_TOKEN` for bearer authentication
    /// - `WHATSAPP_API_BASE` for a custom Graph API base URL
    /// - `WHATSAPP_API_VERSION` for the Graph API version
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::WhatsAppConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Sends one request to `endpoint` (relative to the versioned API base)
    ///
    /// Returns the parsed JSON body whatever the status, so upstream errors reach
    /// the caller as data. An empty or non-JSON body yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`WhatsAppError::Config`] when credentials are missing,
    /// [`WhatsAppError::Reqwest`] on network failure, and [`WhatsAppError::Http`]
    /// when a non-2xx response carries no JSON body.
    pub async fn send_request(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
        headers: Option<HeaderMap>,
    ) -> Result<Option<Value>, WhatsAppError> {
        self.config.validate_auth()?;

        let url = self.config.url(endpoint);
        let mut req = self
            .http
            .request(method.clone(), &url)
            .headers(self.config.headers()?);
        if let Some(extra) = headers {
            req = req.headers(extra);
        }
        req = match body {
            RequestBody::None => req,
            RequestBody::Json(json) => req.json(&json),
            RequestBody::Query(params) => req.query(&params),
            RequestBody::Multipart(form) => req.multipart(form),
        };

        tracing::debug!(%method, %url, "sending request");
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(status = status.as_u16(), len = bytes.len(), "received response");

        match json_body(&bytes) {
            Some(json) => Ok(Some(json)),
            None if status.is_success() => Ok(None),
            None => Err(http_error(status, &bytes)),
        }
    }

    /// Streams the body at `url` (an absolute media URL) into `path`
    ///
    /// # Errors
    ///
    /// Returns [`WhatsAppError::Http`] for a non-2xx status (with the parsed
    /// Graph error when present), [`WhatsAppError::Io`] when the file cannot be
    /// written, and [`WhatsAppError::Reqwest`] on network failure.
    pub async fn download_file(
        &self,
        url: &str,
        content_type: Option<&str>,
        path: impl AsRef<Path>,
    ) -> Result<DownloadedFile, WhatsAppError> {
        self.config.validate_auth()?;

        let mut headers = self.config.headers()?;
        if let Some(content_type) = content_type {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_str(content_type)
                    .map_err(|_| WhatsAppError::Config(format!("Invalid content type {content_type}")))?,
            );
        }

        tracing::debug!(%url, "downloading file");
        let response = self.http.get(url).headers(headers).send().await?;
        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await?;
            return Err(http_error(status, &bytes));
        }

        let path = path.as_ref().to_path_buf();
        let mut file = tokio::fs::File::create(&path).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;
        tracing::debug!(path = %path.display(), "download complete");

        Ok(DownloadedFile {
            status_code: status.as_u16(),
            path,
        })
    }
}

fn json_body(bytes: &Bytes) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice(bytes).ok()
}
