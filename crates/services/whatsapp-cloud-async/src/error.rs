use reqwest::StatusCode;
use thiserror::Error;

use crate::response::{ErrorResponse, GenericErrorResponse};

/// Errors raised while building an outbound resource
///
/// These indicate malformed input from the caller and are never retried.
/// The caller must fix the input and rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// A type tag that does not name any known variant
    #[error("invalid type {type_name}")]
    InvalidType {
        /// The unrecognized tag
        type_name: String,
    },

    /// The payload slot selected by the type tag is empty
    #[error("{message}")]
    MissingValue {
        /// Name of the missing slot (equal to the type tag)
        field: &'static str,
        /// Human-readable description
        message: String,
    },

    /// A field was supplied that the selected type does not accept
    #[error("{message}")]
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable description
        message: String,
    },

    /// None of the accepted either/or arguments was supplied
    #[error("{0}")]
    MissingArgument(String),

    /// The `button` label of a list action is invalid
    #[error("{0}")]
    InvalidInteractiveActionButton(String),

    /// A reply button (or the reply-button set of an action) is invalid
    #[error("{0}")]
    InvalidInteractiveActionReplyButton(String),

    /// A list section (or the section set of an action) is invalid
    #[error("{0}")]
    InvalidInteractiveActionSection(String),

    /// A list section row is invalid
    #[error("{0}")]
    InvalidInteractiveActionSectionRow(String),

    /// The interactive body is invalid
    #[error("{0}")]
    InvalidInteractiveBody(String),

    /// The interactive footer is invalid
    #[error("{0}")]
    InvalidInteractiveFooter(String),

    /// The interactive header is invalid
    #[error("{0}")]
    InvalidInteractiveHeader(String),

    /// A media reference combines fields its media type does not support
    #[error("{message}")]
    InvalidMedia {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable description
        message: String,
    },
}

impl ResourceError {
    /// Field identifier carried by the error, if any
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingValue { field, .. }
            | Self::InvalidField { field, .. }
            | Self::InvalidMedia { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Human-readable message, identical to the `Display` output
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub(crate) fn missing_value(tag: &'static str) -> Self {
        Self::MissingValue {
            field: tag,
            message: format!("{tag} is required when the type is {tag}"),
        }
    }
}

/// Errors that can occur when using the WhatsApp Cloud API client
#[derive(Debug, Error)]
pub enum WhatsAppError {
    /// The server answered with a status the client cannot turn into a typed envelope
    #[error("HTTP error {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body (capped)
        body: String,
        /// Best-effort parse of an `{"error": {...}}` body
        error_info: Option<GenericErrorResponse>,
    },

    /// Network-level failure
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A request body could not be serialized
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local file error while uploading or downloading media
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request could not be built from the supplied resources
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

impl WhatsAppError {
    /// HTTP status attached to the error, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Characters of a failed response body kept in [`WhatsAppError::Http`]
const BODY_CAP: usize = 400;

/// Builds an [`WhatsAppError::Http`] from a failed response
///
/// The decoded body is capped at [`BODY_CAP`] characters. `error_info` is filled
/// when the body carries the Graph API `{"error": ...}` shape.
#[must_use]
pub fn http_error(status: StatusCode, body: &[u8]) -> WhatsAppError {
    let error_info = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| GenericErrorResponse::recognize(&v));

    WhatsAppError::Http {
        status: status.as_u16(),
        body: String::from_utf8_lossy(body).chars().take(BODY_CAP).collect(),
        error_info,
    }
}
