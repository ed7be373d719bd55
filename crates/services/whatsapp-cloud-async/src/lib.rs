#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

//! Async WhatsApp Cloud API client with validated outbound resources, typed
//! response classification, and wiremock tests.
//!
//! Outbound payloads (template parameters, components, interactive messages,
//! media references) are validated when they are built, so a malformed
//! resource never reaches the network. Replies are classified into typed data,
//! a typed upstream error, or neither; upstream errors are returned as data.

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Response envelope and typed payloads
pub mod response;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Outbound resource types
pub mod types;

pub use crate::client::{Client, DownloadedFile, RequestBody};
pub use crate::config::WhatsAppConfig;
pub use crate::error::{ResourceError, WhatsAppError};
pub use crate::response::{Response, ResponseOutcome};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::response::{
        DataResponse, ErrorResponse, GenericErrorResponse, Response, ResponseOutcome,
    };
    pub use crate::types::*;
    pub use crate::{Client, ResourceError, WhatsAppConfig, WhatsAppError};
}
