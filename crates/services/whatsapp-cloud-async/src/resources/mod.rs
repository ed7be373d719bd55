//! Endpoint wrappers for the WhatsApp Cloud API
//!
//! Each wrapper builds the request payload, hands it to
//! [`Client::send_request`](crate::Client::send_request) and classifies the
//! reply into a [`Response`](crate::response::Response).

/// Business profile endpoints
pub mod business_profile;
/// Media endpoints
pub mod media;
/// Message endpoints
pub mod messages;
/// Phone number endpoints
pub mod phone_numbers;
/// Template management endpoints
pub mod templates;

use serde::Serialize;

use crate::client::RequestBody;
use crate::error::WhatsAppError;

pub use business_profile::BusinessProfile;
pub use media::MediaFiles;
pub use messages::Messages;
pub use phone_numbers::PhoneNumbers;
pub use templates::Templates;

pub(crate) fn json_body<T: Serialize>(body: &T) -> Result<RequestBody, WhatsAppError> {
    Ok(RequestBody::Json(serde_json::to_value(body)?))
}
