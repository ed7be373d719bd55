//! Typed classification of raw API payloads
//!
//! Each endpoint pairs a data recognizer with an error recognizer. A raw JSON
//! object is classified as exactly one of: typed data, typed upstream error, or
//! unclassified (neither recognizer matched). Upstream errors are returned as
//! data, never raised.

/// Business profile payloads
pub mod business_profile;
/// Graph API error payloads
pub mod error;
pub(crate) mod fields;
/// Media payloads
pub mod media;
/// Send-message payloads
pub mod message;
/// Phone number payloads
pub mod phone_number;
/// `{"success": ...}` payloads
pub mod success;
/// Template payloads
pub mod template;

use serde_json::Value;

pub use business_profile::BusinessProfileDataResponse;
pub use error::GenericErrorResponse;
pub use media::MediaDataResponse;
pub use message::{ContactDataResponse, MessageDataResponse, MessageIdResponse};
pub use phone_number::{PhoneNumberDataResponse, PhoneNumbersDataResponse};
pub use success::SuccessResponse;
pub use template::{Paging, TemplateDataResponse, TemplatesDataResponse};

/// Recognizer for a success payload
pub trait DataResponse: Sized {
    /// Returns the typed payload, or `None` when the discriminating key is absent
    fn recognize(raw: &Value) -> Option<Self>;
}

/// Recognizer for an upstream error payload
pub trait ErrorResponse: Sized {
    /// Returns the typed error, or `None` when the payload is not an error
    fn recognize(raw: &Value) -> Option<Self>;
}

/// Classification of one payload
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome<D, E> {
    /// The data recognizer matched
    Data(D),
    /// The error recognizer matched
    Error(E),
    /// Neither recognizer matched; still counts as ok
    Unclassified,
}

/// Envelope pairing the raw payload with its classification
#[derive(Debug, Clone, PartialEq)]
pub struct Response<D, E = GenericErrorResponse> {
    raw_response: Value,
    outcome: ResponseOutcome<D, E>,
}

impl<D: DataResponse, E: ErrorResponse> Response<D, E> {
    /// Classifies a raw payload
    ///
    /// The error recognizer takes precedence: a payload with an `"error"` key is
    /// never reported as data.
    #[must_use]
    pub fn classify(raw_response: Value) -> Self {
        let outcome = if let Some(error) = E::recognize(&raw_response) {
            ResponseOutcome::Error(error)
        } else if let Some(data) = D::recognize(&raw_response) {
            ResponseOutcome::Data(data)
        } else {
            tracing::warn!(
                data = std::any::type_name::<D>(),
                "response matched neither data nor error shape"
            );
            ResponseOutcome::Unclassified
        };

        Self {
            raw_response,
            outcome,
        }
    }

    /// Classifies a transport result; an empty body is unclassified
    #[must_use]
    pub fn from_transport(raw_response: Option<Value>) -> Self {
        Self::classify(raw_response.unwrap_or_default())
    }
}

impl<D, E> Response<D, E> {
    /// `true` unless the error recognizer matched
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        !self.is_error()
    }

    /// `true` when the error recognizer matched
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.outcome, ResponseOutcome::Error(_))
    }

    /// Typed data, if the data recognizer matched
    #[must_use]
    pub const fn data(&self) -> Option<&D> {
        match &self.outcome {
            ResponseOutcome::Data(data) => Some(data),
            _ => None,
        }
    }

    /// Typed error, if the error recognizer matched
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match &self.outcome {
            ResponseOutcome::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Classification
    #[must_use]
    pub const fn outcome(&self) -> &ResponseOutcome<D, E> {
        &self.outcome
    }

    /// Payload as received
    #[must_use]
    pub const fn raw_response(&self) -> &Value {
        &self.raw_response
    }

    /// Consumes the envelope into its classification
    #[must_use]
    pub fn into_outcome(self) -> ResponseOutcome<D, E> {
        self.outcome
    }

    /// Converts into a `Result`; an unclassified payload becomes `Ok(None)`
    ///
    /// # Errors
    ///
    /// Returns the typed upstream error when the error recognizer matched.
    pub fn into_result(self) -> Result<Option<D>, E> {
        match self.outcome {
            ResponseOutcome::Data(data) => Ok(Some(data)),
            ResponseOutcome::Error(error) => Err(error),
            ResponseOutcome::Unclassified => Ok(None),
        }
    }
}
