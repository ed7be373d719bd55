use serde_json::Value;

use super::ErrorResponse;
use super::fields::{self, FieldSetter};

/// Graph API error object
///
/// Recognized from any non-null `"error"` key. An object is unpacked field by
/// field; a bare value (`{"error": "..."}`) becomes the message. Every field is
/// best-effort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericErrorResponse {
    /// Numeric error code
    pub code: Option<i64>,
    /// Finer-grained code (`error_subcode` on the wire)
    pub subcode: Option<i64>,
    /// Human-readable message
    pub message: Option<String>,
    /// Error class, e.g. `OAuthException` (`type` on the wire)
    pub kind: Option<String>,
    /// Extra details (`data`, or `error_data` when `data` is absent)
    pub data: Option<Value>,
    /// Trace id for support requests
    pub fbtrace_id: Option<String>,
}

const ERROR_FIELDS: &[(&str, FieldSetter<GenericErrorResponse>)] = &[
    ("code", |e, v| e.code = fields::int(v)),
    ("error_subcode", |e, v| e.subcode = fields::int(v)),
    ("message", |e, v| e.message = fields::string(v)),
    ("type", |e, v| e.kind = fields::string(v)),
    ("error_data", |e, v| e.data = Some(v.clone())),
    ("data", |e, v| e.data = Some(v.clone())),
    ("fbtrace_id", |e, v| e.fbtrace_id = fields::string(v)),
];

impl GenericErrorResponse {
    /// Parses the fields of an already unwrapped error object
    #[must_use]
    pub fn from_error_object(obj: &Value) -> Self {
        fields::map_fields(obj, ERROR_FIELDS)
    }
}

impl ErrorResponse for GenericErrorResponse {
    fn recognize(raw: &Value) -> Option<Self> {
        if !fields::has_key(raw, "error") {
            return None;
        }
        let error = &raw["error"];
        if error.is_object() {
            return Some(Self::from_error_object(error));
        }
        Some(Self {
            message: fields::string(error),
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwraps_error_key() {
        let raw = json!({
            "error": {
                "message": "(#131030) Recipient phone number not in allowed list",
                "type": "OAuthException",
                "code": 131_030,
                "error_subcode": 2_494_010,
                "error_data": { "messaging_product": "whatsapp", "details": "Recipient not allowed" },
                "fbtrace_id": "AFZgW89DkR0hLRFJP40NTd6"
            }
        });

        let err = GenericErrorResponse::recognize(&raw).unwrap();
        assert_eq!(err.code, Some(131_030));
        assert_eq!(err.subcode, Some(2_494_010));
        assert_eq!(err.kind.as_deref(), Some("OAuthException"));
        assert_eq!(
            err.message.as_deref(),
            Some("(#131030) Recipient phone number not in allowed list")
        );
        assert_eq!(err.data.unwrap()["details"], "Recipient not allowed");
        assert_eq!(err.fbtrace_id.as_deref(), Some("AFZgW89DkR0hLRFJP40NTd6"));
    }

    #[test]
    fn data_wins_over_error_data() {
        let err = GenericErrorResponse::from_error_object(&json!({
            "error_data": "legacy",
            "data": "current"
        }));
        assert_eq!(err.data, Some(json!("current")));
    }

    #[test]
    fn no_error_key_is_no_match() {
        assert!(GenericErrorResponse::recognize(&json!({ "id": "1" })).is_none());
        assert!(GenericErrorResponse::recognize(&json!({ "error": null })).is_none());
    }

    #[test]
    fn flat_error_value_becomes_message() {
        let err = GenericErrorResponse::recognize(&json!({ "error": "flat string" })).unwrap();
        assert_eq!(err.message.as_deref(), Some("flat string"));
        assert_eq!(err.code, None);

        let err = GenericErrorResponse::recognize(&json!({ "error": 190 })).unwrap();
        assert_eq!(err.message.as_deref(), Some("190"));

        let err = GenericErrorResponse::recognize(&json!({ "error": [] })).unwrap();
        assert_eq!(err, GenericErrorResponse::default());
    }

    #[test]
    fn missing_fields_stay_empty() {
        let err = GenericErrorResponse::recognize(&json!({ "error": { "code": 100 } })).unwrap();
        assert_eq!(err.code, Some(100));
        assert_eq!(err.message, None);
        assert_eq!(err.subcode, None);
    }
}
