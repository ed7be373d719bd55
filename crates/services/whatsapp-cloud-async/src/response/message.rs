use serde_json::Value;

use super::DataResponse;
use super::fields::{self, FieldSetter};

/// Recipient echo of a sent message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDataResponse {
    /// Number as supplied in `to`
    pub input: Option<String>,
    /// Resolved WhatsApp id
    pub wa_id: Option<String>,
}

const CONTACT_FIELDS: &[(&str, FieldSetter<ContactDataResponse>)] = &[
    ("input", |c, v| c.input = fields::string(v)),
    ("wa_id", |c, v| c.wa_id = fields::string(v)),
];

/// Id of a sent message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageIdResponse {
    /// `wamid.` message id
    pub id: Option<String>,
    /// Delivery pacing status, present for template messages
    pub message_status: Option<String>,
}

const MESSAGE_ID_FIELDS: &[(&str, FieldSetter<MessageIdResponse>)] = &[
    ("id", |m, v| m.id = fields::string(v)),
    ("message_status", |m, v| m.message_status = fields::string(v)),
];

/// Result of `POST {sender_id}/messages`
///
/// Recognized by the `messages` key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDataResponse {
    /// Always `whatsapp`
    pub messaging_product: Option<String>,
    /// One entry per recipient
    pub contacts: Vec<ContactDataResponse>,
    /// One entry per message
    pub messages: Vec<MessageIdResponse>,
}

const MESSAGE_FIELDS: &[(&str, FieldSetter<MessageDataResponse>)] = &[
    ("messaging_product", |m, v| m.messaging_product = fields::string(v)),
    ("contacts", |m, v| {
        m.contacts = fields::list(v, |c| fields::map_fields(c, CONTACT_FIELDS));
    }),
    ("messages", |m, v| {
        m.messages = fields::list(v, |i| fields::map_fields(i, MESSAGE_ID_FIELDS));
    }),
];

impl MessageDataResponse {
    /// Id of the first (usually only) message
    #[must_use]
    pub fn message_id(&self) -> Option<&str> {
        self.messages.first().and_then(|m| m.id.as_deref())
    }
}

impl DataResponse for MessageDataResponse {
    fn recognize(raw: &Value) -> Option<Self> {
        fields::has_key(raw, "messages").then(|| fields::map_fields(raw, MESSAGE_FIELDS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_contacts_and_messages() {
        let data = MessageDataResponse::recognize(&json!({
            "messaging_product": "whatsapp",
            "contacts": [{ "input": "1234", "wa_id": "1234" }],
            "messages": [{ "id": "wamid.1", "message_status": "accepted" }]
        }))
        .unwrap();

        assert_eq!(data.messaging_product.as_deref(), Some("whatsapp"));
        assert_eq!(
            data.contacts,
            vec![ContactDataResponse {
                input: Some("1234".into()),
                wa_id: Some("1234".into())
            }]
        );
        assert_eq!(data.message_id(), Some("wamid.1"));
        assert_eq!(data.messages[0].message_status.as_deref(), Some("accepted"));
    }

    #[test]
    fn matched_shape_with_missing_contacts() {
        let data = MessageDataResponse::recognize(&json!({ "messages": [{ "id": "wamid.2" }] })).unwrap();
        assert!(data.contacts.is_empty());
        assert_eq!(data.message_id(), Some("wamid.2"));
    }

    #[test]
    fn without_messages_key_no_match() {
        assert!(MessageDataResponse::recognize(&json!({ "contacts": [] })).is_none());
    }
}
