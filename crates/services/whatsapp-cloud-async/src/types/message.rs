//! Outbound message envelope for `POST {sender_id}/messages`

use serde::Serialize;

use super::contact::Contact;
use super::interactive::Interactive;
use super::media::{Media, MediaType};
use super::template::Template;
use super::values::Location;

/// Value of `messaging_product` on every request
pub const MESSAGING_PRODUCT: &str = "whatsapp";
/// Value of `recipient_type` on every message
pub const RECIPIENT_TYPE_INDIVIDUAL: &str = "individual";

/// Body of a text message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBody {
    /// Message text
    pub body: String,
    /// Render a link preview for the first URL in `body`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<bool>,
}

/// Reaction to a received message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reaction {
    /// Message being reacted to
    pub message_id: String,
    /// Emoji; an empty string removes the reaction
    pub emoji: String,
}

/// Payload of a message, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    /// Plain text
    Text {
        /// Text body
        text: TextBody,
    },
    /// Location pin
    Location {
        /// Coordinates and labels
        location: Location,
    },
    /// Image
    Image {
        /// Image reference
        image: Media,
    },
    /// Audio
    Audio {
        /// Audio reference
        audio: Media,
    },
    /// Video
    Video {
        /// Video reference
        video: Media,
    },
    /// Document
    Document {
        /// Document reference
        document: Media,
    },
    /// Sticker
    Sticker {
        /// Sticker reference
        sticker: Media,
    },
    /// Contact cards
    Contacts {
        /// Cards to share
        contacts: Vec<Contact>,
    },
    /// Emoji reaction
    Reaction {
        /// Reaction payload
        reaction: Reaction,
    },
    /// Interactive list or buttons
    Interactive {
        /// Interactive payload
        interactive: Interactive,
    },
    /// Pre-approved template
    Template {
        /// Template payload
        template: Template,
    },
}

impl MessageContent {
    /// Text message without link preview
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text {
            text: TextBody {
                body: body.into(),
                preview_url: None,
            },
        }
    }

    /// Media message; the variant follows the media type
    #[must_use]
    pub fn media(media: Media) -> Self {
        match media.media_type() {
            MediaType::Image => Self::Image { image: media },
            MediaType::Audio => Self::Audio { audio: media },
            MediaType::Video => Self::Video { video: media },
            MediaType::Document => Self::Document { document: media },
            MediaType::Sticker => Self::Sticker { sticker: media },
        }
    }
}

/// Reply-to context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageContext {
    /// Id of the message being replied to
    pub message_id: String,
}

/// A message addressed to one recipient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRequest {
    messaging_product: &'static str,
    to: String,
    recipient_type: &'static str,
    #[serde(flatten)]
    content: MessageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<MessageContext>,
}

impl MessageRequest {
    /// Message to `to` (phone number or WhatsApp id)
    #[must_use]
    pub fn new(to: impl Into<String>, content: MessageContent) -> Self {
        Self {
            messaging_product: MESSAGING_PRODUCT,
            to: to.into(),
            recipient_type: RECIPIENT_TYPE_INDIVIDUAL,
            content,
            context: None,
        }
    }

    /// Marks the message as a reply
    #[must_use]
    pub fn with_reply_to(mut self, message_id: Option<impl Into<String>>) -> Self {
        self.context = message_id.map(|id| MessageContext {
            message_id: id.into(),
        });
        self
    }

    /// Recipient
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Payload
    #[must_use]
    pub const fn content(&self) -> &MessageContent {
        &self.content
    }
}

/// Body of a read receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadMessageRequest {
    messaging_product: &'static str,
    status: &'static str,
    message_id: String,
}

impl ReadMessageRequest {
    /// Marks `message_id` as read
    #[must_use]
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            messaging_product: MESSAGING_PRODUCT,
            status: "read",
            message_id: message_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::media::MediaSource;
    use serde_json::json;

    #[test]
    fn text_message_matches_wire_shape() {
        let req = MessageRequest::new("56789", MessageContent::text("hola"));
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "messaging_product": "whatsapp",
                "to": "56789",
                "recipient_type": "individual",
                "type": "text",
                "text": { "body": "hola" }
            })
        );
    }

    #[test]
    fn reply_context_only_when_given() {
        let req = MessageRequest::new("1", MessageContent::text("x")).with_reply_to(Some("wamid.1"));
        assert_eq!(
            serde_json::to_value(&req).unwrap()["context"],
            json!({ "message_id": "wamid.1" })
        );

        let req = MessageRequest::new("1", MessageContent::text("x")).with_reply_to(None::<String>);
        assert!(serde_json::to_value(&req).unwrap().get("context").is_none());
    }

    #[test]
    fn media_content_follows_media_type() {
        let media = Media::new(MediaType::Sticker, MediaSource::Id("st-1".into()));
        let req = MessageRequest::new("1", MessageContent::media(media));
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["type"], "sticker");
        assert_eq!(v["sticker"], json!({ "id": "st-1" }));
    }

    #[test]
    fn reaction_message() {
        let req = MessageRequest::new(
            "1",
            MessageContent::Reaction {
                reaction: Reaction {
                    message_id: "wamid.2".into(),
                    emoji: "\u{1f60a}".into(),
                },
            },
        );
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["type"], "reaction");
        assert_eq!(v["reaction"]["message_id"], "wamid.2");
    }

    #[test]
    fn read_receipt_shape() {
        assert_eq!(
            serde_json::to_value(ReadMessageRequest::new("wamid.3")).unwrap(),
            json!({ "messaging_product": "whatsapp", "status": "read", "message_id": "wamid.3" })
        );
    }
}
