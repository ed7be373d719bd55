//! Interactive messages: list menus and reply buttons
//!
//! Text limits are measured in Unicode scalar values, not bytes.

/// Action types (reply buttons, list sections and rows)
pub mod action;
/// Header, body and footer
pub mod header;

use serde::{Deserialize, Serialize};

pub use action::{
    InteractiveAction, InteractiveActionBuilder, ReplyButton, Section, SectionRow,
};
pub use header::{InteractiveBody, InteractiveFooter, InteractiveHeader, InteractiveHeaderType};

use crate::error::ResourceError;

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn too_long(len: usize, what: &str, max: usize) -> String {
    format!("Invalid length {len} for {what}.Maximum length: {max} characters.")
}

/// Kind of interactive message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InteractiveType {
    /// List menu
    List,
    /// Reply buttons
    Button,
    /// Single product
    Product,
    /// Multi-product list
    ProductList,
}

/// A complete interactive message payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interactive {
    #[serde(rename = "type")]
    kind: InteractiveType,
    #[serde(skip_serializing_if = "Option::is_none")]
    header: Option<InteractiveHeader>,
    body: InteractiveBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<InteractiveFooter>,
    action: InteractiveAction,
}

impl Interactive {
    /// Assembles an interactive message, validating the action eagerly
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by [`InteractiveActionBuilder::validate`].
    pub fn new(
        kind: InteractiveType,
        header: Option<InteractiveHeader>,
        body: InteractiveBody,
        footer: Option<InteractiveFooter>,
        action: InteractiveActionBuilder,
    ) -> Result<Self, ResourceError> {
        Ok(Self {
            kind,
            header,
            body,
            footer,
            action: action.build()?,
        })
    }

    /// Message kind
    #[must_use]
    pub const fn kind(&self) -> InteractiveType {
        self.kind
    }

    /// Header, if any
    #[must_use]
    pub const fn header(&self) -> Option<&InteractiveHeader> {
        self.header.as_ref()
    }

    /// Body
    #[must_use]
    pub const fn body(&self) -> &InteractiveBody {
        &self.body
    }

    /// Footer, if any
    #[must_use]
    pub const fn footer(&self) -> Option<&InteractiveFooter> {
        self.footer.as_ref()
    }

    /// Validated action
    #[must_use]
    pub const fn action(&self) -> &InteractiveAction {
        &self.action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply_buttons() -> InteractiveActionBuilder {
        let mut action = InteractiveAction::reply_button();
        action.add_reply_button(ReplyButton::new("I'm a reply button 1", "button_1").unwrap());
        action.add_reply_button(ReplyButton::new("I'm a reply button 2", "button_2").unwrap());
        action
    }

    #[test]
    fn button_interactive_matches_fixture() {
        let interactive = Interactive::new(
            InteractiveType::Button,
            Some(InteractiveHeader::text("I'm the header!").unwrap()),
            InteractiveBody::new("I'm the body!").unwrap(),
            Some(InteractiveFooter::new("I'm the footer!").unwrap()),
            reply_buttons(),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&interactive).unwrap(),
            json!({
                "type": "button",
                "header": { "type": "text", "text": "I'm the header!" },
                "body": { "text": "I'm the body!" },
                "footer": { "text": "I'm the footer!" },
                "action": {
                    "buttons": [
                        { "type": "reply", "reply": { "title": "I'm a reply button 1", "id": "button_1" } },
                        { "type": "reply", "reply": { "title": "I'm a reply button 2", "id": "button_2" } }
                    ]
                }
            })
        );
    }

    #[test]
    fn optional_parts_are_omitted() {
        let interactive = Interactive::new(
            InteractiveType::Button,
            None,
            InteractiveBody::new("body").unwrap(),
            None,
            reply_buttons(),
        )
        .unwrap();

        let v = serde_json::to_value(&interactive).unwrap();
        assert!(v.get("header").is_none());
        assert!(v.get("footer").is_none());
    }

    #[test]
    fn construction_runs_deferred_action_validation() {
        let err = Interactive::new(
            InteractiveType::List,
            None,
            InteractiveBody::new("body").unwrap(),
            None,
            InteractiveAction::list_message("Menu"),
        )
        .unwrap_err();

        assert!(matches!(err, ResourceError::InvalidInteractiveActionSection(_)));
    }
}
