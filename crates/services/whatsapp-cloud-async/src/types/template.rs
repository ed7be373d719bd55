//! Message templates: sending a template and managing template definitions

use serde::{Deserialize, Serialize};

use super::component::Component;

/// Template category, as accepted by template creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateCategory {
    /// One-time passcodes
    Authentication,
    /// Promotions and offers
    Marketing,
    /// Transaction updates
    Utility,
}

/// Review status of a template
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateStatus {
    /// Approved and sendable
    Approved,
    /// Awaiting review
    Pending,
    /// Rejected in review
    Rejected,
    /// Paused after quality issues
    Paused,
    /// Disabled after quality issues
    Disabled,
    /// Scheduled for deletion
    PendingDeletion,
    /// Deleted
    Deleted,
    /// Rejection under appeal
    InAppeal,
    /// Template quota reached
    LimitExceeded,
}

/// Language of a template message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateLanguage {
    /// Locale code, e.g. `en_US`
    pub code: String,
}

/// Template payload of a `template` message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    /// Template name
    pub name: String,
    /// Template language
    pub language: TemplateLanguage,
    /// Filled components, omitted when empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

impl Template {
    /// Template without components
    #[must_use]
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: TemplateLanguage {
                code: language.into(),
            },
            components: Vec::new(),
        }
    }

    /// Appends a component
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Appends a component, builder style
    #[must_use]
    pub fn with_component(mut self, component: Component) -> Self {
        self.add_component(component);
        self
    }
}

/// Body of `POST {business_id}/message_templates`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTemplateRequest {
    /// Template name (lowercase, underscores)
    pub name: String,
    /// Category
    pub category: TemplateCategory,
    /// Locale code
    pub language: String,
    /// Component definitions, passed through as-is
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<serde_json::Value>,
    /// Let the platform re-categorize instead of rejecting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_category_change: Option<bool>,
}

impl CreateTemplateRequest {
    /// Request without components
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: TemplateCategory,
        language: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            language: language.into(),
            components: Vec::new(),
            allow_category_change: None,
        }
    }

    /// Sets the component definitions
    #[must_use]
    pub fn with_components(mut self, components: Vec<serde_json::Value>) -> Self {
        self.components = components;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::component::ButtonSubType;
    use crate::types::parameter::{ButtonParameter, ParameterObject};
    use serde_json::json;

    #[test]
    fn template_with_components_serializes() {
        let template = Template::new("hello_world", "en_US")
            .with_component(Component::body().with_parameter(ParameterObject::text("Ana")))
            .with_component(
                Component::button(ButtonSubType::QuickReply, 0)
                    .with_parameter(ButtonParameter::payload("yes")),
            );

        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            json!({
                "name": "hello_world",
                "language": { "code": "en_US" },
                "components": [
                    { "type": "body", "parameters": [{ "type": "text", "text": "Ana" }] },
                    {
                        "type": "button",
                        "parameters": [{ "type": "payload", "payload": "yes" }],
                        "sub_type": "quick_reply",
                        "index": 0
                    }
                ]
            })
        );
    }

    #[test]
    fn template_without_components_omits_key() {
        assert_eq!(
            serde_json::to_value(Template::new("hello_world", "en_US")).unwrap(),
            json!({ "name": "hello_world", "language": { "code": "en_US" } })
        );
    }

    #[test]
    fn create_request_uses_uppercase_category() {
        let req = CreateTemplateRequest::new("seasonal_promo", TemplateCategory::Marketing, "en_US");
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["category"], "MARKETING");
        assert!(v.get("components").is_none());
        assert!(v.get("allow_category_change").is_none());
    }

    #[test]
    fn status_parses_screaming_case() {
        let s: TemplateStatus = serde_json::from_value(json!("PENDING_DELETION")).unwrap();
        assert_eq!(s, TemplateStatus::PendingDeletion);
    }
}
