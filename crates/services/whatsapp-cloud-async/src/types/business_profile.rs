//! Business profile update request

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::message::MESSAGING_PRODUCT;

/// Industry of the business
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessVertical {
    /// Not set
    Undefined,
    /// Other
    Other,
    /// Automotive
    Auto,
    /// Beauty, spa and salon
    Beauty,
    /// Clothing and apparel
    Apparel,
    /// Education
    Edu,
    /// Entertainment
    Entertain,
    /// Event planning and service
    EventPlan,
    /// Finance and banking
    Finance,
    /// Food and grocery
    Grocery,
    /// Public service
    Govt,
    /// Hotel and lodging
    Hotel,
    /// Medical and health
    Health,
    /// Non-profit
    Nonprofit,
    /// Professional services
    ProfServices,
    /// Shopping and retail
    Retail,
    /// Travel and transportation
    Travel,
    /// Restaurant
    Restaurant,
    /// Not a business
    NotABiz,
}

/// Body of `POST {phone_number_id}/whatsapp_business_profile`
///
/// Only the fields that are set are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
#[builder(setter(into, strip_option))]
pub struct UpdateBusinessProfileRequest {
    #[builder(setter(skip), default = "MESSAGING_PRODUCT")]
    messaging_product: &'static str,
    /// Short description shown under the profile name
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Street address
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Long description
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contact email
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Industry
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<BusinessVertical>,
    /// Up to two websites
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub websites: Option<Vec<String>>,
    /// Handle of an uploaded profile picture
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_handle: Option<String>,
}

impl UpdateBusinessProfileRequest {
    /// Returns a builder
    #[must_use]
    pub fn builder() -> UpdateBusinessProfileRequestBuilder {
        UpdateBusinessProfileRequestBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_set_fields_are_sent() {
        let req = UpdateBusinessProfileRequest::builder()
            .about("Hey there! I am using WhatsApp.")
            .vertical(BusinessVertical::ProfServices)
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "messaging_product": "whatsapp",
                "about": "Hey there! I am using WhatsApp.",
                "vertical": "PROF_SERVICES"
            })
        );
    }
}
