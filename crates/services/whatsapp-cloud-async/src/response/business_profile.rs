use serde_json::Value;

use super::DataResponse;
use super::fields::{self, FieldSetter};

/// Business profile of a phone number
///
/// `GET {phone_number_id}/whatsapp_business_profile` wraps the profile in a
/// one-element `data` array; recognized when that array has an object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessProfileDataResponse {
    /// Short description
    pub about: Option<String>,
    /// Street address
    pub address: Option<String>,
    /// Long description
    pub description: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Always `whatsapp`
    pub messaging_product: Option<String>,
    /// Profile picture URL
    pub profile_picture_url: Option<String>,
    /// Industry, as the raw wire string
    pub vertical: Option<String>,
    /// Websites
    pub websites: Vec<String>,
}

const PROFILE_FIELDS: &[(&str, FieldSetter<BusinessProfileDataResponse>)] = &[
    ("about", |b, v| b.about = fields::string(v)),
    ("address", |b, v| b.address = fields::string(v)),
    ("description", |b, v| b.description = fields::string(v)),
    ("email", |b, v| b.email = fields::string(v)),
    ("messaging_product", |b, v| b.messaging_product = fields::string(v)),
    ("profile_picture_url", |b, v| b.profile_picture_url = fields::string(v)),
    ("vertical", |b, v| b.vertical = fields::string(v)),
    ("websites", |b, v| b.websites = fields::strings(v)),
];

impl DataResponse for BusinessProfileDataResponse {
    fn recognize(raw: &Value) -> Option<Self> {
        let profile = raw.get("data")?.as_array()?.first().filter(|p| p.is_object())?;
        Some(fields::map_fields(profile, PROFILE_FIELDS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_data_entry_is_the_profile() {
        let profile = BusinessProfileDataResponse::recognize(&json!({
            "data": [{
                "about": "ABOUT",
                "address": "ADDRESS",
                "description": "DESCRIPTION",
                "email": "EMAIL",
                "messaging_product": "whatsapp",
                "profile_picture_url": "https://pps.whatsapp.net/v/1",
                "websites": ["https://www.whatsapp.com", 3, "https://www.facebook.com"],
                "vertical": "INDUSTRY"
            }]
        }))
        .unwrap();

        assert_eq!(profile.about.as_deref(), Some("ABOUT"));
        assert_eq!(profile.vertical.as_deref(), Some("INDUSTRY"));
        assert_eq!(
            profile.websites,
            vec!["https://www.whatsapp.com", "3", "https://www.facebook.com"]
        );
    }

    #[test]
    fn empty_data_no_match() {
        assert!(BusinessProfileDataResponse::recognize(&json!({ "data": [] })).is_none());
        assert!(BusinessProfileDataResponse::recognize(&json!({ "about": "x" })).is_none());
    }
}
