use serde_json::Value;

use super::DataResponse;
use super::fields::{self, FieldSetter};
use super::template::Paging;

/// A business phone number
///
/// Recognized by the `id` key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumberDataResponse {
    /// Phone number id (the sender id of message calls)
    pub id: Option<String>,
    /// Number as displayed to customers
    pub display_phone_number: Option<String>,
    /// Verified business name
    pub verified_name: Option<String>,
    /// `GREEN`, `YELLOW`, `RED` or `UNKNOWN`
    pub quality_rating: Option<String>,
    /// Whether the number passed code verification
    pub code_verification_status: Option<String>,
    /// Review status of the display name
    pub name_status: Option<String>,
    /// `CLOUD_API` or `ON_PREMISE`
    pub platform_type: Option<String>,
    /// Daily conversation tier, e.g. `TIER_1K`
    pub messaging_limit_tier: Option<String>,
    /// Official business account badge
    pub is_official_business_account: Option<bool>,
    /// Throughput level, e.g. `STANDARD`
    pub throughput_level: Option<String>,
}

const PHONE_NUMBER_FIELDS: &[(&str, FieldSetter<PhoneNumberDataResponse>)] = &[
    ("id", |p, v| p.id = fields::string(v)),
    ("display_phone_number", |p, v| p.display_phone_number = fields::string(v)),
    ("verified_name", |p, v| p.verified_name = fields::string(v)),
    ("quality_rating", |p, v| p.quality_rating = fields::string(v)),
    ("code_verification_status", |p, v| {
        p.code_verification_status = fields::string(v);
    }),
    ("name_status", |p, v| p.name_status = fields::string(v)),
    ("platform_type", |p, v| p.platform_type = fields::string(v)),
    ("messaging_limit_tier", |p, v| p.messaging_limit_tier = fields::string(v)),
    ("is_official_business_account", |p, v| {
        p.is_official_business_account = fields::boolean(v);
    }),
    ("throughput", |p, v| {
        p.throughput_level = v.get("level").and_then(fields::string);
    }),
];

impl DataResponse for PhoneNumberDataResponse {
    fn recognize(raw: &Value) -> Option<Self> {
        fields::has_key(raw, "id").then(|| fields::map_fields(raw, PHONE_NUMBER_FIELDS))
    }
}

/// Phone numbers of a business account
///
/// Recognized by a `data` array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumbersDataResponse {
    /// Numbers on this page
    pub phone_numbers: Vec<PhoneNumberDataResponse>,
    /// Paging cursors
    pub paging: Option<Paging>,
}

impl DataResponse for PhoneNumbersDataResponse {
    fn recognize(raw: &Value) -> Option<Self> {
        let data = raw.get("data").filter(|d| d.is_array())?;
        Some(Self {
            phone_numbers: fields::list(data, |p| fields::map_fields(p, PHONE_NUMBER_FIELDS)),
            paging: raw.get("paging").map(Paging::from_value),
        })
    }
}
