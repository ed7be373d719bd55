use serde_json::Value;

use super::DataResponse;
use super::fields::{self, FieldSetter};

/// Media metadata (`GET {media_id}`) or upload result (`{"id": ...}`)
///
/// Recognized by the `id` key. The `url` is short-lived and requires the
/// access token to download.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaDataResponse {
    /// Media id
    pub id: Option<String>,
    /// Download URL
    pub url: Option<String>,
    /// MIME type
    pub mime_type: Option<String>,
    /// SHA-256 of the file
    pub sha256: Option<String>,
    /// Size in bytes
    pub file_size: Option<u64>,
    /// Always `whatsapp`
    pub messaging_product: Option<String>,
}

const MEDIA_FIELDS: &[(&str, FieldSetter<MediaDataResponse>)] = &[
    ("id", |m, v| m.id = fields::string(v)),
    ("url", |m, v| m.url = fields::string(v)),
    ("mime_type", |m, v| m.mime_type = fields::string(v)),
    ("sha256", |m, v| m.sha256 = fields::string(v)),
    ("file_size", |m, v| m.file_size = fields::uint(v)),
    ("messaging_product", |m, v| m.messaging_product = fields::string(v)),
];

impl DataResponse for MediaDataResponse {
    fn recognize(raw: &Value) -> Option<Self> {
        fields::has_key(raw, "id").then(|| fields::map_fields(raw, MEDIA_FIELDS))
    }
}
