use serde_json::Value;

use super::DataResponse;
use super::fields;

/// Result of endpoints that only acknowledge (`{"success": true}`)
///
/// Recognized by the `success` key; a non-boolean value parses as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuccessResponse {
    /// Acknowledgement flag
    pub success: Option<bool>,
}

impl SuccessResponse {
    /// `true` only for an explicit `true`
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }
}

impl DataResponse for SuccessResponse {
    fn recognize(raw: &Value) -> Option<Self> {
        raw.get("success")
            .filter(|v| !v.is_null())
            .map(|v| Self {
                success: fields::boolean(v),
            })
    }
}
