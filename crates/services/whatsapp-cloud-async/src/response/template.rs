use serde::de::DeserializeOwned;
use serde_json::Value;

use super::DataResponse;
use super::fields::{self, FieldSetter};
use crate::types::template::{TemplateCategory, TemplateStatus};

/// Cursor paging of list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paging {
    /// Cursor of the first item
    pub before: Option<String>,
    /// Cursor of the last item
    pub after: Option<String>,
    /// URL of the next page
    pub next: Option<String>,
    /// URL of the previous page
    pub previous: Option<String>,
}

const PAGING_FIELDS: &[(&str, FieldSetter<Paging>)] = &[
    ("cursors", |p, v| {
        p.before = v.get("before").and_then(fields::string);
        p.after = v.get("after").and_then(fields::string);
    }),
    ("next", |p, v| p.next = fields::string(v)),
    ("previous", |p, v| p.previous = fields::string(v)),
];

impl Paging {
    pub(crate) fn from_value(v: &Value) -> Self {
        fields::map_fields(v, PAGING_FIELDS)
    }
}

fn enum_value<T: DeserializeOwned>(v: &Value) -> Option<T> {
    serde_json::from_value(v.clone()).ok()
}

/// A template definition, or the result of creating one
///
/// Recognized by the `id` key. Unknown status or category strings parse as
/// `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateDataResponse {
    /// Template id
    pub id: Option<String>,
    /// Review status
    pub status: Option<TemplateStatus>,
    /// Category
    pub category: Option<TemplateCategory>,
    /// Template name
    pub name: Option<String>,
    /// Locale code
    pub language: Option<String>,
    /// Component definitions as returned
    pub components: Vec<Value>,
}

const TEMPLATE_FIELDS: &[(&str, FieldSetter<TemplateDataResponse>)] = &[
    ("id", |t, v| t.id = fields::string(v)),
    ("status", |t, v| t.status = enum_value(v)),
    ("category", |t, v| t.category = enum_value(v)),
    ("name", |t, v| t.name = fields::string(v)),
    ("language", |t, v| t.language = fields::string(v)),
    ("components", |t, v| t.components = fields::list(v, Value::clone)),
];

impl DataResponse for TemplateDataResponse {
    fn recognize(raw: &Value) -> Option<Self> {
        fields::has_key(raw, "id").then(|| fields::map_fields(raw, TEMPLATE_FIELDS))
    }
}

/// Page of template definitions
///
/// Recognized by a `data` array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplatesDataResponse {
    /// Templates on this page
    pub templates: Vec<TemplateDataResponse>,
    /// Paging cursors
    pub paging: Option<Paging>,
}

impl DataResponse for TemplatesDataResponse {
    fn recognize(raw: &Value) -> Option<Self> {
        let data = raw.get("data").filter(|d| d.is_array())?;
        Some(Self {
            templates: fields::list(data, |t| fields::map_fields(t, TEMPLATE_FIELDS)),
            paging: raw.get("paging").map(Paging::from_value),
        })
    }
}
