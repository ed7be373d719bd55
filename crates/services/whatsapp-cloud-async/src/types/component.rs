//! Template components: header, body and button sections with their parameters

use serde::{Deserialize, Serialize};

use super::parameter::{ButtonParameter, ParameterObject};
use crate::error::ResourceError;

/// Section of a template a component fills
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// Template header
    Header,
    /// Template body
    Body,
    /// One template button
    Button,
}

/// Kind of template button
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSubType {
    /// Quick-reply button
    QuickReply,
    /// Call-to-action URL button
    Url,
}

/// A parameter held by a component
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentParameter {
    /// Header/body parameter
    Parameter(ParameterObject),
    /// Button parameter
    Button(ButtonParameter),
}

impl From<ParameterObject> for ComponentParameter {
    fn from(p: ParameterObject) -> Self {
        Self::Parameter(p)
    }
}

impl From<ButtonParameter> for ComponentParameter {
    fn from(p: ButtonParameter) -> Self {
        Self::Button(p)
    }
}

/// A template component
///
/// `sub_type` and `index` exist only on button components; `index` is always
/// serialized for buttons, including `0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    #[serde(rename = "type")]
    kind: ComponentType,
    parameters: Vec<ComponentParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_type: Option<ButtonSubType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<u32>,
}

impl Component {
    /// Empty header component
    #[must_use]
    pub const fn header() -> Self {
        Self::plain(ComponentType::Header)
    }

    /// Empty body component
    #[must_use]
    pub const fn body() -> Self {
        Self::plain(ComponentType::Body)
    }

    /// Empty button component at position `index`
    #[must_use]
    pub const fn button(sub_type: ButtonSubType, index: u32) -> Self {
        Self {
            kind: ComponentType::Button,
            parameters: Vec::new(),
            sub_type: Some(sub_type),
            index: Some(index),
        }
    }

    const fn plain(kind: ComponentType) -> Self {
        Self {
            kind,
            parameters: Vec::new(),
            sub_type: None,
            index: None,
        }
    }

    /// Starts a builder accepting every field regardless of type
    #[must_use]
    pub fn builder(kind: ComponentType) -> ComponentBuilder {
        ComponentBuilder {
            kind,
            parameters: Vec::new(),
            sub_type: None,
            index: None,
        }
    }

    /// Appends a parameter
    pub fn add_parameter(&mut self, parameter: impl Into<ComponentParameter>) {
        self.parameters.push(parameter.into());
    }

    /// Appends a parameter, builder style
    #[must_use]
    pub fn with_parameter(mut self, parameter: impl Into<ComponentParameter>) -> Self {
        self.add_parameter(parameter);
        self
    }

    /// Component type
    #[must_use]
    pub const fn kind(&self) -> ComponentType {
        self.kind
    }

    /// Parameters in insertion order
    #[must_use]
    pub fn parameters(&self) -> &[ComponentParameter] {
        &self.parameters
    }

    /// Button sub type
    #[must_use]
    pub const fn sub_type(&self) -> Option<ButtonSubType> {
        self.sub_type
    }

    /// Button index
    #[must_use]
    pub const fn index(&self) -> Option<u32> {
        self.index
    }
}

/// Loose builder for [`Component`]
#[derive(Debug, Clone)]
pub struct ComponentBuilder {
    kind: ComponentType,
    parameters: Vec<ComponentParameter>,
    sub_type: Option<ButtonSubType>,
    index: Option<u32>,
}

impl ComponentBuilder {
    /// Button sub type
    #[must_use]
    pub const fn sub_type(mut self, sub_type: ButtonSubType) -> Self {
        self.sub_type = Some(sub_type);
        self
    }

    /// Button index
    #[must_use]
    pub const fn index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    /// Appends a parameter
    #[must_use]
    pub fn parameter(mut self, parameter: impl Into<ComponentParameter>) -> Self {
        self.parameters.push(parameter.into());
        self
    }

    /// Validates and builds the component
    ///
    /// Button components default `index` to `0`.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::InvalidField`] when `sub_type` or `index` is set on a
    ///   header or body component.
    /// - [`ResourceError::MissingValue`] when a button component has no `sub_type`.
    pub fn build(self) -> Result<Component, ResourceError> {
        if self.kind != ComponentType::Button {
            if self.sub_type.is_some() {
                return Err(ResourceError::InvalidField {
                    field: "sub_type",
                    message: "sub_type is not required when type is not button".into(),
                });
            }
            if self.index.is_some() {
                return Err(ResourceError::InvalidField {
                    field: "index",
                    message: "index is not required when type is not button".into(),
                });
            }
            return Ok(Component {
                kind: self.kind,
                parameters: self.parameters,
                sub_type: None,
                index: None,
            });
        }

        let sub_type = self.sub_type.ok_or_else(|| ResourceError::MissingValue {
            field: "sub_type",
            message: "sub_type is required when the type is button".into(),
        })?;
        Ok(Component {
            kind: ComponentType::Button,
            parameters: self.parameters,
            sub_type: Some(sub_type),
            index: Some(self.index.unwrap_or(0)),
        })
    }
}
