//! Outbound resources: value objects, template parameters and message payloads

/// Business profile update request
pub mod business_profile;
/// Template components
pub mod component;
/// Contact card value objects
pub mod contact;
/// Interactive message resources
pub mod interactive;
/// Media references
pub mod media;
/// Message envelope and payloads
pub mod message;
/// Template and button parameters
pub mod parameter;
/// Template payloads and definitions
pub mod template;
/// Currency, date/time and location values
pub mod values;

pub use component::{ButtonSubType, Component, ComponentParameter, ComponentType};
pub use contact::{Address, Contact, ContactInfoType, Email, Name, Org, PhoneNumber, PhoneNumberType, Url};
pub use interactive::{
    Interactive, InteractiveAction, InteractiveActionBuilder, InteractiveBody, InteractiveFooter,
    InteractiveHeader, InteractiveType, ReplyButton, Section, SectionRow,
};
pub use media::{Media, MediaSource, MediaType};
pub use message::{MessageContent, MessageRequest};
pub use parameter::{ButtonParameter, ParameterObject, ParameterType};
pub use template::{Template, TemplateCategory, TemplateStatus};
pub use values::{Currency, DateTime, Location};
