//! Contact card value objects used by contact messages

use chrono::NaiveDate;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Home/work discriminator shared by addresses, emails and urls
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContactInfoType {
    /// Home
    #[serde(rename = "HOME")]
    Home,
    /// Work
    #[serde(rename = "WORK")]
    Work,
}

/// Postal address
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    /// Street number and name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// City name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State abbreviation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// ZIP code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Full country name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Two-letter country abbreviation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Home or work
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContactInfoType>,
}

/// Email address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Email {
    /// The address
    pub email: String,
    /// Home or work
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContactInfoType>,
}

impl Email {
    /// Creates an email entry
    #[must_use]
    pub fn new(email: impl Into<String>, kind: Option<ContactInfoType>) -> Self {
        Self {
            email: email.into(),
            kind,
        }
    }
}

/// Website
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Url {
    /// The URL
    pub url: String,
    /// Home or work
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContactInfoType>,
}

impl Url {
    /// Creates a website entry
    #[must_use]
    pub fn new(url: impl Into<String>, kind: Option<ContactInfoType>) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }
}

/// Organization a contact belongs to
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Org {
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Department name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Contact name; `formatted_name` is what the recipient sees
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Name {
    /// Full display name
    pub formatted_name: String,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Middle name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Name suffix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Name prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl Name {
    /// Creates a name with only the formatted display name set
    #[must_use]
    pub fn formatted(formatted_name: impl Into<String>) -> Self {
        Self {
            formatted_name: formatted_name.into(),
            ..Self::default()
        }
    }
}

/// Kind of phone line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PhoneNumberType {
    /// Cell phone
    #[serde(rename = "CELL")]
    Cell,
    /// Main line
    #[serde(rename = "MAIN")]
    Main,
    /// iPhone
    #[serde(rename = "IPHONE")]
    Iphone,
    /// Home line
    #[serde(rename = "HOME")]
    Home,
    /// Work line
    #[serde(rename = "WORK")]
    Work,
}

/// Phone number entry of a contact card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhoneNumber {
    /// The number, free-form
    pub phone: String,
    /// Kind of line
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PhoneNumberType>,
    /// WhatsApp id, enables the "message" button on the card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wa_id: Option<String>,
}

impl PhoneNumber {
    /// Creates a phone entry
    #[must_use]
    pub fn new(phone: impl Into<String>, kind: Option<PhoneNumberType>) -> Self {
        Self {
            phone: phone.into(),
            kind,
            wa_id: None,
        }
    }

    /// Attaches the WhatsApp id
    #[must_use]
    pub fn with_wa_id(mut self, wa_id: impl Into<String>) -> Self {
        self.wa_id = Some(wa_id.into());
        self
    }
}

/// Contact card sent in a `contacts` message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Builder)]
#[builder(setter(into, strip_option))]
pub struct Contact {
    /// Name of the contact
    pub name: Name,
    /// Birthday, serialized as `YYYY-MM-DD`
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    /// Postal addresses
    #[builder(default, setter(each(name = "address", into)))]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    /// Email addresses
    #[builder(default, setter(each(name = "email", into)))]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<Email>,
    /// Organization
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<Org>,
    /// Phone numbers
    #[builder(default, setter(each(name = "phone", into)))]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<PhoneNumber>,
    /// Websites
    #[builder(default, setter(each(name = "url", into)))]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<Url>,
}

impl Contact {
    /// Returns a builder; `name` is the only required field
    #[must_use]
    pub fn builder() -> ContactBuilder {
        ContactBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_contact_serializes() {
        let contact = Contact::builder()
            .name(Name {
                formatted_name: "Ignacio Chiazzo".into(),
                first_name: Some("Ignacio".into()),
                last_name: Some("Chiazzo".into()),
                ..Name::default()
            })
            .birthday(NaiveDate::from_ymd_opt(1995, 1, 25).unwrap())
            .address(Address {
                street: Some("1 Hacker Way".into()),
                city: Some("Menlo Park".into()),
                country_code: Some("us".into()),
                kind: Some(ContactInfoType::Work),
                ..Address::default()
            })
            .email(Email::new("ignacio@example.com", Some(ContactInfoType::Home)))
            .org(Org {
                company: Some("Org Inc".into()),
                ..Org::default()
            })
            .phone(PhoneNumber::new("+1 (222) 333-4444", Some(PhoneNumberType::Cell)).with_wa_id("12223334444"))
            .url(Url::new("https://example.com", None))
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&contact).unwrap(),
            json!({
                "name": {
                    "formatted_name": "Ignacio Chiazzo",
                    "first_name": "Ignacio",
                    "last_name": "Chiazzo"
                },
                "birthday": "1995-01-25",
                "addresses": [{
                    "street": "1 Hacker Way",
                    "city": "Menlo Park",
                    "country_code": "us",
                    "type": "WORK"
                }],
                "emails": [{ "email": "ignacio@example.com", "type": "HOME" }],
                "org": { "company": "Org Inc" },
                "phones": [{ "phone": "+1 (222) 333-4444", "type": "CELL", "wa_id": "12223334444" }],
                "urls": [{ "url": "https://example.com" }]
            })
        );
    }

    #[test]
    fn builder_requires_name() {
        assert!(Contact::builder().build().is_err());
    }

    #[test]
    fn minimal_contact_omits_empty_collections() {
        let contact = Contact::builder()
            .name(Name::formatted("Jane"))
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&contact).unwrap(),
            json!({ "name": { "formatted_name": "Jane" } })
        );
    }
}
