//! Template parameters: tagged values where the payload key equals the type tag
//!
//! On the wire every parameter looks like `{"type": "<tag>", "<tag>": <payload>}`.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

use super::media::{Media, MediaType};
use super::values::{Currency, DateTime, Location};
use crate::error::ResourceError;

/// Serializes `{"type": tag, tag: payload}`
pub(crate) fn serialize_tagged<S, P>(serializer: S, tag: &str, payload: &P) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    P: Serialize + ?Sized,
{
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry("type", tag)?;
    map.serialize_entry(tag, payload)?;
    map.end()
}

/// Serializes a media payload under `expected`, refusing media of another type
pub(crate) fn serialize_media<S: Serializer>(
    serializer: S,
    expected: MediaType,
    media: &Media,
) -> Result<S::Ok, S::Error> {
    media.check_type(expected).map_err(S::Error::custom)?;
    serialize_tagged(serializer, expected.as_str(), media)
}

/// Type tag of a [`ParameterObject`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterType {
    /// Plain text
    Text,
    /// Localized currency
    Currency,
    /// Localized date/time
    DateTime,
    /// Image media
    Image,
    /// Document media
    Document,
    /// Video media
    Video,
    /// Location (template headers)
    Location,
}

impl ParameterType {
    /// Wire name of the tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Currency => "currency",
            Self::DateTime => "date_time",
            Self::Image => "image",
            Self::Document => "document",
            Self::Video => "video",
            Self::Location => "location",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "text" => Self::Text,
            "currency" => Self::Currency,
            "date_time" => Self::DateTime,
            "image" => Self::Image,
            "document" => Self::Document,
            "video" => Self::Video,
            "location" => Self::Location,
            other => {
                return Err(ResourceError::InvalidType {
                    type_name: other.to_string(),
                });
            }
        })
    }
}

/// A header/body template parameter carrying exactly one payload
///
/// Media variants must hold media of the same type. [`ParameterObject::media`] and
/// the builder check this; serializing a mismatched variant fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterObject {
    /// Plain text
    Text(String),
    /// Localized currency
    Currency(Currency),
    /// Localized date/time
    DateTime(DateTime),
    /// Image media
    Image(Media),
    /// Document media
    Document(Media),
    /// Video media
    Video(Media),
    /// Location
    Location(Location),
}

impl ParameterObject {
    /// Shorthand for a text parameter
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Media parameter, tagged after the media type
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidMedia`] for audio and sticker media.
    pub fn media(media: Media) -> Result<Self, ResourceError> {
        match media.media_type() {
            MediaType::Image => Ok(Self::Image(media)),
            MediaType::Document => Ok(Self::Document(media)),
            MediaType::Video => Ok(Self::Video(media)),
            other => Err(ResourceError::InvalidMedia {
                field: "type",
                message: format!("{} media cannot be a template parameter", other.as_str()),
            }),
        }
    }

    /// Starts a builder that fills payload slots before checking them against the tag
    #[must_use]
    pub fn builder(kind: ParameterType) -> ParameterObjectBuilder {
        ParameterObjectBuilder::new(kind)
    }

    /// Type tag of the parameter
    #[must_use]
    pub const fn kind(&self) -> ParameterType {
        match self {
            Self::Text(_) => ParameterType::Text,
            Self::Currency(_) => ParameterType::Currency,
            Self::DateTime(_) => ParameterType::DateTime,
            Self::Image(_) => ParameterType::Image,
            Self::Document(_) => ParameterType::Document,
            Self::Video(_) => ParameterType::Video,
            Self::Location(_) => ParameterType::Location,
        }
    }
}

impl Serialize for ParameterObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = self.kind().as_str();
        match self {
            Self::Text(text) => serialize_tagged(serializer, tag, text),
            Self::Currency(currency) => serialize_tagged(serializer, tag, currency),
            Self::DateTime(date_time) => serialize_tagged(serializer, tag, date_time),
            Self::Image(media) => serialize_media(serializer, MediaType::Image, media),
            Self::Document(media) => serialize_media(serializer, MediaType::Document, media),
            Self::Video(media) => serialize_media(serializer, MediaType::Video, media),
            Self::Location(location) => serialize_tagged(serializer, tag, location),
        }
    }
}

/// Collects optional payload slots, then keeps the one matching the tag
///
/// Slots other than the tagged one are ignored.
#[derive(Debug, Clone)]
pub struct ParameterObjectBuilder {
    kind: ParameterType,
    text: Option<String>,
    currency: Option<Currency>,
    date_time: Option<DateTime>,
    image: Option<Media>,
    document: Option<Media>,
    video: Option<Media>,
    location: Option<Location>,
}

impl ParameterObjectBuilder {
    /// Builder for a known tag
    #[must_use]
    pub fn new(kind: ParameterType) -> Self {
        Self {
            kind,
            text: None,
            currency: None,
            date_time: None,
            image: None,
            document: None,
            video: None,
            location: None,
        }
    }

    /// Builder for a tag given by its wire name
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidType`] when `tag` is not a parameter type.
    pub fn from_tag(tag: &str) -> Result<Self, ResourceError> {
        tag.parse().map(Self::new)
    }

    /// Text slot
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Currency slot
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Date/time slot
    #[must_use]
    pub fn date_time(mut self, date_time: DateTime) -> Self {
        self.date_time = Some(date_time);
        self
    }

    /// Image slot
    #[must_use]
    pub fn image(mut self, image: Media) -> Self {
        self.image = Some(image);
        self
    }

    /// Document slot
    #[must_use]
    pub fn document(mut self, document: Media) -> Self {
        self.document = Some(document);
        self
    }

    /// Video slot
    #[must_use]
    pub fn video(mut self, video: Media) -> Self {
        self.video = Some(video);
        self
    }

    /// Location slot
    #[must_use]
    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Validates the tag/payload pairing
    ///
    /// # Errors
    ///
    /// - [`ResourceError::MissingValue`] naming the tag when its slot is empty.
    /// - [`ResourceError::InvalidMedia`] when a media slot holds media of another type.
    pub fn build(self) -> Result<ParameterObject, ResourceError> {
        let kind = self.kind;
        let missing = || ResourceError::missing_value(kind.as_str());
        let media = |slot: Option<Media>, expected: MediaType| {
            let media = slot.ok_or_else(missing)?;
            media.check_type(expected)?;
            Ok::<_, ResourceError>(media)
        };

        Ok(match kind {
            ParameterType::Text => ParameterObject::Text(self.text.ok_or_else(missing)?),
            ParameterType::Currency => {
                ParameterObject::Currency(self.currency.ok_or_else(missing)?)
            }
            ParameterType::DateTime => {
                ParameterObject::DateTime(self.date_time.ok_or_else(missing)?)
            }
            ParameterType::Image => ParameterObject::Image(media(self.image, MediaType::Image)?),
            ParameterType::Document => {
                ParameterObject::Document(media(self.document, MediaType::Document)?)
            }
            ParameterType::Video => ParameterObject::Video(media(self.video, MediaType::Video)?),
            ParameterType::Location => {
                ParameterObject::Location(self.location.ok_or_else(missing)?)
            }
        })
    }
}

/// Parameter of a template button component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonParameter {
    /// Suffix appended to a dynamic URL button
    Text(String),
    /// Developer payload returned when a quick reply is tapped
    Payload(String),
}

impl ButtonParameter {
    /// Text parameter
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Payload parameter
    #[must_use]
    pub fn payload(payload: impl Into<String>) -> Self {
        Self::Payload(payload.into())
    }
}

impl Serialize for ButtonParameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serialize_tagged(serializer, "text", text),
            Self::Payload(payload) => serialize_tagged(serializer, "payload", payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::media::{MediaSource, MediaType};
    use serde_json::json;

    const ALL: [ParameterType; 7] = [
        ParameterType::Text,
        ParameterType::Currency,
        ParameterType::DateTime,
        ParameterType::Image,
        ParameterType::Document,
        ParameterType::Video,
        ParameterType::Location,
    ];

    fn image() -> Media {
        Media::new(MediaType::Image, MediaSource::Link("https://example.com/a.png".into()))
    }

    fn media(media_type: MediaType) -> Media {
        Media::new(media_type, MediaSource::Id("9".into()))
    }

    /// Fills every slot except the one matching `kind`
    fn all_slots_but(kind: ParameterType) -> ParameterObjectBuilder {
        let mut b = ParameterObjectBuilder::new(kind);
        if kind != ParameterType::Text {
            b = b.text("t");
        }
        if kind != ParameterType::Currency {
            b = b.currency(Currency::new("USD", 1000, "1"));
        }
        if kind != ParameterType::DateTime {
            b = b.date_time(DateTime::new("today"));
        }
        if kind != ParameterType::Image {
            b = b.image(image());
        }
        if kind != ParameterType::Document {
            b = b.document(media(MediaType::Document));
        }
        if kind != ParameterType::Video {
            b = b.video(media(MediaType::Video));
        }
        if kind != ParameterType::Location {
            b = b.location(Location::new(1.0, 2.0));
        }
        b
    }

    #[test]
    fn mismatched_payload_raises_missing_value_for_the_tag() {
        for kind in ALL {
            let err = all_slots_but(kind).build().unwrap_err();
            assert_eq!(err.field(), Some(kind.as_str()));
            assert!(err.to_string().contains(kind.as_str()));
            assert_eq!(
                err.to_string(),
                format!("{kind} is required when the type is {kind}")
            );
        }
    }

    #[test]
    fn fresh_builder_reports_its_tag_as_missing() {
        for kind in ALL {
            let err = ParameterObject::builder(kind).build().unwrap_err();
            assert_eq!(err, ResourceError::missing_value(kind.as_str()));
        }
    }

    #[test]
    fn media_slot_rejects_media_of_another_type() {
        let document = Media::builder(MediaType::Document)
            .link("https://example.com/terms.pdf")
            .filename("terms.pdf")
            .build()
            .unwrap();

        let err = ParameterObject::builder(ParameterType::Image)
            .image(document)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ResourceError::InvalidMedia {
                field: "type",
                message: "expected image media, got document".into()
            }
        );

        for (kind, wrong) in [
            (ParameterType::Document, MediaType::Video),
            (ParameterType::Video, MediaType::Image),
        ] {
            let err = ParameterObject::builder(kind)
                .document(media(wrong))
                .video(media(wrong))
                .build()
                .unwrap_err();
            assert!(matches!(err, ResourceError::InvalidMedia { field: "type", .. }));
        }
    }

    #[test]
    fn media_constructor_tags_after_the_media_type() {
        for (media_type, kind) in [
            (MediaType::Image, ParameterType::Image),
            (MediaType::Document, ParameterType::Document),
            (MediaType::Video, ParameterType::Video),
        ] {
            assert_eq!(ParameterObject::media(media(media_type)).unwrap().kind(), kind);
        }

        for media_type in [MediaType::Audio, MediaType::Sticker] {
            let err = ParameterObject::media(media(media_type)).unwrap_err();
            assert_eq!(err.field(), Some("type"));
            assert!(err.to_string().contains(media_type.as_str()));
        }
    }

    #[test]
    fn mismatched_media_variant_does_not_serialize() {
        let param = ParameterObject::Image(media(MediaType::Document));
        let err = serde_json::to_value(&param).unwrap_err();
        assert!(err.to_string().contains("expected image media, got document"));
    }

    #[test]
    fn unknown_tag_is_invalid_type() {
        let err = ParameterObjectBuilder::from_tag("sticker").unwrap_err();
        assert_eq!(
            err,
            ResourceError::InvalidType {
                type_name: "sticker".into()
            }
        );
    }

    #[test]
    fn extra_slots_are_ignored_on_the_wire() {
        let p = ParameterObjectBuilder::from_tag("currency")
            .unwrap()
            .text("ignored")
            .currency(Currency::new("USD", 1000, "1000"))
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&p).unwrap(),
            json!({
                "type": "currency",
                "currency": { "fallback_value": "1000", "code": "USD", "amount_1000": 1000 }
            })
        );
    }

    #[test]
    fn each_variant_serializes_under_its_tag() {
        let cases = [
            (ParameterObject::text("I am a text"), json!({"type": "text", "text": "I am a text"})),
            (
                ParameterObject::DateTime(DateTime::new("May 22, 2022")),
                json!({"type": "date_time", "date_time": {"fallback_value": "May 22, 2022"}}),
            ),
            (
                ParameterObject::media(image()).unwrap(),
                json!({"type": "image", "image": {"link": "https://example.com/a.png"}}),
            ),
            (
                ParameterObject::media(media(MediaType::Document)).unwrap(),
                json!({"type": "document", "document": {"id": "9"}}),
            ),
            (
                ParameterObject::Location(Location::new(1.5, 2.5)),
                json!({"type": "location", "location": {"latitude": 1.5, "longitude": 2.5}}),
            ),
        ];

        for (param, expected) in cases {
            assert_eq!(serde_json::to_value(&param).unwrap(), expected);
        }
    }

    #[test]
    fn button_parameters_serialize_under_their_tag() {
        assert_eq!(
            serde_json::to_value(ButtonParameter::payload("payload")).unwrap(),
            json!({"type": "payload", "payload": "payload"})
        );
        assert_eq!(
            serde_json::to_value(ButtonParameter::text("order/42")).unwrap(),
            json!({"type": "text", "text": "order/42"})
        );
    }
}
