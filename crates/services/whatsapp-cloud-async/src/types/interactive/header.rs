use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::{char_len, too_long};
use crate::error::ResourceError;
use crate::types::media::{Media, MediaType};
use crate::types::parameter::{serialize_media, serialize_tagged};

/// Maximum characters of a text header
pub const HEADER_TEXT_MAXIMUM: usize = 60;
/// Maximum characters of the body text
pub const BODY_TEXT_MAXIMUM: usize = 1024;
/// Maximum characters of the footer text
pub const FOOTER_TEXT_MAXIMUM: usize = 60;

/// Type tag of an [`InteractiveHeader`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractiveHeaderType {
    /// Text header
    Text,
    /// Image header
    Image,
    /// Document header
    Document,
    /// Video header
    Video,
}

impl InteractiveHeaderType {
    /// Wire name of the tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Document => "document",
            Self::Video => "video",
        }
    }
}

impl FromStr for InteractiveHeaderType {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "document" => Ok(Self::Document),
            "video" => Ok(Self::Video),
            other => Err(ResourceError::InvalidType {
                type_name: other.to_string(),
            }),
        }
    }
}

/// Header of an interactive message
///
/// Media variants must hold media of the same type; serializing a mismatched one fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveHeader {
    /// Text, at most 60 characters
    Text(String),
    /// Image
    Image(Media),
    /// Document
    Document(Media),
    /// Video
    Video(Media),
}

impl InteractiveHeader {
    /// Text header
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInteractiveHeader`] when longer than 60 characters.
    pub fn text(text: impl Into<String>) -> Result<Self, ResourceError> {
        let text = text.into();
        let len = char_len(&text);
        if len > HEADER_TEXT_MAXIMUM {
            return Err(ResourceError::InvalidInteractiveHeader(too_long(
                len,
                "text in header",
                HEADER_TEXT_MAXIMUM,
            )));
        }
        Ok(Self::Text(text))
    }

    /// Media header, tagged after the media type
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
                message: format!("{} media cannot be an interactive header", other.as_str()),
            }),
        }
    }

    /// Starts a builder that fills payload slots before checking them against the tag
    #[must_use]
    pub fn builder(kind: InteractiveHeaderType) -> InteractiveHeaderBuilder {
        InteractiveHeaderBuilder {
            kind,
            text: None,
            image: None,
            document: None,
            video: None,
        }
    }

    /// Type tag of the header
    #[must_use]
    pub const fn kind(&self) -> InteractiveHeaderType {
        match self {
            Self::Text(_) => InteractiveHeaderType::Text,
            Self::Image(_) => InteractiveHeaderType::Image,
            Self::Document(_) => InteractiveHeaderType::Document,
            Self::Video(_) => InteractiveHeaderType::Video,
        }
    }
}

impl Serialize for InteractiveHeader {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serialize_tagged(serializer, self.kind().as_str(), text),
            Self::Image(media) => serialize_media(serializer, MediaType::Image, media),
            Self::Document(media) => serialize_media(serializer, MediaType::Document, media),
            Self::Video(media) => serialize_media(serializer, MediaType::Video, media),
        }
    }
}

/// Slot-based builder for [`InteractiveHeader`]
#[derive(Debug, Clone)]
pub struct InteractiveHeaderBuilder {
    kind: InteractiveHeaderType,
    text: Option<String>,
    image: Option<Media>,
    document: Option<Media>,
    video: Option<Media>,
}

impl InteractiveHeaderBuilder {
    /// Text slot
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
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

    /// Validates the tag/payload pairing and the text length
    ///
    /// # Errors
    ///
    /// - [`ResourceError::MissingValue`] naming the tag when its slot is empty.
    /// - [`ResourceError::InvalidMedia`] when a media slot holds media of another type.
    /// - [`ResourceError::InvalidInteractiveHeader`] when the text is too long.
    pub fn build(self) -> Result<InteractiveHeader, ResourceError> {
        let tag = self.kind.as_str();
        let missing = || ResourceError::missing_value(tag);
        let (slot, expected) = match self.kind {
            InteractiveHeaderType::Text => {
                return InteractiveHeader::text(self.text.ok_or_else(missing)?);
            }
            InteractiveHeaderType::Image => (self.image, MediaType::Image),
            InteractiveHeaderType::Document => (self.document, MediaType::Document),
            InteractiveHeaderType::Video => (self.video, MediaType::Video),
        };
        let media = slot.ok_or_else(missing)?;
        media.check_type(expected)?;
        InteractiveHeader::media(media)
    }
}

/// Body of an interactive message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractiveBody {
    text: String,
}

impl InteractiveBody {
    /// Creates a body
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInteractiveBody`] when longer than 1024 characters.
    pub fn new(text: impl Into<String>) -> Result<Self, ResourceError> {
        let text = text.into();
        let len = char_len(&text);
        if len > BODY_TEXT_MAXIMUM {
            return Err(ResourceError::InvalidInteractiveBody(too_long(
                len,
                "text in body",
                BODY_TEXT_MAXIMUM,
            )));
        }
        Ok(Self { text })
    }

    /// Body text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Footer of an interactive message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractiveFooter {
    text: String,
}

impl InteractiveFooter {
    /// Creates a footer
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidInteractiveFooter`] when longer than 60 characters.
    pub fn new(text: impl Into<String>) -> Result<Self, ResourceError> {
        let text = text.into();
        let len = char_len(&text);
        if len > FOOTER_TEXT_MAXIMUM {
            return Err(ResourceError::InvalidInteractiveFooter(too_long(
                len,
                "text in footer",
                FOOTER_TEXT_MAXIMUM,
            )));
        }
        Ok(Self { text })
    }

    /// Footer text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
