//! Media references embedded in messages, template parameters and interactive headers

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ResourceError;

/// Kind of media asset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    /// Audio clip
    Audio,
    /// Document (PDF, spreadsheet, ...)
    Document,
    /// Image
    Image,
    /// Video
    Video,
    /// Sticker
    Sticker,
}

impl MediaType {
    /// Wire name of the type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Image => "image",
            Self::Video => "video",
            Self::Sticker => "sticker",
        }
    }

    const fn supports_caption(self) -> bool {
        matches!(self, Self::Document | Self::Image)
    }
}

/// Where the asset lives: an uploaded media id or a public link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// Id returned by a media upload
    Id(String),
    /// Publicly reachable URL
    Link(String),
}

impl MediaSource {
    /// Resolves an either/or pair of arguments into a source
    ///
    /// A link takes precedence when both are given.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingArgument`] naming `<kind>_id or link` when neither is set.
    pub fn from_parts(
        kind: MediaType,
        id: Option<String>,
        link: Option<String>,
    ) -> Result<Self, ResourceError> {
        match (id, link) {
            (_, Some(link)) => Ok(Self::Link(link)),
            (Some(id), None) => Ok(Self::Id(id)),
            (None, None) => Err(ResourceError::MissingArgument(format!(
                "{}_id or link is required",
                kind.as_str()
            ))),
        }
    }

    fn entry(&self) -> (&'static str, &str) {
        match self {
            Self::Id(id) => ("id", id),
            Self::Link(link) => ("link", link),
        }
    }
}

/// A validated media reference
///
/// `caption` is only accepted for documents and images, `filename` only for documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    media_type: MediaType,
    source: MediaSource,
    caption: Option<String>,
    filename: Option<String>,
}

impl Media {
    /// Creates a media reference without caption or filename
    #[must_use]
    pub const fn new(media_type: MediaType, source: MediaSource) -> Self {
        Self {
            media_type,
            source,
            caption: None,
            filename: None,
        }
    }

    /// Starts a builder for a reference of the given type
    #[must_use]
    pub fn builder(media_type: MediaType) -> MediaBuilder {
        MediaBuilder {
            media_type,
            id: None,
            link: None,
            caption: None,
            filename: None,
        }
    }

    /// Media type
    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Id or link
    #[must_use]
    pub const fn source(&self) -> &MediaSource {
        &self.source
    }

    /// Caption, if any
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Filename, if any
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Checks that the reference is of type `expected`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidMedia`] on field `type` otherwise.
    pub fn check_type(&self, expected: MediaType) -> Result<(), ResourceError> {
        if self.media_type == expected {
            return Ok(());
        }
        Err(ResourceError::InvalidMedia {
            field: "type",
            message: format!(
                "expected {} media, got {}",
                expected.as_str(),
                self.media_type.as_str()
            ),
        })
    }
}

impl Serialize for Media {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        let (key, value) = self.source.entry();
        map.serialize_entry(key, value)?;
        if let Some(caption) = &self.caption {
            map.serialize_entry("caption", caption)?;
        }
        if let Some(filename) = &self.filename {
            map.serialize_entry("filename", filename)?;
        }
        map.end()
    }
}

/// Builder for [`Media`]
#[derive(Debug, Clone)]
pub struct MediaBuilder {
    media_type: MediaType,
    id: Option<String>,
    link: Option<String>,
    caption: Option<String>,
    filename: Option<String>,
}

impl MediaBuilder {
    /// Uploaded media id
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Public link
    #[must_use]
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Caption (documents and images only)
    #[must_use]
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Filename (documents only)
    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Validates and builds the reference
    ///
    /// # Errors
    ///
    /// - [`ResourceError::InvalidMedia`] when `filename` is set on a non-document or
    ///   `caption` on anything other than a document or image.
    /// - [`ResourceError::MissingArgument`] when neither id nor link is set.
    pub fn build(self) -> Result<Media, ResourceError> {
        if self.filename.is_some() && self.media_type != MediaType::Document {
            return Err(ResourceError::InvalidMedia {
                field: "filename",
                message: "filename can only be used with document".into(),
            });
        }
        if self.caption.is_some() && !self.media_type.supports_caption() {
            return Err(ResourceError::InvalidMedia {
                field: "caption",
                message: "caption can only be used with document or image".into(),
            });
        }

        let source = MediaSource::from_parts(self.media_type, self.id, self.link)?;
        Ok(Media {
            media_type: self.media_type,
            source,
            caption: self.caption,
            filename: self.filename,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_with_filename_and_caption() {
        let media = Media::builder(MediaType::Document)
            .link("https://example.com/terms.pdf")
            .caption("Terms")
            .filename("terms.pdf")
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&media).unwrap(),
            json!({
                "link": "https://example.com/terms.pdf",
                "caption": "Terms",
                "filename": "terms.pdf"
            })
        );
    }

    #[test]
    fn filename_rejected_for_image() {
        let err = Media::builder(MediaType::Image)
            .id("123")
            .filename("a.png")
            .build()
            .unwrap_err();

        assert_eq!(err.field(), Some("filename"));
        assert_eq!(err.to_string(), "filename can only be used with document");
    }

    #[test]
    fn caption_rejected_for_audio_video_sticker() {
        for kind in [MediaType::Audio, MediaType::Video, MediaType::Sticker] {
            let err = Media::builder(kind)
                .id("123")
                .caption("nope")
                .build()
                .unwrap_err();
            assert!(matches!(err, ResourceError::InvalidMedia { field: "caption", .. }));
        }
    }

    #[test]
    fn caption_allowed_for_image() {
        let media = Media::builder(MediaType::Image)
            .id("123")
            .caption("a cat")
            .build()
            .unwrap();
        assert_eq!(media.caption(), Some("a cat"));
        assert_eq!(
            serde_json::to_value(&media).unwrap(),
            json!({ "id": "123", "caption": "a cat" })
        );
    }

    #[test]
    fn missing_source_names_the_kind() {
        let err = Media::builder(MediaType::Video).build().unwrap_err();
        assert_eq!(
            err,
            ResourceError::MissingArgument("video_id or link is required".into())
        );
    }

    #[test]
    fn link_wins_over_id() {
        let source = MediaSource::from_parts(
            MediaType::Image,
            Some("id-1".into()),
            Some("https://example.com/a.png".into()),
        )
        .unwrap();
        assert_eq!(source, MediaSource::Link("https://example.com/a.png".into()));
    }

    #[test]
    fn check_type_rejects_other_media_types() {
        let doc = Media::new(MediaType::Document, MediaSource::Id("9".into()));
        assert_eq!(doc.check_type(MediaType::Document), Ok(()));

        let err = doc.check_type(MediaType::Image).unwrap_err();
        assert_eq!(err.field(), Some("type"));
        assert_eq!(err.to_string(), "expected image media, got document");
    }
}
