use reqwest::Method;

use crate::{
    client::Client,
    config::Config,
    error::WhatsAppError,
    response::{MessageDataResponse, Response, SuccessResponse},
    types::{
        contact::Contact,
        interactive::Interactive,
        media::{Media, MediaSource, MediaType},
        message::{MessageContent, MessageRequest, Reaction, ReadMessageRequest, TextBody},
        template::Template,
        values::Location,
    },
};

use super::json_body;

/// API resource for `POST {sender_id}/messages`
///
/// `sender_id` is the id of the business phone number sending the message.
/// Methods taking `reply_to` mark the message as a reply to that message id.
pub struct Messages<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Messages<'c, C> {
    /// Creates a new Messages resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Sends a fully built message
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent. Upstream rejections are
    /// returned inside the [`Response`].
    pub async fn send(
        &self,
        sender_id: &str,
        message: &MessageRequest,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        tracing::debug!(sender_id, to = message.to(), "sending message");
        let raw = self
            .client
            .send_request(
                Method::POST,
                &format!("{sender_id}/messages"),
                json_body(message)?,
                None,
            )
            .await?;
        Ok(Response::from_transport(raw))
    }

    async fn send_content(
        &self,
        sender_id: &str,
        to: &str,
        content: MessageContent,
        reply_to: Option<&str>,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        let message = MessageRequest::new(to, content).with_reply_to(reply_to);
        self.send(sender_id, &message).await
    }

    /// Sends a text message
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn send_text(
        &self,
        sender_id: &str,
        to: &str,
        body: &str,
        preview_url: Option<bool>,
        reply_to: Option<&str>,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        let content = MessageContent::Text {
            text: TextBody {
                body: body.to_owned(),
                preview_url,
            },
        };
        self.send_content(sender_id, to, content, reply_to).await
    }

    /// Sends a location pin
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn send_location(
        &self,
        sender_id: &str,
        to: &str,
        location: Location,
        reply_to: Option<&str>,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        self.send_content(sender_id, to, MessageContent::Location { location }, reply_to)
            .await
    }

    /// Sends any media reference, including captions and document file names
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn send_media(
        &self,
        sender_id: &str,
        to: &str,
        media: Media,
        reply_to: Option<&str>,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        self.send_content(sender_id, to, MessageContent::media(media), reply_to)
            .await
    }

    async fn send_media_by_ref(
        &self,
        kind: MediaType,
        sender_id: &str,
        to: &str,
        id: Option<&str>,
        link: Option<&str>,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        let source = MediaSource::from_parts(kind, id.map(str::to_owned), link.map(str::to_owned))?;
        self.send_media(sender_id, to, Media::new(kind, source), None)
            .await
    }

    /// Sends an image by uploaded media id or by link
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingArgument`](crate::ResourceError::MissingArgument)
    /// when neither `image_id` nor `link` is given, or an error if the request
    /// cannot be sent.
    pub async fn send_image(
        &self,
        sender_id: &str,
        to: &str,
        image_id: Option<&str>,
        link: Option<&str>,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        self.send_media_by_ref(MediaType::Image, sender_id, to, image_id, link)
            .await
    }

    /// Sends an audio clip by uploaded media id or by link
    ///
    /// # Errors
    ///
    /// Same as [`Self::send_image`].
    pub async fn send_audio(
        &self,
        sender_id: &str,
        to: &str,
        audio_id: Option<&str>,
        link: Option<&str>,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        self.send_media_by_ref(MediaType::Audio, sender_id, to, audio_id, link)
            .await
    }

    /// Sends a video by uploaded media id or by link
    ///
    /// # Errors
    ///
    /// Same as [`Self::send_image`].
    pub async fn send_video(
        &self,
        sender_id: &str,
        to: &str,
        video_id: Option<&str>,
        link: Option<&str>,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        self.send_media_by_ref(MediaType::Video, sender_id, to, video_id, link)
            .await
    }

    /// Sends a document by uploaded media id or by link
    ///
    /// # Errors
    ///
    /// Same as [`Self::send_image`].
    pub async fn send_document(
        &self,
        sender_id: &str,
        to: &str,
        document_id: Option<&str>,
        link: Option<&str>,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        self.send_media_by_ref(MediaType::Document, sender_id, to, document_id, link)
            .await
    }

    /// Sends a sticker by uploaded media id or by link
    ///
    /// # Errors
    ///
    /// Same as [`Self::send_image`].
    pub async fn send_sticker(
        &self,
        sender_id: &str,
        to: &str,
        sticker_id: Option<&str>,
        link: Option<&str>,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        self.send_media_by_ref(MediaType::Sticker, sender_id, to, sticker_id, link)
            .await
    }

    /// Sends one or more contact cards
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn send_contacts(
        &self,
        sender_id: &str,
        to: &str,
        contacts: Vec<Contact>,
        reply_to: Option<&str>,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        self.send_content(sender_id, to, MessageContent::Contacts { contacts }, reply_to)
            .await
    }

    /// Reacts to `message_id`; an empty `emoji` removes the reaction
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn send_reaction(
        &self,
        sender_id: &str,
        to: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        let reaction = Reaction {
            message_id: message_id.to_owned(),
            emoji: emoji.to_owned(),
        };
        self.send_content(sender_id, to, MessageContent::Reaction { reaction }, None)
            .await
    }

    /// Sends an interactive list or reply-button message
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn send_interactive(
        &self,
        sender_id: &str,
        to: &str,
        interactive: Interactive,
        reply_to: Option<&str>,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        self.send_content(
            sender_id,
            to,
            MessageContent::Interactive { interactive },
            reply_to,
        )
        .await
    }

    /// Sends an approved template
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn send_template(
        &self,
        sender_id: &str,
        to: &str,
        template: Template,
        reply_to: Option<&str>,
    ) -> Result<Response<MessageDataResponse>, WhatsAppError> {
        self.send_content(sender_id, to, MessageContent::Template { template }, reply_to)
            .await
    }

    /// Marks a received message as read
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn read_message(
        &self,
        sender_id: &str,
        message_id: &str,
    ) -> Result<Response<SuccessResponse>, WhatsAppError> {
        let raw = self
            .client
            .send_request(
                Method::POST,
                &format!("{sender_id}/messages"),
                json_body(&ReadMessageRequest::new(message_id))?,
                None,
            )
            .await?;
        Ok(Response::from_transport(raw))
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Messages API resource
    #[must_use]
    pub const fn messages(&self) -> Messages<'_, C> {
        Messages::new(self)
    }
}
