use std::path::Path;

use reqwest::{
    Method,
    multipart::{Form, Part},
};

use crate::{
    client::{Client, DownloadedFile, RequestBody},
    config::Config,
    error::WhatsAppError,
    response::{MediaDataResponse, Response, SuccessResponse},
    types::message::MESSAGING_PRODUCT,
};

/// API resource for media upload, lookup, deletion and download
pub struct MediaFiles<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> MediaFiles<'c, C> {
    /// Creates a new `MediaFiles` resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Looks up the download URL and metadata of `media_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get(&self, media_id: &str) -> Result<Response<MediaDataResponse>, WhatsAppError> {
        let raw = self
            .client
            .send_request(Method::GET, media_id, RequestBody::None, None)
            .await?;
        Ok(Response::from_transport(raw))
    }

    /// Deletes `media_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn delete(&self, media_id: &str) -> Result<Response<SuccessResponse>, WhatsAppError> {
        let raw = self
            .client
            .send_request(Method::DELETE, media_id, RequestBody::None, None)
            .await?;
        Ok(Response::from_transport(raw))
    }

    /// Uploads `data` as `file_name` with the given MIME type
    ///
    /// The returned `id` can be used as a media id when sending messages.
    ///
    /// # Errors
    ///
    /// Returns [`WhatsAppError::Config`] for an unparseable MIME type, or an
    /// error if the request cannot be sent.
    pub async fn upload(
        &self,
        sender_id: &str,
        data: Vec<u8>,
        file_name: &str,
        mime_type: &str,
    ) -> Result<Response<MediaDataResponse>, WhatsAppError> {
        let part = Part::bytes(data)
            .file_name(file_name.to_owned())
            .mime_str(mime_type)
            .map_err(|_| WhatsAppError::Config(format!("Invalid MIME type {mime_type}")))?;
        let form = Form::new()
            .text("messaging_product", MESSAGING_PRODUCT)
            .text("type", mime_type.to_owned())
            .part("file", part);

        tracing::debug!(sender_id, file_name, mime_type, "uploading media");
        let raw = self
            .client
            .send_request(
                Method::POST,
                &format!("{sender_id}/media"),
                RequestBody::Multipart(form),
                None,
            )
            .await?;
        Ok(Response::from_transport(raw))
    }

    /// Reads `path` and uploads it under its file name
    ///
    /// # Errors
    ///
    /// Returns [`WhatsAppError::Io`] when the file cannot be read, otherwise the
    /// same errors as [`Self::upload`].
    pub async fn upload_file(
        &self,
        sender_id: &str,
        path: impl AsRef<Path>,
        mime_type: &str,
    ) -> Result<Response<MediaDataResponse>, WhatsAppError> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload");
        self.upload(sender_id, data, file_name, mime_type).await
    }

    /// Downloads a media `url` (from [`Self::get`]) into `path`
    ///
    /// # Errors
    ///
    /// Same as [`Client::download_file`].
    pub async fn download(
        &self,
        url: &str,
        mime_type: Option<&str>,
        path: impl AsRef<Path>,
    ) -> Result<DownloadedFile, WhatsAppError> {
        self.client.download_file(url, mime_type, path).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Media API resource
    #[must_use]
    pub const fn media(&self) -> MediaFiles<'_, C> {
        MediaFiles::new(self)
    }
}
