use reqwest::Method;

use crate::{
    client::{Client, RequestBody},
    config::Config,
    error::WhatsAppError,
    response::{Response, SuccessResponse, TemplateDataResponse, TemplatesDataResponse},
    types::template::CreateTemplateRequest,
};

use super::json_body;

/// API resource for `{business_account_id}/message_templates`
pub struct Templates<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Templates<'c, C> {
    /// Creates a new Templates resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Submits a template for review
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn create(
        &self,
        business_account_id: &str,
        request: &CreateTemplateRequest,
    ) -> Result<Response<TemplateDataResponse>, WhatsAppError> {
        let raw = self
            .client
            .send_request(
                Method::POST,
                &format!("{business_account_id}/message_templates"),
                json_body(request)?,
                None,
            )
            .await?;
        Ok(Response::from_transport(raw))
    }

    /// Lists templates, at most `limit` per page when given
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn list(
        &self,
        business_account_id: &str,
        limit: Option<u32>,
    ) -> Result<Response<TemplatesDataResponse>, WhatsAppError> {
        let body = limit.map_or(RequestBody::None, |limit| {
            RequestBody::Query(vec![("limit".to_owned(), limit.to_string())])
        });
        let raw = self
            .client
            .send_request(
                Method::GET,
                &format!("{business_account_id}/message_templates"),
                body,
                None,
            )
            .await?;
        Ok(Response::from_transport(raw))
    }

    /// Deletes every language of the template called `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn delete(
        &self,
        business_account_id: &str,
        name: &str,
    ) -> Result<Response<SuccessResponse>, WhatsAppError> {
        let raw = self
            .client
            .send_request(
                Method::DELETE,
                &format!("{business_account_id}/message_templates"),
                RequestBody::Query(vec![("name".to_owned(), name.to_owned())]),
                None,
            )
            .await?;
        Ok(Response::from_transport(raw))
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the Templates API resource
    #[must_use]
    pub const fn templates(&self) -> Templates<'_, C> {
        Templates::new(self)
    }
}
