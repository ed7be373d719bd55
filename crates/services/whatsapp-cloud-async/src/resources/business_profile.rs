use reqwest::Method;

use crate::{
    client::{Client, RequestBody},
    config::Config,
    error::WhatsAppError,
    response::{BusinessProfileDataResponse, Response, SuccessResponse},
    types::business_profile::UpdateBusinessProfileRequest,
};

use super::json_body;

const PROFILE_FIELDS: &str =
    "about,address,description,email,profile_picture_url,websites,vertical";

/// API resource for `{phone_number_id}/whatsapp_business_profile`
pub struct BusinessProfile<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> BusinessProfile<'c, C> {
    /// Creates a new `BusinessProfile` resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Fetches the profile of a phone number
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get(
        &self,
        phone_number_id: &str,
    ) -> Result<Response<BusinessProfileDataResponse>, WhatsAppError> {
        let raw = self
            .client
            .send_request(
                Method::GET,
                &format!("{phone_number_id}/whatsapp_business_profile"),
                RequestBody::Query(vec![("fields".to_owned(), PROFILE_FIELDS.to_owned())]),
                None,
            )
            .await?;
        Ok(Response::from_transport(raw))
    }

    /// Updates the fields set on `request`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn update(
        &self,
        phone_number_id: &str,
        request: &UpdateBusinessProfileRequest,
    ) -> Result<Response<SuccessResponse>, WhatsAppError> {
        let raw = self
            .client
            .send_request(
                Method::POST,
                &format!("{phone_number_id}/whatsapp_business_profile"),
                json_body(request)?,
                None,
            )
            .await?;
        Ok(Response::from_transport(raw))
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the `BusinessProfile` API resource
    #[must_use]
    pub const fn business_profile(&self) -> BusinessProfile<'_, C> {
        BusinessProfile::new(self)
    }
}
