use reqwest::Method;
use serde::Serialize;

use crate::{
    client::{Client, RequestBody},
    config::Config,
    error::WhatsAppError,
    response::{PhoneNumberDataResponse, PhoneNumbersDataResponse, Response, SuccessResponse},
    types::message::MESSAGING_PRODUCT,
};

use super::json_body;

#[derive(Serialize)]
struct RegisterRequest<'a> {
    messaging_product: &'static str,
    pin: &'a str,
}

/// API resource for business phone numbers
pub struct PhoneNumbers<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> PhoneNumbers<'c, C> {
    /// Creates a new `PhoneNumbers` resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists the phone numbers of a WhatsApp Business Account
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn list(
        &self,
        business_account_id: &str,
    ) -> Result<Response<PhoneNumbersDataResponse>, WhatsAppError> {
        let raw = self
            .client
            .send_request(
                Method::GET,
                &format!("{business_account_id}/phone_numbers"),
                RequestBody::None,
                None,
            )
            .await?;
        Ok(Response::from_transport(raw))
    }

    /// Fetches one phone number
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get(
        &self,
        phone_number_id: &str,
    ) -> Result<Response<PhoneNumberDataResponse>, WhatsAppError> {
        let raw = self
            .client
            .send_request(Method::GET, phone_number_id, RequestBody::None, None)
            .await?;
        Ok(Response::from_transport(raw))
    }

    /// Registers the number for Cloud API use with its two-step verification `pin`
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn register(
        &self,
        phone_number_id: &str,
        pin: &str,
    ) -> Result<Response<SuccessResponse>, WhatsAppError> {
        let body = RegisterRequest {
            messaging_product: MESSAGING_PRODUCT,
            pin,
        };
        let raw = self
            .client
            .send_request(
                Method::POST,
                &format!("{phone_number_id}/register"),
                json_body(&body)?,
                None,
            )
            .await?;
        Ok(Response::from_transport(raw))
    }

    /// Deregisters the number from Cloud API use
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn deregister(
        &self,
        phone_number_id: &str,
    ) -> Result<Response<SuccessResponse>, WhatsAppError> {
        let raw = self
            .client
            .send_request(
                Method::POST,
                &format!("{phone_number_id}/deregister"),
                RequestBody::None,
                None,
            )
            .await?;
        Ok(Response::from_transport(raw))
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the `PhoneNumbers` API resource
    #[must_use]
    pub const fn phone_numbers(&self) -> PhoneNumbers<'_, C> {
        PhoneNumbers::new(self)
    }
}
