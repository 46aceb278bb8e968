use futures::future::BoxFuture;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::models::form::BookingFormData;
use crate::models::property::{Property, Review};

/// Failure talking to the booking backend
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request to booking backend failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("booking backend responded with status {0}")]
    Status(StatusCode),
    #[error("invalid booking backend url: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid property id {0:?}")]
    InvalidPropertyId(String),
    #[error("malformed response from booking backend: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Backend 404s and ids that can never name a property
    pub fn is_not_found(&self) -> bool {
        match self {
            ClientError::Status(status) => *status == StatusCode::NOT_FOUND,
            ClientError::InvalidPropertyId(_) => true,
            _ => false,
        }
    }
}

/// Sends a validated snapshot to the booking endpoint.
///
/// One attempt per call; any transport failure or non-2xx status is an `Err`.
#[cfg_attr(test, mockall::automock)]
pub trait BookingSubmitter: Send + Sync {
    fn submit_booking(&self, form: &BookingFormData) -> BoxFuture<'static, Result<(), ClientError>>;
}

/// Client for the booking REST backend
#[derive(Debug, Clone)]
pub struct BookingApiClient {
    client: Client,
    base_url: Url,
}

impl BookingApiClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// `timeout` bounds each request; no retries are made.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        // Keep a trailing '/' so the base always reads as a directory
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(&config.api_base_url, config.api_timeout)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Each segment is percent-encoded on its own, so an id can never add
    // path segments, a query or a fragment to the backend request
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn property_endpoint(&self, property_id: &str, rest: &[&str]) -> Result<Url, ClientError> {
        if matches!(property_id.trim(), "" | "." | "..") {
            return Err(ClientError::InvalidPropertyId(property_id.to_string()));
        }
        let mut segments = vec!["api", "properties", property_id];
        segments.extend_from_slice(rest);
        self.endpoint(&segments)
    }

    /// Fetch a property record.
    ///
    /// A successful response with an empty or `null` body yields `None`.
    pub async fn get_property(&self, property_id: &str) -> Result<Option<Property>, ClientError> {
        let url = self.property_endpoint(property_id, &[])?;

        info!("Fetching property {}", property_id);
        debug!("API URL: {}", url);

        let res = self.client.get(url).send().await?;
        info!("Response received with status: {}", res.status());

        if !res.status().is_success() {
            return Err(ClientError::Status(res.status()));
        }

        let body = res.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(serde_json::from_slice::<Option<Property>>(&body)?)
    }

    /// Fetch the reviews of a property.
    ///
    /// A body that is not a JSON array is treated as "no reviews".
    pub async fn list_reviews(&self, property_id: &str) -> Result<Vec<Review>, ClientError> {
        let url = self.property_endpoint(property_id, &["reviews"])?;

        info!("Fetching reviews for property {}", property_id);
        debug!("API URL: {}", url);

        let res = self.client.get(url).send().await?;
        info!("Response received with status: {}", res.status());

        if !res.status().is_success() {
            return Err(ClientError::Status(res.status()));
        }

        match res.json::<Value>().await? {
            Value::Array(items) => {
                let mut reviews = Vec::with_capacity(items.len());
                for item in items {
                    match serde_json::from_value::<Review>(item) {
                        Ok(review) => reviews.push(review),
                        Err(e) => warn!("Skipping malformed review for property {}: {}", property_id, e),
                    }
                }
                Ok(reviews)
            }
            _ => {
                warn!(
                    "Reviews response for property {} is not a list, treating as empty",
                    property_id
                );
                Ok(Vec::new())
            }
        }
    }

    /// Post a booking. The response body is ignored.
    pub async fn create_booking(&self, form: &BookingFormData) -> Result<(), ClientError> {
        let url = self.endpoint(&["api", "bookings"])?;

        info!("Submitting booking");
        debug!("API URL: {}", url);

        let res = self.client.post(url).json(form).send().await?;
        info!("Response received with status: {}", res.status());

        if !res.status().is_success() {
            return Err(ClientError::Status(res.status()));
        }
        Ok(())
    }
}

impl BookingSubmitter for BookingApiClient {
    fn submit_booking(&self, form: &BookingFormData) -> BoxFuture<'static, Result<(), ClientError>> {
        let client = self.clone();
        let form = form.clone();
        Box::pin(async move { client.create_booking(&form).await })
    }
}
