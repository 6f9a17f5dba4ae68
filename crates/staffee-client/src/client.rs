use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use staffee_config::BackendConfig;

use crate::error::ClientError;

/// Header carrying the session user's id on calls made on their behalf.
pub const USER_HEADER: &str = "x-user-id";

#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the base URL does not parse or can't
    /// carry a path.
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        Self::with_http(reqwest::Client::new(), config)
    }

    pub fn with_http(http: reqwest::Client, config: &BackendConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("{}: {e}", config.base_url)))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(config.base_url.clone()));
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, ClientError> {
        let url = self.endpoint(segments)?;
        debug!(method = %method, url = %url, "Backend request");
        Ok(self.http.request(method, url))
    }

    /// Like [`Self::request`], tagged with the acting user.
    pub(crate) fn request_as(
        &self,
        method: Method,
        segments: &[&str],
        user_id: &str,
    ) -> Result<RequestBuilder, ClientError> {
        Ok(self.request(method, segments)?.header(USER_HEADER, user_id))
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let body = self.send_raw(request).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    pub(crate) async fn send_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        self.send_raw(request).await.map(|_| ())
    }

    async fn send_raw(&self, request: RequestBuilder) -> Result<String, ClientError> {
        let response = request.send().await.inspect_err(|e| {
            warn!(error = %e, "Backend unreachable");
        })?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            debug!(status = status.as_u16(), "Backend response");
            return Ok(body);
        }

        let error = ClientError::from_response(status, &body);
        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %error, "Backend failed");
        } else {
            debug!(status = status.as_u16(), error = %error, "Backend rejected request");
        }
        Err(error)
    }
}
