//! HTTP client for the Azure management plane
//!
//! Authentication is a bearer token supplied by the caller; the client does
//! not acquire or refresh tokens itself.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::{MgmtError, Result};

/// Default management endpoint for the public Azure cloud.
pub const DEFAULT_MANAGEMENT_URL: &str = "https://management.azure.com";

/// API version sent with every request built from a resource path.
pub const API_VERSION: &str = "2020-05-01";

/// Client for the Front Door management REST API.
#[derive(Debug, Clone)]
pub struct FrontDoorMgmtClient {
    http: reqwest::Client,
    base_url: String,
    subscription_id: String,
}

impl FrontDoorMgmtClient {
    pub fn builder() -> FrontDoorMgmtClientBuilder {
        FrontDoorMgmtClientBuilder::default()
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// GET a resource path under the management endpoint.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.request_url(path)?;
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        Self::handle_response(response).await
    }

    /// GET an absolute URL, used to follow `nextLink` continuations exactly
    /// as the service returned them.
    pub(crate) async fn get_absolute<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let url = Url::parse(url)?;
        debug!(%url, "GET (continuation)");
        let response = self.http.get(url).send().await?;
        Self::handle_response(response).await
    }

    /// PUT a JSON body to a resource path.
    pub(crate) async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.request_url(path)?;
        debug!(%url, "PUT");
        let response = self.http.put(url).json(body).send().await?;
        Self::handle_response(response).await
    }

    fn request_url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}?api-version={}", self.base_url, path, API_VERSION);
        Ok(Url::parse(&raw)?)
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        trace!(%status, "response received");
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        match status.as_u16() {
            404 => Err(MgmtError::NotFound),
            code @ (401 | 403) => Err(MgmtError::AuthenticationFailed { code }),
            code => {
                let body = response.text().await.unwrap_or_default();
                Err(MgmtError::ApiError { code, body })
            }
        }
    }
}

/// Builder for [`FrontDoorMgmtClient`].
#[derive(Debug, Default)]
pub struct FrontDoorMgmtClientBuilder {
    subscription_id: Option<String>,
    access_token: Option<String>,
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl FrontDoorMgmtClientBuilder {
    pub fn subscription_id(mut self, subscription_id: impl Into<String>) -> Self {
        self.subscription_id = Some(subscription_id.into());
        self
    }

    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<FrontDoorMgmtClient> {
        let subscription_id = self
            .subscription_id
            .ok_or_else(|| MgmtError::InvalidInput("subscription id is required".to_string()))?;
        let access_token = self
            .access_token
            .ok_or_else(|| MgmtError::InvalidInput("access token is required".to_string()))?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_MANAGEMENT_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let mut auth = HeaderValue::from_str(&format!("Bearer {access_token}")).map_err(|_| {
            MgmtError::InvalidInput("access token contains invalid header characters".to_string())
        })?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let mut http = reqwest::Client::builder().default_headers(headers);
        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }

        Ok(FrontDoorMgmtClient {
            http: http.build()?,
            base_url,
            subscription_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FrontDoorMgmtClient {
        FrontDoorMgmtClient::builder()
            .subscription_id("sub-1")
            .access_token("token")
            .base_url("https://example.test/")
            .build()
            .unwrap()
    }

    #[test]
    fn request_url_appends_api_version() {
        let url = client().request_url("/subscriptions/sub-1/things").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.test/subscriptions/sub-1/things?api-version=2020-05-01"
        );
    }

    #[test]
    fn builder_trims_trailing_slash() {
        assert_eq!(client().base_url, "https://example.test");
    }

    #[test]
    fn builder_requires_subscription_id() {
        let err = FrontDoorMgmtClient::builder()
            .access_token("token")
            .build()
            .unwrap_err();
        assert!(matches!(err, MgmtError::InvalidInput(_)));
    }

    #[test]
    fn builder_requires_access_token() {
        let err = FrontDoorMgmtClient::builder()
            .subscription_id("sub-1")
            .build()
            .unwrap_err();
        assert!(matches!(err, MgmtError::InvalidInput(_)));
    }
}
