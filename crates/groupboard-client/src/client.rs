//! HTTP client for the group-messaging API.
//!
//! Three fixed GET endpoints under one base URL, each returning
//! `{ "response": <payload> }` and each authorized by a bearer token passed
//! as a `token` query parameter. A missing token is not an error here: the
//! request is issued without the parameter and the remote service rejects it.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use groupboard_models::{Bot, Envelope, Group, User};

use crate::api::GroupApi;
use crate::error::{ClientError, Result};

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.groupme.com/v3/";

/// Client for the group-messaging API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client against the given base URL.
    ///
    /// `token` is the opaque bearer credential, or `None` for an
    /// unauthenticated session.
    pub fn new(base_url: Url, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    /// Creates a client against the default API base.
    pub fn from_token(token: Option<String>) -> Result<Self> {
        let base_url = Url::parse(DEFAULT_API_BASE)?;
        Ok(Self::new(base_url, token))
    }

    /// Builds the full request URL for an endpoint, appending the token
    /// query parameter only when a token is present.
    fn endpoint_url(&self, endpoint: &'static str) -> Result<Url> {
        let mut url = self.base_url.join(endpoint)?;
        if let Some(token) = &self.token {
            url.query_pairs_mut().append_pair("token", token);
        }
        Ok(url)
    }

    /// Issues one GET and decodes the enveloped payload.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T> {
        let url = self.endpoint_url(endpoint)?;
        debug!(endpoint = endpoint, "Fetching");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = endpoint, status = status.as_u16(), "API error status");
            return Err(ClientError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|source| ClientError::Malformed {
                endpoint,
                source,
            })?;
        Ok(envelope.response)
    }
}

#[async_trait]
impl GroupApi for ApiClient {
    async fn me(&self) -> Result<User> {
        self.get_json("users/me").await
    }

    async fn groups(&self) -> Result<Vec<Group>> {
        self.get_json("groups").await
    }

    async fn bots(&self) -> Result<Vec<Bot>> {
        self.get_json("bots").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(token: Option<&str>) -> ApiClient {
        let base = Url::parse("https://api.example.com/v3/").unwrap();
        ApiClient::new(base, token.map(String::from))
    }

    #[test]
    fn endpoint_url_appends_token_when_present() {
        let client = client_with(Some("tok123"));
        let url = client.endpoint_url("groups").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v3/groups?token=tok123");
    }

    #[test]
    fn endpoint_url_omits_token_when_absent() {
        let client = client_with(None);
        let url = client.endpoint_url("users/me").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v3/users/me");
        assert!(url.query().is_none());
    }

    #[test]
    fn endpoint_url_preserves_base_path() {
        let client = client_with(Some("t"));
        let url = client.endpoint_url("bots").unwrap();
        assert!(url.path().ends_with("/v3/bots"));
    }

    #[test]
    fn token_is_query_escaped() {
        let client = client_with(Some("a b&c"));
        let url = client.endpoint_url("groups").unwrap();
        assert_eq!(url.query(), Some("token=a+b%26c"));
    }
}
