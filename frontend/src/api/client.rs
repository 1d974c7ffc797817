use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::*, config};

const ODATA_JSON: &str = "application/json;odata=nometadata";
const REQUEST_DIGEST_HEADER: &str = "X-RequestDigest";

/// Connection settings for the list store. Normally resolved from the runtime
/// config; tests pass them in directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientSettings {
    pub site_url: String,
    pub access_token: Option<String>,
    pub request_digest: Option<String>,
}

impl ClientSettings {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    settings: Option<ClientSettings>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            settings: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_settings(ClientSettings::new(base_url))
    }

    pub fn with_settings(settings: ClientSettings) -> Self {
        Self {
            client: Client::new(),
            settings: Some(settings),
        }
    }

    pub(crate) async fn resolved_settings(&self) -> ClientSettings {
        if let Some(settings) = &self.settings {
            settings.clone()
        } else {
            config::await_runtime_config().await.client_settings()
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn with_store_headers(
        request: RequestBuilder,
        settings: &ClientSettings,
        writes: bool,
    ) -> RequestBuilder {
        let mut request = request.header(header::ACCEPT, ODATA_JSON);
        if writes {
            request = request.header(header::CONTENT_TYPE, ODATA_JSON);
            if let Some(digest) = &settings.request_digest {
                request = request.header(REQUEST_DIGEST_HEADER, digest);
            }
        }
        if let Some(token) = &settings.access_token {
            request = request.bearer_auth(token);
        }
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn map_json_response<R>(&self, response: Response) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::map_error_response(status, response).await)
        }
    }

    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::map_error_response(status, response).await)
        }
    }

    async fn map_error_response(status: StatusCode, response: Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        let message = extract_store_error(&body).unwrap_or_else(|| {
            format!(
                "Request failed with status {}",
                status.canonical_reason().unwrap_or(status.as_str())
            )
        });
        ApiError::http(status.as_u16(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_settings_take_priority() {
        let client = ApiClient::new_with_base_url("https://tenant.example.com/sites/hr");
        assert_eq!(
            client.settings,
            Some(ClientSettings::new("https://tenant.example.com/sites/hr"))
        );
        assert!(ApiClient::new().settings.is_none());
    }
}
