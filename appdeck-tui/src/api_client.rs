//! REST client for the app-service endpoints.

use crate::config::TuiConfig;
use appdeck_api::{GetAppOverviewResponse, GetAppUsersResponse, GetAppsRequest, GetAppsResponse};

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

/// Client for the three app-service endpoints.
///
/// No request timeout is configured: a hung fetch stays in flight and
/// its UI section simply never leaves the loading state. In-flight
/// requests are never cancelled; superseded responses are discarded by
/// the caller's generation check instead.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of the app inventory.
    pub async fn get_apps(&self, params: &GetAppsRequest) -> Result<GetAppsResponse, ApiClientError> {
        let url = format!("{}/api/v1/app-service/get-apps", self.base_url);
        let response = self.client.put(url).json(params).send().await?;
        parse_response(response).await
    }

    /// Fetch the overview for a single app.
    pub async fn get_app_overview(&self, app_id: &str) -> Result<GetAppOverviewResponse, ApiClientError> {
        let url = format!("{}/api/v1/app-service/get-app-overview/{}", self.base_url, app_id);
        let response = self.client.get(url).send().await?;
        parse_response(response).await
    }

    /// Fetch the user list for a single app.
    pub async fn get_app_users(&self, app_id: &str) -> Result<GetAppUsersResponse, ApiClientError> {
        let url = format!(
            "{}/api/v1/app-service/get-app-overview-users/{}",
            self.base_url, app_id
        );
        let response = self.client.get(url).send().await?;
        parse_response(response).await
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        let text = response.text().await?;
        Err(ApiClientError::InvalidResponse(format!(
            "HTTP {}: {}",
            status.as_u16(),
            text
        )))
    }
}
