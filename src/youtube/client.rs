use super::YouTubeOperations;
use crate::auth::{AuthType, YOUTUBE_READONLY_SCOPE, create_and_verify_authenticator};
use crate::error::{AppError, Result};
use crate::youtube::types::{ChannelListResponse, ChannelStatistics};
use async_trait::async_trait;
use reqwest::Client;
use tracing::instrument;
use yup_oauth2::ServiceAccountKey;

const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

pub struct YouTubeClient {
    client: Client,
    auth: AuthType,
    api_base_url: String,
}

impl YouTubeClient {
    /// Create a new YouTubeClient with authenticated access
    #[instrument(name = "Authenticating to YouTube", skip_all)]
    pub async fn new(credentials: ServiceAccountKey) -> Result<Self> {
        let auth = create_and_verify_authenticator(credentials).await?;

        Ok(Self {
            client: Client::new(),
            auth,
            api_base_url: API_BASE_URL.to_string(),
        })
    }

    async fn access_token(&self) -> Result<String> {
        let token = self
            .auth
            .token(&[YOUTUBE_READONLY_SCOPE])
            .await
            .map_err(|e| AppError::Auth(format!("Failed to get token: {}", e)))?;

        token
            .token()
            .map(|t| t.to_string())
            .ok_or_else(|| AppError::Auth("Token response contained no access token".to_string()))
    }
}

#[async_trait]
impl YouTubeOperations for YouTubeClient {
    #[instrument(name = "Fetching channel statistics", skip_all, fields(channel_id))]
    async fn channel_statistics(&self, channel_id: &str) -> Result<Option<ChannelStatistics>> {
        let access_token = self.access_token().await?;
        let url = format!("{}/channels", self.api_base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("part", "statistics"), ("id", channel_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::YouTube(format!(
                "Failed to list channel statistics: {} - {}",
                status, body
            )));
        }

        let listing: ChannelListResponse = response.json().await?;

        Ok(listing.items.into_iter().next().map(|item| item.statistics))
    }
}
