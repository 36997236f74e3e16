//! Reqwest-backed `StatusPublisher` for the X/Twitter v2 API, authenticated
//! with OAuth 1.0a user credentials.
use std::time::Duration;

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use lakefeed_core::domain::config::{SocialConfig, SocialCredentials};

use super::oauth::{Nonce, OAuthCredentials};
use super::{PublishError, PublishedStatus, StatusPublisher};

pub struct TwitterClient {
    client: reqwest::Client,
    endpoint: String,
    credentials: OAuthCredentials,
}

#[derive(Debug, Serialize)]
struct CreateTweet<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateTweetResponse {
    data: TweetData,
}

#[derive(Debug, Deserialize)]
struct TweetData {
    id: String,
    text: String,
}

impl TwitterClient {
    pub fn new(cfg: &SocialConfig) -> Result<Self, PublishError> {
        let credentials = require_credentials(&cfg.credentials)?;
        let client = reqwest::Client::builder()
            .user_agent(cfg.user_agent.clone())
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/2/tweets", cfg.api_base),
            credentials,
        })
    }
}

fn require_credentials(c: &SocialCredentials) -> Result<OAuthCredentials, PublishError> {
    let missing: Vec<&str> = [
        ("api_key", &c.api_key),
        ("api_secret", &c.api_secret),
        ("access_token", &c.access_token),
        ("token_secret", &c.token_secret),
    ]
    .iter()
    .filter(|(_, v)| v.is_none())
    .map(|(k, _)| *k)
    .collect();

    match (&c.api_key, &c.api_secret, &c.access_token, &c.token_secret) {
        (Some(key), Some(secret), Some(token), Some(token_secret)) => Ok(OAuthCredentials {
            consumer_key: key.clone(),
            consumer_secret: secret.clone(),
            token: token.clone(),
            token_secret: token_secret.clone(),
        }),
        _ => Err(PublishError::MissingCredentials(missing.join(", "))),
    }
}

#[async_trait::async_trait]
impl StatusPublisher for TwitterClient {
    async fn publish(&self, status: &str) -> Result<PublishedStatus, PublishError> {
        let auth = self
            .credentials
            .authorization("POST", &self.endpoint, &[], &Nonce::fresh());

        debug!(endpoint = %self.endpoint, chars = status.chars().count(), "publishing status");
        let resp = self
            .client
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, auth)
            .json(&CreateTweet { text: status })
            .send()
            .await?;

        let code = resp.status();
        if !code.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = code.as_u16(), "status update rejected");
            return Err(PublishError::Api {
                status: code.as_u16(),
                body,
            });
        }

        let parsed: CreateTweetResponse = resp
            .json()
            .await
            .map_err(|e| PublishError::Parse(e.to_string()))?;

        Ok(PublishedStatus {
            id: parsed.data.id,
            text: parsed.data.text,
        })
    }
}
