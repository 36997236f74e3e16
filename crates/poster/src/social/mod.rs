//! Publishing status updates to a social feed.
pub mod oauth;
pub mod twitter;

pub use twitter::TwitterClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedStatus {
    pub id: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("missing credentials: {0}")]
    MissingCredentials(String),
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),
    #[error("api responded {status}: {body}")]
    Api { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Parse(String),
}

#[async_trait::async_trait]
pub trait StatusPublisher: Send + Sync {
    async fn publish(&self, status: &str) -> Result<PublishedStatus, PublishError>;
}
