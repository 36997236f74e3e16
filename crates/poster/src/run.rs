//! One poster invocation: load lakes, compose a status, publish it.
use rand::Rng;
use tracing::info;

use lakefeed_core::ports::repo::{LakeRepo, RepoError};

use crate::sentence::{compose_status, SentenceError, EXCLAMATIONS};
use crate::social::{PublishError, PublishedStatus, StatusPublisher};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("load lakes: {0}")]
    Repo(#[from] RepoError),
    #[error("compose status: {0}")]
    Sentence(#[from] SentenceError),
    #[error("publish status: {0}")]
    Publish(#[from] PublishError),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Published(PublishedStatus),
    DryRun(String),
}

/// With no publisher the composed status is returned without being sent.
pub async fn post_once<R>(
    repo: &dyn LakeRepo,
    publisher: Option<&dyn StatusPublisher>,
    rng: &mut R,
) -> Result<Outcome, RunError>
where
    R: Rng + ?Sized,
{
    let lakes = repo.all_lakes().await?;
    info!(lakes = lakes.len(), "lake records loaded");

    let status = compose_status(&lakes, &EXCLAMATIONS, rng)?;

    let Some(publisher) = publisher else {
        info!(%status, "dry run, not publishing");
        return Ok(Outcome::DryRun(status));
    };

    let published = publisher.publish(&status).await?;
    info!(id = %published.id, %status, "status published");
    Ok(Outcome::Published(published))
}
