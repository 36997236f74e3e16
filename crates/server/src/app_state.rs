use std::sync::Arc;

use lakefeed_core::ports::repo::LakeRepo;

/// Each request borrows a pooled connection through the repository.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn LakeRepo>,
}
