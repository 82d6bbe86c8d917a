use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::{EntityId, Project};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetProjectByIdError {
    #[error("Project not found")]
    NotFound,

    #[error("Data retrieval failed: {0}")]
    RetrievalFailed(String),
}

#[async_trait]
pub trait GetProjectByIdUseCase: Send + Sync {
    async fn execute(&self, id: EntityId) -> Result<Project, GetProjectByIdError>;
}
