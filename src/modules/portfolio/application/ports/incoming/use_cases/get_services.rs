use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::Service;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetServicesError {
    #[error("Data retrieval failed: {0}")]
    RetrievalFailed(String),
}

/// Services straight from the gateway, independent of the aggregator snapshot.
#[async_trait]
pub trait GetServicesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Service>, GetServicesError>;
}
