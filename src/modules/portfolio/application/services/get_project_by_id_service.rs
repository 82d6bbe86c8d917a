use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::{EntityId, Project};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetProjectByIdError, GetProjectByIdUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;

pub struct GetProjectByIdService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetProjectByIdService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectByIdUseCase for GetProjectByIdService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, id: EntityId) -> Result<Project, GetProjectByIdError> {
        self.query
            .get_project_by_id(id)
            .await
            .map_err(|e| GetProjectByIdError::RetrievalFailed(e.to_string()))?
            .ok_or(GetProjectByIdError::NotFound)
    }
}
