use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::Service;
use crate::modules::portfolio::application::domain::sort_by_display_order;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetServicesError, GetServicesUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;

pub struct GetServicesService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetServicesService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetServicesUseCase for GetServicesService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Service>, GetServicesError> {
        self.query
            .get_all_services()
            .await
            .map(sort_by_display_order)
            .map_err(|e| GetServicesError::RetrievalFailed(e.to_string()))
    }
}
