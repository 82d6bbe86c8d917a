use std::sync::Arc;

use crate::modules::portfolio::application::aggregator::PortfolioAggregator;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetProjectByIdUseCase, GetServicesUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub aggregator: Arc<PortfolioAggregator>,
    pub get_project_by_id: Arc<dyn GetProjectByIdUseCase + Send + Sync>,
    pub get_services: Arc<dyn GetServicesUseCase + Send + Sync>,
}
