use std::sync::Arc;

use actix_web::web;

use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::modules::navigation::application::LoadingOrchestrator;
use crate::modules::portfolio::application::aggregator::PortfolioAggregator;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetProjectByIdUseCase, GetServicesUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;
use crate::modules::portfolio::application::services::{
    GetProjectByIdService, GetServicesService,
};
use crate::tests::support::portfolio_fixtures::sample_dataset;
use crate::tests::support::stubs::{StubPortfolioQuery, StubSubmitContactMessageUseCase};
use crate::AppState;

/// Aggregator over `query` with one refresh already completed (or failed).
pub async fn loaded_aggregator(
    query: impl PortfolioQuery + Send + Sync + 'static,
) -> Arc<PortfolioAggregator> {
    let aggregator = Arc::new(PortfolioAggregator::new(Arc::new(query)));
    // A failed refresh is a valid state for tests that exercise error rendering.
    let _ = aggregator.refresh().await;
    aggregator
}

pub struct TestAppStateBuilder {
    aggregator: Arc<PortfolioAggregator>,
    get_project_by_id: Arc<dyn GetProjectByIdUseCase + Send + Sync>,
    get_services: Arc<dyn GetServicesUseCase + Send + Sync>,
    submit_contact_message: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    loading_orchestrator: Arc<LoadingOrchestrator>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let query = StubPortfolioQuery::new(sample_dataset());

        Self {
            aggregator: Arc::new(PortfolioAggregator::new(Arc::new(query.clone()))),
            get_project_by_id: Arc::new(GetProjectByIdService::new(query.clone())),
            get_services: Arc::new(GetServicesService::new(query)),
            submit_contact_message: StubSubmitContactMessageUseCase::accepting(),
            loading_orchestrator: Arc::new(LoadingOrchestrator::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_aggregator(mut self, aggregator: Arc<PortfolioAggregator>) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// Routes the by-id and services use cases through `query`.
    pub fn with_portfolio_query(mut self, query: StubPortfolioQuery) -> Self {
        self.get_project_by_id = Arc::new(GetProjectByIdService::new(query.clone()));
        self.get_services = Arc::new(GetServicesService::new(query));
        self
    }

    pub fn with_submit_contact_message(
        mut self,
        uc: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    ) -> Self {
        self.submit_contact_message = uc;
        self
    }

    pub fn with_loading_orchestrator(mut self, orchestrator: Arc<LoadingOrchestrator>) -> Self {
        self.loading_orchestrator = orchestrator;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: PortfolioUseCases {
                aggregator: self.aggregator,
                get_project_by_id: self.get_project_by_id,
                get_services: self.get_services,
            },
            submit_contact_message: self.submit_contact_message,
            loading_orchestrator: self.loading_orchestrator,
        })
    }
}
