use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, error, info};
use utoipa::ToSchema;

use crate::modules::portfolio::application::domain::PortfolioSnapshot;
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError,
};

/// Message exposed to clients when a fetch batch fails.
pub const FAILED_TO_LOAD: &str = "Failed to load data";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioRefreshError {
    #[error("Failed to load data: {0}")]
    Failed(#[from] PortfolioQueryError),

    #[error("Aggregator has been torn down")]
    TornDown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AggregatorStatus {
    pub loading: bool,
    pub error: Option<String>,
}

/// Snapshot and status captured under the same lock.
#[derive(Debug, Clone)]
pub struct PortfolioView {
    pub snapshot: Arc<PortfolioSnapshot>,
    pub status: AggregatorStatus,
}

struct AggregatorState {
    snapshot: Arc<PortfolioSnapshot>,
    loading: bool,
    error: Option<String>,
    in_flight: usize,
    torn_down: bool,
}

impl Default for AggregatorState {
    fn default() -> Self {
        Self {
            snapshot: Arc::new(PortfolioSnapshot::default()),
            loading: true,
            error: None,
            in_flight: 0,
            torn_down: false,
        }
    }
}

/// Process-wide cache of the nine portfolio collections.
///
/// A batch either replaces the whole snapshot or leaves it untouched, so
/// readers never observe a partially fetched portfolio. When batches
/// overlap, the one that completes last wins and `loading` stays set until
/// none is in flight.
pub struct PortfolioAggregator {
    query: Arc<dyn PortfolioQuery + Send + Sync>,
    state: RwLock<AggregatorState>,
}

impl PortfolioAggregator {
    pub fn new(query: Arc<dyn PortfolioQuery + Send + Sync>) -> Self {
        Self {
            query,
            state: RwLock::new(AggregatorState::default()),
        }
    }

    /// Builds the aggregator and starts the initial fetch in the background.
    pub fn spawn(query: Arc<dyn PortfolioQuery + Send + Sync>) -> Arc<Self> {
        let aggregator = Arc::new(Self::new(query));
        let background = Arc::clone(&aggregator);
        tokio::spawn(async move {
            // Failures are recorded in the status; nothing else to do here.
            let _ = background.refresh().await;
        });
        aggregator
    }

    /// Fetches every collection concurrently and swaps the snapshot on success.
    pub async fn refresh(&self) -> Result<(), PortfolioRefreshError> {
        {
            let mut state = self.state.write().await;
            if state.torn_down {
                return Err(PortfolioRefreshError::TornDown);
            }
            state.in_flight += 1;
            state.loading = true;
        }

        let result = self.fetch_all().await;

        let mut state = self.state.write().await;
        state.in_flight = state.in_flight.saturating_sub(1);

        if state.torn_down {
            debug!("Discarding portfolio fetch completed after teardown");
            return Err(PortfolioRefreshError::TornDown);
        }

        state.loading = state.in_flight > 0;

        match result {
            Ok(snapshot) => {
                info!(
                    projects = snapshot.projects.len(),
                    skills = snapshot.skills.len(),
                    "Portfolio snapshot refreshed"
                );
                state.snapshot = Arc::new(snapshot);
                state.error = None;
                Ok(())
            }
            Err(e) => {
                error!("Failed to load portfolio data: {}", e);
                state.error = Some(FAILED_TO_LOAD.to_string());
                Err(PortfolioRefreshError::Failed(e))
            }
        }
    }

    async fn fetch_all(&self) -> Result<PortfolioSnapshot, PortfolioQueryError> {
        let q = self.query.as_ref();

        let (
            profile,
            projects,
            skills,
            experiences,
            social_links,
            education,
            certifications,
            achievements,
            services,
        ) = futures::try_join!(
            q.get_profile(),
            q.get_all_projects(),
            q.get_all_skills(),
            q.get_all_experiences(),
            q.get_all_social_links(),
            q.get_all_education(),
            q.get_all_certifications(),
            q.get_all_achievements(),
            q.get_all_services(),
        )?;

        Ok(PortfolioSnapshot::ordered(
            profile,
            projects,
            skills,
            experiences,
            social_links,
            education,
            certifications,
            achievements,
            services,
        ))
    }

    pub async fn snapshot(&self) -> Arc<PortfolioSnapshot> {
        Arc::clone(&self.state.read().await.snapshot)
    }

    pub async fn status(&self) -> AggregatorStatus {
        let state = self.state.read().await;
        AggregatorStatus {
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    pub async fn view(&self) -> PortfolioView {
        let state = self.state.read().await;
        PortfolioView {
            snapshot: Arc::clone(&state.snapshot),
            status: AggregatorStatus {
                loading: state.loading,
                error: state.error.clone(),
            },
        }
    }

    /// Stops accepting fetch results. In-flight batches finish but are discarded.
    pub async fn teardown(&self) {
        let mut state = self.state.write().await;
        state.torn_down = true;
    }
}
