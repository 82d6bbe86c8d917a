use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::application::aggregator::{AggregatorStatus, PortfolioView};
use crate::modules::portfolio::application::domain::PortfolioSnapshot;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct PortfolioResponse {
    pub status: AggregatorStatus,
    pub snapshot: PortfolioSnapshot,
}

impl From<PortfolioView> for PortfolioResponse {
    fn from(view: PortfolioView) -> Self {
        Self {
            status: view.status,
            snapshot: (*view.snapshot).clone(),
        }
    }
}

/// Aggregated portfolio snapshot
///
/// Every collection in display order, with the aggregator's loading and
/// error state. An empty snapshot while `loading` is true means the first
/// fetch has not completed yet.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Current snapshot and status",
            body = inline(SuccessResponse<PortfolioResponse>)
        )
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    let view = data.portfolio.aggregator.view().await;
    ApiResponse::success(PortfolioResponse::from(view))
}
