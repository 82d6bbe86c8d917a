use actix_web::{post, web, HttpResponse, Responder};

use super::PortfolioResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::aggregator::{PortfolioRefreshError, FAILED_TO_LOAD};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Re-fetch every collection
///
/// Replaces the snapshot only when all nine retrievals succeed.
#[utoipa::path(
    post,
    path = "/api/portfolio/refresh",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Snapshot refreshed",
            body = inline(SuccessResponse<PortfolioResponse>)
        ),
        (
            status = 503,
            description = "A retrieval failed; previous snapshot kept",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "DATA_RETRIEVAL_FAILED", "message": "Failed to load data" }
            })
        )
    )
)]
#[post("/api/portfolio/refresh")]
pub async fn refresh_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    let aggregator = &data.portfolio.aggregator;

    match aggregator.refresh().await {
        Ok(()) => ApiResponse::success(PortfolioResponse::from(aggregator.view().await)),
        Err(err) => map_refresh_error(err),
    }
}

fn map_refresh_error(err: PortfolioRefreshError) -> HttpResponse {
    match err {
        PortfolioRefreshError::Failed(_) => {
            ApiResponse::service_unavailable("DATA_RETRIEVAL_FAILED", FAILED_TO_LOAD)
        }
        PortfolioRefreshError::TornDown => {
            ApiResponse::service_unavailable("SHUTTING_DOWN", "Service is shutting down")
        }
    }
}
