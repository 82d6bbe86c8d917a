use actix_web::{post, web, Responder};

use super::LoadingStateResponse;
use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Force the page loader on
#[utoipa::path(
    post,
    path = "/api/navigation/loading/show",
    tag = "navigation",
    responses(
        (status = 200, description = "Loader shown", body = inline(SuccessResponse<LoadingStateResponse>))
    )
)]
#[post("/api/navigation/loading/show")]
pub async fn show_loading_handler(data: web::Data<AppState>) -> impl Responder {
    data.loading_orchestrator.show_loading();
    ApiResponse::success(LoadingStateResponse::from_orchestrator(
        &data.loading_orchestrator,
    ))
}

/// Force the page loader off
#[utoipa::path(
    post,
    path = "/api/navigation/loading/hide",
    tag = "navigation",
    responses(
        (status = 200, description = "Loader hidden", body = inline(SuccessResponse<LoadingStateResponse>))
    )
)]
#[post("/api/navigation/loading/hide")]
pub async fn hide_loading_handler(data: web::Data<AppState>) -> impl Responder {
    data.loading_orchestrator.hide_loading();
    ApiResponse::success(LoadingStateResponse::from_orchestrator(
        &data.loading_orchestrator,
    ))
}
