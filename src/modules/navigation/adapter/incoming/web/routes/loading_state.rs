use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::modules::navigation::application::LoadingOrchestrator;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct LoadingStateResponse {
    #[schema(example = true)]
    pub is_loading: bool,
    #[schema(example = "/about")]
    pub current_path: Option<String>,
}

impl LoadingStateResponse {
    pub fn from_orchestrator(orchestrator: &LoadingOrchestrator) -> Self {
        Self {
            is_loading: orchestrator.is_loading(),
            current_path: orchestrator.current_path(),
        }
    }
}

/// Current page-loader state
#[utoipa::path(
    get,
    path = "/api/navigation/loading",
    tag = "navigation",
    responses(
        (
            status = 200,
            description = "Page loader state",
            body = inline(SuccessResponse<LoadingStateResponse>),
            example = json!({
                "success": true,
                "data": { "is_loading": false, "current_path": "/about" }
            })
        )
    )
)]
#[get("/api/navigation/loading")]
pub async fn get_loading_state_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(LoadingStateResponse::from_orchestrator(
        &data.loading_orchestrator,
    ))
}
