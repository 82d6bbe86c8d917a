use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use super::LoadingStateResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct NavigationRequest {
    /// Path the client navigated to
    #[schema(example = "/about")]
    pub path: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NavigationResponse {
    /// False when the path matched the current one and the event was ignored
    #[schema(example = true)]
    pub accepted: bool,
    #[serde(flatten)]
    pub state: LoadingStateResponse,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Report a path change
///
/// Raises the page loader for its minimum display duration. A later
/// navigation restarts the timer.
#[utoipa::path(
    post,
    path = "/api/navigation",
    tag = "navigation",
    request_body = NavigationRequest,
    responses(
        (
            status = 200,
            description = "Navigation recorded",
            body = inline(SuccessResponse<NavigationResponse>),
            example = json!({
                "success": true,
                "data": { "accepted": true, "is_loading": true, "current_path": "/about" }
            })
        ),
        (
            status = 400,
            description = "Missing or blank path",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_PATH", "message": "Path cannot be empty" }
            })
        )
    )
)]
#[post("/api/navigation")]
pub async fn navigate_handler(
    data: web::Data<AppState>,
    payload: web::Json<NavigationRequest>,
) -> impl Responder {
    let path = payload.path.trim();
    if path.is_empty() {
        warn!("Rejected navigation event with blank path");
        return ApiResponse::bad_request("INVALID_PATH", "Path cannot be empty");
    }

    let orchestrator = &data.loading_orchestrator;
    let accepted = orchestrator.path_changed(path);

    ApiResponse::success(NavigationResponse {
        accepted,
        state: LoadingStateResponse::from_orchestrator(orchestrator),
    })
}
