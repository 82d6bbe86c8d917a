use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::warn;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::domain::entities::EntityId;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetProjectByIdError;
use crate::modules::portfolio::application::views::ProjectDetailView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct ProjectDetailQuery {
    /// Gallery position; wraps around the image count
    pub image: usize,
}

/// Project detail
///
/// Looks the project up through the data gateway, not the cached snapshot.
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "pages",
    params(
        ("id" = i64, Path, description = "Project id"),
        ProjectDetailQuery
    ),
    responses(
        (status = 200, description = "Project detail with gallery state", body = inline(SuccessResponse<ProjectDetailView>)),
        (
            status = 404,
            description = "No project with this id",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PROJECT_NOT_FOUND", "message": "Project not found" }
            })
        ),
        (status = 503, description = "Data source unavailable", body = ErrorResponse)
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_single_project_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ProjectDetailQuery>,
) -> impl Responder {
    let Ok(id) = path.trim().parse::<EntityId>() else {
        return not_found();
    };

    match data.portfolio.get_project_by_id.execute(id).await {
        Ok(project) => ApiResponse::success(ProjectDetailView::build(&project, query.image)),
        Err(err) => map_error(err),
    }
}

fn not_found() -> HttpResponse {
    ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
}

fn map_error(err: GetProjectByIdError) -> HttpResponse {
    match err {
        GetProjectByIdError::NotFound => not_found(),
        GetProjectByIdError::RetrievalFailed(msg) => {
            warn!("Project lookup failed: {}", msg);
            ApiResponse::service_unavailable("DATA_RETRIEVAL_FAILED", "Failed to load data")
        }
    }
}
