use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::application::views::ProjectsView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectsQuery {
    /// Filter tab; `All` or absent shows every project
    #[param(example = "Web Development")]
    pub category: Option<String>,
}

/// Projects gallery
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "pages",
    params(ProjectsQuery),
    responses(
        (status = 200, description = "Filtered project cards", body = inline(SuccessResponse<ProjectsView>))
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    data: web::Data<AppState>,
    query: web::Query<ProjectsQuery>,
) -> impl Responder {
    let view = data.portfolio.aggregator.view().await;
    ApiResponse::success(ProjectsView::build(&view, query.category.as_deref()))
}
