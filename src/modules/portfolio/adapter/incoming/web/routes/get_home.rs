use actix_web::{get, web, Responder};
use tracing::warn;

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::application::views::HomeView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Home page view
///
/// Profile, hero social links, services and counters. Services come from
/// their own retrieval; if it fails the page renders without them.
#[utoipa::path(
    get,
    path = "/api/home",
    tag = "pages",
    responses(
        (status = 200, description = "Home page state", body = inline(SuccessResponse<HomeView>))
    )
)]
#[get("/api/home")]
pub async fn get_home_handler(data: web::Data<AppState>) -> impl Responder {
    let view = data.portfolio.aggregator.view().await;

    let services = match data.portfolio.get_services.execute().await {
        Ok(services) => services,
        Err(err) => {
            warn!("Rendering home page without services: {}", err);
            Vec::new()
        }
    };

    ApiResponse::success(HomeView::build(&view, &services))
}
