use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::application::views::ContactView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Contact page view
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "pages",
    responses(
        (status = 200, description = "Owner email and social links", body = inline(SuccessResponse<ContactView>))
    )
)]
#[get("/api/contact")]
pub async fn get_contact_handler(data: web::Data<AppState>) -> impl Responder {
    let view = data.portfolio.aggregator.view().await;
    ApiResponse::success(ContactView::build(&view))
}
