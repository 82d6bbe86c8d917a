use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::portfolio::application::views::ServiceCard;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Services offered, in display order
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "pages",
    responses(
        (status = 200, description = "Service cards", body = inline(SuccessResponse<Vec<ServiceCard>>)),
        (status = 503, description = "Data source unavailable", body = ErrorResponse)
    )
)]
#[get("/api/services")]
pub async fn get_services_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_services.execute().await {
        Ok(services) => ApiResponse::success(
            services
                .iter()
                .map(ServiceCard::from_service)
                .collect::<Vec<_>>(),
        ),
        Err(err) => {
            error!("Failed to load services: {}", err);
            ApiResponse::service_unavailable("DATA_RETRIEVAL_FAILED", "Failed to load data")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::portfolio_fixtures::sample_dataset;
    use crate::tests::support::stubs::{FailingCall, StubPortfolioQuery};

    async fn get(state: web::Data<AppState>) -> (StatusCode, serde_json::Value) {
        let app =
            test::init_service(App::new().app_data(state).service(get_services_handler)).await;
        let req = test::TestRequest::get().uri("/api/services").to_request();
        let resp = test::call_service(&app, req).await;
        (resp.status(), test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn returns_services_in_display_order() {
        let (status, json) = get(TestAppStateBuilder::default().build()).await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(json["data"][0]["icon"], "code");
    }

    #[actix_web::test]
    async fn failure_returns_service_unavailable() {
        let query = StubPortfolioQuery::new(sample_dataset());
        query.fail_on(Some(FailingCall::Services));
        let state = TestAppStateBuilder::default()
            .with_portfolio_query(query)
            .build();

        let (status, json) = get(state).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["error"]["code"], "DATA_RETRIEVAL_FAILED");
    }
}
