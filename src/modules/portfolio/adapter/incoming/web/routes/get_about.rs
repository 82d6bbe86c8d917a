use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::portfolio::application::views::{AboutQuery, AboutView};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// About page view
///
/// Skills grouped by category, experience and education timelines, and
/// paginated certifications and achievements. Out-of-range pages fall back
/// to the first page.
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "pages",
    params(AboutQuery),
    responses(
        (status = 200, description = "About page state", body = inline(SuccessResponse<AboutView>))
    )
)]
#[get("/api/about")]
pub async fn get_about_handler(
    data: web::Data<AppState>,
    query: web::Query<AboutQuery>,
) -> impl Responder {
    let view = data.portfolio.aggregator.view().await;
    ApiResponse::success(AboutView::build(&view, query.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::{loaded_aggregator, TestAppStateBuilder};
    use crate::tests::support::portfolio_fixtures::sample_dataset;
    use crate::tests::support::stubs::StubPortfolioQuery;

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_aggregator(loaded_aggregator(StubPortfolioQuery::new(sample_dataset())).await)
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_about_handler)).await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        (resp.status(), test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn first_page_by_default() {
        let (status, json) = get("/api/about").await;

        assert_eq!(status, StatusCode::OK);
        let certs = &json["data"]["certifications"];
        assert_eq!(certs["pager"]["page"], 0);
        assert_eq!(certs["items"].as_array().unwrap().len(), 4);
        assert_eq!(certs["has_next"], true);
        assert_eq!(certs["has_previous"], false);

        let groups: Vec<&str> = json["data"]["skill_groups"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["category"].as_str().unwrap())
            .collect();
        assert_eq!(groups.first(), Some(&"Frontend"));
    }

    #[actix_web::test]
    async fn second_certification_page_holds_the_remainder() {
        let (_, json) = get("/api/about?certification_page=1").await;

        let certs = &json["data"]["certifications"];
        assert_eq!(certs["pager"]["page"], 1);
        assert_eq!(certs["items"].as_array().unwrap().len(), 1);
        assert_eq!(certs["has_next"], false);
    }

    #[actix_web::test]
    async fn out_of_range_page_resets_to_first() {
        let (_, json) = get("/api/about?certification_page=9&achievement_page=3").await;

        assert_eq!(json["data"]["certifications"]["pager"]["page"], 0);
        assert_eq!(json["data"]["achievements"]["pager"]["page"], 0);
        assert_eq!(json["data"]["achievements"]["shows_controls"], false);
    }

    #[actix_web::test]
    async fn non_numeric_page_is_rejected() {
        let (status, _) = get("/api/about?certification_page=two").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
