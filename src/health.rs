use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    portfolio: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Ready once the portfolio snapshot has loaded without error
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let status = data.portfolio.aggregator.status().await;

    let portfolio = if status.loading {
        "loading"
    } else if status.error.is_some() {
        "unhealthy"
    } else {
        "ok"
    };

    if portfolio == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            portfolio,
            error: None,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            portfolio,
            error: status.error,
        })
    }
}
