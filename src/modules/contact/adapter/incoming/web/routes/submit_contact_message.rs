use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::ContactReceipt;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactMessageCommand, SubmitContactMessageCommandError, SubmitContactMessageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactMessageRequest {
    #[schema(example = "Rina")]
    pub name: String,
    #[schema(example = "rina@example.com")]
    pub email: String,
    #[schema(example = "Collaboration")]
    pub subject: Option<String>,
    #[schema(example = "Hi! I'd love to work together.")]
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Send a message to the portfolio owner
#[utoipa::path(
    post,
    path = "/api/contact/messages",
    tag = "contact",
    request_body = ContactMessageRequest,
    responses(
        (
            status = 200,
            description = "Message accepted",
            body = inline(SuccessResponse<ContactReceipt>),
            example = json!({
                "success": true,
                "data": { "success": true, "message": "Sent via email" }
            })
        ),
        (
            status = 400,
            description = "Invalid name, email or message",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_EMAIL", "message": "Email address is invalid" }
            })
        ),
        (
            status = 502,
            description = "Mail transport failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "CONTACT_DELIVERY_FAILED",
                    "message": "Message could not be delivered, please try again later"
                }
            })
        )
    )
)]
#[post("/api/contact/messages")]
pub async fn submit_contact_message_handler(
    data: web::Data<AppState>,
    payload: web::Json<ContactMessageRequest>,
) -> impl Responder {
    let command = match SubmitContactMessageCommand::new(
        &payload.name,
        &payload.email,
        payload.subject.as_deref(),
        &payload.message,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.submit_contact_message.execute(command).await {
        Ok(receipt) => ApiResponse::success(receipt),
        Err(err) => map_submit_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: SubmitContactMessageCommandError) -> HttpResponse {
    warn!("Rejected contact message: {}", err);

    let code = match err {
        SubmitContactMessageCommandError::EmptyName
        | SubmitContactMessageCommandError::NameTooLong => "INVALID_NAME",
        SubmitContactMessageCommandError::InvalidEmail => "INVALID_EMAIL",
        SubmitContactMessageCommandError::EmptyMessage
        | SubmitContactMessageCommandError::MessageTooLong => "INVALID_MESSAGE",
    };

    ApiResponse::bad_request(code, &err.to_string())
}

fn map_submit_error(err: SubmitContactMessageError) -> HttpResponse {
    match err {
        SubmitContactMessageError::DeliveryFailed(_) => ApiResponse::bad_gateway(
            "CONTACT_DELIVERY_FAILED",
            "Message could not be delivered, please try again later",
        ),
    }
}
