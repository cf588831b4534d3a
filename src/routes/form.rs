use actix_web::{http::{Method, StatusCode}, web, HttpRequest, HttpResponse};
use crate::models::{ContactMessage, MessageResponse};
use crate::services::RelayError;
use super::AppState;

/// Configure the contact form relay route
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Every method is routed here so non-POST requests get the relay's own 405 body
    cfg.route("/form", web::route().to(relay_form));
}

/// Contact form relay endpoint
///
/// POST /api/form
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "message": "string"
/// }
/// ```
///
/// The status and body of the form-delivery API are returned as-is.
async fn relay_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    if *req.method() != Method::POST {
        return HttpResponse::MethodNotAllowed().json(MessageResponse::new("Method Not Allowed"));
    }

    let contact: ContactMessage = match serde_json::from_slice(&body) {
        Ok(contact) => contact,
        Err(e) => {
            tracing::info!("Invalid contact payload on {}: {}", req.path(), e);
            return HttpResponse::BadRequest().json(MessageResponse::new(format!("Invalid JSON: {}", e)));
        }
    };

    let submission_id = uuid::Uuid::new_v4();
    tracing::info!("Relaying contact submission {}", submission_id);

    match state.relay.submit(&contact).await {
        Ok(reply) => {
            tracing::info!("Submission {} answered with status {}", submission_id, reply.status);
            let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(status)
                .content_type(reply.content_type.unwrap_or_else(|| "application/json".to_string()))
                .body(reply.body)
        }
        Err(RelayError::MissingAccessKey) => {
            tracing::error!("Form-delivery access key is not defined, submission {} dropped", submission_id);
            HttpResponse::InternalServerError().json(MessageResponse::new("Missing access key"))
        }
        Err(RelayError::RequestError(e)) => {
            tracing::error!("Submission {} could not reach the form-delivery API: {}", submission_id, e);
            HttpResponse::BadGateway().json(MessageResponse::new("Upstream request failed"))
        }
    }
}
