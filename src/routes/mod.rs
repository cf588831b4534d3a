// Route exports
pub mod catalog;
pub mod form;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use crate::core::CatalogStore;
use crate::models::MessageResponse;
use crate::services::FormRelayClient;
use std::sync::Arc;

/// Application state shared across all handlers; read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub relay: Arc<FormRelayClient>,
}

/// JSON error response for extractor failures
#[derive(Debug)]
pub struct JsonError {
    pub body: MessageResponse,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status_code, self.body.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(&self.body)
    }
}

/// Handle query string errors on the listing routes
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    JsonError {
        body: MessageResponse::new(format!("Invalid query: {}", err)),
        status_code: 400,
    }
    .into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .configure(form::configure)
            .configure(catalog::configure),
    );
}
