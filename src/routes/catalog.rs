use actix_web::{web, HttpResponse, Responder};
use crate::core::filters::HotelFilter;
use crate::models::{HealthResponse, HotelQuery, MessageResponse};
use super::AppState;

/// Configure catalog and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/hotels", web::get().to(list_hotels))
        .route("/hotels/{id}", web::get().to(get_hotel));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        hotels: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Filtered hotel listing
///
/// GET /api/hotels?city=puri&category=all&minPrice=0&maxPrice=20000&rating=4&amenities=wifi,parking
///
/// Responds with either `{"kind": "hotels", "hotels": [...]}` or
/// `{"kind": "empty", "message": "..."}`. Without any parameter the whole
/// catalog is listed, price cap included.
async fn list_hotels(
    state: web::Data<AppState>,
    query: web::Query<HotelQuery>,
) -> impl Responder {
    let query = query.into_inner();
    if query.is_empty() {
        return HttpResponse::Ok().json(state.catalog.render_all());
    }

    let filter = match HotelFilter::try_from(query) {
        Ok(filter) => filter,
        Err(message) => return HttpResponse::BadRequest().json(MessageResponse::new(message)),
    };

    let view = state.catalog.render(&filter);
    tracing::debug!("Listing {} of {} hotels", view.len(), state.catalog.len());

    HttpResponse::Ok().json(view)
}

/// Single hotel lookup, used by the "Book Now" buttons
async fn get_hotel(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.find(id) {
        Some(hotel) => HttpResponse::Ok().json(hotel),
        None => HttpResponse::NotFound().json(MessageResponse::new("Hotel not found")),
    }
}
