use serde::{Deserialize, Serialize};
use crate::core::rating::StarRating;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub hotels: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error body used by every endpoint, `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Display model of a single hotel card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelCard {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub category_label: String,
    pub location_line: String,
    pub stars: StarRating,
    pub rating: f64,
    pub price: String,
    pub price_unit: String,
    pub amenities: Vec<String>,
}

/// Rendered catalog: either a grid of cards or the fixed empty-state message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogView {
    Hotels { hotels: Vec<HotelCard> },
    Empty { message: String },
}

impl CatalogView {
    pub fn len(&self) -> usize {
        match self {
            CatalogView::Hotels { hotels } => hotels.len(),
            CatalogView::Empty { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> Vec<u32> {
        match self {
            CatalogView::Hotels { hotels } => hotels.iter().map(|h| h.id).collect(),
            CatalogView::Empty { .. } => Vec::new(),
        }
    }
}

/// Summary shown once a booking request passes validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub name: String,
    pub message: String,
}
