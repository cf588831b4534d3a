//! Pilgrim Stays - hotel catalog and contact form relay for the pilgrimage booking site
//!
//! The library holds the catalog filtering and rendering rules, the booking
//! confirmation logic, and the relay that forwards contact form submissions to
//! the third-party form-delivery API.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CatalogController, CatalogStore, HotelFilter, StarRating, SubmissionOutcome};
pub use models::{Hotel, HotelCategory, ContactMessage, BookingRequest, CatalogView, FavoriteSet};
