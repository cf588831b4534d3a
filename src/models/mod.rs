// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Hotel, HotelCategory, PricingUnit, BookingRequest, ContactMessage, FavoriteSet, FAVORITES_KEY};
pub use requests::{HotelQuery, UpstreamSubmission};
pub use responses::{HealthResponse, MessageResponse, HotelCard, CatalogView, BookingConfirmation};
