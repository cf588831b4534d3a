// Core catalog and form logic
pub mod booking;
pub mod catalog;
pub mod contact;
pub mod filters;
pub mod rating;

pub use booking::{confirm_booking, search_temples, BookingError, StayDates};
pub use catalog::{CatalogController, CatalogError, CatalogEvent, CatalogOutcome, CatalogStore, NO_RESULTS_MESSAGE};
pub use contact::{validate_contact, ContactFormError, SubmissionOutcome};
pub use filters::HotelFilter;
pub use rating::StarRating;
