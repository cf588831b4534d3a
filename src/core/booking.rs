use crate::models::{BookingConfirmation, BookingRequest, HotelCategory};
use chrono::{Days, NaiveDate};
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Please select at least one temple to visit")]
    NoTempleSelected,
}

/// Check-in and check-out values prefilled in the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    pub checkin: NaiveDate,
    /// Earliest selectable check-in
    pub checkin_min: NaiveDate,
    pub checkout: NaiveDate,
    /// Earliest selectable check-out
    pub checkout_min: NaiveDate,
}

impl StayDates {
    /// Tomorrow for check-in, two nights later for check-out
    pub fn defaults_for(today: NaiveDate) -> Self {
        let checkin = today + Days::new(1);
        Self {
            checkin,
            checkin_min: today,
            checkout: checkin + Days::new(2),
            checkout_min: checkin,
        }
    }

    /// React to a new check-in: the checkout may not fall before it
    pub fn change_checkin(&mut self, checkin: NaiveDate) {
        self.checkin = checkin;
        self.checkout_min = checkin;
        if self.checkout < checkin {
            self.checkout = checkin + Days::new(1);
        }
    }
}

/// Validate a booking request and build the summary shown to the guest.
///
/// Nothing is sent or stored; passing validation is the whole of "success".
pub fn confirm_booking(request: &BookingRequest) -> Result<BookingConfirmation, BookingError> {
    if request.validate().is_err() {
        return Err(BookingError::NoTempleSelected);
    }

    tracing::debug!(
        "Pilgrimage booking request from {} for {} temple(s)",
        request.name,
        request.temples.len()
    );

    let temple_list = request
        .temples
        .iter()
        .map(|temple| format!("• {}", temple))
        .collect::<Vec<_>>()
        .join("\n");

    let message = format!(
        "Thank you for your pilgrimage request, {name}!\n\
         \n\
         Your booking details:\n\
         ------------------------------\n\
         Temples to visit:\n\
         {temples}\n\
         \n\
         Travel Dates: {checkin} to {checkout}\n\
         Number of Pilgrims: {guests}\n\
         Hotel Preference: {hotel}\n\
         Transport: {transport}\n\
         \n\
         We'll contact you shortly at {email} or {phone} to confirm your booking.",
        name = request.name,
        temples = temple_list,
        checkin = request.checkin.format("%Y-%m-%d"),
        checkout = request.checkout.format("%Y-%m-%d"),
        guests = request.guests,
        hotel = HotelCategory::label_for(&request.hotel_category),
        transport = request.transport,
        email = request.email,
        phone = request.phone,
    );

    Ok(BookingConfirmation {
        name: request.name.clone(),
        message,
    })
}

/// Temple options whose label contains the search term, ignoring case
pub fn search_temples<'a>(options: &'a [String], term: &str) -> Vec<&'a str> {
    let term = term.to_lowercase();
    options
        .iter()
        .filter(|label| label.to_lowercase().contains(&term))
        .map(String::as_str)
        .collect()
}
