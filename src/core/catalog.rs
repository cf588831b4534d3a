use crate::core::filters::HotelFilter;
use crate::core::rating::StarRating;
use crate::models::{CatalogView, Hotel, HotelCard};
use num_format::{CustomFormat, Grouping, ToFormattedString};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Message rendered in place of the grid when no hotel matches
pub const NO_RESULTS_MESSAGE: &str = "No hotels match your filters. Please try different criteria.";

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level shape of the catalog data file; records are decoded one by one
#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    hotels: Vec<Value>,
}

/// Immutable, in-memory hotel catalog loaded once from the static data file
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    hotels: Vec<Hotel>,
}

impl CatalogStore {
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self { hotels }
    }

    /// Parse the data file. A record that does not decode is skipped and logged,
    /// the rest of the catalog still loads.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        let hotels = raw
            .hotels
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let id = record.get("id").cloned().unwrap_or(Value::Null);
                match serde_json::from_value::<Hotel>(record) {
                    Ok(hotel) => Some(hotel),
                    Err(e) => {
                        tracing::warn!("Skipping hotel record #{} (id {}): {}", index, id, e);
                        None
                    }
                }
            })
            .collect();

        Ok(Self::new(hotels))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Load the catalog, falling back to an empty one when the file is unusable
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(store) => {
                tracing::info!("Loaded {} hotels from {}", store.len(), path.display());
                store
            }
            Err(e) => {
                tracing::error!("Error loading hotels data from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    pub fn filtered(&self, filter: &HotelFilter) -> Vec<&Hotel> {
        filter.apply(&self.hotels)
    }

    pub fn render(&self, filter: &HotelFilter) -> CatalogView {
        render_hotels(self.filtered(filter))
    }

    /// Every hotel, no filter bounds applied
    pub fn render_all(&self) -> CatalogView {
        render_hotels(&self.hotels)
    }
}

/// Turn a result set into the view: cards, or the empty-state message
pub fn render_hotels<'a, I>(hotels: I) -> CatalogView
where
    I: IntoIterator<Item = &'a Hotel>,
{
    let cards: Vec<HotelCard> = hotels.into_iter().map(hotel_card).collect();

    if cards.is_empty() {
        CatalogView::Empty {
            message: NO_RESULTS_MESSAGE.to_string(),
        }
    } else {
        CatalogView::Hotels { hotels: cards }
    }
}

pub fn hotel_card(hotel: &Hotel) -> HotelCard {
    HotelCard {
        id: hotel.id,
        name: hotel.name.clone(),
        image: hotel.image.clone(),
        category_label: hotel.category.label().to_string(),
        location_line: format!("{} • {}", hotel.location, hotel.nearby),
        stars: StarRating::from_rating(hotel.rating),
        rating: hotel.rating,
        price: format_price(hotel.price),
        price_unit: hotel.per.to_string(),
        amenities: hotel.amenities.clone(),
    }
}

/// Rupee amount with Indian digit grouping, e.g. `₹1,25,000` or `₹1,500.5`.
/// Up to three fraction digits, trailing zeros dropped.
pub fn format_price(price: f64) -> String {
    let price = if price.is_finite() { price.max(0.0) } else { 0.0 };
    let thousandths = (price * 1000.0).round() as u64;
    let rupees = thousandths / 1000;
    let fraction = thousandths % 1000;

    let grouped = match CustomFormat::builder()
        .grouping(Grouping::Indian)
        .separator(",")
        .build()
    {
        Ok(format) => rupees.to_formatted_string(&format),
        Err(_) => rupees.to_string(),
    };

    if fraction == 0 {
        format!("₹{}", grouped)
    } else {
        let digits = format!("{:03}", fraction);
        format!("₹{}.{}", grouped, digits.trim_end_matches('0'))
    }
}

/// Text shown when a guest presses "Book Now" on a card
pub fn book_now_prompt(hotel: &Hotel) -> String {
    format!(
        "You are booking: {}\nPrice: {} {}\n\nPlease fill out the pilgrimage form above to complete your booking.",
        hotel.name,
        format_price(hotel.price),
        hotel.per
    )
}

/// UI actions the catalog section reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    ApplyFilters(HotelFilter),
    ResetFilters,
    BookNow(u32),
}

/// Result of dispatching a [`CatalogEvent`]
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogOutcome {
    Render(CatalogView),
    Prompt(String),
    /// Book-now on an id that is not in the catalog
    Ignored,
}

/// Owns the catalog store and the current filter state of the listing section
#[derive(Debug, Clone, Default)]
pub struct CatalogController {
    store: CatalogStore,
    /// `None` until filters are applied, and again after a reset
    filter: Option<HotelFilter>,
}

impl CatalogController {
    pub fn new(store: CatalogStore) -> Self {
        Self { store, filter: None }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn filter(&self) -> Option<&HotelFilter> {
        self.filter.as_ref()
    }

    /// Current view: the whole catalog, or the applied filter's result
    pub fn view(&self) -> CatalogView {
        match &self.filter {
            Some(filter) => self.store.render(filter),
            None => self.store.render_all(),
        }
    }

    pub fn apply(&mut self, filter: HotelFilter) -> CatalogView {
        self.filter = Some(filter);
        self.view()
    }

    /// Clear the applied filter and show the full catalog
    pub fn reset(&mut self) -> CatalogView {
        self.filter = None;
        self.view()
    }

    pub fn dispatch(&mut self, event: CatalogEvent) -> CatalogOutcome {
        match event {
            CatalogEvent::ApplyFilters(filter) => CatalogOutcome::Render(self.apply(filter)),
            CatalogEvent::ResetFilters => CatalogOutcome::Render(self.reset()),
            CatalogEvent::BookNow(id) => match self.store.find(id) {
                Some(hotel) => CatalogOutcome::Prompt(book_now_prompt(hotel)),
                None => {
                    tracing::debug!("Book now pressed for unknown hotel {}", id);
                    CatalogOutcome::Ignored
                }
            },
        }
    }
}
