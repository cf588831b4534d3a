use crate::models::{Hotel, HotelCategory, HotelQuery};

/// Default lower bound of the price filter
pub const DEFAULT_MIN_PRICE: f64 = 0.0;
/// Default upper bound of the price filter
pub const DEFAULT_MAX_PRICE: f64 = 20000.0;
/// Filter-control value meaning "no restriction"
pub const ANY: &str = "all";

/// Active catalog filters. Every predicate is AND-combined.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelFilter {
    /// Lowercased city fragment
    pub city: Option<String>,
    pub category: Option<HotelCategory>,
    pub min_price: f64,
    pub max_price: f64,
    pub min_rating: f64,
    /// Lowercased amenity fragments
    pub amenities: Vec<String>,
}

impl Default for HotelFilter {
    fn default() -> Self {
        Self {
            city: None,
            category: None,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            min_rating: 0.0,
            amenities: Vec::new(),
        }
    }
}

impl HotelFilter {
    pub fn city(mut self, city: &str) -> Self {
        self.city = normalize_choice(city);
        self
    }

    pub fn category(mut self, category: HotelCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn price_range(mut self, min: f64, max: f64) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = rating;
        self
    }

    pub fn amenity(mut self, amenity: &str) -> Self {
        let amenity = amenity.trim().to_lowercase();
        if !amenity.is_empty() {
            self.amenities.push(amenity);
        }
        self
    }

    /// Check a hotel against every active predicate
    #[inline]
    pub fn matches(&self, hotel: &Hotel) -> bool {
        matches_city(hotel, self.city.as_deref())
            && matches_category(hotel, self.category)
            && matches_price(hotel, self.min_price, self.max_price)
            && matches_rating(hotel, self.min_rating)
            && matches_amenities(hotel, &self.amenities)
    }

    /// Hotels satisfying the filter, in source order
    pub fn apply<'a>(&self, hotels: &'a [Hotel]) -> Vec<&'a Hotel> {
        hotels.iter().filter(|hotel| self.matches(hotel)).collect()
    }
}

/// Build a filter from listing query parameters.
///
/// An unknown category is an error.
impl TryFrom<HotelQuery> for HotelFilter {
    type Error = String;

    fn try_from(query: HotelQuery) -> Result<Self, Self::Error> {
        let mut filter = HotelFilter::default();

        if let Some(city) = query.city.as_deref() {
            filter.city = normalize_choice(city);
        }

        if let Some(category) = query.category.as_deref().and_then(normalize_choice) {
            filter.category = Some(
                HotelCategory::from_key(&category)
                    .ok_or_else(|| format!("Unknown hotel category: {}", category))?,
            );
        }

        filter.min_price = number_or(query.min_price.as_deref(), DEFAULT_MIN_PRICE);
        filter.max_price = number_or(query.max_price.as_deref(), DEFAULT_MAX_PRICE);
        filter.min_rating = number_or(query.rating.as_deref(), 0.0);

        if let Some(amenities) = query.amenities.as_deref() {
            for amenity in amenities.split(',') {
                filter = filter.amenity(amenity);
            }
        }

        Ok(filter)
    }
}

/// Read a numeric control value. Blank, zero, non-finite and unreadable
/// input all yield `default`, the same as an untouched slider.
fn number_or(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value != 0.0)
        .unwrap_or(default)
}

/// Lowercase a select value, mapping blank and `all` to no restriction
fn normalize_choice(value: &str) -> Option<String> {
    let value = value.trim().to_lowercase();
    if value.is_empty() || value == ANY {
        None
    } else {
        Some(value)
    }
}

/// Case-insensitive substring match on the hotel location
#[inline]
pub fn matches_city(hotel: &Hotel, city: Option<&str>) -> bool {
    match city {
        Some(city) => hotel.location.to_lowercase().contains(&city.to_lowercase()),
        None => true,
    }
}

#[inline]
pub fn matches_category(hotel: &Hotel, category: Option<HotelCategory>) -> bool {
    category.map_or(true, |c| hotel.category == c)
}

/// Inclusive price range check
#[inline]
pub fn matches_price(hotel: &Hotel, min: f64, max: f64) -> bool {
    hotel.price >= min && hotel.price <= max
}

#[inline]
pub fn matches_rating(hotel: &Hotel, min_rating: f64) -> bool {
    hotel.rating >= min_rating
}

/// Every selected amenity must appear inside at least one of the hotel's amenities
#[inline]
pub fn matches_amenities(hotel: &Hotel, selected: &[String]) -> bool {
    selected.iter().all(|wanted| {
        let wanted = wanted.to_lowercase();
        hotel
            .amenities
            .iter()
            .any(|offered| offered.to_lowercase().contains(&wanted))
    })
}
