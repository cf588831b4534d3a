use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use validator::Validate;

/// Hotel record as stored in the static catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub nearby: String,
    pub category: HotelCategory,
    pub price: f64,
    pub per: PricingUnit,
    pub rating: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotelCategory {
    Budget,
    Standard,
    Premium,
    Luxury,
    Dharamshala,
    Boutique,
    Heritage,
}

impl HotelCategory {
    pub const ALL: [HotelCategory; 7] = [
        HotelCategory::Budget,
        HotelCategory::Standard,
        HotelCategory::Premium,
        HotelCategory::Luxury,
        HotelCategory::Dharamshala,
        HotelCategory::Boutique,
        HotelCategory::Heritage,
    ];

    /// Display label shown on the hotel card tag
    pub fn label(&self) -> &'static str {
        match self {
            HotelCategory::Budget => "Budget",
            HotelCategory::Standard => "Standard",
            HotelCategory::Premium => "Premium",
            HotelCategory::Luxury => "Luxury",
            HotelCategory::Dharamshala => "Dharamshala",
            HotelCategory::Boutique => "Boutique",
            HotelCategory::Heritage => "Heritage",
        }
    }

    /// Parse the lowercase key used in the catalog file and form selects
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(key.trim()))
    }

    /// Label for a raw form value, echoing unknown values unchanged
    pub fn label_for(key: &str) -> String {
        Self::from_key(key)
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingUnit {
    Night,
    Person,
}

impl fmt::Display for PricingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingUnit::Night => write!(f, "per night"),
            PricingUnit::Person => write!(f, "per person"),
        }
    }
}

/// Pilgrimage booking request collected by the booking form.
/// Never leaves the client; it only feeds the confirmation summary.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub checkin: chrono::NaiveDate,
    pub checkout: chrono::NaiveDate,
    pub guests: u32,
    pub hotel_category: String,
    pub transport: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub temples: Vec<String>,
}

/// Contact form submission as received by the relay.
/// Fields are passed through untouched, missing ones stay missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactMessage {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }
}

/// Key the favorite temples list is stored under
pub const FAVORITES_KEY: &str = "favoriteTemples";

/// Set of favorited temple names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    temples: BTreeSet<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `temple`. Returns true when it is now a favorite.
    pub fn toggle(&mut self, temple: &str) -> bool {
        if self.temples.remove(temple) {
            false
        } else {
            self.temples.insert(temple.to_string());
            true
        }
    }

    pub fn contains(&self, temple: &str) -> bool {
        self.temples.contains(temple)
    }

    pub fn len(&self) -> usize {
        self.temples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.temples.iter().map(String::as_str)
    }

    /// Restore from the stored string list; unreadable data yields an empty set
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|json| serde_json::from_str(json).ok())
            .unwrap_or_default()
    }

    pub fn to_stored(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
