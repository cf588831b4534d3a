use serde::{Deserialize, Serialize};

/// Query string accepted by the hotel listing endpoint
///
/// `city` and `category` accept the filter-control sentinel `all`.
/// `amenities` is a comma separated list. Numbers are kept as raw text;
/// a blank, zero or unreadable value falls back to the filter default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelQuery {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub min_price: Option<String>,
    #[serde(default)]
    pub max_price: Option<String>,
    #[serde(default, alias = "minRating")]
    pub rating: Option<String>,
    #[serde(default)]
    pub amenities: Option<String>,
}

impl HotelQuery {
    /// True when no filter control was sent at all
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.rating.is_none()
            && self.amenities.is_none()
    }
}

/// Payload sent to the form-delivery API
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamSubmission<'a> {
    pub access_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
    pub subject: String,
}
