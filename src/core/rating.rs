use serde::{Deserialize, Serialize};

/// Number of star slots shown per hotel
pub const STAR_SLOTS: u8 = 5;

/// Star indicators for a rating: full, half and empty slots always sum to five
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRating {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

impl StarRating {
    /// Slot `i` (1-based) is full when `i <= floor(rating)`, half when it is the
    /// next slot and the fractional part is at least 0.5, empty otherwise.
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, STAR_SLOTS as f64)
        } else {
            0.0
        };

        let full = rating.floor() as u8;
        let half = u8::from(full < STAR_SLOTS && rating % 1.0 >= 0.5);

        Self {
            full,
            half,
            empty: STAR_SLOTS - full - half,
        }
    }

    /// Slot glyph names in display order
    pub fn slots(&self) -> impl Iterator<Item = &'static str> {
        std::iter::repeat("star")
            .take(self.full as usize)
            .chain(std::iter::repeat("star-half").take(self.half as usize))
            .chain(std::iter::repeat("star-empty").take(self.empty as usize))
    }
}
