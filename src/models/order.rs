use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stay being paid for on the checkout page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub property_name: String,
    pub property_image: String,
    /// Subtotal for the whole stay, in dollars
    pub price: u64,
    pub booking_fee: u64,
    pub total_nights: u32,
    pub start_date: NaiveDate,
    pub rating: f64,
    pub review_count: u32,
}

impl BookingDetails {
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            property_name: self.property_name.clone(),
            property_image: self.property_image.clone(),
            rating_line: format!("{:.2} ({} reviews)", self.rating, self.review_count),
            start_date: self.start_date.format("%-d %B %Y").to_string(),
            total_nights: self.total_nights,
            booking_fee: self.booking_fee,
            subtotal: self.price,
            grand_total: self.booking_fee + self.price,
        }
    }
}

/// Price breakdown shown next to the checkout form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub property_name: String,
    pub property_image: String,
    /// e.g. "4.76 (345 reviews)"
    pub rating_line: String,
    pub start_date: String,
    pub total_nights: u32,
    pub booking_fee: u64,
    pub subtotal: u64,
    pub grand_total: u64,
}
