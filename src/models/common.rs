use serde::{Deserialize, Serialize};

use crate::models::form::{BookingFormData, SubmissionStatus};
use crate::models::property::{Offers, Property, Review};

pub const PROPERTY_LOAD_FAILED: &str = "Failed to load property details. Please try again later.";
pub const PROPERTY_NOT_FOUND: &str = "Property not found";
pub const REVIEWS_LOAD_FAILED: &str = "Failed to load reviews. Please try again later.";
pub const NO_REVIEWS: &str = "No reviews yet.";

// Property detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyView {
    pub name: String,
    pub image: String,
    pub location: String,
    pub price: f64,
    pub rating: f64,
    pub discount_label: Option<String>,
    pub categories: Vec<String>,
    pub offers: Offers,
}

impl From<Property> for PropertyView {
    fn from(property: Property) -> Self {
        Self {
            location: property.address.display_line(),
            discount_label: property.discount_label(),
            name: property.name,
            image: property.image,
            price: property.price,
            rating: property.rating,
            categories: property.category,
            offers: property.offers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PropertyPage {
    Loaded { property: PropertyView },
    NotFound { message: String },
    Error { message: String },
}

// Review list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewView {
    pub id: String,
    pub author: String,
    pub date: String,
    pub rating: Option<f64>,
    pub comment: String,
}

impl From<Review> for ReviewView {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            author: review.author.unwrap_or_else(|| "Anonymous".to_string()),
            date: review.date.unwrap_or_default(),
            rating: review.rating,
            comment: review.comment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReviewsPage {
    Loaded { reviews: Vec<ReviewView> },
    Empty { message: String },
    Error { message: String },
}

impl ReviewsPage {
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        if reviews.is_empty() {
            ReviewsPage::Empty {
                message: NO_REVIEWS.to_string(),
            }
        } else {
            ReviewsPage::Loaded {
                reviews: reviews.into_iter().map(ReviewView::from).collect(),
            }
        }
    }
}

// Result of one checkout form session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub outcome: SubmissionStatus,
    pub form: BookingFormData,
}
