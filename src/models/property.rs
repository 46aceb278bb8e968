use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Address {
    /// "city, state, country" as shown under the property name
    pub fn display_line(&self) -> String {
        format!("{}, {}, {}", self.city, self.state, self.country)
    }
}

// Backend sends these either as strings ("4-6") or bare numbers (2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offers {
    #[serde(deserialize_with = "string_or_number")]
    pub bed: String,
    #[serde(deserialize_with = "string_or_number")]
    pub shower: String,
    #[serde(deserialize_with = "string_or_number")]
    pub occupants: String,
}

/// Property record returned by `GET /api/properties/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub image: String,
    pub address: Address,
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub category: Vec<String>,
    pub offers: Offers,
}

impl Property {
    /// Discount badge text, only when the backend sent a non-empty discount
    pub fn discount_label(&self) -> Option<String> {
        self.discount
            .as_deref()
            .map(str::trim)
            .filter(|discount| !discount.is_empty())
            .map(|discount| format!("{}% off", discount))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewId::Number(id) => write!(f, "{}", id),
            ReviewId::Text(id) => f.write_str(id),
        }
    }
}

/// Review record returned by `GET /api/properties/{id}/reviews`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    pub comment: String,
    #[serde(default)]
    pub date: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}
