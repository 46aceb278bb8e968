use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field values of the checkout form.
///
/// All fields are plain text and default to the empty string. The wire
/// format is a flat record keyed by the camelCase field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingFormData {
    // Contact details
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,

    // Payment
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,

    // Billing address
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl BookingFormData {
    /// Read a single field
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::FirstName => &self.first_name,
            BookingField::LastName => &self.last_name,
            BookingField::Email => &self.email,
            BookingField::PhoneNumber => &self.phone_number,
            BookingField::CardNumber => &self.card_number,
            BookingField::ExpirationDate => &self.expiration_date,
            BookingField::Cvv => &self.cvv,
            BookingField::Street => &self.street,
            BookingField::City => &self.city,
            BookingField::State => &self.state,
            BookingField::Zip => &self.zip,
            BookingField::Country => &self.country,
        }
    }

    /// Overwrite a single field, leaving the others untouched
    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        let slot = match field {
            BookingField::FirstName => &mut self.first_name,
            BookingField::LastName => &mut self.last_name,
            BookingField::Email => &mut self.email,
            BookingField::PhoneNumber => &mut self.phone_number,
            BookingField::CardNumber => &mut self.card_number,
            BookingField::ExpirationDate => &mut self.expiration_date,
            BookingField::Cvv => &mut self.cvv,
            BookingField::Street => &mut self.street,
            BookingField::City => &mut self.city,
            BookingField::State => &mut self.state,
            BookingField::Zip => &mut self.zip,
            BookingField::Country => &mut self.country,
        };
        *slot = value.into();
    }
}

/// Names of the checkout form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    CardNumber,
    ExpirationDate,
    Cvv,
    Street,
    City,
    State,
    Zip,
    Country,
}

impl BookingField {
    pub const ALL: [BookingField; 12] = [
        BookingField::FirstName,
        BookingField::LastName,
        BookingField::Email,
        BookingField::PhoneNumber,
        BookingField::CardNumber,
        BookingField::ExpirationDate,
        BookingField::Cvv,
        BookingField::Street,
        BookingField::City,
        BookingField::State,
        BookingField::Zip,
        BookingField::Country,
    ];

    /// Wire name of the field, e.g. "firstName"
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::FirstName => "firstName",
            BookingField::LastName => "lastName",
            BookingField::Email => "email",
            BookingField::PhoneNumber => "phoneNumber",
            BookingField::CardNumber => "cardNumber",
            BookingField::ExpirationDate => "expirationDate",
            BookingField::Cvv => "cvv",
            BookingField::Street => "street",
            BookingField::City => "city",
            BookingField::State => "state",
            BookingField::Zip => "zip",
            BookingField::Country => "country",
        }
    }

    /// Payment fields whose values must never appear in logs
    pub fn is_sensitive(&self) -> bool {
        matches!(
            self,
            BookingField::CardNumber | BookingField::ExpirationDate | BookingField::Cvv
        )
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for BookingField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Where the current submission attempt stands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// User-facing message carried by the terminal states
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Succeeded(message) | SubmissionStatus::Failed(message) => {
                Some(message)
            }
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_keys_default_to_empty() {
        let form: BookingFormData =
            serde_json::from_value(json!({ "firstName": "Ada", "cvv": "123" })).unwrap();

        assert_eq!(form.first_name, "Ada");
        assert_eq!(form.cvv, "123");
        assert_eq!(form.email, "");
        assert_eq!(form.country, "");
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let value = serde_json::to_value(BookingFormData::default()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), BookingField::ALL.len());
        for field in BookingField::ALL {
            assert!(object.contains_key(field.as_str()), "missing {}", field);
        }
    }

    #[test]
    fn test_field_name_parsing() {
        assert_eq!("phoneNumber".parse::<BookingField>(), Ok(BookingField::PhoneNumber));
        assert_eq!("zip".parse::<BookingField>(), Ok(BookingField::Zip));
        assert!("phone_number".parse::<BookingField>().is_err());
    }

    #[test]
    fn test_status_serialization() {
        let failed = SubmissionStatus::Failed("Please enter a valid CVV.".to_string());
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({ "status": "failed", "message": "Please enter a valid CVV." })
        );
        assert_eq!(
            serde_json::to_value(SubmissionStatus::Idle).unwrap(),
            json!({ "status": "idle" })
        );
    }

    #[test]
    fn test_status_message_only_for_terminal_states() {
        let done = SubmissionStatus::Succeeded("Booking confirmed!".to_string());
        assert_eq!(done.message(), Some("Booking confirmed!"));
        assert_eq!(SubmissionStatus::Idle.message(), None);
        assert_eq!(SubmissionStatus::Submitting.message(), None);
    }
}
