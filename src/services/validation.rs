//! Client-side checks run on a form snapshot before anything is sent.
//!
//! The checks form a fixed, ordered table; the first one that fails
//! decides the message shown to the user.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::form::BookingFormData;

/// One user-facing validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your full name.")]
    FullName,
    #[error("Please enter a valid email.")]
    Email,
    #[error("Please enter a phone number.")]
    PhoneNumber,
    #[error("Please enter a valid card number.")]
    CardNumber,
    #[error("Please enter card expiration date.")]
    ExpirationDate,
    #[error("Please enter a valid CVV.")]
    Cvv,
    #[error("Please enter billing street address.")]
    Street,
}

type Check = fn(&BookingFormData) -> bool;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const CHECKS: [(Check, ValidationError); 7] = [
    (has_full_name, ValidationError::FullName),
    (has_valid_email, ValidationError::Email),
    (has_phone_number, ValidationError::PhoneNumber),
    (has_valid_card_number, ValidationError::CardNumber),
    (has_expiration_date, ValidationError::ExpirationDate),
    (has_valid_cvv, ValidationError::Cvv),
    (has_street, ValidationError::Street),
];

/// Validate a snapshot, returning the first failing check
pub fn validate(form: &BookingFormData) -> Result<(), ValidationError> {
    match CHECKS.iter().find(|(passes, _)| !passes(form)) {
        Some((_, error)) => Err(*error),
        None => Ok(()),
    }
}

fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn all_digits_within(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

fn has_full_name(form: &BookingFormData) -> bool {
    is_filled(&form.first_name) && is_filled(&form.last_name)
}

fn has_valid_email(form: &BookingFormData) -> bool {
    EMAIL_PATTERN.is_match(&form.email)
}

fn has_phone_number(form: &BookingFormData) -> bool {
    is_filled(&form.phone_number)
}

fn has_valid_card_number(form: &BookingFormData) -> bool {
    let digits: String = form
        .card_number
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    all_digits_within(&digits, 12, 19)
}

fn has_expiration_date(form: &BookingFormData) -> bool {
    is_filled(&form.expiration_date)
}

fn has_valid_cvv(form: &BookingFormData) -> bool {
    all_digits_within(&form.cvv, 3, 4)
}

fn has_street(form: &BookingFormData) -> bool {
    is_filled(&form.street)
}
