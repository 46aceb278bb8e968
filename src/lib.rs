//! Booking Checkout Service
//!
//! This library implements the checkout side of a property booking site:
//! the booking form's validation and submission state machine, a client
//! for the booking REST backend, and JSON views for the property detail,
//! review list, order summary and checkout pages.
//!
//! # Modules
//!
//! - `services::validation`: ordered field checks on a form snapshot
//! - `services::form_store`: reducer, state container and submission session
//! - `client`: `BookingApiClient` and the `BookingSubmitter` seam
//! - `handlers` / `routes`: axum endpoints serving the page views
//! - `config`: environment-driven settings
//!
//! # Submission
//!
//! A form is validated before anything is sent. Validation failures are
//! reported with the first failing check's message; backend failures are
//! reported with a single generic message while the cause is logged.

pub mod client;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


// Re-export the main API types for ease of use
pub use client::{BookingApiClient, BookingSubmitter, ClientError};
pub use config::AppConfig;
pub use handlers::api::AppState;
pub use models::form::{BookingField, BookingFormData, SubmissionStatus};
pub use routes::create_router;
pub use services::form_store::{BookingSession, FormStore, SubmitOutcome};
pub use services::validation::{validate, ValidationError};
