use axum::{
    extract::{Json as ExtractJson, Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::client::{BookingApiClient, BookingSubmitter};
use crate::models::common::{
    CheckoutResponse, PropertyPage, ReviewsPage, PROPERTY_LOAD_FAILED, PROPERTY_NOT_FOUND,
    REVIEWS_LOAD_FAILED,
};
use crate::models::form::BookingFormData;
use crate::models::order::{BookingDetails, OrderSummary};
use crate::services::form_store::{BookingSession, SubmitOutcome};

// AppState struct containing shared resources
pub struct AppState {
    pub client: BookingApiClient,
    pub submitter: Arc<dyn BookingSubmitter>,
    pub booking_details: BookingDetails,
}

impl AppState {
    /// Bookings go through the same backend client used for property data
    pub fn new(client: BookingApiClient, booking_details: BookingDetails) -> Self {
        let submitter: Arc<dyn BookingSubmitter> = Arc::new(client.clone());
        Self {
            client,
            submitter,
            booking_details,
        }
    }
}

// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

// Property detail endpoint
pub async fn get_property(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<String>,
) -> (StatusCode, Json<PropertyPage>) {
    info!("Received request for property {}", property_id);

    match state.client.get_property(&property_id).await {
        Ok(Some(property)) => {
            info!("Loaded property {}: {}", property_id, property.name);
            (
                StatusCode::OK,
                Json(PropertyPage::Loaded {
                    property: property.into(),
                }),
            )
        }
        Ok(None) => {
            warn!("Backend returned no record for property {}", property_id);
            (
                StatusCode::NOT_FOUND,
                Json(PropertyPage::NotFound {
                    message: PROPERTY_NOT_FOUND.to_string(),
                }),
            )
        }
        Err(err) if err.is_not_found() => {
            warn!("Property {} not found: {}", property_id, err);
            (
                StatusCode::NOT_FOUND,
                Json(PropertyPage::NotFound {
                    message: PROPERTY_NOT_FOUND.to_string(),
                }),
            )
        }
        Err(err) => {
            error!("Error fetching property details: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(PropertyPage::Error {
                    message: PROPERTY_LOAD_FAILED.to_string(),
                }),
            )
        }
    }
}

// Review list endpoint
pub async fn get_reviews(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<String>,
) -> (StatusCode, Json<ReviewsPage>) {
    info!("Received request for reviews of property {}", property_id);

    match state.client.list_reviews(&property_id).await {
        Ok(reviews) => {
            info!("Loaded {} reviews for property {}", reviews.len(), property_id);
            (StatusCode::OK, Json(ReviewsPage::from_reviews(reviews)))
        }
        Err(err) => {
            error!("Error fetching reviews: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(ReviewsPage::Error {
                    message: REVIEWS_LOAD_FAILED.to_string(),
                }),
            )
        }
    }
}

// Order summary endpoint
pub async fn get_order_summary(State(state): State<Arc<AppState>>) -> Json<OrderSummary> {
    Json(state.booking_details.summary())
}

// Checkout endpoint: one form session per request
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    ExtractJson(form): ExtractJson<BookingFormData>,
) -> (StatusCode, Json<CheckoutResponse>) {
    info!("Received checkout for {}", state.booking_details.property_name);

    let mut session = BookingSession::with_form(Arc::clone(&state.submitter), form);
    let status = match session.submit().await {
        SubmitOutcome::Submitted => StatusCode::OK,
        SubmitOutcome::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::SubmissionFailed => StatusCode::BAD_GATEWAY,
        SubmitOutcome::AlreadySubmitting => StatusCode::CONFLICT,
    };

    let outcome = session.status().clone();
    info!(
        "Checkout finished with {}: {}",
        status,
        outcome.message().unwrap_or("no message")
    );

    (
        status,
        Json(CheckoutResponse {
            outcome,
            form: session.store().snapshot().clone(),
        }),
    )
}
