use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use crate::models::form::BookingFormData;
use crate::models::order::BookingDetails;

/// A snapshot that passes every validation check
pub fn valid_form() -> BookingFormData {
    BookingFormData {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone_number: "+44 20 7946 0958".to_string(),
        card_number: "4111 1111 1111 1111".to_string(),
        expiration_date: "12/29".to_string(),
        cvv: "123".to_string(),
        street: "12 Analytical Row".to_string(),
        city: "London".to_string(),
        state: "Greater London".to_string(),
        zip: "NW1 6XE".to_string(),
        country: "United Kingdom".to_string(),
    }
}

/// The stay shown on the booking page
pub fn sample_booking_details() -> BookingDetails {
    BookingDetails {
        property_name: "Villa Arrecife Beach House".to_string(),
        property_image: "https://example.com/property.jpg".to_string(),
        price: 7500,
        booking_fee: 65,
        total_nights: 3,
        start_date: NaiveDate::from_ymd_opt(2024, 8, 24).unwrap(),
        rating: 4.76,
        review_count: 345,
    }
}

pub fn sample_property_json() -> Value {
    json!({
        "name": "Villa Arrecife Beach House",
        "image": "https://example.com/villa.jpg",
        "address": { "city": "Sidemen", "state": "Bali", "country": "Indonesia" },
        "price": 7500,
        "rating": 4.76,
        "discount": "30",
        "category": ["Luxury Villa", "Pool", "Free Parking"],
        "offers": { "bed": "3", "shower": "3", "occupants": "4-6" }
    })
}

/// In-process stand-in for the booking REST backend.
///
/// Property ids with special meaning:
/// - `missing`: 404 for the property
/// - `vacant`: 200 with a `null` body for the property
/// - `broken`: 500 for the property and its reviews
/// - `legacy`: reviews endpoint answers with a non-array body
/// - `quiet`: no reviews
pub struct StubBackend {
    pub base_url: String,
    pub bookings: Arc<Mutex<Vec<Value>>>,
    /// Raw request paths, still percent-encoded
    pub seen_paths: Arc<Mutex<Vec<String>>>,
}

impl StubBackend {
    pub fn booking_count(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }

    pub fn seen_paths(&self) -> Vec<String> {
        self.seen_paths.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct StubState {
    booking_status: StatusCode,
    bookings: Arc<Mutex<Vec<Value>>>,
    seen_paths: Arc<Mutex<Vec<String>>>,
}

async fn record_path(State(state): State<StubState>, req: Request, next: Next) -> Response {
    state
        .seen_paths
        .lock()
        .unwrap()
        .push(req.uri().path().to_string());
    next.run(req).await
}

async fn stub_create_booking(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> StatusCode {
    state.bookings.lock().unwrap().push(body);
    state.booking_status
}

async fn stub_property(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    match id.as_str() {
        "missing" => Err(StatusCode::NOT_FOUND),
        "broken" => Err(StatusCode::INTERNAL_SERVER_ERROR),
        "vacant" => Ok(Json(Value::Null)),
        _ => Ok(Json(sample_property_json())),
    }
}

async fn stub_reviews(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    match id.as_str() {
        "broken" => Err(StatusCode::INTERNAL_SERVER_ERROR),
        "legacy" => Ok(Json(json!({ "reviews": "not a list" }))),
        "quiet" => Ok(Json(json!([]))),
        _ => Ok(Json(json!([
            { "id": 1, "author": "Maya", "rating": 5, "comment": "Stunning villa.", "date": "2024-08-30" },
            { "id": "r-2", "comment": "Would stay again." }
        ]))),
    }
}

/// Serve the stub backend on an ephemeral local port
pub async fn spawn_stub_backend(booking_status: StatusCode) -> StubBackend {
    let bookings = Arc::new(Mutex::new(Vec::new()));
    let seen_paths = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        booking_status,
        bookings: Arc::clone(&bookings),
        seen_paths: Arc::clone(&seen_paths),
    };

    let app = Router::new()
        .route("/api/bookings", post(stub_create_booking))
        .route("/api/properties/:id", get(stub_property))
        .route("/api/properties/:id/reviews", get(stub_reviews))
        .layer(middleware::from_fn_with_state(state.clone(), record_path))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBackend {
        base_url: format!("http://{}", addr),
        bookings,
        seen_paths,
    }
}

/// Base URL of a local port nothing is listening on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
