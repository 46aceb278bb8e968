use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers::api::{
    checkout, get_order_summary, get_property, get_reviews, health_check, AppState,
};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let health_route = Router::new().route("/health", get(health_check));

    let property_routes = Router::new()
        .route("/properties/:property_id", get(get_property))
        .route("/properties/:property_id/reviews", get(get_reviews));

    let booking_routes = Router::new()
        .route("/booking/summary", get(get_order_summary))
        .route("/booking/checkout", post(checkout));

    info!("Property and booking routes enabled");

    Router::new()
        .merge(health_route)
        .merge(property_routes)
        .merge(booking_routes)
        .with_state(app_state)
}
