use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, http::StatusCode};
use chrono::NaiveDate;
use tower::{BoxError, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use booking_checkout_service::{
    create_router, models::order::BookingDetails, AppConfig, AppState, BookingApiClient,
};

// Error handler
async fn handle_error(error: BoxError) -> (StatusCode, String) {
    if error.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            "Request took too long".to_string(),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled internal error: {}", error),
        )
    }
}

// Stay shown on the checkout page
fn featured_booking() -> BookingDetails {
    BookingDetails {
        property_name: "Villa Arrecife Beach House".to_string(),
        property_image: "https://example.com/property.jpg".to_string(),
        price: 7500,
        booking_fee: 65,
        total_nights: 3,
        start_date: NaiveDate::from_ymd_opt(2024, 8, 24).unwrap_or_default(),
        rating: 4.76,
        review_count: 345,
    }
}

#[cfg(feature = "sentry-monitoring")]
fn init_sentry(config: &AppConfig) -> Option<sentry::ClientInitGuard> {
    config.sentry_dsn.as_deref().map(|dsn| {
        info!("Sentry error tracking enabled");
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received interrupt signal, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    #[cfg(feature = "sentry-monitoring")]
    let _sentry = init_sentry(&config);

    // Initialize the booking backend client
    let client = match BookingApiClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create booking backend client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Create shared application state
    let app_state = Arc::new(AppState::new(client, featured_booking()));

    let app = create_router(app_state).layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_error))
            .load_shed()
            .concurrency_limit(64)
            .timeout(Duration::from_secs(30))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::new().allow_origin(Any)),
    );

    let listener = match tokio::net::TcpListener::bind(&config.server_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", config.server_addr, e);
            return ExitCode::FAILURE;
        }
    };
    info!("Server listening on {}", config.server_addr);

    // Start server with graceful shutdown
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Server has been gracefully shut down");
    ExitCode::SUCCESS
}
