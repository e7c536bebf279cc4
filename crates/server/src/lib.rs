use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{
        HeaderName, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    middleware,
    routing::get,
};
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod auth;
pub mod config;
pub mod error;
pub mod generator;
pub mod routes;
pub mod state;

use config::Config;
use error::StartupError;
use routes::game_data_handler;
use state::AppState;

/// Routes for the game: `/game-data` plus the static `/images` tree, both
/// behind the token check.
pub fn router(state: Arc<AppState>) -> Router {
    let mut allowed_headers = vec![CONTENT_TYPE, AUTHORIZATION];
    match HeaderName::try_from(state.config.token_header.as_str()) {
        Ok(name) if !allowed_headers.contains(&name) => allowed_headers.push(name),
        Ok(_) => {}
        Err(err) => warn!("Token header {:?} is not a valid header name: {err}", state.config.token_header),
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(allowed_headers)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/game-data", get(game_data_handler))
        .nest_service("/images", ServeDir::new(&state.config.images_dir))
        .layer(middleware::from_fn_with_state(state.clone(), auth::require_token))
        .layer(cors)
        .with_state(state)
}

/// Serve `router` on `listener` until ctrl-c or SIGTERM.
///
/// # Errors
///
/// Returns `StartupError::Serve` if the server stops with an I/O error.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), StartupError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Entry point for the binary.
///
/// # Errors
///
/// Returns `StartupError` if configuration is missing or the port cannot be bound.
pub async fn start_server() -> Result<(), StartupError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;
    let address = format!("0.0.0.0:{}", config.port);
    info!(images = %config.images_dir.display(), "Serving images");
    let state = AppState::from_config(config);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;
    info!("Server running on {address}");

    serve(listener, router(state)).await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                warn!("Failed to install Ctrl+C handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                warn!("Failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
