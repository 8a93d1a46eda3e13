pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    routing::{get, post},
    Router,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    seeded_rng: Option<Arc<Mutex<ChaCha8Rng>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let seeded_rng = config
            .shuffle_seed
            .map(|seed| Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))));

        Self {
            config: Arc::new(config),
            seeded_rng,
        }
    }

    /// Run `f` with the configured random source.
    ///
    /// A seeded generator is shared across requests so a fixed seed gives a
    /// reproducible sequence of sessions; otherwise the thread-local RNG is used.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match &self.seeded_rng {
            Some(rng) => {
                let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
                f(&mut *guard)
            }
            None => f(&mut rand::thread_rng()),
        }
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/health", get(routes::health::status))
        .route(
            "/api/confidence-levels",
            get(routes::health::confidence_levels),
        )
        // Review routes
        .route("/api/review", post(routes::review::review))
        .route("/api/review/interval", post(routes::review::interval))
        // Study routes
        .route("/api/study/session", post(routes::study::session))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(seed) = config.shuffle_seed {
        tracing::info!("Using fixed session shuffle seed {}", seed);
    }

    let addr = config.bind_address();
    let app = router(AppState::new(config))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
