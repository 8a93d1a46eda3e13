//! Common test utilities and fixtures for integration tests.
//!
//! The service is stateless, so every test builds its own router in memory.
//! No database or external services are needed.

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use srs_backend::config::Config;
use srs_backend::{router, AppState};

/// Test context wrapping a router built from a known configuration.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Context with default configuration and a fixed shuffle seed.
    pub fn new() -> Self {
        Self::with_config(Config {
            shuffle_seed: Some(7),
            ..Config::default()
        })
    }

    /// Context with an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            app: router(AppState::new(config)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server for this context.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
