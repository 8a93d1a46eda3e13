//! Service configuration loaded from the environment

use anyhow::{Context, Result};

/// Runtime configuration for the backend service
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `EnvFilter` directive, e.g. `info` or `srs_backend=debug`
    pub log_filter: String,
    /// Fixed seed for session ordering. Unset means a fresh random order per request.
    pub shuffle_seed: Option<u64>,
    /// Upper bound on the number of cards accepted in one study session request
    pub max_session_cards: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_filter: "info".to_string(),
            shuffle_seed: None,
            max_session_cards: 5000,
        }
    }
}

impl Config {
    /// Load from process environment (after `.env`, if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        let shuffle_seed = lookup("SRS_SHUFFLE_SEED")
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("SRS_SHUFFLE_SEED must be an unsigned integer, got {raw:?}"))
            })
            .transpose()?;

        let max_session_cards = match lookup("SRS_MAX_SESSION_CARDS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("SRS_MAX_SESSION_CARDS must be a count, got {raw:?}"))?,
            None => defaults.max_session_cards,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            shuffle_seed,
            max_session_cards,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
