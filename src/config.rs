//! Versioned JSON configuration: the static route segments, the events
//! endpoint, and the fallback dataset. `.env` / environment variables can
//! repoint the endpoint or strategy without editing the file.

use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;

use crate::event::EventRecord;
use crate::geo::DistanceStrategy;
use crate::impl_err;
use crate::route::{RouteSet, Segment};

pub const ENV_EVENTS_URL: &str = "NEARLINE_EVENTS_URL";
pub const ENV_STRATEGY: &str = "NEARLINE_STRATEGY";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl_err!(std::io::Error, ConfigError, Io);
impl_err!(serde_json::Error, ConfigError, Parse);

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub strategy: DistanceStrategy,
    pub events: EventsConfig,
    /// Static, versioned list of route segments. Source of the
    /// [`RouteSet`]; never mutated at runtime.
    pub routes: Vec<Segment>,
    /// Dataset served when the events endpoint is unreachable.
    #[serde(default)]
    pub fallback_events: Vec<EventRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    pub endpoint: String,
    #[serde(default)]
    pub request_body: serde_json::Value,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_retries")]
    pub retries: u32,
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_retries() -> u32 {
    1
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_json::from_str(raw)?;
        config.apply_env();
        Ok(config)
    }

    pub fn route_set(&self) -> RouteSet {
        RouteSet::new(self.routes.clone())
    }

    // Environment wins over the file so deployments can repoint without
    // touching versioned data.
    fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var(ENV_EVENTS_URL) {
            self.events.endpoint = endpoint;
        }

        if let Ok(raw) = std::env::var(ENV_STRATEGY) {
            match raw.parse::<DistanceStrategy>() {
                Ok(strategy) => self.strategy = strategy,
                Err(_) => warn!(
                    "Unknown distance strategy {:?}, keeping {}",
                    raw, self.strategy
                ),
            }
        }
    }
}
