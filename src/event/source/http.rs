use std::time::Duration;

use log::debug;

use crate::event::source::EventSource;
use crate::event::{EventError, EventRecord};

/// Fetches events with a single POST to the configured endpoint. One request
/// in flight at a time; the request timeout bounds each attempt.
pub struct HttpEventSource {
    client: reqwest::blocking::Client,
    endpoint: String,
    body: serde_json::Value,
}

impl HttpEventSource {
    pub fn new(
        endpoint: impl Into<String>,
        body: serde_json::Value,
        timeout: Duration,
    ) -> Result<Self, EventError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(HttpEventSource {
            client,
            endpoint: endpoint.into(),
            // The backend expects a JSON object body, possibly empty.
            body: if body.is_null() {
                serde_json::json!({})
            } else {
                body
            },
        })
    }
}

impl EventSource for HttpEventSource {
    fn fetch(&self) -> Result<Vec<EventRecord>, EventError> {
        debug!("Fetching events from {}", self.endpoint);

        let raw = self
            .client
            .post(&self.endpoint)
            .json(&self.body)
            .send()?
            .error_for_status()?
            .text()?;

        let records: Vec<EventRecord> = serde_json::from_str(&raw)?;
        debug!("Fetched {} event records", records.len());
        Ok(records)
    }
}
