use crate::event::source::EventSource;
use crate::event::{EventError, EventRecord};

/// A source backed by a fixed, configured dataset. Serves as the fallback
/// when the network source is unavailable, and as a stand-in in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEventSource {
    records: Vec<EventRecord>,
}

impl StaticEventSource {
    pub fn new(records: Vec<EventRecord>) -> Self {
        StaticEventSource { records }
    }
}

impl EventSource for StaticEventSource {
    fn fetch(&self) -> Result<Vec<EventRecord>, EventError> {
        Ok(self.records.clone())
    }
}
