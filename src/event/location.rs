use log::warn;
use serde::Serialize;

use crate::event::EventRecord;
use crate::geo::LatLng;

/// A geocoded event: a coordinate tagged with the source record's name.
/// Built per fetch cycle; each batch replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventLocation {
    pub key: String,
    pub location: LatLng,
}

impl EventLocation {
    /// Converts a fetched batch into locations, skipping records whose
    /// coordinates do not parse or fall out of range. Skips warn; they are
    /// never fatal to the batch.
    pub fn collect(records: Vec<EventRecord>) -> Vec<EventLocation> {
        records
            .into_iter()
            .filter_map(|record| match record.location() {
                Ok(location) => Some(EventLocation {
                    key: record.name,
                    location,
                }),
                Err(err) => {
                    warn!("Skipping event {:?}: {:?}", record.name, err);
                    None
                }
            })
            .collect()
    }
}
