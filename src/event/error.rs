use crate::impl_err;

#[derive(Debug)]
pub enum EventError {
    /// Network or backend failure while retrieving events.
    Fetch(reqwest::Error),
    /// The response body was not a decodable event array.
    Decode(serde_json::Error),
}

impl_err!(reqwest::Error, EventError, Fetch);
impl_err!(serde_json::Error, EventError, Decode);
