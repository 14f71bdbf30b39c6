use log::warn;

use crate::event::source::EventSource;
use crate::event::{EventError, EventRecord};

/// Chains a primary source with a fallback: the primary is retried a fixed
/// number of times, after which the fallback supplies the batch and the
/// failure is surfaced as a warning rather than an error.
pub struct FallbackEventSource<P, F> {
    primary: P,
    fallback: F,
    retries: u32,
}

impl<P, F> FallbackEventSource<P, F>
where
    P: EventSource,
    F: EventSource,
{
    pub fn new(primary: P, fallback: F) -> Self {
        FallbackEventSource {
            primary,
            fallback,
            retries: 1,
        }
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }
}

impl<P, F> EventSource for FallbackEventSource<P, F>
where
    P: EventSource,
    F: EventSource,
{
    fn fetch(&self) -> Result<Vec<EventRecord>, EventError> {
        let mut attempt = 0;
        loop {
            match self.primary.fetch() {
                Ok(records) => return Ok(records),
                Err(err) if attempt < self.retries => {
                    attempt += 1;
                    warn!(
                        "Event fetch failed ({:?}), retrying {}/{}",
                        err, attempt, self.retries
                    );
                }
                Err(err) => {
                    warn!(
                        "Event fetch failed after {} attempts ({:?}), serving fallback dataset",
                        attempt + 1,
                        err
                    );
                    return self.fallback.fetch();
                }
            }
        }
    }
}
