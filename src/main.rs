use std::time::Duration;

use dotenv::dotenv;
use itertools::Itertools;
use log::{error, info};

use nearline::config::Config;
use nearline::event::{
    EventLocation, EventSource, FallbackEventSource, HttpEventSource, StaticEventSource,
};
use nearline::route::Nearest;

fn main() {
    dotenv().ok();
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/config.json".to_string());

    let config = match Config::from_file(&path) {
        Ok(config) => config,
        Err(err) => {
            error!("Could not load config {}: {:?}", path, err);
            std::process::exit(1);
        }
    };

    let routes = config.route_set();
    info!(
        "Loaded {} route segments, strategy {}",
        routes.len(),
        config.strategy
    );

    let primary = match HttpEventSource::new(
        &config.events.endpoint,
        config.events.request_body.clone(),
        Duration::from_millis(config.events.timeout_ms),
    ) {
        Ok(source) => source,
        Err(err) => {
            error!("Could not build event source: {:?}", err);
            std::process::exit(1);
        }
    };

    let source = FallbackEventSource::new(
        primary,
        StaticEventSource::new(config.fallback_events.clone()),
    )
    .with_retries(config.events.retries);

    let records = match source.fetch() {
        Ok(records) => records,
        Err(err) => {
            error!("No event batch available: {:?}", err);
            std::process::exit(1);
        }
    };

    let events = EventLocation::collect(records);
    info!("Resolved {} event locations", events.len());

    let matches: Vec<serde_json::Value> = events
        .iter()
        .map(|event| {
            routes
                .find_closest(&event.location, config.strategy)
                .map(|found| {
                    serde_json::json!({
                        "key": event.key,
                        "segment": found.segment,
                        "distance": found.distance,
                    })
                })
        })
        .collect::<Result<_, _>>()
        .unwrap_or_else(|err| {
            error!("Resolution failed: {:?}", err);
            std::process::exit(1);
        });

    let highlighted = routes
        .find_closest_for_all(events.iter().map(|event| &event.location), config.strategy)
        .unwrap_or_else(|err| {
            error!("Resolution failed: {:?}", err);
            std::process::exit(1);
        });

    let output = serde_json::json!({
        "strategy": config.strategy,
        "highlighted": highlighted.iter().sorted().collect::<Vec<_>>(),
        "matches": matches,
    });

    println!("{}", output);
}
