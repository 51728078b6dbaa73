#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;
#[macro_use]
extern crate rocket;

use config::Config;
use rocket::{Build, Rocket, State};
use solax_local_rs::api;
use std::sync::Mutex;
use std::time::Instant;

mod metrics;

const INTERVAL: i64 = 60;

#[derive(Clone, serde::Deserialize)]
pub struct SolaxConfig {
    host: String,
    password: String,
    interval: u64,
}

/// Structure containing state for API handlers.
pub struct StateData {
    host: String,
    password: String,
    interval: u64,
    /// Timestamp of last successful metric collection via `metrics::collect()`
    timestamp: Mutex<Option<Instant>>,
}

impl StateData {
    /// Updates `timestamp` to `now()`.
    fn touch(&self) {
        if let Ok(mut ts) = self.timestamp.lock() {
            *ts = Some(Instant::now());
        } else {
            log::trace!("Unable to lock timestamp mutex, will refresh again")
        }
    }

    /// Checks whether `interval_seconds` elapsed since last `touch()`
    fn interval_elapsed(&self, interval_secs: u64) -> bool {
        let elapsed_opt = self
            .timestamp
            .lock()
            .ok()
            .and_then(|a| a.map(|b| b.elapsed().as_secs()));

        if let Some(elapsed) = elapsed_opt {
            elapsed > interval_secs
        } else {
            /* If there is None timestamp/elapsed, always return true to trigger action */
            true
        }
    }
}

pub fn read_settings() -> Result<SolaxConfig, config::ConfigError> {
    let mut settings = Config::default();
    settings
        .set_default("interval", INTERVAL)?
        .merge(config::Environment::with_prefix("SOLAX"))?;

    settings.try_into()
}

#[get("/metrics")]
async fn metrics_route(state: &State<StateData>) -> Result<String, api::Error> {
    if state.interval_elapsed(state.interval) {
        metrics::collect(&state.host, &state.password).await?;
        state.touch();
    } else {
        log::info!("interval time not yet elapsed since last run; returning cached result")
    }
    metrics::read().await
}

#[get("/inverter")]
async fn inverter_route(state: &State<StateData>) -> Result<String, api::Error> {
    let result = api::request(&state.host, &state.password).await?;

    serde_json::to_string_pretty(&result).or(Err(api::Error::FormatError))
}

#[get("/dump-envelope")]
async fn dump_envelope_route(state: &State<StateData>) -> Result<String, api::Error> {
    let dump = api::dump(&state.host, &state.password).await?;

    serde_json::to_string_pretty(&dump).or(Err(api::Error::FormatError))
}

#[launch]
fn rocket() -> Rocket<Build> {
    env_logger::init();

    let settings = read_settings().expect("Configuration error");
    let state = StateData {
        host: settings.host,
        password: settings.password,
        interval: settings.interval,
        timestamp: Mutex::new(None),
    };

    rocket::build().manage(state).mount(
        "/",
        routes![metrics_route, inverter_route, dump_envelope_route],
    )
}
