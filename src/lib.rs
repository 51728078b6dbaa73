//! Client for the local real-time API of SolaX inverters.
//!
//! ```no_run
//! # async fn run() -> Result<(), solax_local_rs::Error> {
//! let result = solax_local_rs::request("192.168.1.20", "SVRDJTTEUH").await?;
//! println!("{} kWh today", result.reading.yield_today());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod model;

pub use api::{decode, dump, fetch, request, DecodeError, Error};
