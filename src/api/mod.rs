pub mod decode;
pub mod endpoint;
pub mod error;
pub mod response;

use crate::model;
pub use decode::decode;
pub use error::{DecodeError, Error};
use serde_json::Value;

/// Map failed HTTP exchange to Error
fn map_transport_err(error: reqwest::Error) -> Error {
    match error.status() {
        Some(status) => Error::TransportError(format!("inverter responded {}", status)),
        None => Error::TransportError(error.to_string()),
    }
}

/// Perform single `ReadRealTimeData` request against the inverter at `host` (`host` or
/// `host:port`) and return the raw response body.
pub async fn fetch(host: &str, password: &str) -> Result<Vec<u8>, Error> {
    let url = format!("http://{}{}", host, endpoint::ROOT);
    let request_body = [
        ("optType", endpoint::READ_REAL_TIME_DATA),
        ("pwd", password),
    ];

    let body = reqwest::Client::new()
        .post(url)
        .form(&request_body)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(map_transport_err)?
        .bytes()
        .await
        .map_err(|e| Error::TransportError(format!("Error reading inverter response: {}", e)))?;

    log::trace!(
        "host: {}, response_text: {}",
        host,
        String::from_utf8_lossy(&body)
    );

    Ok(body.to_vec())
}

/// Read and decode real-time data of the inverter at `host`.
pub async fn request(host: &str, password: &str) -> Result<model::DecodedResult, Error> {
    let body = fetch(host, password).await?;
    Ok(decode(&body)?)
}

/// Dump raw real-time data
///
/// Reads the response of any inverter model without interpreting it, for reporting models
/// which can't be decoded yet.
pub async fn dump(host: &str, password: &str) -> Result<Value, Error> {
    let body = fetch(host, password).await?;
    serde_json::from_slice::<Value>(&body)
        .map_err(|e| DecodeError::MalformedEnvelope(e.to_string()).into())
}
