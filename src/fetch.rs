//! Fetch pipeline
//!
//! Request, decode, persist. Each stage's error aborts the ones after it,
//! so nothing is written when the request or the decode fails.

use serde_json::Value;

use crate::client::{Endpoint, LineCommandClient};
use crate::config::Config;
use crate::decoder::{Decoder, JsonDecoder};
use crate::error::Result;
use crate::sink::{JsonFileSink, Sink};

/// Run one exchange as described by `config` and write the JSON result
pub fn fetch(config: &Config) -> Result<Value> {
    let client = LineCommandClient::with_options(config.client_options());
    let sink = JsonFileSink::new(&config.output).with_indent(config.indent);

    fetch_with(
        &client,
        &config.endpoint(),
        &config.payload(),
        &JsonDecoder::<Value>::new(),
        &sink,
    )
}

/// Same as [`fetch`] with caller-supplied components
pub fn fetch_with<D, S>(
    client: &LineCommandClient,
    endpoint: &Endpoint,
    command: &[u8],
    decoder: &D,
    sink: &S,
) -> Result<D::Output>
where
    D: Decoder,
    S: Sink<D::Output>,
{
    let response = client.execute(endpoint, command)?;
    tracing::info!("Received {} bytes from {}", response.len(), endpoint);

    let value = decoder.decode(&response)?;
    sink.persist(&value)?;

    Ok(value)
}
