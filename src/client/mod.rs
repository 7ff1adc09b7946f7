//! Client Module
//!
//! One-shot TCP command client.
//!
//! ## Exchange
//! ```text
//!   client                          server
//!     │──────── connect ─────────────▶│
//!     │──────── command bytes ───────▶│
//!     │◀─────── response chunk 1 ─────│
//!     │◀─────── response chunk N ─────│
//!     │◀─────── FIN (read == 0) ──────│
//!     │──────── close ───────────────▶│
//! ```
//!
//! The command is sent verbatim: the caller supplies any terminator the
//! server expects. The end of the response is signalled only by the peer
//! closing its write side; there is no length prefix or delimiter parsing.

mod endpoint;
mod connection;
mod response;

pub use endpoint::Endpoint;
pub use connection::Connection;
pub use response::Response;

use crate::error::{FetchError, Result};

/// Default size of each socket read
pub const DEFAULT_READ_CHUNK_SIZE: usize = 1024;

/// Transport knobs for [`LineCommandClient`]
///
/// Timeouts are in milliseconds; `0` leaves the transport default in place,
/// which for reads means waiting for the peer to close for as long as it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    pub read_chunk_size: usize,
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
    pub write_timeout_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
            connect_timeout_ms: 0,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
        }
    }
}

/// Sends one command per call and buffers the reply until the peer closes
///
/// Every call to [`execute`](Self::execute) opens exactly one connection and
/// closes it before returning, on success and on every error path.
///
/// With default options a peer that accepts the connection but never writes
/// or closes blocks the call indefinitely.
#[derive(Debug, Clone, Default)]
pub struct LineCommandClient {
    options: ClientOptions,
}

impl LineCommandClient {
    /// Client with transport defaults (no timeouts, 1 KiB reads)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ClientOptions) -> Self {
        Self { options }
    }

    /// Send `command` to `endpoint` and return everything received before close
    ///
    /// Returns an empty response if the peer closes without writing.
    pub fn execute(&self, endpoint: &Endpoint, command: &[u8]) -> Result<Response> {
        if command.is_empty() {
            return Err(FetchError::EmptyCommand);
        }

        tracing::debug!("Sending {} byte command to {}", command.len(), endpoint);

        let mut connection = Connection::open(endpoint, &self.options)?;
        connection.send(command)?;
        let bytes = connection.read_to_close(self.options.read_chunk_size)?;

        tracing::debug!("Received {} bytes", bytes.len());
        Ok(Response::from(bytes))
    }
}

/// Run a single exchange with default options
pub fn execute(endpoint: &Endpoint, command: &[u8]) -> Result<Response> {
    LineCommandClient::new().execute(endpoint, command)
}
