//! Connection Handler
//!
//! Owns the TCP stream for the lifetime of a single exchange.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use bytes::{Bytes, BytesMut};

use super::{ClientOptions, Endpoint};
use crate::error::{FetchError, Result};

/// A single open connection to the server
///
/// Dropping the connection shuts down both directions and closes the
/// socket, so every exit path out of an exchange releases it.
pub struct Connection {
    stream: TcpStream,

    /// Endpoint string for logging and errors
    endpoint: String,
}

impl Connection {
    /// Connect to `endpoint` and apply the configured timeouts
    pub fn open(endpoint: &Endpoint, options: &ClientOptions) -> Result<Self> {
        let name = endpoint.to_string();
        let connection_failed = |source: io::Error| FetchError::ConnectionFailed {
            endpoint: name.clone(),
            source,
        };

        let stream = if options.connect_timeout_ms > 0 {
            connect_with_timeout(endpoint, Duration::from_millis(options.connect_timeout_ms))
        } else {
            TcpStream::connect((endpoint.host(), endpoint.port()))
        }
        .map_err(connection_failed)?;

        // Disable Nagle's algorithm so the whole command leaves at once
        stream.set_nodelay(true).map_err(connection_failed)?;

        if options.read_timeout_ms > 0 {
            stream
                .set_read_timeout(Some(Duration::from_millis(options.read_timeout_ms)))
                .map_err(connection_failed)?;
        }
        if options.write_timeout_ms > 0 {
            stream
                .set_write_timeout(Some(Duration::from_millis(options.write_timeout_ms)))
                .map_err(connection_failed)?;
        }

        tracing::debug!("Connected to {}", name);

        Ok(Self {
            stream,
            endpoint: name,
        })
    }

    /// Write the whole payload, retrying partial writes
    pub fn send(&mut self, payload: &[u8]) -> Result<()> {
        self.stream
            .write_all(payload)
            .and_then(|_| self.stream.flush())
            .map_err(|source| FetchError::WriteFailed {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        tracing::trace!("Sent {} bytes to {}", payload.len(), self.endpoint);
        Ok(())
    }

    /// Read until the peer closes its write side
    ///
    /// Chunks are appended in arrival order. A zero-byte read is a clean
    /// close; any other failure is a read error and discards what was read.
    pub fn read_to_close(&mut self, chunk_size: usize) -> Result<Bytes> {
        // A zero-length buffer would read as a clean close
        let mut chunk = vec![0u8; chunk_size.max(1)];
        let mut buffer = BytesMut::new();

        loop {
            match self.stream.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => {
                    tracing::trace!("Read {} bytes from {}", n, self.endpoint);
                    buffer.extend_from_slice(&chunk[..n]);
                }
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(FetchError::ReadFailed {
                        endpoint: self.endpoint.clone(),
                        source,
                    });
                }
            }
        }

        Ok(buffer.freeze())
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        // The peer may already be gone; the socket is closed either way
        let _ = self.stream.shutdown(Shutdown::Both);
        tracing::debug!("Closed connection to {}", self.endpoint);
    }
}

/// Try each resolved address in turn, keeping the last error
fn connect_with_timeout(endpoint: &Endpoint, timeout: Duration) -> io::Result<TcpStream> {
    let mut last_err = None;

    for addr in endpoint.resolve()? {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = Some(e),
        }
    }

    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "could not resolve to any addresses",
        )
    }))
}
