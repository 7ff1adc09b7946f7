//! Response definition
//!
//! Raw bytes received from the server before it closed the connection.

use std::ops::Deref;

use bytes::Bytes;

/// Everything the peer sent, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    bytes: Bytes,
}

impl Response {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the peer closed without sending anything
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Bytes> for Response {
    fn from(bytes: Bytes) -> Self {
        Self { bytes }
    }
}

impl From<Vec<u8>> for Response {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Bytes::from(bytes),
        }
    }
}

impl AsRef<[u8]> for Response {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Deref for Response {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}
