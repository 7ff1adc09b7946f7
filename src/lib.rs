//! # kvfetch
//!
//! A one-shot client for line-oriented key-value servers:
//! - Sends a single opaque command over TCP
//! - Buffers the reply until the server closes the connection
//! - Decodes the reply as JSON and writes it to a file
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          fetch                               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────────────┐
//!          │            │                     │
//!          ▼            ▼                     ▼
//!   ┌─────────────┐ ┌─────────────┐   ┌─────────────┐
//!   │   Client    │ │   Decoder   │   │    Sink     │
//!   │ (TCP, once) │ │   (JSON)    │   │   (file)    │
//!   └─────────────┘ └─────────────┘   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod client;
pub mod decoder;
pub mod sink;
pub mod fetch;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FetchError, Result};
pub use config::{Config, Terminator};
pub use client::{ClientOptions, Endpoint, LineCommandClient, Response};
pub use decoder::{Decoder, JsonDecoder};
pub use sink::{JsonFileSink, Sink};
pub use fetch::{fetch, fetch_with};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvfetch
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
