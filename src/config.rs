//! Configuration for kvfetch
//!
//! Centralized configuration with defaults that reproduce a single
//! `GET hello "world"` request against a local server.

use std::path::PathBuf;

use crate::client::{ClientOptions, Endpoint};

/// Default request text, sent with a trailing NUL
pub const DEFAULT_COMMAND: &str = "GET hello \"world\"";

/// Bytes appended to the command text when building the wire payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminator {
    /// `\0`
    #[default]
    Nul,

    /// `\n`
    Newline,

    /// `\r\n`
    CrLf,

    /// Send the text verbatim
    None,
}

impl Terminator {
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            Terminator::Nul => b"\0",
            Terminator::Newline => b"\n",
            Terminator::CrLf => b"\r\n",
            Terminator::None => b"",
        }
    }
}

/// Main configuration for one fetch
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server host name or IP literal
    pub host: String,

    /// Server TCP port
    pub port: u16,

    /// Connect timeout (milliseconds, 0 = transport default)
    pub connect_timeout_ms: u64,

    /// Read timeout (milliseconds, 0 = wait for peer close indefinitely)
    pub read_timeout_ms: u64,

    /// Write timeout (milliseconds, 0 = none)
    pub write_timeout_ms: u64,

    /// Size of each read from the socket
    pub read_chunk_size: usize,

    // -------------------------------------------------------------------------
    // Request Configuration
    // -------------------------------------------------------------------------
    /// Command text
    pub command: String,

    /// Terminator appended to `command` on the wire
    pub terminator: Terminator,

    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// Destination file for the decoded response
    pub output: PathBuf,

    /// Indent width for the pretty-printed output
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6379,
            connect_timeout_ms: 0,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
            read_chunk_size: 1024,
            command: DEFAULT_COMMAND.to_string(),
            terminator: Terminator::Nul,
            output: PathBuf::from("result.json"),
            indent: 2,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.host.clone(), self.port)
    }

    /// Wire payload: command text followed by the terminator bytes
    pub fn payload(&self) -> Vec<u8> {
        let terminator = self.terminator.as_bytes();
        let mut payload = Vec::with_capacity(self.command.len() + terminator.len());
        payload.extend_from_slice(self.command.as_bytes());
        payload.extend_from_slice(terminator);
        payload
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            read_chunk_size: self.read_chunk_size,
            connect_timeout_ms: self.connect_timeout_ms,
            read_timeout_ms: self.read_timeout_ms,
            write_timeout_ms: self.write_timeout_ms,
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the socket read size (in bytes)
    pub fn read_chunk_size(mut self, size: usize) -> Self {
        self.config.read_chunk_size = size;
        self
    }

    /// Set the command text
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.config.command = command.into();
        self
    }

    /// Set the bytes appended to the command text
    pub fn terminator(mut self, terminator: Terminator) -> Self {
        self.config.terminator = terminator;
        self
    }

    /// Set the output file path
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = path.into();
        self
    }

    /// Set the output indent width (in spaces)
    pub fn indent(mut self, width: usize) -> Self {
        self.config.indent = width;
        self
    }

    /// Finish building the config
    pub fn build(self) -> Config {
        self.config
    }
}
