//! Output sinks
//!
//! Persist a decoded value in human-readable form.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{FetchError, Result};

/// Destination for a decoded value
pub trait Sink<T: ?Sized> {
    fn persist(&self, value: &T) -> Result<()>;
}

/// Writes pretty-printed JSON to a file, replacing any previous contents
///
/// Object keys keep their decoded order and numbers keep their exact text.
/// Strings are written as UTF-8; non-ASCII characters are not `\u` escaped.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
    indent: usize,
}

impl JsonFileSink {
    /// Sink writing to `path` with a 2-space indent
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            indent: 2,
        }
    }

    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);

        let indent = vec![b' '; self.indent];
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(&indent));
        value.serialize(&mut serializer)?;

        writer.flush()
    }
}

impl<T: Serialize + ?Sized> Sink<T> for JsonFileSink {
    fn persist(&self, value: &T) -> Result<()> {
        self.write(value).map_err(|source| FetchError::SinkFailed {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Wrote {}", self.path.display());
        Ok(())
    }
}
