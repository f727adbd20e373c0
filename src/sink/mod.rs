pub mod jsonl;
pub mod tsv;

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::error::SinkError;

pub use jsonl::JsonLinesSink;
pub use tsv::TsvSink;

/// Durable, append-only store for one row per successful submission.
pub trait LogSink {
    fn append(&mut self, row: &[Value]) -> Result<(), SinkError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Tsv,
    Jsonl,
}

/// Stand-in when no log store is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisconnectedSink;

impl LogSink for DisconnectedSink {
    fn append(&mut self, _row: &[Value]) -> Result<(), SinkError> {
        Err(SinkError::Disconnected)
    }
}

#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub rows: Vec<Vec<Value>>,
}

#[cfg(test)]
impl LogSink for MemorySink {
    fn append(&mut self, row: &[Value]) -> Result<(), SinkError> {
        self.rows.push(row.to_vec());
        Ok(())
    }
}

pub fn open_sink(path: Option<PathBuf>, format: LogFormat) -> Box<dyn LogSink> {
    match path {
        None => Box::new(DisconnectedSink),
        Some(path) => match format {
            LogFormat::Tsv => Box::new(TsvSink::new(path)),
            LogFormat::Jsonl => Box::new(JsonLinesSink::new(path)),
        },
    }
}

pub(crate) fn append_line(path: &std::path::Path, line: &str) -> Result<(), SinkError> {
    use std::fs::OpenOptions;
    use std::io::Write;

    let io_err = |source| SinkError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;
    writeln!(file, "{}", line).map_err(io_err)
}

#[cfg(test)]
#[path = "../../tests/src_inline/sink/mod.rs"]
mod tests;
