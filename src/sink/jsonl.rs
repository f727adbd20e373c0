use std::path::PathBuf;

use serde_json::Value;

use crate::error::SinkError;
use crate::sink::{LogSink, append_line};

#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    pub path: PathBuf,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogSink for JsonLinesSink {
    fn append(&mut self, row: &[Value]) -> Result<(), SinkError> {
        let line = serde_json::to_string(row)?;
        append_line(&self.path, &line)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/sink/jsonl.rs"]
mod tests;
