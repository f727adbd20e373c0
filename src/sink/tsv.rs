use std::path::PathBuf;

use serde_json::Value;

use crate::error::SinkError;
use crate::sink::{LogSink, append_line};

#[derive(Debug, Clone)]
pub struct TsvSink {
    pub path: PathBuf,
}

impl TsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogSink for TsvSink {
    fn append(&mut self, row: &[Value]) -> Result<(), SinkError> {
        let line = row.iter().map(field_text).collect::<Vec<_>>().join("\t");
        append_line(&self.path, &line)
    }
}

pub fn field_text(value: &Value) -> String {
    let text = match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    text.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/sink/tsv.rs"]
mod tests;
