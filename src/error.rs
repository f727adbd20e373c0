use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error("invalid numeric input for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("unrecognized dimension: {0}")]
    UnrecognizedDimension(String),

    #[error("unrecognized test type: {0}")]
    UnrecognizedTestKind(String),

    #[error("conversion table for {0} has no entries")]
    EmptyTable(String),
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("log store is not connected")]
    Disconnected,

    #[error("failed to append log row to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode log row: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document layout failed: {0}")]
    Layout(String),
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("client metadata unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("batch line {line}: {message}")]
    Batch { line: usize, message: String },
}
