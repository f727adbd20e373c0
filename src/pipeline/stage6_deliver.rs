use std::fmt;

use crate::error::SinkError;
use crate::model::record::ResultRecord;
use crate::report::DocumentRenderer;
use crate::report::log_row::build_log_row;
use crate::sink::LogSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorWarning {
    Metadata(String),
    Render(String),
    LogDisconnected,
    LogAppend(String),
}

impl fmt::Display for CollaboratorWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaboratorWarning::Metadata(msg) => write!(f, "{msg}"),
            CollaboratorWarning::Render(msg) => write!(f, "document rendering failed: {msg}"),
            CollaboratorWarning::LogDisconnected => {
                write!(f, "log store not connected; result is only available as a document")
            }
            CollaboratorWarning::LogAppend(msg) => write!(f, "log append failed: {msg}"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Delivery {
    pub document: Option<Vec<u8>>,
    pub logged: bool,
    pub warnings: Vec<CollaboratorWarning>,
}

/// Hands a finished record to the renderer and the log sink. Each is called
/// once; failures become warnings.
pub fn run_stage6(
    record: &ResultRecord,
    renderer: &dyn DocumentRenderer,
    sink: &mut dyn LogSink,
) -> Delivery {
    let mut delivery = Delivery::default();

    match renderer.render(record) {
        Ok(bytes) => delivery.document = Some(bytes),
        Err(err) => {
            tracing::warn!("{}", err);
            delivery
                .warnings
                .push(CollaboratorWarning::Render(err.to_string()));
        }
    }

    let row = build_log_row(record);
    match sink.append(&row) {
        Ok(()) => {
            tracing::info!(
                "logged {} submission {}",
                record.test_kind.code(),
                record.submission_id
            );
            delivery.logged = true;
        }
        Err(SinkError::Disconnected) => {
            tracing::info!("log store not connected; skipping append");
            delivery.warnings.push(CollaboratorWarning::LogDisconnected);
        }
        Err(err) => {
            tracing::warn!("{}", err);
            delivery
                .warnings
                .push(CollaboratorWarning::LogAppend(err.to_string()));
        }
    }

    delivery
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_deliver.rs"]
mod tests;
