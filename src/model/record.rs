use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::model::categories::Category;
use crate::model::dimensions::{Dimension, TestKind};

pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubScore {
    pub dimension: Dimension,
    pub raw: f64,
    /// Table output; `None` for sub-tests entered without conversion.
    pub standard: Option<u32>,
}

impl SubScore {
    pub fn raw(dimension: Dimension, raw: f64) -> Self {
        Self {
            dimension,
            raw,
            standard: None,
        }
    }

    pub fn converted(dimension: Dimension, raw: f64, standard: u32) -> Self {
        Self {
            dimension,
            raw,
            standard: Some(standard),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientMetadata {
    pub user_agent: String,
    pub ip: String,
}

impl ClientMetadata {
    pub fn unknown() -> Self {
        Self {
            user_agent: UNKNOWN.to_string(),
            ip: UNKNOWN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitter {
    pub name: String,
    pub session_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub timestamp: DateTime<Utc>,
    pub test_kind: TestKind,
    pub subject_name: String,
    pub sub_scores: [SubScore; 3],
    /// Rounded to two decimals.
    pub composite: f64,
    pub composite_int: Option<i64>,
    pub band: Option<f64>,
    pub category: Option<Category>,
    pub submission_id: Uuid,
    pub session_id: Uuid,
    pub metadata: ClientMetadata,
}
