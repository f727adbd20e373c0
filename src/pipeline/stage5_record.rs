use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::record::{ClientMetadata, ResultRecord, Submitter};
use crate::pipeline::Computation;

#[derive(Debug, Clone)]
pub struct Stage5Inputs<'a> {
    pub computation: &'a Computation,
    pub submitter: &'a Submitter,
    pub metadata: ClientMetadata,
    pub timestamp: DateTime<Utc>,
    pub submission_id: Uuid,
}

pub fn run_stage5(inputs: Stage5Inputs<'_>) -> ResultRecord {
    let computation = inputs.computation;
    ResultRecord {
        timestamp: inputs.timestamp,
        test_kind: computation.raw.kind,
        subject_name: inputs.submitter.name.clone(),
        sub_scores: computation.sub_scores.clone(),
        composite: computation.composite.rounded,
        composite_int: computation
            .classification
            .band
            .map(|_| computation.composite.integral),
        band: computation.classification.band,
        category: computation.classification.category,
        submission_id: inputs.submission_id,
        session_id: inputs.submitter.session_id,
        metadata: inputs.metadata,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_record.rs"]
mod tests;
