pub mod stage1_parse;
pub mod stage2_convert;
pub mod stage3_aggregate;
pub mod stage4_classify;
pub mod stage5_record;
pub mod stage6_deliver;

use crate::error::ScoreError;
use crate::model::bands::BandTable;
use crate::model::record::SubScore;
use crate::model::tables::ConversionTables;
use stage1_parse::{RawSubmission, run_stage1};
use stage2_convert::run_stage2;
use stage3_aggregate::{Composite, run_stage3};
use stage4_classify::{Stage4Output, run_stage4};

#[derive(Debug, Clone)]
pub struct ScoringProfile {
    pub tables: ConversionTables,
    pub bands: BandTable,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            tables: ConversionTables::builtin_v1(),
            bands: BandTable::ielts_v1(),
        }
    }
}

/// Everything derived from one submission before any collaborator is touched.
#[derive(Debug, Clone)]
pub struct Computation {
    pub raw: RawSubmission,
    pub sub_scores: [SubScore; 3],
    pub composite: Composite,
    pub classification: Stage4Output,
}

pub fn compute(raw: &RawSubmission, profile: &ScoringProfile) -> Result<Computation, ScoreError> {
    let parsed = run_stage1(raw)?;
    let converted = run_stage2(&parsed, &profile.tables)?;
    let composite = run_stage3(&converted);
    let classification = run_stage4(parsed.kind, &composite, &profile.bands);
    Ok(Computation {
        raw: raw.clone(),
        sub_scores: converted.sub_scores().clone(),
        composite,
        classification,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
