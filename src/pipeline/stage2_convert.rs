use crate::error::ScoreError;
use crate::model::dimensions::TestKind;
use crate::model::record::SubScore;
use crate::model::tables::ConversionTables;
use crate::pipeline::stage1_parse::ParsedSubmission;

#[derive(Debug, Clone, PartialEq)]
pub enum Stage2Output {
    /// TPA raw scores enter the composite unchanged.
    Raw([SubScore; 3]),
    /// TBI scores with their table outputs (listening, structure, reading).
    Converted {
        sub_scores: [SubScore; 3],
        standard: [u32; 3],
    },
}

impl Stage2Output {
    pub fn sub_scores(&self) -> &[SubScore; 3] {
        match self {
            Stage2Output::Raw(sub_scores) => sub_scores,
            Stage2Output::Converted { sub_scores, .. } => sub_scores,
        }
    }
}

pub fn run_stage2(
    parsed: &ParsedSubmission,
    tables: &ConversionTables,
) -> Result<Stage2Output, ScoreError> {
    let values = parsed.values;
    match parsed.kind {
        TestKind::Tpa => Ok(Stage2Output::Raw(
            values.map(|(dimension, raw)| SubScore::raw(dimension, raw)),
        )),
        TestKind::Tbi => {
            let mut standard = [0u32; 3];
            for (slot, &(dimension, raw)) in standard.iter_mut().zip(values.iter()) {
                *slot = tables.lookup(dimension, raw)?;
            }
            let [(d0, r0), (d1, r1), (d2, r2)] = values;
            Ok(Stage2Output::Converted {
                sub_scores: [
                    SubScore::converted(d0, r0, standard[0]),
                    SubScore::converted(d1, r1, standard[1]),
                    SubScore::converted(d2, r2, standard[2]),
                ],
                standard,
            })
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_convert.rs"]
mod tests;
