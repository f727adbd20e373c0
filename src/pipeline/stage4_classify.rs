use crate::model::bands::BandTable;
use crate::model::categories::{Category, classify};
use crate::model::dimensions::TestKind;
use crate::pipeline::stage3_aggregate::Composite;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage4Output {
    pub band: Option<f64>,
    pub category: Option<Category>,
}

pub fn run_stage4(kind: TestKind, composite: &Composite, bands: &BandTable) -> Stage4Output {
    match kind {
        TestKind::Tpa => Stage4Output {
            band: None,
            category: None,
        },
        TestKind::Tbi => {
            let band = bands.estimate(composite.integral);
            let category = classify(composite.integral);
            if !bands.is_scored(band) {
                tracing::debug!("composite {} is below the lowest band", composite.integral);
            }
            Stage4Output {
                band: Some(band),
                category: Some(category),
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_classify.rs"]
mod tests;
