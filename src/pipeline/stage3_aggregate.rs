use crate::pipeline::stage2_convert::Stage2Output;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composite {
    pub exact: f64,
    /// Two-decimal value used for display and storage.
    pub rounded: f64,
    /// Nearest integer of `exact`; only TBI thresholds consume it.
    pub integral: i64,
}

impl Composite {
    pub fn from_exact(exact: f64) -> Self {
        Self {
            exact,
            rounded: round2(exact),
            integral: exact.round() as i64,
        }
    }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn tpa_composite(verbal: f64, numerical: f64, figural: f64) -> f64 {
    let mean = (verbal + numerical + figural) / 3.0;
    ((mean / 100.0) * 600.0) + 200.0
}

pub fn tbi_composite(listening: u32, structure: u32, reading: u32) -> f64 {
    let sum = f64::from(listening) + f64::from(structure) + f64::from(reading);
    sum / 3.0 * 10.0
}

pub fn run_stage3(converted: &Stage2Output) -> Composite {
    let exact = match converted {
        Stage2Output::Raw([verbal, numerical, figural]) => {
            tpa_composite(verbal.raw, numerical.raw, figural.raw)
        }
        Stage2Output::Converted {
            standard: [listening, structure, reading],
            ..
        } => tbi_composite(*listening, *structure, *reading),
    };
    if !exact.is_finite() {
        tracing::warn!("composite overflowed to {}; raw scores are out of range", exact);
    }
    Composite::from_exact(exact)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_aggregate.rs"]
mod tests;
