use crate::error::ScoreError;
use crate::model::dimensions::{Dimension, TestKind};
use crate::model::raw::parse_raw;

/// Free-text fields exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSubmission {
    pub kind: TestKind,
    pub name: String,
    pub fields: [String; 3],
}

impl RawSubmission {
    pub fn new(kind: TestKind, name: impl Into<String>, fields: [&str; 3]) -> Self {
        Self {
            kind,
            name: name.into(),
            fields: fields.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSubmission {
    pub kind: TestKind,
    pub name: String,
    pub values: [(Dimension, f64); 3],
}

pub fn run_stage1(raw: &RawSubmission) -> Result<ParsedSubmission, ScoreError> {
    let dimensions = raw.kind.dimensions();
    let mut values = [(dimensions[0], 0.0); 3];
    for (slot, (dimension, text)) in values
        .iter_mut()
        .zip(dimensions.iter().zip(raw.fields.iter()))
    {
        *slot = (*dimension, parse_raw(dimension.label(), text)?);
    }

    if raw.kind == TestKind::Tpa {
        for (dimension, value) in &values {
            if !(0.0..=100.0).contains(value) {
                tracing::warn!(
                    "{} score {} is outside the expected 0-100 range",
                    dimension.label(),
                    value
                );
            }
        }
    }

    Ok(ParsedSubmission {
        kind: raw.kind,
        name: raw.name.clone(),
        values,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_parse.rs"]
mod tests;
