use crate::error::ScoreError;
use crate::model::dimensions::Dimension;

const LISTENING_STANDARD: [u32; 51] = [
    31, 32, 32, 33, 34, 35, 35, 36, 37, 38, 38, 39, 40, 41, 41, 42, 43, 44, 44, 45, 46, 47, 47, 48,
    49, 50, 50, 51, 52, 52, 53, 54, 55, 55, 56, 57, 58, 58, 59, 60, 61, 61, 62, 63, 64, 64, 65, 66,
    67, 67, 68,
];

const STRUCTURE_STANDARD: [u32; 41] = [
    31, 32, 33, 34, 35, 36, 37, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 50, 51, 52,
    53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 62, 63, 64, 65, 66, 67, 68,
];

const READING_STANDARD: [u32; 51] = [
    31, 32, 32, 33, 34, 35, 35, 36, 37, 37, 38, 39, 40, 40, 41, 42, 43, 43, 44, 45, 45, 46, 47, 48,
    48, 49, 50, 50, 51, 52, 53, 53, 54, 55, 55, 56, 57, 58, 58, 59, 60, 61, 61, 62, 63, 63, 64, 65,
    66, 66, 67,
];

/// Raw-to-standard lookup for one sub-test. Raw keys are strictly increasing.
#[derive(Debug, Clone)]
pub struct ConversionTable {
    pub dimension: Dimension,
    entries: Vec<(f64, u32)>,
}

impl ConversionTable {
    pub fn from_steps(dimension: Dimension, step: f64, standard: &[u32]) -> Self {
        let entries = standard
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as f64 * step, s))
            .collect::<Vec<_>>();
        Self { dimension, entries }
    }

    /// Exact key match, else the nearest key. Equidistant queries resolve to
    /// the lower raw key.
    pub fn lookup(&self, raw: f64) -> Result<u32, ScoreError> {
        let mut best: Option<(f64, u32)> = None;
        for &(key, standard) in &self.entries {
            if key == raw {
                return Ok(standard);
            }
            let diff = (key - raw).abs();
            match best {
                Some((best_diff, _)) if best_diff <= diff => {}
                _ => best = Some((diff, standard)),
            }
        }
        best.map(|(_, standard)| standard)
            .ok_or_else(|| ScoreError::EmptyTable(self.dimension.label().to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct ConversionTables {
    pub listening: ConversionTable,
    pub structure: ConversionTable,
    pub reading: ConversionTable,
}

impl ConversionTables {
    pub fn builtin_v1() -> Self {
        Self {
            listening: ConversionTable::from_steps(Dimension::Listening, 2.0, &LISTENING_STANDARD),
            structure: ConversionTable::from_steps(Dimension::Structure, 2.5, &STRUCTURE_STANDARD),
            reading: ConversionTable::from_steps(Dimension::Reading, 2.0, &READING_STANDARD),
        }
    }

    pub fn table(&self, dimension: Dimension) -> Result<&ConversionTable, ScoreError> {
        match dimension {
            Dimension::Listening => Ok(&self.listening),
            Dimension::Structure => Ok(&self.structure),
            Dimension::Reading => Ok(&self.reading),
            other => Err(ScoreError::UnrecognizedDimension(
                other.label().to_string(),
            )),
        }
    }

    /// Dimensions without a table are rejected before the value is looked at.
    pub fn lookup(&self, dimension: Dimension, raw: f64) -> Result<u32, ScoreError> {
        self.table(dimension)?.lookup(raw)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tables.rs"]
mod tests;
