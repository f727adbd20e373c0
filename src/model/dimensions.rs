use std::str::FromStr;

use serde::Serialize;

use crate::error::ScoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TestKind {
    #[serde(rename = "TPA")]
    Tpa,
    #[serde(rename = "TBI")]
    Tbi,
}

impl TestKind {
    pub fn code(self) -> &'static str {
        match self {
            TestKind::Tpa => "TPA",
            TestKind::Tbi => "TBI",
        }
    }

    pub fn dimensions(self) -> [Dimension; 3] {
        match self {
            TestKind::Tpa => [Dimension::Verbal, Dimension::Numerical, Dimension::Figural],
            TestKind::Tbi => [
                Dimension::Listening,
                Dimension::Structure,
                Dimension::Reading,
            ],
        }
    }
}

impl FromStr for TestKind {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TPA" => Ok(TestKind::Tpa),
            "TBI" => Ok(TestKind::Tbi),
            _ => Err(ScoreError::UnrecognizedTestKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dimension {
    Verbal,
    Numerical,
    Figural,
    Listening,
    Structure,
    Reading,
}

impl Dimension {
    /// Row label used on the printed result document.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Verbal => "Verbal",
            Dimension::Numerical => "Numerikal",
            Dimension::Figural => "Figural",
            Dimension::Listening => "Listening",
            Dimension::Structure => "Structure",
            Dimension::Reading => "Reading",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/dimensions.rs"]
mod tests;
