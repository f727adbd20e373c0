use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    C1,
    B2,
    B1,
    A2,
    OutOfRange,
}

/// Inclusive ranges, evaluated in this order.
const CATEGORY_RANGES: [(i64, i64, Category); 4] = [
    (627, 677, Category::C1),
    (543, 626, Category::B2),
    (460, 542, Category::B1),
    (310, 459, Category::A2),
];

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::C1 => "C1 : Effective Operational Proficiency / Advanced (Proficient User)",
            Category::B2 => "B2 : Vantage / Upper Intermediate (Independent User)",
            Category::B1 => "B1 : Threshold/Intermediate (Independent User)",
            Category::A2 => "A2: Waystage / Elementary (Basic User)",
            Category::OutOfRange => "Skor tidak termasuk dalam kategori yang diberikan",
        }
    }
}

pub fn classify(composite: i64) -> Category {
    for &(low, high, category) in &CATEGORY_RANGES {
        if low <= composite && composite <= high {
            return category;
        }
    }
    Category::OutOfRange
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/categories.rs"]
mod tests;
