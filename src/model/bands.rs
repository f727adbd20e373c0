#[derive(Debug, Clone)]
pub struct BandTable {
    /// (minimum composite, band), highest minimum first.
    pub thresholds: Vec<(i64, f64)>,
    pub floor: f64,
}

impl BandTable {
    pub fn ielts_v1() -> Self {
        Self {
            thresholds: vec![
                (660, 9.0),
                (640, 8.5),
                (620, 8.0),
                (600, 7.5),
                (580, 7.0),
                (560, 6.5),
                (540, 6.0),
                (520, 5.5),
                (500, 5.0),
                (480, 4.5),
                (460, 4.0),
                (440, 3.5),
                (310, 3.0),
            ],
            floor: 0.0,
        }
    }

    pub fn estimate(&self, composite: i64) -> f64 {
        for &(minimum, band) in &self.thresholds {
            if composite >= minimum {
                return band;
            }
        }
        self.floor
    }

    pub fn is_scored(&self, band: f64) -> bool {
        band > self.floor
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/bands.rs"]
mod tests;
