pub mod log_row;
pub mod text;

use chrono::{DateTime, Local, Utc};

use crate::error::RenderError;
use crate::model::record::ResultRecord;

pub trait DocumentRenderer {
    fn render(&self, record: &ResultRecord) -> Result<Vec<u8>, RenderError>;
}

/// Integral values keep one decimal (`80.0`), others print in shortest form.
pub fn format_score(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

pub fn format_local_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

pub fn format_utc_iso(ts: &DateTime<Utc>) -> String {
    ts.naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
