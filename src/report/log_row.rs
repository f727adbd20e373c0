use serde_json::Value;

use crate::model::dimensions::TestKind;
use crate::model::record::ResultRecord;
use crate::report::{format_local_timestamp, format_utc_iso};

pub fn build_log_row(record: &ResultRecord) -> Vec<Value> {
    match record.test_kind {
        TestKind::Tpa => tpa_row(record),
        TestKind::Tbi => tbi_row(record),
    }
}

fn tpa_row(record: &ResultRecord) -> Vec<Value> {
    let mut row = vec![
        Value::from(format_local_timestamp(&record.timestamp)),
        Value::from(TestKind::Tpa.code()),
        Value::from(record.subject_name.as_str()),
    ];
    for sub in &record.sub_scores {
        row.push(Value::from(sub.raw));
    }
    row.push(Value::from(record.composite));
    row.push(Value::from(record.submission_id.to_string()));
    row
}

fn tbi_row(record: &ResultRecord) -> Vec<Value> {
    let mut row = vec![
        Value::from(format_utc_iso(&record.timestamp)),
        Value::from(TestKind::Tbi.code()),
        Value::from(record.subject_name.as_str()),
    ];
    for sub in &record.sub_scores {
        match sub.standard {
            Some(standard) => row.push(Value::from(standard)),
            None => row.push(Value::from(sub.raw)),
        }
    }
    row.push(Value::from(record.composite));
    row.push(record.band.map(Value::from).unwrap_or(Value::Null));
    row.push(
        record
            .category
            .map(|c| Value::from(c.label()))
            .unwrap_or(Value::Null),
    );
    row.push(Value::from(record.session_id.to_string()));
    row.push(Value::from(record.metadata.user_agent.as_str()));
    row.push(Value::from(record.metadata.ip.as_str()));
    row.push(Value::from(record.submission_id.to_string()));
    row
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/log_row.rs"]
mod tests;
