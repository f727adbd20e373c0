use super::*;
use crate::model::categories::Category;
use crate::model::dimensions::Dimension;
use crate::model::record::{ClientMetadata, SubScore};
use chrono::{TimeZone, Utc};
use uuid::Uuid;

fn tbi_record() -> ResultRecord {
    ResultRecord {
        timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        test_kind: TestKind::Tbi,
        subject_name: "Fajar".to_string(),
        sub_scores: [
            SubScore::converted(Dimension::Listening, 100.0, 68),
            SubScore::converted(Dimension::Structure, 100.0, 68),
            SubScore::converted(Dimension::Reading, 100.0, 67),
        ],
        composite: 676.67,
        composite_int: Some(677),
        band: Some(9.0),
        category: Some(Category::C1),
        submission_id: Uuid::from_u128(2),
        session_id: Uuid::from_u128(1),
        metadata: ClientMetadata {
            user_agent: "curl/8".to_string(),
            ip: "192.0.2.7".to_string(),
        },
    }
}

#[test]
fn test_tbi_row_order() {
    let row = build_log_row(&tbi_record());
    assert_eq!(row.len(), 13);
    assert_eq!(row[0], "2025-06-01T12:00:00.000000");
    assert_eq!(row[1], "TBI");
    assert_eq!(row[2], "Fajar");
    assert_eq!(row[3], 68);
    assert_eq!(row[4], 68);
    assert_eq!(row[5], 67);
    assert_eq!(row[6], 676.67);
    assert_eq!(row[7], 9.0);
    assert_eq!(row[8], Category::C1.label());
    assert_eq!(row[9], Uuid::from_u128(1).to_string().as_str());
    assert_eq!(row[10], "curl/8");
    assert_eq!(row[11], "192.0.2.7");
    assert_eq!(row[12], Uuid::from_u128(2).to_string().as_str());
}

#[test]
fn test_tpa_row_order() {
    let mut record = tbi_record();
    record.test_kind = TestKind::Tpa;
    record.sub_scores = [
        SubScore::raw(Dimension::Verbal, 80.0),
        SubScore::raw(Dimension::Numerical, 70.0),
        SubScore::raw(Dimension::Figural, 90.5),
    ];
    record.composite = 681.0;
    record.composite_int = None;
    record.band = None;
    record.category = None;

    let row = build_log_row(&record);
    assert_eq!(row.len(), 8);
    assert_eq!(row[1], "TPA");
    assert_eq!(row[2], "Fajar");
    assert_eq!(row[3], 80.0);
    assert_eq!(row[4], 70.0);
    assert_eq!(row[5], 90.5);
    assert_eq!(row[6], 681.0);
    assert_eq!(row[7], Uuid::from_u128(2).to_string().as_str());
    assert_eq!(row[0].as_str().map(str::len), Some(19));
}
