use super::*;
use crate::model::categories::Category;
use crate::model::dimensions::Dimension;
use crate::model::record::{ClientMetadata, SubScore};
use chrono::Utc;
use uuid::Uuid;

fn record(kind: TestKind) -> ResultRecord {
    let (sub_scores, composite, band, category) = match kind {
        TestKind::Tpa => (
            [
                SubScore::raw(Dimension::Verbal, 80.0),
                SubScore::raw(Dimension::Numerical, 70.0),
                SubScore::raw(Dimension::Figural, 90.0),
            ],
            680.0,
            None,
            None,
        ),
        TestKind::Tbi => (
            [
                SubScore::converted(Dimension::Listening, 0.0, 31),
                SubScore::converted(Dimension::Structure, 0.0, 31),
                SubScore::converted(Dimension::Reading, 0.0, 31),
            ],
            310.0,
            Some(3.0),
            Some(Category::A2),
        ),
    };
    ResultRecord {
        timestamp: Utc::now(),
        test_kind: kind,
        subject_name: "Gita".to_string(),
        sub_scores,
        composite,
        composite_int: band.map(|_| composite as i64),
        band,
        category,
        submission_id: Uuid::new_v4(),
        session_id: Uuid::new_v4(),
        metadata: ClientMetadata::unknown(),
    }
}

#[test]
fn test_tpa_document_layout() {
    let text = TextDocumentRenderer::default()
        .render_text(&record(TestKind::Tpa))
        .unwrap();
    let lines = text.lines().collect::<Vec<_>>();
    assert!(lines[0].trim_start().starts_with("Dicetak: "));
    assert_eq!(lines[0].len(), PAGE_WIDTH);
    assert_eq!(lines[1].trim(), "Nilai Tes Anda");
    assert!(text.contains("Nama: Gita\n"));
    assert!(text.contains("Nilai"));
    assert!(!text.contains("Nilai Konversi"));
    assert!(text.contains(" Verbal "));
    assert!(text.contains(" Numerikal "));
    assert!(text.contains("80.0"));
    assert!(text.contains(" Skor TPA "));
    assert!(text.contains("680.0"));
    assert!(!text.contains("Perkiraan IELTS"));
    assert!(text.contains("Note : hasil tes ini bersifat try out"));
    assert!(text.contains("seleksi beasiswa apapun"));
    assert_eq!(lines.last().map(|l| l.trim()), Some(DEFAULT_ORGANIZATION));
}

#[test]
fn test_tbi_document_has_band_and_category() {
    let text = TextDocumentRenderer::new("Panitia Seleksi")
        .render_text(&record(TestKind::Tbi))
        .unwrap();
    assert!(text.contains("Nilai Konversi"));
    assert!(text.contains(" Skor TBI (TOEFL) "));
    assert!(text.contains("310.0"));
    assert!(text.contains("Perkiraan IELTS: 3.0\n"));
    assert!(text.contains("Kategori : A2: Waystage / Elementary (Basic User)\n"));
    assert!(text.contains("Panitia Seleksi"));

    let listening = text.lines().position(|l| l.contains(" Listening ")).unwrap();
    let structure = text.lines().position(|l| l.contains(" Structure ")).unwrap();
    let reading = text.lines().position(|l| l.contains(" Reading ")).unwrap();
    let composite = text.lines().position(|l| l.contains("Skor TBI")).unwrap();
    let band = text.lines().position(|l| l.starts_with("Perkiraan IELTS")).unwrap();
    assert!(listening < structure && structure < reading);
    assert!(reading < composite && composite < band);
}

#[test]
fn test_table_rows_share_width() {
    let text = TextDocumentRenderer::default()
        .render_text(&record(TestKind::Tbi))
        .unwrap();
    let widths = text
        .lines()
        .filter(|l| l.starts_with('|') || l.starts_with('+'))
        .map(|l| l.chars().count())
        .collect::<Vec<_>>();
    assert_eq!(widths.len(), 8);
    assert!(widths.iter().all(|&w| w == widths[0]));
}

#[test]
fn test_narrow_page_is_a_layout_error() {
    let renderer = TextDocumentRenderer {
        organization: "X".to_string(),
        width: 20,
    };
    let err = renderer.render(&record(TestKind::Tpa)).unwrap_err();
    assert!(matches!(err, RenderError::Layout(_)));
}

#[test]
fn test_last_result_view() {
    let tbi = render_last_result(&record(TestKind::Tbi));
    assert!(tbi.contains("Nama: Gita"));
    assert!(tbi.contains("Perkiraan TOEFL: 310.0"));
    assert!(tbi.contains("Perkiraan IELTS: 3.0"));
    assert!(tbi.contains("Kategori CEFR: A2"));

    let tpa = render_last_result(&record(TestKind::Tpa));
    assert!(tpa.contains("Nilai TPA Anda Adalah= 680.0"));
    assert!(!tpa.contains("IELTS"));
}
