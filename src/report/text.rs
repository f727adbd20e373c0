use crate::error::RenderError;
use crate::model::dimensions::TestKind;
use crate::model::record::ResultRecord;
use crate::report::{DocumentRenderer, format_local_timestamp, format_score};

pub const DEFAULT_ORGANIZATION: &str = "Pusbin JFPM";
pub const PAGE_WIDTH: usize = 80;
const CELL_WIDTH: usize = 24;
const TABLE_WIDTH: usize = CELL_WIDTH * 2 + 3;

const DISCLAIMER: [&str; 2] = [
    "Note : hasil tes ini bersifat try out, tidak dapat digunakan untuk mengikuti",
    "       seleksi beasiswa apapun",
];

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

/// Single-page, fixed-width rendering of a result record.
#[derive(Debug, Clone)]
pub struct TextDocumentRenderer {
    pub organization: String,
    pub width: usize,
}

impl Default for TextDocumentRenderer {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_string(),
            width: PAGE_WIDTH,
        }
    }
}

impl TextDocumentRenderer {
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            width: PAGE_WIDTH,
        }
    }

    pub fn render_text(&self, record: &ResultRecord) -> Result<String, RenderError> {
        if self.width < TABLE_WIDTH {
            return Err(RenderError::Layout(format!(
                "page width {} is narrower than the score table ({})",
                self.width, TABLE_WIDTH
            )));
        }

        let mut out = String::new();
        let printed = format!("Dicetak: {}", format_local_timestamp(&record.timestamp));
        out.push_str(&align(&printed, self.width, Align::Right));
        out.push('\n');
        out.push_str(&align("Nilai Tes Anda", self.width, Align::Center));
        out.push_str("\n\n");
        out.push_str(&format!("Nama: {}\n\n", record.subject_name));

        let value_header = match record.test_kind {
            TestKind::Tpa => "Nilai",
            TestKind::Tbi => "Nilai Konversi",
        };
        out.push_str(&rule());
        out.push_str(&row("Subtest", Align::Center, value_header));
        out.push_str(&rule());
        for sub in &record.sub_scores {
            let value = match sub.standard {
                Some(standard) => standard.to_string(),
                None => format_score(sub.raw),
            };
            out.push_str(&row(sub.dimension.label(), Align::Left, &value));
        }
        let composite_label = match record.test_kind {
            TestKind::Tpa => "Skor TPA",
            TestKind::Tbi => "Skor TBI (TOEFL)",
        };
        out.push_str(&row(
            composite_label,
            Align::Left,
            &format_score(record.composite),
        ));
        out.push_str(&rule());

        if record.test_kind == TestKind::Tbi {
            let band = record
                .band
                .map(format_score)
                .unwrap_or_else(|| "None".to_string());
            out.push_str(&format!("Perkiraan IELTS: {}\n", band));
            if let Some(category) = record.category {
                out.push_str(&format!("Kategori : {}\n", category.label()));
            }
        }

        out.push('\n');
        for line in DISCLAIMER {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("\n\n");
        out.push_str(&align("Best Regards,", self.width, Align::Center));
        out.push('\n');
        out.push_str(&align(&self.organization, self.width, Align::Center));
        out.push('\n');

        Ok(out)
    }
}

impl DocumentRenderer for TextDocumentRenderer {
    fn render(&self, record: &ResultRecord) -> Result<Vec<u8>, RenderError> {
        self.render_text(record).map(String::into_bytes)
    }
}

/// On-screen summary of the most recent result.
pub fn render_last_result(record: &ResultRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("Hasil Terakhir ({})\n", record.test_kind.code()));
    out.push_str(&format!("Nama: {}\n", record.subject_name));
    match record.test_kind {
        TestKind::Tpa => {
            out.push_str(&format!(
                "Nilai TPA Anda Adalah= {}\n",
                format_score(record.composite)
            ));
        }
        TestKind::Tbi => {
            out.push_str(&format!(
                "Perkiraan TOEFL: {}\n",
                format_score(record.composite)
            ));
            if let Some(band) = record.band {
                out.push_str(&format!("Perkiraan IELTS: {}\n", format_score(band)));
            }
            if let Some(category) = record.category {
                out.push_str(&format!("Kategori CEFR: {}\n", category.label()));
            }
        }
    }
    out
}

fn rule() -> String {
    format!("+{}+{}+\n", "-".repeat(CELL_WIDTH), "-".repeat(CELL_WIDTH))
}

fn row(label: &str, label_align: Align, value: &str) -> String {
    format!(
        "|{}|{}|\n",
        align(&format!(" {} ", label), CELL_WIDTH, label_align),
        align(value, CELL_WIDTH, Align::Center)
    )
}

fn align(text: &str, width: usize, how: Align) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    match how {
        Align::Left => format!("{}{}", text, " ".repeat(pad)),
        Align::Right => format!("{}{}", " ".repeat(pad), text),
        Align::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
