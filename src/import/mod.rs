//! CSV vocabulary import
//!
//! Accepts the seed spreadsheet format: a header row naming the columns
//! `普通中文`, `客家汉字`, `Hakka Pronunciation`, and `English Definition`
//! (matched by name, not position), then one vocabulary entry per row.
//! Rows missing the Hakka characters or the pronunciation are dropped.

use csv::ReaderBuilder;
use thiserror::Error;

use crate::srs::models::CardContent;

pub const HEADER_MANDARIN: &str = "普通中文";
pub const HEADER_HAKKA_CHARS: &str = "客家汉字";
pub const HEADER_PRONUNCIATION: &str = "Hakka Pronunciation";
pub const HEADER_ENGLISH: &str = "English Definition";

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One accepted vocabulary row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabRow {
    pub mandarin: String,
    pub hakka_chars: String,
    pub pronunciation: String,
    pub english: String,
}

impl VocabRow {
    pub fn into_content(self) -> CardContent {
        CardContent {
            mandarin: self.mandarin,
            hakka_chars: self.hakka_chars,
            pronunciation: self.pronunciation,
            english: self.english,
        }
    }
}

/// Parse vocabulary rows out of CSV text.
///
/// Unknown columns are ignored; known columns that are absent read as
/// empty. Rows failing the `hakka_chars` + `pronunciation` requirement are
/// silently skipped, matching the seed loader this replaces.
pub fn parse_vocab_csv(text: &str) -> Result<Vec<VocabRow>, ImportError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let col = |name: &str| headers.iter().position(|h| h.trim() == name);
    let mandarin_col = col(HEADER_MANDARIN);
    let hakka_col = col(HEADER_HAKKA_CHARS);
    let pron_col = col(HEADER_PRONUNCIATION);
    let english_col = col(HEADER_ENGLISH);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or("")
                .trim()
                .to_string()
        };
        let row = VocabRow {
            mandarin: field(mandarin_col),
            hakka_chars: field(hakka_col),
            pronunciation: field(pron_col),
            english: field(english_col),
        };
        if row.hakka_chars.is_empty() || row.pronunciation.is_empty() {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "\
普通中文,客家汉字,Hakka Pronunciation,English Definition
水,水,sui3,water
累,悿,tiam3,tired
,缺,kiet4,
坏,,fai6,broken
";

    #[test]
    fn test_parse_seed_format() {
        let rows = parse_vocab_csv(SEED).unwrap();
        // The row without hakka_chars is dropped; empty mandarin/english pass
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            VocabRow {
                mandarin: "水".to_string(),
                hakka_chars: "水".to_string(),
                pronunciation: "sui3".to_string(),
                english: "water".to_string(),
            }
        );
        assert_eq!(rows[2].english, "");
    }

    #[test]
    fn test_columns_matched_by_name_not_position() {
        let reordered = "\
English Definition,Hakka Pronunciation,客家汉字
water,sui3,水
";
        let rows = parse_vocab_csv(reordered).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hakka_chars, "水");
        assert_eq!(rows[0].pronunciation, "sui3");
        assert_eq!(rows[0].english, "water");
        assert_eq!(rows[0].mandarin, "");
    }

    #[test]
    fn test_quoted_fields() {
        let csv = "\
客家汉字,Hakka Pronunciation,English Definition
字,\"sii6, ji6\",\"character, word\"
";
        let rows = parse_vocab_csv(csv).unwrap();
        assert_eq!(rows[0].pronunciation, "sii6, ji6");
        assert_eq!(rows[0].english, "character, word");
    }

    #[test]
    fn test_missing_required_columns_yields_nothing() {
        let csv = "a,b\n1,2\n";
        let rows = parse_vocab_csv(csv).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_into_content() {
        let rows = parse_vocab_csv(SEED).unwrap();
        let content = rows[1].clone().into_content();
        assert_eq!(content.hakka_chars, "悿");
        assert_eq!(content.pronunciation, "tiam3");
    }
}
