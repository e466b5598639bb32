use crate::core::{DatasetKind, OutputRow, Pipeline, Record};
use crate::domain::model::{BusinessRow, UserRow};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;

/// 類別中包含此字串的商家才會輸出
pub const RESTAURANT_CATEGORY: &str = "Restaurants";

/// 移除所有非 7-bit ASCII 字元
pub fn ascii_transliterate(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

#[derive(Debug, Clone, Copy)]
pub struct DatasetPipeline {
    kind: DatasetKind,
}

impl DatasetPipeline {
    pub fn new(kind: DatasetKind) -> Self {
        Self { kind }
    }

    pub fn for_filename(filename: &str) -> Result<Self> {
        DatasetKind::from_filename(filename)
            .map(Self::new)
            .ok_or_else(|| EtlError::UnsupportedFileKind {
                filename: filename.to_string(),
            })
    }
}

impl Pipeline for DatasetPipeline {
    fn kind(&self) -> DatasetKind {
        self.kind
    }

    fn extract(&self, line_number: usize, line: &str) -> Result<Record> {
        // 先解析成 Value：重複的鍵以最後一個值為準
        let parsed = serde_json::from_str::<Value>(line).and_then(|value| match self.kind {
            DatasetKind::Review => serde_json::from_value(value).map(Record::Review),
            DatasetKind::User => serde_json::from_value(value).map(Record::User),
            DatasetKind::Business => serde_json::from_value(value).map(Record::Business),
        });

        parsed.map_err(|source| EtlError::MalformedRecord {
            line: line_number,
            source,
        })
    }

    fn transform(&self, record: Record) -> Option<OutputRow> {
        match record {
            Record::Review(row) => Some(OutputRow::Review(row)),
            Record::User(row) => Some(OutputRow::User(UserRow {
                name: ascii_transliterate(&row.name),
                ..row
            })),
            Record::Business(row) => {
                if !row.categories.contains(RESTAURANT_CATEGORY) {
                    tracing::trace!("Skipping non-restaurant business {}", row.business_id);
                    return None;
                }

                Some(OutputRow::Business(BusinessRow {
                    city: ascii_transliterate(&row.city),
                    name: ascii_transliterate(&row.name),
                    ..row
                }))
            }
        }
    }
}
