use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;
use std::path::PathBuf;

/// 支援的三種 Yelp academic dataset 檔案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Review,
    User,
    Business,
}

impl DatasetKind {
    /// 判斷順序：檔名中第一個出現的類型優先
    pub const ALL: [DatasetKind; 3] = [DatasetKind::Review, DatasetKind::User, DatasetKind::Business];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Review => "review",
            DatasetKind::User => "user",
            DatasetKind::Business => "business",
        }
    }

    /// 以子字串比對原始檔名判斷資料集類型
    ///
    /// 同時包含 `user` 與 `review` 的檔名視為 review 檔
    pub fn from_filename(filename: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| filename.contains(kind.as_str()))
    }

    pub fn output_file_name(&self) -> String {
        format!("yelp_academic_dataset_{}.csv", self.as_str())
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRow {
    pub user_id: String,
    pub business_id: String,
    pub stars: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRow {
    pub user_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRow {
    pub business_id: String,
    pub city: String,
    pub name: String,
    pub categories: Categories,
    pub review_count: Number,
    pub stars: Number,
}

/// 商家類別：可能是逗號分隔的字串或字串陣列，序列化時輸出文字形式
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Categories(Value);

impl Categories {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// 過濾與 CSV 欄位共用的文字形式
    pub fn as_text(&self) -> String {
        match &self.0 {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.as_text().contains(needle)
    }
}

impl Serialize for Categories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_text())
    }
}

/// 解析後的一行輸入，依資料集分型
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Review(ReviewRow),
    User(UserRow),
    Business(BusinessRow),
}

/// 待寫入的一列 CSV
#[derive(Debug, Clone, PartialEq)]
pub enum OutputRow {
    Review(ReviewRow),
    User(UserRow),
    Business(BusinessRow),
}

#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub kind: DatasetKind,
    pub output_path: PathBuf,
    pub lines_read: usize,
    pub rows_written: usize,
    pub rows_skipped: usize,
}
