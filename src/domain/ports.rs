use crate::domain::model::{DatasetKind, OutputRow, Record};
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub trait Storage {
    type Reader: BufRead;
    type Writer: Write;

    fn open_input(&self, path: &str) -> Result<Self::Reader>;
    fn output_path(&self, name: &str) -> PathBuf;
    /// 建立輸出檔，既有檔案會被截斷
    fn create_output(&self, name: &str) -> Result<Self::Writer>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
}

pub trait Pipeline {
    fn kind(&self) -> DatasetKind;
    /// 解析一行輸入；`line_number` 從 1 起算，僅用於錯誤訊息
    fn extract(&self, line_number: usize, line: &str) -> Result<Record>;
    /// 記錄被過濾時回傳 `None`
    fn transform(&self, record: Record) -> Option<OutputRow>;
}
