use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

/// 本機檔案存儲：輸入檔依原路徑開啟，輸出檔寫入 `base_path` 之下
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    type Reader = BufReader<File>;
    type Writer = File;

    fn open_input(&self, path: &str) -> Result<Self::Reader> {
        let file = File::open(path)?;
        Ok(BufReader::new(file))
    }

    fn output_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    fn create_output(&self, name: &str) -> Result<Self::Writer> {
        let full_path = self.output_path(name);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        Ok(File::create(full_path)?)
    }
}
