use crate::core::pipeline::DatasetPipeline;
use crate::core::{ConfigProvider, ConversionSummary, DatasetKind, OutputRow, Pipeline, Result, Storage};
use csv::{Terminator, Writer, WriterBuilder};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// 將單一資料集檔案逐行轉換成對應的 CSV
pub struct Converter<S: Storage, P: Pipeline> {
    storage: S,
    pipeline: P,
    input_path: String,
}

impl<S: Storage> Converter<S, DatasetPipeline> {
    /// 依檔名判斷資料集類型，無法判斷時在開啟任何檔案前回傳 `UnsupportedFileKind`
    pub fn from_config<C: ConfigProvider>(storage: S, config: &C) -> Result<Self> {
        let input_path = config.input_path();
        let pipeline = DatasetPipeline::for_filename(input_path)?;
        Ok(Self::new(storage, pipeline, input_path))
    }
}

impl<S: Storage, P: Pipeline> Converter<S, P> {
    pub fn new(storage: S, pipeline: P, input_path: impl Into<String>) -> Self {
        Self {
            storage,
            pipeline,
            input_path: input_path.into(),
        }
    }

    pub fn kind(&self) -> DatasetKind {
        self.pipeline.kind()
    }

    pub fn input_path(&self) -> &str {
        &self.input_path
    }

    pub fn output_path(&self) -> PathBuf {
        self.storage.output_path(&self.kind().output_file_name())
    }

    pub fn run(&self) -> Result<ConversionSummary> {
        let kind = self.kind();
        let output_name = kind.output_file_name();
        let output_path = self.output_path();

        // 先開啟輸入檔，輸入不存在時不會覆蓋既有的 CSV
        let reader = self.storage.open_input(&self.input_path)?;
        let mut writer = csv_writer(self.storage.create_output(&output_name)?);

        tracing::debug!(
            "Converting {} to {} ...",
            self.input_path,
            output_path.display()
        );

        let mut summary = ConversionSummary {
            kind,
            output_path,
            lines_read: 0,
            rows_written: 0,
            rows_skipped: 0,
        };

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            summary.lines_read += 1;

            let record = self.pipeline.extract(index + 1, &line)?;
            match self.pipeline.transform(record) {
                Some(row) => {
                    write_row(&mut writer, &row)?;
                    summary.rows_written += 1;
                }
                None => summary.rows_skipped += 1,
            }
        }

        writer.flush()?;

        tracing::debug!(
            "Wrote {} {} rows ({} read, {} skipped)",
            summary.rows_written,
            kind,
            summary.lines_read,
            summary.rows_skipped
        );

        Ok(summary)
    }
}

/// 無標題列、逗號分隔、以 `\n` 結尾
fn csv_writer<W: Write>(inner: W) -> Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(inner)
}

fn write_row<W: Write>(writer: &mut Writer<W>, row: &OutputRow) -> Result<()> {
    match row {
        OutputRow::Review(review) => writer.serialize(review)?,
        OutputRow::User(user) => writer.serialize(user)?,
        OutputRow::Business(business) => writer.serialize(business)?,
    }
    Ok(())
}
