pub mod converter;
pub mod pipeline;

pub use crate::domain::model::{ConversionSummary, DatasetKind, OutputRow, Record};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
