pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::LocalStorage;
pub use core::{converter::Converter, pipeline::DatasetPipeline};
pub use domain::model::{ConversionSummary, DatasetKind, OutputRow, Record};
pub use utils::error::{EtlError, Result};
