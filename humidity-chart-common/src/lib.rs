pub mod config;
pub use config::{ChartConfig, Config, ExportConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("format error: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[error("empty dataset: no records to chart")]
    EmptyDataset,
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
