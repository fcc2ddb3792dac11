use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning a file into a
/// [`LaunchTable`](super::model::LaunchTable).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON")]
    Json(#[from] serde_json::Error),

    #[error("malformed parquet file")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("unreadable Arrow record batch")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("dataset is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("row {row}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("column '{column}' has unsupported type {data_type}")]
    UnsupportedColumnType {
        column: &'static str,
        data_type: String,
    },

    #[error("{0}")]
    Malformed(String),
}

pub type Result<T, E = DatasetError> = std::result::Result<T, E>;
