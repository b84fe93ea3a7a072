// crates/coolcalc-core/src/error.rs

use thiserror::Error;

use crate::records::RecordId;

#[derive(Error, Debug)]
pub enum CoolCalcError {
    #[error("unknown room category '{0}'")]
    UnknownCategory(String),

    #[error("record limit of {limit} reached")]
    RecordLimitReached { limit: usize },

    #[error("no record with id {0}")]
    RecordNotFound(RecordId),

    #[error("nothing to export: the record list is empty")]
    EmptyExport,

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration file is invalid: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CoolCalcError>;
