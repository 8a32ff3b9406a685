use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse csv record {record}")]
    Parse {
        record: u64,
        #[source]
        source: csv::Error,
    },
    #[error("write csv")]
    Csv(#[from] csv::Error),
    #[error("write csv output")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
