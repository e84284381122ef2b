//! Error types for `hallazgo-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown report status: {0:?}")]
  UnknownReportStatus(String),

  #[error("unknown task status: {0:?}")]
  UnknownTaskStatus(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
