use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown response kind: {name}")]
    UnknownKind { name: String },

    #[error("Invalid format config: {reason}")]
    InvalidConfig { reason: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;
