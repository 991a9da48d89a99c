use thiserror::Error;

use crate::validate::Transport;

#[derive(Debug, Error)]
pub enum DepthError {
    #[error("incorrect value for limit. Valid limits: [{}]", .0.allowed_limits().join(", "))]
    InvalidLimit(Transport),

    #[error("symbol cannot be empty")]
    MissingSymbol,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode depth payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("exchange error: {0}")]
    Exchange(String),
}
