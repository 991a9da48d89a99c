use crate::error::DepthError;

/// Depth limits the REST endpoint accepts.
const REST_LIMITS: &[&str] = &["5", "10", "20", "50", "100", "500", "1000", "5000"];
/// Partial-book stream variants only exist at these levels.
const STREAM_LIMITS: &[&str] = &["5", "10", "20"];

const DEFAULT_LIMIT: &str = "10";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Rest,
    Stream,
}

impl Transport {
    pub fn allowed_limits(self) -> &'static [&'static str] {
        match self {
            Self::Rest => REST_LIMITS,
            Self::Stream => STREAM_LIMITS,
        }
    }
}

/// An empty limit falls back to the default without a set lookup.
pub fn validate_limit(limit: &str, transport: Transport) -> Result<String, DepthError> {
    if limit.is_empty() {
        return Ok(DEFAULT_LIMIT.to_string());
    }
    if transport.allowed_limits().contains(&limit) {
        Ok(limit.to_string())
    } else {
        Err(DepthError::InvalidLimit(transport))
    }
}

pub fn validate_symbol(symbol: &str) -> Result<(), DepthError> {
    if symbol.is_empty() {
        return Err(DepthError::MissingSymbol);
    }
    Ok(())
}
