//! Battle errors.

use pokebattle_domain::DomainError;

use crate::infrastructure::ports::GatewayError;

/// Any of these aborts the battle; recorded rounds are discarded.
#[derive(Debug, thiserror::Error)]
pub enum RunBattleError {
    #[error("Upstream error: {0}")]
    Gateway(#[from] GatewayError),
    #[error("Invalid battle data: {0}")]
    Domain(#[from] DomainError),
    #[error("Unexpected {resource} payload: {message}")]
    Payload { resource: String, message: String },
    #[error("Fetch task aborted: {0}")]
    FetchTask(String),
    #[error("Battle still undecided after {0} rounds")]
    RoundLimitExceeded(u32),
}

impl RunBattleError {
    pub fn payload(resource: impl Into<String>, err: serde_json::Error) -> Self {
        Self::Payload {
            resource: resource.into(),
            message: err.to_string(),
        }
    }
}
