use thiserror::Error;

#[derive(Debug, Error)]
pub enum WardenError {
    #[error("policy error: {0}")]
    Policy(String),

    #[error("matcher error: {0}")]
    Matcher(String),

    #[error("securable matcher not implemented")]
    MatcherNotImplemented,

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type WardenResult<T> = Result<T, WardenError>;
