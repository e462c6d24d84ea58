use thiserror::Error;
use warden_core::WardenError;

/// Single error enum for all policy engine operations.
///
/// Construction errors (`InvalidPolicy`, `MissingPolicy`) are fatal: a
/// malformed policy never yields a degraded engine. Interrogation itself
/// returns booleans; an `Err` from `permits`/`explicitly_denies` means a
/// collaborator failed (matcher or predicate), and the engine neither
/// retries nor substitutes a default outcome.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("no policy was supplied")]
    MissingPolicy,

    #[error("securable matcher not implemented")]
    MatcherNotImplemented,

    #[error("matcher error: {0}")]
    Matcher(String),

    #[error("predicate error: {0}")]
    Predicate(String),
}

pub type PolicyResult<T> = Result<T, PolicyError>;

impl From<WardenError> for PolicyError {
    fn from(err: WardenError) -> Self {
        match err {
            WardenError::MatcherNotImplemented => PolicyError::MatcherNotImplemented,
            other => PolicyError::Matcher(other.to_string()),
        }
    }
}
