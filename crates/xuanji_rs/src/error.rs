use thiserror::Error;

/// Errors from the facade's loosely-typed entry points.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FacadeError {
    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("invalid date/time {0:?}, expected YYYY-MM-DDThh:mm")]
    DateTime(String),

    #[error("{0:?} does not resolve to a trigram")]
    Trigram(String),

    #[error("number casting needs exactly three numbers, got {0}")]
    CastArity(usize),

    #[error("cannot cast from {0:?}")]
    Cast(String),
}
