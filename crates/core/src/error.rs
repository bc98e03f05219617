/// Failures surfaced by the preheat mapping layer.
///
/// Conversion is pure, so none of these are transient: callers map them to
/// API errors and never retry.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} must not be nil")]
    NilInput { entity: &'static str },

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid auth data: {0}")]
    InvalidAuthData(String),

    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(String),

    #[error("Invalid filters: {0}")]
    InvalidFilters(String),

    #[error("Invalid trigger: {0}")]
    InvalidTrigger(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
