use thiserror::Error;

/// Errors that can occur while handling a password request
///
/// The [Display](std::fmt::Display) text of these errors is returned to
/// the caller in the error response body
#[derive(Debug, Error)]
pub enum PasswordRequestError {
    /// Body was valid JSON but not an object of parameters
    #[error("request body must be a JSON object, got {0}")]
    BodyNotObject(&'static str),

    /// Provided length was not a JSON integer
    #[error("length must be an integer, got {0}")]
    InvalidLength(&'static str),

    /// Provided length was a negative integer
    #[error("length must not be negative, got {0}")]
    NegativeLength(String),

    /// Provided length was larger than the configured maximum
    #[error("length {length} exceeds the maximum of {max}")]
    LengthTooLarge { length: String, max: usize },

    /// Failed to encode the response body
    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}
