use thiserror::Error;

/// The only text a user ever sees when generation fails.
pub const USER_MESSAGE: &str = "Failed to generate caption. Please try again.";

/// Why a caption request produced nothing to show.
///
/// The variants are kept apart for the diagnostic log; users get
/// [`USER_MESSAGE`] regardless.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Failed to reach caption service: {0}")]
    Network(String),
    #[error("Failed to generate caption (HTTP {status})")]
    Status { status: u16 },
    #[error("Failed to decode caption response: {0}")]
    Decode(String),
    #[error("No captions generated")]
    EmptyResult,
}

impl GenerateError {
    pub fn user_message(&self) -> &'static str {
        USER_MESSAGE
    }
}
