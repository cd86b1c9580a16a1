use std::fmt;

use crate::constants::{NETWORK_ERROR, NO_CATEGORY_ERROR, NO_PUZZLES_ERROR};
use crate::validation::GuessError;

/// Every failure the client can surface. None of them are fatal; each is
/// scoped to the screen or interaction that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// The guess failed the client-side shape checks.
    Validation(GuessError),
    /// The request never produced a response (transport, CORS, decode).
    Network(String),
    /// The backend answered with a non-2xx status.
    Api { status: u16, message: String },
    /// An endless-mode refill failed but stale puzzles remain in the buffer.
    BatchFetch(String),
    NoCategorySelected,
    NoPuzzlesAvailable,
}

impl GameError {
    /// The text shown inline on the affected screen.
    pub fn user_message(&self) -> String {
        match self {
            GameError::Api { message, .. } => message.clone(),
            // Transport details go to the log, not the screen
            GameError::Network(_) => NETWORK_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Validation(e) => write!(f, "{}", e),
            GameError::Network(message) => write!(f, "Network error: {}", message),
            GameError::Api { status, message } => write!(f, "HTTP {}: {}", status, message),
            GameError::BatchFetch(message) => write!(f, "{}", message),
            GameError::NoCategorySelected => f.write_str(NO_CATEGORY_ERROR),
            GameError::NoPuzzlesAvailable => f.write_str(NO_PUZZLES_ERROR),
        }
    }
}

impl std::error::Error for GameError {}

impl From<GuessError> for GameError {
    fn from(err: GuessError) -> Self {
        GameError::Validation(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Network(format!("Failed to parse response: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_shows_backend_message() {
        let err = GameError::Api { status: 404, message: "Category not found".to_string() };
        assert_eq!(err.user_message(), "Category not found");
        assert_eq!(err.to_string(), "HTTP 404: Category not found");
    }

    #[test]
    fn test_network_details_stay_off_screen() {
        assert_eq!(GameError::Network("offline".into()).user_message(), NETWORK_ERROR);
        assert_eq!(GameError::BatchFetch("Failed to load".into()).user_message(), "Failed to load");
    }

    #[test]
    fn test_malformed_body_becomes_network_error() {
        let err: GameError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(&err, GameError::Network(detail) if detail.starts_with("Failed to parse response")));
        assert_eq!(err.user_message(), NETWORK_ERROR);
    }

    #[test]
    fn test_validation_error_converts() {
        let err: GameError = GuessError::WordCountMismatch { expected: 3, actual: 2 }.into();
        assert_eq!(err.to_string(), "Expected 3 words, got 2");
    }
}
