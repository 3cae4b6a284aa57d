use std::fmt;

/// Errors raised while setting up a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidArgument(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
        }
    }
}

impl std::error::Error for GameError {}
