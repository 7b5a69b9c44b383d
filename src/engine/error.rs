use std::fmt;

use crate::board::MoveParseError;

/// Errors reported by `EngineController`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A search is already running; poll, wait for or cancel it first
    SearchInProgress,
    /// The side to move has no legal moves
    GameOver,
    /// Move is not in the current legal set
    IllegalMove { notation: String },
    /// Move notation could not be parsed
    Parse(MoveParseError),
    /// The search worker thread could not be started
    WorkerSpawn { reason: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::SearchInProgress => write!(f, "A search is already in progress"),
            EngineError::GameOver => write!(f, "The game is over"),
            EngineError::IllegalMove { notation } => write!(f, "Illegal move '{notation}'"),
            EngineError::Parse(err) => write!(f, "{err}"),
            EngineError::WorkerSpawn { reason } => {
                write!(f, "Failed to start search worker: {reason}")
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveParseError> for EngineError {
    fn from(err: MoveParseError) -> Self {
        match err {
            MoveParseError::IllegalMove { notation } => EngineError::IllegalMove { notation },
            other => EngineError::Parse(other),
        }
    }
}
