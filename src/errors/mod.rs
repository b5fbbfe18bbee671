use thiserror::Error;

use crate::database::models::PlayerId;

/// Errors surfaced by tournament operations.
///
/// `Storage` and `Pool` are storage failures, `UnknownPlayer` is a reference
/// failure. Nothing here is retried.
#[derive(Error, Debug)]
pub enum TournamentError {
    /// A statement failed against the store
    #[error("{context}: {source}")]
    Storage {
        context: String,
        source: rusqlite::Error,
    },

    /// No connection could be checked out of the pool
    #[error("Store unreachable: {source}")]
    Pool {
        #[from]
        source: r2d2::Error,
    },

    /// A match referenced a player id that does not exist
    #[error("Player {id} does not exist")]
    UnknownPlayer { id: PlayerId },

    /// A match was reported with the same player on both sides
    #[error("Player {id} cannot play against themselves")]
    SelfMatch { id: PlayerId },
}

pub type Result<T> = std::result::Result<T, TournamentError>;

impl TournamentError {
    pub fn storage(context: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Storage {
            context: context.into(),
            source,
        }
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::Pool { .. })
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Self::UnknownPlayer { .. })
    }
}

/// Wrap rusqlite results with a description of the failed operation
pub trait StorageContext<T> {
    fn storage_context(self, context: &str) -> Result<T>;
}

impl<T> StorageContext<T> for rusqlite::Result<T> {
    fn storage_context(self, context: &str) -> Result<T> {
        self.map_err(|source| TournamentError::storage(context, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TournamentError::UnknownPlayer { id: 42 };
        assert_eq!(err.to_string(), "Player 42 does not exist");

        let err = TournamentError::storage(
            "Failed to count players",
            rusqlite::Error::QueryReturnedNoRows,
        );
        assert!(err.to_string().starts_with("Failed to count players"));
    }

    #[test]
    fn test_error_classification() {
        let reference = TournamentError::UnknownPlayer { id: 1 };
        assert!(reference.is_reference());
        assert!(!reference.is_storage());

        let failed: rusqlite::Result<()> = Err(rusqlite::Error::QueryReturnedNoRows);
        let storage = failed.storage_context("Failed to insert match").unwrap_err();
        assert!(storage.is_storage());
        assert!(!storage.is_reference());

        let self_match = TournamentError::SelfMatch { id: 3 };
        assert!(!self_match.is_storage());
        assert!(!self_match.is_reference());
    }
}
