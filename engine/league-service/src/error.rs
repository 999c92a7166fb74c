//! League service errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("Unknown league: {id}")]
    UnknownLeague { id: String },

    #[error("League {id} is already registered")]
    DuplicateLeague { id: String },

    #[error("Invalid standings for league {league}: {reason}")]
    InvalidStandings { league: String, reason: String },

    #[error("Failed to parse league seed: {0}")]
    Serialization(#[from] serde_json::Error),
}
