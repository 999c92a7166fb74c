//! League Service
//!
//! The league catalogue and its leaderboards. Six seeded leagues, each with
//! standings and league info. Standings queries come in three shapes: top-N
//! by rank, the window around the current user's entry, and the full table.
//! Queries against unknown league ids fall back to the global league.

pub mod directory;
pub mod error;
pub mod seed;
pub mod types;

pub use directory::{LeagueDirectory, ViewMode};
pub use error::LeagueError;
pub use seed::seeded;
pub use types::{LeaderboardEntry, League, LeagueInfo};

pub type Result<T> = std::result::Result<T, LeagueError>;
