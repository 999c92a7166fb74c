//! Lineup Service
//!
//! Formations, positional lineups, and the shared team store. The lineup is
//! the arrangement of owned articles into a football formation: ordered
//! forwards, midfielders, and defenders, one goalkeeper, and a bench for
//! everything that does not fit on the field.
//!
//! Slot changes go through a two-phase swap: select a source article, then
//! commit against a target. The store applies the whole exchange under one
//! write lock, so concurrent readers see either the old arrangement or the
//! new one, never half of each.

pub mod error;
pub mod formation;
pub mod lineup;
pub mod swap;

pub use error::LineupError;
pub use formation::{Formation, Role};
pub use lineup::{Lineup, PositionGroups, Slot};
pub use swap::{SwapSession, TeamStore};

pub type Result<T> = std::result::Result<T, LineupError>;
