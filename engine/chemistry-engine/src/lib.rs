//! Chemistry Engine
//!
//! Computes chemistry between articles standing next to each other in a
//! lineup. Adjacency follows the pitch: horizontal neighbors within a
//! positional group, forwards to every midfielder, midfielders to every
//! defender, defenders to the goalkeeper. The tier of each adjacent pair
//! comes from a title-keyed association table; unlisted pairs are `Weak`.
//!
//! Lookups never fail: an article that is not in the positional groups
//! simply has no neighbors. Lineups can be mid-edit when queried.

pub mod affinity;
pub mod engine;
pub mod types;

pub use affinity::AffinityTable;
pub use engine::ChemistryEngine;
pub use types::{ChemistryLink, ChemistryTier, Neighbor};
