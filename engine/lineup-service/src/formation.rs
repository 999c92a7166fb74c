//! Formation catalogue
//!
//! Five formations, all fielding ten outfield players plus a goalkeeper.
//! Capacities are per positional role; the goalkeeper slot is always one.

use crate::error::LineupError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positional role of a lineup slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Forward, Role::Midfielder, Role::Defender, Role::Goalkeeper];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Forward => "Forward",
            Role::Midfielder => "Midfielder",
            Role::Defender => "Defender",
            Role::Goalkeeper => "Goalkeeper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "4-2-3-1")]
    F4231,
    #[serde(rename = "5-3-2")]
    F532,
}

impl Formation {
    pub const ALL: [Formation; 5] =
        [Formation::F433, Formation::F442, Formation::F352, Formation::F4231, Formation::F532];

    pub fn label(&self) -> &'static str {
        match self {
            Formation::F433 => "4-3-3",
            Formation::F442 => "4-4-2",
            Formation::F352 => "3-5-2",
            Formation::F4231 => "4-2-3-1",
            Formation::F532 => "5-3-2",
        }
    }

    /// Slot capacity for one positional role
    pub fn capacity(&self, role: Role) -> usize {
        match role {
            Role::Forward => match self {
                Formation::F433 => 3,
                Formation::F442 => 2,
                Formation::F352 => 2,
                Formation::F4231 => 1,
                Formation::F532 => 2,
            },
            Role::Midfielder => match self {
                Formation::F433 => 3,
                Formation::F442 => 4,
                Formation::F352 => 5,
                Formation::F4231 => 5,
                Formation::F532 => 3,
            },
            Role::Defender => match self {
                Formation::F433 => 4,
                Formation::F442 => 4,
                Formation::F352 => 3,
                Formation::F4231 => 4,
                Formation::F532 => 5,
            },
            Role::Goalkeeper => 1,
        }
    }

    /// Total slots including the goalkeeper
    pub fn total_slots(&self) -> usize {
        Role::ALL.iter().map(|role| self.capacity(*role)).sum()
    }

    pub fn parse(name: &str) -> Result<Formation, LineupError> {
        Formation::ALL
            .into_iter()
            .find(|f| f.label() == name)
            .ok_or_else(|| LineupError::UnknownFormation { name: name.to_string() })
    }
}

impl Default for Formation {
    fn default() -> Self {
        Formation::F433
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
