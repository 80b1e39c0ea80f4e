use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an addon node in the game's addon node table.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AddonNodeId(pub u64);

impl fmt::Display for AddonNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
