use serde::{Deserialize, Serialize};

/// Guild - a named group of players
///
/// Membership is the one-to-many side of `Player.guild_id`; a Guild row
/// carries no member list of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    /// Unique identifier
    pub id: i64,

    /// Guild name, unique across the store
    pub name: String,
}

impl Guild {
    /// Create a new Guild with the given ID and name
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
