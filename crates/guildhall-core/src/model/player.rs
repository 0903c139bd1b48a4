use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player - a character that can own items and belong to at most one guild
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Optional guild membership (None for guildless players)
    pub guild_id: Option<i64>,

    /// Timestamp when this Player was created
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Create a new guildless Player with the current timestamp
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            guild_id: None,
            created_at: Utc::now(),
        }
    }

    /// Create a new Player already belonging to a guild
    pub fn with_guild(id: i64, name: impl Into<String>, guild_id: i64) -> Self {
        let mut player = Self::new(id, name);
        player.guild_id = Some(guild_id);
        player
    }

    /// Check if this Player belongs to a guild
    pub fn has_guild(&self) -> bool {
        self.guild_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_guildless() {
        let player = Player::new(1, "Rookiss");
        assert_eq!(player.id, 1);
        assert_eq!(player.name, "Rookiss");
        assert!(!player.has_guild());
    }

    #[test]
    fn test_with_guild() {
        let player = Player::with_guild(2, "Faker", 1);
        assert_eq!(player.guild_id, Some(1));
        assert!(player.has_guild());
    }
}
