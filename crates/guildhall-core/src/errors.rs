use thiserror::Error;

/// Result type alias using GuildhallError
pub type Result<T> = std::result::Result<T, GuildhallError>;

/// Canonical error type for all guildhall crates
///
/// Report routines surface these to the console without terminating the
/// command loop; only startup failures abort the process.
#[derive(Debug, Error)]
pub enum GuildhallError {
    // ===== Lookup Errors =====
    /// No guild matches the user-supplied name
    #[error("Guild not found: {name}")]
    GuildNotFound { name: String },

    /// Player not found in the store
    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: i64 },

    /// Item not found in the store
    #[error("Item not found: {item_id}")]
    ItemNotFound { item_id: i64 },

    // ===== Input/Seed Errors =====
    /// Seed data or user input failed validation
    #[error("Validation failed: {reason}")]
    Validation { reason: String },

    // ===== Store Errors =====
    /// The backing store could not be opened or configured
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// A store operation failed mid-flight
    #[error("Persistence error during {op}: {message}")]
    Persistence { op: String, message: String },
}

impl GuildhallError {
    /// Stable error code for programmatic handling and test assertions
    pub fn code(&self) -> &'static str {
        match self {
            GuildhallError::GuildNotFound { .. } => "ERR_GUILD_NOT_FOUND",
            GuildhallError::PlayerNotFound { .. } => "ERR_PLAYER_NOT_FOUND",
            GuildhallError::ItemNotFound { .. } => "ERR_ITEM_NOT_FOUND",
            GuildhallError::Validation { .. } => "ERR_VALIDATION",
            GuildhallError::StoreUnavailable { .. } => "ERR_STORE_UNAVAILABLE",
            GuildhallError::Persistence { .. } => "ERR_PERSISTENCE",
        }
    }

    /// Whether this error is a missing-row condition rather than a fault
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GuildhallError::GuildNotFound { .. }
                | GuildhallError::PlayerNotFound { .. }
                | GuildhallError::ItemNotFound { .. }
        )
    }
}
