//! Error handling for guildhall-store
//!
//! Wraps guildhall-core GuildhallError with store-specific helpers

use guildhall_core::GuildhallError;

/// Result type alias using GuildhallError
pub type Result<T> = std::result::Result<T, GuildhallError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> GuildhallError {
    GuildhallError::Persistence {
        op: "sqlite".to_string(),
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> GuildhallError {
    GuildhallError::Persistence {
        op: "migration".to_string(),
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a store-open/configure error
pub fn store_unavailable(err: rusqlite::Error) -> GuildhallError {
    GuildhallError::StoreUnavailable {
        message: err.to_string(),
    }
}

/// Create a seed validation error
pub fn seed_validation(reason: impl Into<String>) -> GuildhallError {
    GuildhallError::Validation {
        reason: reason.into(),
    }
}
