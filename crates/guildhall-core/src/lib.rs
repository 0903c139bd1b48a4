//! Guildhall core - domain model, errors, and logging
//!
//! Provides:
//! - Domain model types (Guild, Player, Item with subtype variants, ItemDetail)
//! - Canonical error enum shared by the store and CLI crates
//! - Structured logging facility with profile-based initialization

pub mod errors;
pub mod logging;
pub mod model;

// Re-export key types
pub use errors::{GuildhallError, Result};
