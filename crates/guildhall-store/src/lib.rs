//! Guildhall store - SQLite persistence and reporting queries
//!
//! Provides:
//! - Connection management and pragmas
//! - Embedded SQL migrations with checksums
//! - Repository layer mapping domain models to rows
//! - Schema bootstrap with the fixed demo seed
//! - Reporting queries (eager, explicit, and projection loading)

pub mod db;
pub mod errors;
pub mod migrations;
pub mod queries;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
