//! Migration framework
//!
//! Provides:
//! - Migration runner with checksums and idempotent application
//! - Embedded SQL migrations

mod checksums;
mod embedded;
mod runner;

pub use embedded::DEMO_TABLES;
pub use runner::apply_migrations;
