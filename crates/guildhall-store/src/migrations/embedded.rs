//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Tables owned by the demo schema, in drop-safe order (children first).
/// The reset path drops exactly these plus schema_version.
pub const DEMO_TABLES: &[&str] = &["item_details", "items", "players", "guilds"];

/// Get all embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![
        Migration {
            id: "001_initial_schema",
            sql: include_str!("../../migrations/001_initial_schema.sql"),
        },
        Migration {
            id: "002_item_details",
            sql: include_str!("../../migrations/002_item_details.sql"),
        },
    ]
}
