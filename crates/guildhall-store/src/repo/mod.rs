//! Repository layer
//!
//! Maps domain models to SQLite rows and back

mod row_map;
mod sqlite_repo;

pub(crate) use row_map::{item_from_row_at, player_from_row_at, ITEM_COLUMNS, PLAYER_COLUMNS};
pub use sqlite_repo::SqliteRepo;
