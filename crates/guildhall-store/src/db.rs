//! Database connection management
//!
//! Provides utilities for opening and managing SQLite connections

#![allow(clippy::result_large_err)]

use crate::errors::{store_unavailable, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(store_unavailable)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(store_unavailable)
}

/// Configure a connection with the settings the demo relies on
pub fn configure(conn: &Connection) -> Result<()> {
    // Owner references and shared-key details are FK-enforced
    conn.execute("PRAGMA foreign_keys = ON", [])
        .map_err(store_unavailable)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_and_configure() {
        let conn = open_in_memory().unwrap();
        configure(&conn).unwrap();

        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }
}
