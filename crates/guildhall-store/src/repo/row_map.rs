//! Row-to-model decoding helpers
//!
//! The subtype discriminator and the embedded option JSON are decoded here,
//! at the data-access boundary, so callers only ever see typed variants.
//! Helpers take a column offset so joined queries can reuse them wherever
//! the entity's canonical column list starts.

use chrono::{DateTime, Utc};
use guildhall_core::model::{Item, ItemKind, ItemOption, Player};
use rusqlite::types::Type;
use rusqlite::Row;

/// Canonical item column list, in the order the mappers expect
pub(crate) const ITEM_COLUMNS: &str =
    "item_id, template_id, created_at, owner_id, item_option, soft_deleted, kind, expires_at";

/// Canonical player column list, in the order the mappers expect
pub(crate) const PLAYER_COLUMNS: &str = "player_id, name, guild_id, created_at";

fn decode_error(idx: usize, reason: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, reason.into())
}

fn timestamp(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or_else(Utc::now)
}

/// Decode a Player whose columns start at `at`
pub(crate) fn player_from_row_at(row: &Row<'_>, at: usize) -> rusqlite::Result<Player> {
    let id: i64 = row.get(at)?;
    let name: String = row.get(at + 1)?;
    let guild_id: Option<i64> = row.get(at + 2)?;
    let created_at_ms: i64 = row.get(at + 3)?;

    let mut player = Player::new(id, name);
    player.guild_id = guild_id;
    player.created_at = timestamp(created_at_ms);

    Ok(player)
}

/// Decode an Item whose columns start at `at`
///
/// An `event` row with a NULL expiry or an unknown discriminator fails the
/// decode rather than falling back to a default.
pub(crate) fn item_from_row_at(row: &Row<'_>, at: usize) -> rusqlite::Result<Item> {
    let id: i64 = row.get(at)?;
    let template_id: i64 = row.get(at + 1)?;
    let created_at_ms: i64 = row.get(at + 2)?;
    let owner_id: Option<i64> = row.get(at + 3)?;
    let option_json: Option<String> = row.get(at + 4)?;
    let soft_deleted: i32 = row.get(at + 5)?;
    let kind_tag: String = row.get(at + 6)?;
    let expires_at_ms: Option<i64> = row.get(at + 7)?;

    let option: Option<ItemOption> = match option_json {
        Some(json) => Some(serde_json::from_str(&json).map_err(|e| {
            decode_error(at + 4, format!("bad item_option JSON for item {}: {}", id, e))
        })?),
        None => None,
    };

    let kind = match kind_tag.as_str() {
        "standard" => ItemKind::Standard,
        "event" => {
            let ms = expires_at_ms.ok_or_else(|| {
                decode_error(at + 7, format!("event item {} has no expires_at", id))
            })?;
            ItemKind::Event {
                expires_at: timestamp(ms),
            }
        }
        other => {
            return Err(decode_error(
                at + 6,
                format!("unknown item kind '{}' for item {}", other, id),
            ))
        }
    };

    Ok(Item {
        id,
        template_id,
        created_at: timestamp(created_at_ms),
        owner_id,
        option,
        soft_deleted: soft_deleted != 0,
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn scratch_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE items (
                item_id INTEGER PRIMARY KEY,
                template_id INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                owner_id INTEGER,
                item_option TEXT,
                soft_deleted INTEGER NOT NULL DEFAULT 0,
                kind TEXT NOT NULL,
                expires_at INTEGER
            )",
        )
        .unwrap();
        conn
    }

    fn query_one(conn: &Connection) -> rusqlite::Result<Item> {
        conn.query_row(
            &format!("SELECT {} FROM items WHERE item_id = 1", ITEM_COLUMNS),
            [],
            |row| item_from_row_at(row, 0),
        )
    }

    #[test]
    fn test_event_row_without_expiry_fails_decode() {
        let conn = scratch_conn();
        conn.execute(
            "INSERT INTO items (item_id, template_id, created_at, kind) VALUES (1, 103, 0, 'event')",
            [],
        )
        .unwrap();

        let err = query_one(&conn).unwrap_err();
        assert!(err.to_string().contains("no expires_at"));
    }

    #[test]
    fn test_unknown_discriminator_fails_decode() {
        let conn = scratch_conn();
        conn.execute(
            "INSERT INTO items (item_id, template_id, created_at, kind) VALUES (1, 101, 0, 'mystery')",
            [],
        )
        .unwrap();

        // The scratch table carries no CHECK constraint, so the mapper's own
        // guard must reject the row.
        let err = query_one(&conn).unwrap_err();
        assert!(err.to_string().contains("unknown item kind"));
    }

    #[test]
    fn test_malformed_option_json_fails_decode() {
        let conn = scratch_conn();
        conn.execute(
            "INSERT INTO items (item_id, template_id, created_at, item_option, kind)
             VALUES (1, 101, 0, '{not json', 'standard')",
            [],
        )
        .unwrap();

        let err = query_one(&conn).unwrap_err();
        assert!(err.to_string().contains("bad item_option JSON"));
    }
}
