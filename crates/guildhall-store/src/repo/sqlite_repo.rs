//! SQLite repository implementation
//!
//! Persists domain models to SQLite with upsert semantics. All methods take
//! a `&Connection`; pass a transaction where atomicity matters (a
//! `Transaction` derefs to `Connection`).

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::row_map::{item_from_row_at, player_from_row_at, ITEM_COLUMNS, PLAYER_COLUMNS};
use guildhall_core::model::{Guild, Item, ItemDetail, Player};
use rusqlite::{Connection, OptionalExtension};

/// SQLite repository for the demo schema
pub struct SqliteRepo;

impl SqliteRepo {
    /// Persist a Guild (insert or update by id)
    pub fn persist_guild(conn: &Connection, guild: &Guild) -> Result<()> {
        conn.execute(
            "INSERT INTO guilds (guild_id, name)
             VALUES (?1, ?2)
             ON CONFLICT(guild_id) DO UPDATE SET
                name = excluded.name",
            rusqlite::params![guild.id, guild.name],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Persist a Player (insert or update by id)
    pub fn persist_player(conn: &Connection, player: &Player) -> Result<()> {
        conn.execute(
            "INSERT INTO players (player_id, name, guild_id, created_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(player_id) DO UPDATE SET
                name = excluded.name,
                guild_id = excluded.guild_id",
            rusqlite::params![
                player.id,
                player.name,
                player.guild_id,
                player.created_at.timestamp_millis(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Persist an Item (insert or update by id)
    ///
    /// The embedded option is serialized into the item's own row; the
    /// subtype variant is flattened into the discriminator column plus the
    /// nullable expiry column.
    pub fn persist_item(conn: &Connection, item: &Item) -> Result<()> {
        let option_json = match &item.option {
            Some(option) => Some(serde_json::to_string(option).map_err(|e| {
                guildhall_core::GuildhallError::Persistence {
                    op: "serialize_item_option".to_string(),
                    message: e.to_string(),
                }
            })?),
            None => None,
        };

        conn.execute(
            "INSERT INTO items (item_id, template_id, created_at, owner_id, item_option, soft_deleted, kind, expires_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(item_id) DO UPDATE SET
                template_id = excluded.template_id,
                owner_id = excluded.owner_id,
                item_option = excluded.item_option,
                soft_deleted = excluded.soft_deleted,
                kind = excluded.kind,
                expires_at = excluded.expires_at",
            rusqlite::params![
                item.id,
                item.template_id,
                item.created_at.timestamp_millis(),
                item.owner_id,
                option_json,
                if item.soft_deleted { 1 } else { 0 },
                item.kind.discriminant(),
                item.kind.expires_at().map(|dt| dt.timestamp_millis()),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Persist an ItemDetail (insert or update by shared key)
    pub fn persist_item_detail(conn: &Connection, detail: &ItemDetail) -> Result<()> {
        conn.execute(
            "INSERT INTO item_details (item_id, description)
             VALUES (?1, ?2)
             ON CONFLICT(item_id) DO UPDATE SET
                description = excluded.description",
            rusqlite::params![detail.item_id, detail.description],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Get a Guild by ID
    pub fn get_guild(conn: &Connection, guild_id: i64) -> Result<Option<Guild>> {
        conn.query_row(
            "SELECT guild_id, name FROM guilds WHERE guild_id = ?1",
            [guild_id],
            |row| {
                Ok(Guild {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a Guild by name
    pub fn get_guild_by_name(conn: &Connection, name: &str) -> Result<Option<Guild>> {
        conn.query_row(
            "SELECT guild_id, name FROM guilds WHERE name = ?1",
            [name],
            |row| {
                Ok(Guild {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a Player by ID
    pub fn get_player(conn: &Connection, player_id: i64) -> Result<Option<Player>> {
        conn.query_row(
            &format!("SELECT {} FROM players WHERE player_id = ?1", PLAYER_COLUMNS),
            [player_id],
            |row| player_from_row_at(row, 0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get an Item by ID
    ///
    /// Bypasses the soft-delete filter: direct lookups by key always see the
    /// physical row.
    pub fn get_item(conn: &Connection, item_id: i64) -> Result<Option<Item>> {
        conn.query_row(
            &format!("SELECT {} FROM items WHERE item_id = ?1", ITEM_COLUMNS),
            [item_id],
            |row| item_from_row_at(row, 0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get the detail record sharing an Item's key, if one exists
    pub fn get_item_detail(conn: &Connection, item_id: i64) -> Result<Option<ItemDetail>> {
        conn.query_row(
            "SELECT item_id, description FROM item_details WHERE item_id = ?1",
            [item_id],
            |row| {
                Ok(ItemDetail {
                    item_id: row.get(0)?,
                    description: row.get(1)?,
                })
            },
        )
        .optional()
        .map_err(from_rusqlite)
    }
}
