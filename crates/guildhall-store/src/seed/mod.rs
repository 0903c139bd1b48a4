//! Schema bootstrap and fixed demo seed
//!
//! `initialize` is the single entry point: on a fresh store (or when forced)
//! it rebuilds the schema and writes the hardcoded seed dataset in one
//! transaction; on an already-seeded store the default path is a no-op
//! beyond the existence probe.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, seed_validation, Result};
use crate::migrations::{self, DEMO_TABLES};
use crate::repo::SqliteRepo;
use chrono::Duration;
use guildhall_core::model::{Guild, Item, ItemDetail, ItemOption, Player};
use rusqlite::Connection;

/// The fixed seed dataset: 3 players, 3 items, 1 guild
///
/// Item 101 carries the embedded option, item 102 carries the split-table
/// detail, item 103 is the event subtype.
pub struct SeedData {
    pub guild: Guild,
    pub players: Vec<Player>,
    pub items: Vec<Item>,
    pub details: Vec<ItemDetail>,
}

/// Build the hardcoded seed dataset
pub fn seed_data() -> SeedData {
    let guild = Guild::new(1, "T1");

    let players = vec![
        Player::with_guild(1, "Rookiss", guild.id),
        Player::with_guild(2, "Faker", guild.id),
        Player::with_guild(3, "Deft", guild.id),
    ];

    let sword = Item::new(1, 101).owned_by(1).with_option(ItemOption {
        strength: 5,
        dexterity: 3,
        hp: 10,
    });
    let shield = Item::new(2, 102).owned_by(2);
    let event_expiry = shield.created_at + Duration::days(7);
    let lantern = Item::new_event(3, 103, event_expiry).owned_by(3);

    let details = vec![ItemDetail::new(
        shield.id,
        "A battered tower shield, reforged after every season.",
    )];

    SeedData {
        guild,
        players,
        items: vec![sword, shield, lantern],
        details,
    }
}

/// Check the seed for internal consistency before any write
///
/// Every item owner and detail key must resolve within the seed itself;
/// every player must belong to the seed guild.
fn validate(seed: &SeedData) -> Result<()> {
    for item in &seed.items {
        if let Some(owner_id) = item.owner_id {
            if !seed.players.iter().any(|p| p.id == owner_id) {
                return Err(seed_validation(format!(
                    "item {} references unknown owner {}",
                    item.id, owner_id
                )));
            }
        }
    }

    for detail in &seed.details {
        if !seed.items.iter().any(|i| i.id == detail.item_id) {
            return Err(seed_validation(format!(
                "detail references unknown item {}",
                detail.item_id
            )));
        }
    }

    for player in &seed.players {
        if player.guild_id != Some(seed.guild.id) {
            return Err(seed_validation(format!(
                "player {} is not in the seed guild",
                player.id
            )));
        }
    }

    Ok(())
}

/// Probe whether the schema has been created (an existence check, not a row
/// count: an intentionally emptied store still counts as initialized)
fn schema_exists(conn: &Connection) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'guilds'",
            [],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)?;

    Ok(count > 0)
}

/// Drop the demo tables and the migration ledger so migrations re-apply
fn drop_schema(conn: &Connection) -> Result<()> {
    for table in DEMO_TABLES {
        conn.execute_batch(&format!("DROP TABLE IF EXISTS {}", table))
            .map_err(from_rusqlite)?;
    }
    conn.execute_batch("DROP TABLE IF EXISTS schema_version")
        .map_err(from_rusqlite)?;

    Ok(())
}

/// Initialize the store, seeding it when absent or when `force_reset` is set
///
/// Returns `true` if the schema was (re)built and seeded, `false` if the
/// existing store was left untouched.
pub fn initialize(conn: &mut Connection, force_reset: bool) -> Result<bool> {
    if !force_reset && schema_exists(conn)? {
        tracing::debug!("store already initialized, skipping seed");
        return Ok(false);
    }

    drop_schema(conn)?;
    migrations::apply_migrations(conn)?;

    let seed = seed_data();
    validate(&seed)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;

    SqliteRepo::persist_guild(&tx, &seed.guild)?;
    for player in &seed.players {
        SqliteRepo::persist_player(&tx, player)?;
    }
    for item in &seed.items {
        SqliteRepo::persist_item(&tx, item)?;
    }
    for detail in &seed.details {
        SqliteRepo::persist_item_detail(&tx, detail)?;
    }

    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(
        guild = %seed.guild.name,
        players = seed.players.len(),
        items = seed.items.len(),
        "store initialized"
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_data_shape() {
        let seed = seed_data();
        assert_eq!(seed.players.len(), 3);
        assert_eq!(seed.items.len(), 3);
        assert_eq!(seed.details.len(), 1);
        assert_eq!(seed.guild.name, "T1");

        // Exactly one of each showcase: option, detail, event subtype
        assert_eq!(seed.items.iter().filter(|i| i.option.is_some()).count(), 1);
        assert_eq!(seed.items.iter().filter(|i| i.is_event()).count(), 1);
    }

    #[test]
    fn test_validate_rejects_unknown_owner() {
        let mut seed = seed_data();
        seed.items[0].owner_id = Some(99);

        let err = validate(&seed).unwrap_err();
        assert_eq!(err.code(), "ERR_VALIDATION");
    }

    #[test]
    fn test_validate_rejects_orphan_detail() {
        let mut seed = seed_data();
        seed.details[0].item_id = 99;

        let err = validate(&seed).unwrap_err();
        assert_eq!(err.code(), "ERR_VALIDATION");
    }
}
