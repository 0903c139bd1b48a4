//! Guild loading strategies
//!
//! `guild_roster_eager` and `guild_roster_explicit` produce the same
//! `GuildRoster` end state; the first in one joined round trip, the second
//! through follow-up fetches per related collection. `guild_summary` skips
//! entity materialization entirely and ships only the projected aggregate.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::{item_from_row_at, player_from_row_at, SqliteRepo, ITEM_COLUMNS, PLAYER_COLUMNS};
use guildhall_core::model::{Guild, Item, Player};
use guildhall_core::GuildhallError;
use rusqlite::{Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

/// A guild member together with their (active) items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberLoadout {
    pub player: Player,
    pub items: Vec<Item>,
}

/// Fully populated guild graph: the guild row, its members, their items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildRoster {
    pub guild: Guild,
    pub members: Vec<MemberLoadout>,
}

impl GuildRoster {
    /// Number of members, the aggregate all loading strategies must agree on
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// Projected guild summary: name and member count, nothing materialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildSummary {
    pub name: String,
    pub member_count: i64,
}

/// One row of the joined roster query: guild, then nullable player, then
/// nullable item (LEFT JOINs leave both absent for empty guilds)
type RosterRow = (Guild, Option<Player>, Option<Item>);

fn roster_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RosterRow> {
    let guild = Guild {
        id: row.get(0)?,
        name: row.get(1)?,
    };
    let player_id: Option<i64> = row.get(2)?;
    let player = match player_id {
        Some(_) => Some(player_from_row_at(row, 2)?),
        None => None,
    };
    let item_id: Option<i64> = row.get(6)?;
    let item = match item_id {
        Some(_) => Some(item_from_row_at(row, 6)?),
        None => None,
    };
    Ok((guild, player, item))
}

/// Group ordered roster rows into per-guild rosters
///
/// Rows must arrive ordered by guild, then player, then item (the queries
/// below guarantee this).
fn collect_rosters(rows: Vec<RosterRow>) -> Vec<GuildRoster> {
    let mut rosters: Vec<GuildRoster> = Vec::new();

    for (guild, player, item) in rows {
        if rosters.last().map(|r| r.guild.id) != Some(guild.id) {
            rosters.push(GuildRoster {
                guild,
                members: Vec::new(),
            });
        }
        let roster = rosters.last_mut().expect("pushed above");

        let Some(player) = player else { continue };

        if roster.members.last().map(|m| m.player.id) != Some(player.id) {
            roster.members.push(MemberLoadout {
                player,
                items: Vec::new(),
            });
        }
        if let Some(item) = item {
            roster
                .members
                .last_mut()
                .expect("pushed above")
                .items
                .push(item);
        }
    }

    rosters
}

fn roster_select(filter: &str) -> String {
    let player_cols: String = PLAYER_COLUMNS
        .split(", ")
        .map(|c| format!("p.{}", c))
        .collect::<Vec<_>>()
        .join(", ");
    let item_cols: String = ITEM_COLUMNS
        .split(", ")
        .map(|c| format!("i.{}", c))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "SELECT g.guild_id, g.name, {player_cols}, {item_cols}
         FROM guilds g
         LEFT JOIN players p ON p.guild_id = g.guild_id
         LEFT JOIN items i ON i.owner_id = p.player_id AND i.soft_deleted = 0
         {filter}
         ORDER BY g.guild_id, p.player_id, i.item_id"
    )
}

/// Eager load: guild, members, and each member's items in a single round trip
pub fn guild_roster_eager(conn: &Connection, name: &str) -> Result<GuildRoster> {
    tracing::debug!(guild = %name, "eager roster query");

    let sql = roster_select("WHERE g.name = ?1");
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;

    let rows: Vec<RosterRow> = stmt
        .query_map([name], roster_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    collect_rosters(rows)
        .into_iter()
        .next()
        .ok_or_else(|| GuildhallError::GuildNotFound {
            name: name.to_string(),
        })
}

/// Explicit load: fetch the guild row alone, then its member collection,
/// then each member's items, in separate statements
pub fn guild_roster_explicit(conn: &Connection, name: &str) -> Result<GuildRoster> {
    tracing::debug!(guild = %name, "explicit roster load");

    let guild = SqliteRepo::get_guild_by_name(conn, name)?.ok_or_else(|| {
        GuildhallError::GuildNotFound {
            name: name.to_string(),
        }
    })?;

    // Follow-up fetch: the member collection
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM players WHERE guild_id = ?1 ORDER BY player_id",
            PLAYER_COLUMNS
        ))
        .map_err(from_rusqlite)?;
    let players: Vec<Player> = stmt
        .query_map([guild.id], |row| player_from_row_at(row, 0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    // Follow-up fetch per member: their items
    let mut members = Vec::with_capacity(players.len());
    for player in players {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM items WHERE owner_id = ?1 AND soft_deleted = 0 ORDER BY item_id",
                ITEM_COLUMNS
            ))
            .map_err(from_rusqlite)?;
        let items: Vec<Item> = stmt
            .query_map([player.id], |row| item_from_row_at(row, 0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        members.push(MemberLoadout { player, items });
    }

    Ok(GuildRoster { guild, members })
}

/// Projection load: guild name and member count only
pub fn guild_summary(conn: &Connection, name: &str) -> Result<GuildSummary> {
    tracing::debug!(guild = %name, "summary projection query");

    conn.query_row(
        "SELECT g.name, COUNT(p.player_id)
         FROM guilds g
         LEFT JOIN players p ON p.guild_id = g.guild_id
         WHERE g.name = ?1
         GROUP BY g.guild_id, g.name",
        [name],
        |row| {
            Ok(GuildSummary {
                name: row.get(0)?,
                member_count: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(from_rusqlite)?
    .ok_or_else(|| GuildhallError::GuildNotFound {
        name: name.to_string(),
    })
}

/// List every guild with its eagerly loaded member collection
pub fn list_guilds(conn: &Connection) -> Result<Vec<GuildRoster>> {
    let sql = roster_select("");
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;

    let rows: Vec<RosterRow> = stmt
        .query_map([], roster_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(collect_rosters(rows))
}
