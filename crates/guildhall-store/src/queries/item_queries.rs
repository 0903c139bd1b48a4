//! Item listing with the soft-delete filter at the query boundary
//!
//! The filter is an explicit parameter, never ambient state: callers choose
//! `ActiveOnly` (the default listing) or `IncludeDeleted` (the override).

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::{item_from_row_at, player_from_row_at, ITEM_COLUMNS, PLAYER_COLUMNS};
use guildhall_core::model::{Item, ItemDetail, Player};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

/// Soft-delete visibility for item listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemVisibility {
    /// Exclude soft-deleted rows (the default filter)
    #[default]
    ActiveOnly,
    /// Bypass the filter and list physically present rows
    IncludeDeleted,
}

/// One listed item joined with its owner and its split-table detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemReport {
    pub item: Item,
    pub owner: Option<Player>,
    pub detail: Option<ItemDetail>,
}

/// List items with owner and detail rows included
///
/// One joined query; the subtype discriminator is decoded per row, so event
/// items arrive as the `Event` variant with their expiry populated.
pub fn list_items(conn: &Connection, visibility: ItemVisibility) -> Result<Vec<ItemReport>> {
    tracing::debug!(?visibility, "item listing query");

    let item_cols: String = ITEM_COLUMNS
        .split(", ")
        .map(|c| format!("i.{}", c))
        .collect::<Vec<_>>()
        .join(", ");
    let player_cols: String = PLAYER_COLUMNS
        .split(", ")
        .map(|c| format!("p.{}", c))
        .collect::<Vec<_>>()
        .join(", ");

    let filter = match visibility {
        ItemVisibility::ActiveOnly => "WHERE i.soft_deleted = 0",
        ItemVisibility::IncludeDeleted => "",
    };

    let sql = format!(
        "SELECT {item_cols}, {player_cols}, d.item_id, d.description
         FROM items i
         LEFT JOIN players p ON p.player_id = i.owner_id
         LEFT JOIN item_details d ON d.item_id = i.item_id
         {filter}
         ORDER BY i.item_id"
    );

    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;

    let reports = stmt
        .query_map([], |row| {
            let item = item_from_row_at(row, 0)?;

            let owner_id: Option<i64> = row.get(8)?;
            let owner = match owner_id {
                Some(_) => Some(player_from_row_at(row, 8)?),
                None => None,
            };

            let detail_id: Option<i64> = row.get(12)?;
            let detail = match detail_id {
                Some(item_id) => Some(ItemDetail {
                    item_id,
                    description: row.get(13)?,
                }),
                None => None,
            };

            Ok(ItemReport {
                item,
                owner,
                detail,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(reports)
}
