// Integration tests for the item listing: soft-delete filter override,
// subtype detection, owner and detail joins.

use guildhall_store::queries::{list_items, ItemVisibility};
use guildhall_store::repo::SqliteRepo;
use guildhall_store::{db, seed};
use rusqlite::Connection;

fn seeded_conn() -> Connection {
    let mut conn = db::open_in_memory().unwrap();
    db::configure(&conn).unwrap();
    seed::initialize(&mut conn, false).unwrap();
    conn
}

#[test]
fn test_default_listing_shows_all_seeded_items() {
    let conn = seeded_conn();

    let reports = list_items(&conn, ItemVisibility::ActiveOnly).unwrap();
    assert_eq!(reports.len(), 3);

    // Owners joined in
    let owners: Vec<&str> = reports
        .iter()
        .map(|r| r.owner.as_ref().map(|p| p.name.as_str()).unwrap_or("-"))
        .collect();
    assert_eq!(owners, vec!["Rookiss", "Faker", "Deft"]);
}

#[test]
fn test_soft_delete_filter_and_override() {
    let conn = seeded_conn();

    // Soft-delete one row
    conn.execute("UPDATE items SET soft_deleted = 1 WHERE item_id = 2", [])
        .unwrap();

    // Default listing excludes it
    let active = list_items(&conn, ItemVisibility::ActiveOnly).unwrap();
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|r| r.item.id != 2));

    // The override includes it, flagged
    let all = list_items(&conn, ItemVisibility::IncludeDeleted).unwrap();
    assert_eq!(all.len(), 3);
    let deleted = all.iter().find(|r| r.item.id == 2).unwrap();
    assert!(deleted.item.soft_deleted);

    // Neither query touched the underlying row
    let row = SqliteRepo::get_item(&conn, 2).unwrap().unwrap();
    assert_eq!(row.template_id, 102);
    assert!(row.soft_deleted);
}

#[test]
fn test_event_subtype_detected_in_listing() {
    let conn = seeded_conn();

    let reports = list_items(&conn, ItemVisibility::ActiveOnly).unwrap();

    let events: Vec<_> = reports.iter().filter(|r| r.item.is_event()).collect();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].item.template_id, 103);
    assert!(events[0].item.kind.expires_at().is_some());

    // Base items never expose an expiry
    for report in reports.iter().filter(|r| !r.item.is_event()) {
        assert_eq!(report.item.kind.expires_at(), None);
    }
}

#[test]
fn test_detail_row_joined_only_where_present() {
    let conn = seeded_conn();

    let reports = list_items(&conn, ItemVisibility::ActiveOnly).unwrap();

    let with_detail: Vec<_> = reports.iter().filter(|r| r.detail.is_some()).collect();
    assert_eq!(with_detail.len(), 1);

    let detail = with_detail[0].detail.as_ref().unwrap();
    assert_eq!(detail.item_id, with_detail[0].item.id);
    assert!(!detail.description.is_empty());
}

#[test]
fn test_embedded_option_survives_listing() {
    let conn = seeded_conn();

    let reports = list_items(&conn, ItemVisibility::ActiveOnly).unwrap();

    let with_option = reports.iter().find(|r| r.item.option.is_some()).unwrap();
    let option = with_option.item.option.unwrap();
    assert_eq!(option.strength, 5);
    assert_eq!(option.dexterity, 3);
    assert_eq!(option.hp, 10);
}

#[test]
fn test_unowned_item_lists_without_owner() {
    let conn = seeded_conn();
    conn.execute(
        "INSERT INTO items (item_id, template_id, created_at, kind) VALUES (4, 104, 0, 'standard')",
        [],
    )
    .unwrap();

    let reports = list_items(&conn, ItemVisibility::ActiveOnly).unwrap();
    let orphan = reports.iter().find(|r| r.item.id == 4).unwrap();
    assert!(orphan.owner.is_none());
    assert!(orphan.detail.is_none());
}
