use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminated item subtype (table-per-hierarchy)
///
/// Both variants live in the same physical `items` table; the `kind`
/// discriminator column selects the variant and `expires_at` is populated
/// only for `Event` rows. Decoding happens at the row-mapping boundary in
/// the store crate, so a `Standard` item never exposes an expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Ordinary item with no extra payload
    Standard,
    /// Limited-time event item with an expiry timestamp
    Event { expires_at: DateTime<Utc> },
}

impl ItemKind {
    /// Discriminator value as stored in the `kind` column
    pub fn discriminant(&self) -> &'static str {
        match self {
            ItemKind::Standard => "standard",
            ItemKind::Event { .. } => "event",
        }
    }

    /// Expiry timestamp, present only for the Event variant
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match self {
            ItemKind::Standard => None,
            ItemKind::Event { expires_at } => Some(*expires_at),
        }
    }

    /// Check if this is the event subtype
    pub fn is_event(&self) -> bool {
        matches!(self, ItemKind::Event { .. })
    }
}

/// Owned value object embedded in the item's row
///
/// Stat bonuses with no identity or lifecycle of their own; serialized as a
/// JSON column alongside the item's other fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOption {
    pub strength: i32,
    pub dexterity: i32,
    pub hp: i32,
}

/// Item - an owned or ownerless inventory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: i64,

    /// Reference to the item template this row was stamped from
    pub template_id: i64,

    /// Timestamp when this Item was created
    pub created_at: DateTime<Utc>,

    /// Optional single owner (None for unowned items)
    pub owner_id: Option<i64>,

    /// Optional embedded stat bonuses
    pub option: Option<ItemOption>,

    /// Soft-delete flag; the row stays physically present when set
    pub soft_deleted: bool,

    /// Subtype discriminant and variant payload
    pub kind: ItemKind,
}

impl Item {
    /// Create a new standard Item with the current timestamp
    pub fn new(id: i64, template_id: i64) -> Self {
        Self {
            id,
            template_id,
            created_at: Utc::now(),
            owner_id: None,
            option: None,
            soft_deleted: false,
            kind: ItemKind::Standard,
        }
    }

    /// Create a new event Item expiring at the given time
    pub fn new_event(id: i64, template_id: i64, expires_at: DateTime<Utc>) -> Self {
        let mut item = Self::new(id, template_id);
        item.kind = ItemKind::Event { expires_at };
        item
    }

    /// Set the owner, builder-style
    pub fn owned_by(mut self, player_id: i64) -> Self {
        self.owner_id = Some(player_id);
        self
    }

    /// Attach embedded stat bonuses, builder-style
    pub fn with_option(mut self, option: ItemOption) -> Self {
        self.option = Some(option);
        self
    }

    /// Check if this item is the event subtype
    pub fn is_event(&self) -> bool {
        self.kind.is_event()
    }
}

/// One-to-one detail record sharing the Item's primary key
///
/// Lives in a logically separate `item_details` table (table splitting);
/// loaded only via an explicit join or follow-up fetch, never auto-cascaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    /// Shared primary key (same value as the owning Item's id)
    pub item_id: i64,

    /// Long-form description text
    pub description: String,
}

impl ItemDetail {
    /// Create a detail record for the given item
    pub fn new(item_id: i64, description: impl Into<String>) -> Self {
        Self {
            item_id,
            description: description.into(),
        }
    }
}
