//! Domain model types
//!
//! Plain data types with no persistence logic; the store crate maps these
//! to and from SQLite rows.

mod guild;
mod item;
mod player;

pub use guild::Guild;
pub use item::{Item, ItemDetail, ItemKind, ItemOption};
pub use player::Player;
