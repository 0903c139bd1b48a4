//! Menu command implementations

mod reports;

pub use reports::{
    reset, show_guilds, show_items, show_roster_eager, show_roster_explicit, show_summary,
};
