//! Reporting queries
//!
//! Each routine is a self-contained read over a borrowed connection. The
//! same roster shape is reachable three ways: one eager join, a sequence of
//! explicit follow-up fetches, or a count-only projection.

mod guild_queries;
mod item_queries;

pub use guild_queries::{
    guild_roster_eager, guild_roster_explicit, guild_summary, list_guilds, GuildRoster,
    GuildSummary, MemberLoadout,
};
pub use item_queries::{list_items, ItemReport, ItemVisibility};
