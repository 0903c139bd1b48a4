//! Report routines behind the menu
//!
//! Each routine issues one loading strategy against the store and prints the
//! result. Formatting is split out into pure helpers so it can be asserted
//! on without a console.

use guildhall_core::Result;
use guildhall_store::queries::{
    guild_roster_eager, guild_roster_explicit, guild_summary, list_guilds, list_items, GuildRoster,
    GuildSummary, ItemReport, ItemVisibility,
};
use guildhall_store::seed;
use rusqlite::Connection;

/// Force-reset the schema and reseed
pub fn reset(conn: &mut Connection) -> Result<()> {
    seed::initialize(conn, true)?;
    println!("Store reset and reseeded");
    Ok(())
}

/// List items, optionally bypassing the soft-delete filter
pub fn show_items(conn: &Connection, include_deleted: bool) -> Result<()> {
    let visibility = if include_deleted {
        ItemVisibility::IncludeDeleted
    } else {
        ItemVisibility::ActiveOnly
    };

    let reports = list_items(conn, visibility)?;
    for report in &reports {
        println!("{}", format_item_line(report));
    }
    println!("{} item(s)", reports.len());
    Ok(())
}

/// Guild roster via a single eager join
pub fn show_roster_eager(conn: &Connection, name: &str) -> Result<()> {
    let roster = guild_roster_eager(conn, name)?;
    print!("{}", format_roster(&roster));
    Ok(())
}

/// Guild roster via explicit follow-up fetches
pub fn show_roster_explicit(conn: &Connection, name: &str) -> Result<()> {
    let roster = guild_roster_explicit(conn, name)?;
    print!("{}", format_roster(&roster));
    Ok(())
}

/// Guild summary via the count-only projection
pub fn show_summary(conn: &Connection, name: &str) -> Result<()> {
    let summary = guild_summary(conn, name)?;
    println!("{}", format_summary(&summary));
    Ok(())
}

/// All guilds with their member counts
pub fn show_guilds(conn: &Connection) -> Result<()> {
    let rosters = list_guilds(conn)?;
    for roster in &rosters {
        println!(
            "Guild({}) Members({})",
            roster.guild.name,
            roster.member_count()
        );
    }
    Ok(())
}

fn format_item_line(report: &ItemReport) -> String {
    let owner = report
        .owner
        .as_ref()
        .map(|p| p.name.as_str())
        .unwrap_or("<unowned>");

    let mut line = format!(
        "TemplateId({}) Owner({})",
        report.item.template_id, owner
    );

    if let Some(expires_at) = report.item.kind.expires_at() {
        line.push_str(&format!(" Event(expires {})", expires_at.format("%Y-%m-%d")));
    }
    if let Some(option) = &report.item.option {
        line.push_str(&format!(
            " Option(str {} dex {} hp {})",
            option.strength, option.dexterity, option.hp
        ));
    }
    if let Some(detail) = &report.detail {
        line.push_str(&format!(" Detail({})", detail.description));
    }
    if report.item.soft_deleted {
        line.push_str(" [deleted]");
    }

    line
}

fn format_roster(roster: &GuildRoster) -> String {
    let mut out = format!(
        "Guild({}) Members({})\n",
        roster.guild.name,
        roster.member_count()
    );
    for member in &roster.members {
        for item in &member.items {
            out.push_str(&format!(
                "TemplateId({}) Owner({})\n",
                item.template_id, member.player.name
            ));
        }
        if member.items.is_empty() {
            out.push_str(&format!("<no items> Owner({})\n", member.player.name));
        }
    }
    out
}

fn format_summary(summary: &GuildSummary) -> String {
    format!(
        "GuildName({}), MemberCount({})",
        summary.name, summary.member_count
    )
}
