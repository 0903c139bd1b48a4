//! Guildhall CLI
//!
//! Interactive console menu over the demo store. One scoped connection for
//! the life of the process; every command runs to completion before the
//! prompt returns, and command errors are reported without leaving the loop.

use clap::Parser;
use guildhall_core::logging::{self, Profile};
use guildhall_core::{GuildhallError, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "guildhall")]
#[command(about = "Guildhall - relational loading strategies over SQLite", long_about = None)]
struct Cli {
    /// Path to the SQLite store
    #[arg(long, default_value = ".guildhall/store.db")]
    db: PathBuf,

    /// Force-reset the schema and reseed before the menu starts
    #[arg(long)]
    reset: bool,

    /// Emit JSON structured logs instead of human-readable output
    #[arg(long)]
    log_json: bool,
}

const MENU: &str = "\
Commands:
  [0] force-reset schema and reseed
  [1] list items
  [2] list items (including soft-deleted)
  [3] guild roster, eager load
  [4] guild roster, explicit load
  [5] guild summary, projection load
  [6] list guilds
  [q] quit";

fn main() {
    let cli = Cli::parse();

    let profile = if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    };
    logging::init(profile);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(parent) = cli.db.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GuildhallError::StoreUnavailable {
                message: format!("cannot create {}: {}", parent.display(), e),
            })?;
        }
    }

    let mut conn = guildhall_store::db::open(&cli.db)?;
    guildhall_store::db::configure(&conn)?;

    if guildhall_store::seed::initialize(&mut conn, cli.reset)? {
        println!("Store initialized");
    }

    println!("{}", MENU);

    loop {
        let Some(command) = read_line("> ") else {
            break; // EOF
        };

        let result = match command.as_str() {
            "" => continue,
            "0" => commands::reset(&mut conn),
            "1" => commands::show_items(&conn, false),
            "2" => commands::show_items(&conn, true),
            "3" | "4" | "5" => {
                let Some(name) = read_line("Guild name > ") else {
                    break;
                };
                match command.as_str() {
                    "3" => commands::show_roster_eager(&conn, &name),
                    "4" => commands::show_roster_explicit(&conn, &name),
                    _ => commands::show_summary(&conn, &name),
                }
            }
            "6" => commands::show_guilds(&conn),
            "q" | "quit" | "exit" => break,
            other => {
                println!("Unknown command: {}", other);
                continue;
            }
        };

        // Missing rows and store faults alike return to the prompt
        if let Err(e) = result {
            eprintln!("error: {}", e);
        }
    }

    Ok(())
}

/// Prompt and read one trimmed line; None on EOF or a closed stdin
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
