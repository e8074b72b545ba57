//! Journal entry management.

use super::utils::{confirm, today};
use anyhow::{Result, bail};
use clap::Subcommand;
use colored::Colorize;
use memoir_application::{DELETE_CONFIRMATION_PROMPT, MemoirService};
use memoir_core::state::JournalEntry;

#[derive(Subcommand)]
pub enum JournalAction {
    /// List entries, most recent date first
    List,
    /// Add a new entry
    Add {
        #[arg(long)]
        title: String,
        /// Entry date as YYYY-MM-DD; defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        content: String,
    },
    /// Update an existing entry
    Edit {
        /// Id of the entry to update
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        content: String,
    },
    /// Delete an entry (asks for confirmation)
    Delete {
        /// Id of the entry to delete
        id: String,
    },
}

pub async fn run(service: &mut MemoirService, action: JournalAction) -> Result<()> {
    match action {
        JournalAction::List => {
            let entries = service.journal_entries();
            if entries.is_empty() {
                println!("You haven't written any journal entries yet.");
                return Ok(());
            }
            for entry in entries {
                println!("{}  {}  {}", entry.id, entry.date, entry.title.bold());
            }
        }
        JournalAction::Add { title, date, content } => {
            let id = service
                .save_journal_entry(JournalEntry {
                    id: String::new(),
                    title,
                    content,
                    date: date.unwrap_or_else(today),
                })
                .await?;
            println!("{} entry {}", "Added".green(), id);
        }
        JournalAction::Edit { id, title, date, content } => {
            if service.state().journal_entry(&id).is_none() {
                bail!("no journal entry with id {id}");
            }
            service
                .save_journal_entry(JournalEntry { id: id.clone(), title, content, date })
                .await?;
            println!("{} entry {}", "Updated".green(), id);
        }
        JournalAction::Delete { id } => {
            if service.state().journal_entry(&id).is_none() {
                bail!("no journal entry with id {id}");
            }
            if confirm(DELETE_CONFIRMATION_PROMPT)? {
                service.delete_journal_entry(&id).await?;
                println!("{} entry {}", "Deleted".green(), id);
            } else {
                println!("Kept entry {}", id);
            }
        }
    }
    Ok(())
}
