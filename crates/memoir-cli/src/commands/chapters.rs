//! Chapter listing, toggling and prompt browsing.

use anyhow::{Result, bail};
use colored::Colorize;
use memoir_application::MemoirService;
use memoir_core::session::JOURNAL_CHAPTER_ID;

/// Prints every chapter with its progress; the open one is marked.
pub fn list(service: &MemoirService) {
    let open = service.open_chapter();

    let journal_marker = if open == Some(JOURNAL_CHAPTER_ID) { ">" } else { " " };
    println!(
        "{} {}  {} entries",
        journal_marker,
        JOURNAL_CHAPTER_ID.bold(),
        service.journal_entries().len()
    );

    for progress in service.progress() {
        let marker = if open == Some(progress.life_stage.as_str()) { ">" } else { " " };
        println!(
            "{} {}  {}/{} answered",
            marker,
            progress.life_stage.bold(),
            progress.answered,
            progress.total
        );
    }
}

/// Toggles a chapter open or closed; at most one is ever open.
pub async fn toggle(service: &mut MemoirService, chapter: &str) -> Result<()> {
    if chapter != JOURNAL_CHAPTER_ID && !service.catalog().has_stage(chapter) {
        bail!("unknown chapter: {chapter}");
    }

    match service.toggle_chapter(chapter).await? {
        Some(open) => println!("Opened {}", open.bold()),
        None => println!("Closed {}", chapter),
    }
    Ok(())
}

/// Lists the prompts of one life-stage chapter.
pub fn prompts(service: &MemoirService, chapter: &str) -> Result<()> {
    if !service.catalog().has_stage(chapter) {
        bail!("unknown chapter: {chapter}");
    }

    for prompt in service.catalog().prompts_for_stage(chapter) {
        let answered = if service.state().is_answered(&prompt.id) {
            "answered".green()
        } else {
            "open".normal()
        };
        println!(
            "{}  [{}] [{}]\n    {}",
            prompt.id.bold(),
            prompt.sensitivity,
            answered,
            prompt.text
        );
    }
    Ok(())
}
