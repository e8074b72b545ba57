//! The story foundation (core info) used to personalize the assistant.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use memoir_application::MemoirService;
use memoir_core::state::CoreInfo;

#[derive(Args)]
pub struct FoundationArgs {
    /// One-paragraph life summary
    #[arg(long)]
    pub summary: Option<String>,

    /// Key people and their relationships
    #[arg(long)]
    pub people: Option<String>,

    /// Core values
    #[arg(long)]
    pub values: Option<String>,
}

pub async fn run(service: &mut MemoirService, args: FoundationArgs) -> Result<()> {
    if args.summary.is_none() && args.people.is_none() && args.values.is_none() {
        let info = &service.state().core_info;
        if info.is_empty() {
            println!("No foundation saved yet. Set it with --summary/--people/--values.");
        } else {
            println!("{}\n{}", "Life Summary".bold(), info.summary);
            println!("{}\n{}", "Key People".bold(), info.people);
            println!("{}\n{}", "Core Values".bold(), info.values);
        }
        return Ok(());
    }

    // Wholesale replace: unset flags keep their stored value.
    let current = service.state().core_info.clone();
    let info = CoreInfo {
        summary: args.summary.unwrap_or(current.summary),
        people: args.people.unwrap_or(current.people),
        values: args.values.unwrap_or(current.values),
    };
    service.save_core_info(info).await?;
    println!("{}", "Foundation saved. The assistant will pick it up on its next reply.".green());
    Ok(())
}
