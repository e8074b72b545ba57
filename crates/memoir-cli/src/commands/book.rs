//! Compilation, export and title suggestions.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use memoir_application::MemoirService;
use std::path::PathBuf;

#[derive(Args)]
pub struct CompileArgs {
    /// Emit a standalone HTML page instead of plain text
    #[arg(long)]
    pub html: bool,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn compile(service: &MemoirService, args: CompileArgs) -> Result<()> {
    let document = service.compile();
    let rendered = if args.html {
        document.to_html()
    } else {
        document.to_plain_text()
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            println!("Wrote {} to {}", document.title.bold(), path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

pub async fn titles(service: &MemoirService) -> Result<()> {
    let suggestions = service.suggest_titles().await?;
    if suggestions.is_empty() {
        println!("No suggestions came back. Try again.");
        return Ok(());
    }
    for title in suggestions {
        println!("- {}", title);
    }
    Ok(())
}
