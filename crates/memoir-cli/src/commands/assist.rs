//! One-shot chat with the memoir assistant.

use anyhow::{Result, bail};
use colored::Colorize;
use memoir_application::MemoirService;

pub async fn chat(service: &mut MemoirService, message: &str) -> Result<()> {
    if message.trim().is_empty() {
        bail!("nothing to send - give the assistant a message");
    }

    let reply = service.chat(message.trim()).await?;
    println!("{} {}", "assistant:".bold(), reply);
    Ok(())
}
