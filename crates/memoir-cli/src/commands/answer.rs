//! Answering a prompt: typed text or a narration recording, with the
//! consent gate in between for sensitive prompts.

use super::utils::confirm;
use anyhow::{Result, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use clap::Args;
use colored::Colorize;
use memoir_application::{CaptureResult, CaptureStart, MemoirService};
use memoir_core::state::{Answer, Photo};
use memoir_interaction::FileAudioSource;
use std::path::PathBuf;

#[derive(Args)]
pub struct AnswerArgs {
    /// The prompt id, e.g. "C-017"
    pub prompt_id: String,

    /// Typed answer text (mutually exclusive with --audio)
    #[arg(long, conflicts_with = "audio")]
    pub text: Option<String>,

    /// Pre-recorded narration file to transcribe
    #[arg(long)]
    pub audio: Option<PathBuf>,

    /// Photo to attach to the answer
    #[arg(long)]
    pub photo: Option<PathBuf>,

    /// Caption for the attached photo
    #[arg(long, requires = "photo")]
    pub caption: Option<String>,
}

pub async fn run(service: &mut MemoirService, args: AnswerArgs) -> Result<()> {
    let prompt = service
        .catalog()
        .get(&args.prompt_id)
        .ok_or_else(|| anyhow::anyhow!("unknown prompt: {}", args.prompt_id))?
        .clone();

    println!("{}", prompt.text.bold());

    let text = match (&args.text, &args.audio) {
        (Some(text), _) => text.clone(),
        (None, Some(audio_path)) => match capture(service, &prompt.id, audio_path).await? {
            Some(text) => text,
            None => return Ok(()),
        },
        (None, None) => bail!("provide --text or --audio"),
    };

    if text.trim().is_empty() {
        bail!("answer text is empty; nothing saved");
    }

    let photo = match &args.photo {
        Some(path) => Some(load_photo(path, args.caption.as_deref().unwrap_or(""))?),
        None => None,
    };

    let answer = Answer {
        text: text.trim().to_string(),
        photo,
    };
    let progress = service.save_answer(&prompt.id, answer).await?;

    let chapter = progress
        .iter()
        .find(|p| p.life_stage == prompt.life_stage)
        .map(|p| format!("{}/{}", p.answered, p.total))
        .unwrap_or_default();
    println!("{} ({} answered in {})", "Saved.".green(), chapter, prompt.life_stage);
    Ok(())
}

/// Runs the consent-gated capture pipeline for one narration file.
///
/// Returns the draft transcript the user accepted, or `None` when the
/// attempt ended without one (consent declined, device failure, empty
/// capture, transcription failure).
async fn capture(
    service: &mut MemoirService,
    prompt_id: &str,
    audio_path: &PathBuf,
) -> Result<Option<String>> {
    let source = FileAudioSource::new(audio_path);

    let mut start = service.begin_capture(prompt_id, &source).await?;
    if let CaptureStart::ConsentRequired { message } = start {
        let granted = confirm(message)?;
        start = service.resolve_consent(granted, &source).await?;
    }

    match start {
        CaptureStart::Recording => {}
        CaptureStart::Declined => {
            println!("Okay - this one stays unanswered for now.");
            return Ok(None);
        }
        CaptureStart::Failed(failure) => {
            println!("{}", failure.status_message().red());
            return Ok(None);
        }
        CaptureStart::ConsentRequired { .. } => unreachable!("consent already resolved"),
    }

    println!("{}", service.capture_status_line());
    match service.finish_capture().await {
        CaptureResult::Draft(text) => {
            println!("\n{}\n{}\n", "Transcript:".bold(), text);
            if confirm("Save this as your answer?")? {
                Ok(Some(text))
            } else {
                println!("Not saved. Edit the transcript and use --text to save it.");
                Ok(None)
            }
        }
        CaptureResult::NotRecording => Ok(None),
        CaptureResult::Failed(failure) => {
            println!("{}", failure.status_message().red());
            Ok(None)
        }
    }
}

/// Reads a photo file into a data URI with its caption.
fn load_photo(path: &PathBuf, caption: &str) -> Result<Photo> {
    let bytes = std::fs::read(path)?;
    let mime_type = mime_guess::from_path(path).first_or_octet_stream();
    Ok(Photo {
        data: format!("data:{};base64,{}", mime_type, BASE64_STANDARD.encode(bytes)),
        annotation: caption.to_string(),
    })
}
