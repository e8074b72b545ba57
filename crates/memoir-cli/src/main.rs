use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "memoir")]
#[command(about = "Memoir - consent-aware life story capture and compilation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List chapters and answering progress
    Chapters,
    /// Toggle a chapter (life stage or "Journal") open or closed
    Open {
        /// Chapter id, e.g. "Early Childhood" or "Journal"
        chapter: String,
    },
    /// List the prompts of a chapter
    Prompts {
        /// Chapter id, e.g. "Early Childhood"
        chapter: String,
    },
    /// Answer a prompt from a narration recording or typed text
    Answer(commands::answer::AnswerArgs),
    /// Manage journal entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Show or update the story foundation used to personalize the assistant
    Foundation(commands::foundation::FoundationArgs),
    /// Compile the memoir into an ordered document
    Compile(commands::book::CompileArgs),
    /// Suggest titles for the compiled memoir
    Titles,
    /// Chat with the memoir assistant
    Chat {
        /// The message to send
        message: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let mut service = commands::build_service().await?;

    match cli.command {
        Commands::Chapters => commands::chapters::list(&service),
        Commands::Open { chapter } => commands::chapters::toggle(&mut service, &chapter).await?,
        Commands::Prompts { chapter } => commands::chapters::prompts(&service, &chapter)?,
        Commands::Answer(args) => commands::answer::run(&mut service, args).await?,
        Commands::Journal { action } => commands::journal::run(&mut service, action).await?,
        Commands::Foundation(args) => commands::foundation::run(&mut service, args).await?,
        Commands::Compile(args) => commands::book::compile(&service, args)?,
        Commands::Titles => commands::book::titles(&service).await?,
        Commands::Chat { message } => commands::assist::chat(&mut service, &message.join(" ")).await?,
    }

    Ok(())
}
