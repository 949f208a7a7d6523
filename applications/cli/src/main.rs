/// Tilawah - Quran reading and memorization tracker
use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tilawah_cli::{config::AppConfig, recite, render};
use tilawah_content_client::QuranContentClient;
use tilawah_core::{types::require_session, ProgressDraft, TrackingMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tilawah")]
#[command(about = "Quran reading and memorization tracker", long_about = None, version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TILAWAH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all chapters
    Chapters,
    /// Show a chapter with its verses
    Chapter {
        /// Chapter number (1-114)
        number: u32,
    },
    /// Log reading or memorization progress
    Log {
        /// Chapter number (1-114)
        #[arg(long)]
        chapter: u32,
        /// Last verse reached
        #[arg(long)]
        last_verse: u32,
        /// Log memorization instead of reading
        #[arg(long)]
        memorization: bool,
        /// Date of the session (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the verses autoplay would recite from a starting verse
    Recite {
        /// Chapter number (1-114)
        chapter: u32,
        /// Starting verse
        #[arg(long, default_value_t = 1)]
        from: u32,
    },
    /// Show the home dashboard
    Dashboard,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "tilawah=info,tilawah_cli=info,tilawah_content_client=info,tilawah_playback=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate()?;

    match cli.command {
        Commands::Chapters => list_chapters(&config).await?,
        Commands::Chapter { number } => show_chapter(&config, number).await?,
        Commands::Log {
            chapter,
            last_verse,
            memorization,
            date,
        } => log_progress(&config, chapter, last_verse, memorization, date).await?,
        Commands::Recite { chapter, from } => recite_chapter(&config, chapter, from).await?,
        Commands::Dashboard => dashboard(&config)?,
    }

    Ok(())
}

fn content_client(config: &AppConfig) -> anyhow::Result<QuranContentClient> {
    QuranContentClient::new(config.content.clone()).context("Failed to create content client")
}

async fn list_chapters(config: &AppConfig) -> anyhow::Result<()> {
    let chapters = content_client(config)?
        .list_chapters()
        .await
        .context("Failed to fetch chapters")?;

    print!("{}", render::chapter_list(&chapters));
    Ok(())
}

async fn show_chapter(config: &AppConfig, number: u32) -> anyhow::Result<()> {
    let content = content_client(config)?
        .get_chapter_with_verses(number)
        .await
        .with_context(|| format!("Failed to fetch chapter {}", number))?;

    print!("{}", render::chapter_page(&content.chapter, &content.verses));
    Ok(())
}

async fn log_progress(
    config: &AppConfig,
    chapter_number: u32,
    last_verse: u32,
    memorization: bool,
    date: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let chapters = content_client(config)?
        .list_chapters()
        .await
        .context("Failed to fetch chapters")?;

    let mut draft = ProgressDraft::new();
    if memorization {
        draft.set_mode(TrackingMode::Memorization);
    }
    draft.select_chapter_number(chapter_number, &chapters)?;

    draft.slide_to(last_verse);
    if draft.last_verse() != last_verse {
        tracing::warn!(
            requested = last_verse,
            used = draft.last_verse(),
            "Last verse outside the chapter, clamped"
        );
    }

    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let entry = draft.submit(date)?;

    tracing::info!(
        mode = ?entry.mode,
        chapter = entry.chapter_number,
        last_verse = entry.last_verse,
        completion = draft.completion_percent(),
        "Progress logged"
    );

    // Lookup cannot miss: select_chapter_number succeeded
    if let Some(chapter) = chapters.iter().find(|c| c.number == entry.chapter_number) {
        print!("{}", render::progress_entry(&entry, chapter));
    }
    Ok(())
}

async fn recite_chapter(config: &AppConfig, number: u32, from: u32) -> anyhow::Result<()> {
    let content = content_client(config)?
        .get_chapter_with_verses(number)
        .await
        .with_context(|| format!("Failed to fetch chapter {}", number))?;

    let queue = recite::recitation_queue(
        &content.chapter,
        content.verses,
        from,
        config.playback.autoplay,
    )?;

    print!("{}", render::recitation_queue(&content.chapter, &queue));
    Ok(())
}

fn dashboard(config: &AppConfig) -> anyhow::Result<()> {
    let session = config.session();
    let session = require_session(session.as_ref())
        .context("Set profile.display_name or TILAWAH_PROFILE__DISPLAY_NAME to sign in")?;

    print!("{}", render::dashboard(session, &config.goals));
    Ok(())
}
