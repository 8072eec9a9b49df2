//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `journal_core` wiring end to end: config, logging, store,
//!   capture flow and display formatting.
//! - Keep output deterministic apart from ids and timestamps.

use chrono::Local;
use journal_core::format::{entry_caption, format_chapter_date, format_relative_time};
use journal_core::prompts::random_prompt;
use journal_core::sample::sample_chapters;
use journal_core::{
    core_version, init_logging, AudioClip, ImageSource, JournalConfig, JournalService,
    JournalStore, SimulatedTextExtractor, SimulatedTranscriber,
};
use log::info;
use std::error::Error;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("journal_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = JournalConfig::from_env()?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }
    info!(
        "event=cli_start module=cli status=ok seed_sample={}",
        config.seed_sample_chapters
    );

    let store = if config.seed_sample_chapters {
        JournalStore::with_chapters(sample_chapters(chrono::Utc::now()))
    } else {
        JournalStore::new()
    };
    let mut service = JournalService::new(
        store,
        SimulatedTranscriber::default(),
        SimulatedTextExtractor::default(),
    );

    service.create_chapter("Smoke Test")?;
    service.write_text_entry(random_prompt())?;
    service
        .record_voice_entry(&AudioClip::new(vec![0; 16], 4))
        .await?;
    service.extract_image_text(&ImageSource::new("data:image/png;base64,AAAA")).await?;

    println!("journal_core version={}", core_version());
    print_journal(service.store());
    Ok(())
}

fn print_journal<C: journal_core::Clock>(store: &JournalStore<C>) {
    let now = Local::now();
    println!("chapters={}", store.len());
    for chapter in store.chapters() {
        let marker = if store.active_chapter_id() == Some(chapter.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {} ({}, {} entries)",
            chapter.title,
            format_relative_time(chapter.updated_at, now),
            chapter.len()
        );
    }

    let Some(active) = store.active_chapter() else {
        println!("no active chapter");
        return;
    };
    println!();
    println!("{} · {}", active.title, format_chapter_date(active.created_at, &Local));
    for entry in &active.entries {
        println!("  [{}] {}", entry_caption(entry, &Local), entry.content);
    }
}
