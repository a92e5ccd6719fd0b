//! Citation engine CLI - Entry Point
//!
//! Thin adapter over the library: marshals JSON files into engine calls and
//! engine output onto stdout. No citation logic lives here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use citation_engine::citation::{format_full_reference, format_in_text_example};
use citation_engine::formatters::format_studies_markdown;
use citation_engine::models::{Paper, SearchResult};
use citation_engine::{prompt, NoteStore, ReferenceExtractor};

#[derive(Parser, Debug)]
#[command(name = "citation-engine")]
#[command(about = "APA citation formatting and reference extraction")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Render paper records as numbered APA full references
    Format {
        /// Paper records as JSON (array of papers, or a search result page)
        #[arg(long)]
        papers: PathBuf,

        /// Also print the in-text citation example sentence fragment
        #[arg(long)]
        in_text: bool,
    },

    /// Re-extract the deduplicated reference list from note text
    Extract {
        /// Notes as a JSON array of strings
        #[arg(long)]
        notes: PathBuf,
    },

    /// Build the note-generation prompt for a topic
    Prompt {
        /// Research topic
        #[arg(long)]
        topic: String,

        /// Paper records as JSON (array of papers, or a search result page)
        #[arg(long)]
        papers: PathBuf,
    },

    /// Summarize paper records as Markdown study cards
    Studies {
        /// Paper records as JSON (array of papers, or a search result page)
        #[arg(long)]
        papers: PathBuf,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

/// Load paper records from a JSON file holding either a bare array or a
/// search result page.
fn load_papers(path: &Path) -> anyhow::Result<Vec<Paper>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read papers file {}", path.display()))?;

    if let Ok(papers) = serde_json::from_str::<Vec<Paper>>(&data) {
        return Ok(papers);
    }

    let page: SearchResult = serde_json::from_str(&data)
        .context("papers file is neither a paper array nor a search result page")?;
    Ok(page.data)
}

/// Load notes from a JSON array of strings into a store, skipping entries
/// the store rejects.
fn load_notes(path: &Path) -> anyhow::Result<NoteStore> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read notes file {}", path.display()))?;
    let texts: Vec<String> =
        serde_json::from_str(&data).context("notes file must be a JSON array of strings")?;

    let mut store = NoteStore::new();
    for text in texts {
        if let Err(err) = store.append(&text) {
            tracing::warn!("{}", err.to_user_message());
        }
    }
    Ok(store)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    match cli.command {
        Command::Format { papers, in_text } => {
            let papers = load_papers(&papers)?;
            for (i, paper) in papers.iter().enumerate() {
                println!("{}. {}", i + 1, format_full_reference(paper));
            }
            if in_text {
                println!("\nIn-text example: {}", format_in_text_example(&papers));
            }
        }
        Command::Extract { notes } => {
            let store = load_notes(&notes)?;
            let set = ReferenceExtractor::new().extract_from_store(&store);
            if set.is_empty() {
                println!("No references found.");
            } else {
                for (i, reference) in set.iter().enumerate() {
                    println!("{}. {}", i + 1, reference);
                }
            }
        }
        Command::Prompt { topic, papers } => {
            let papers = load_papers(&papers)?;
            let prompt = prompt::note_prompt(&topic, &papers)
                .map_err(|err| anyhow::anyhow!(err.to_user_message()))?;
            println!("{prompt}");
        }
        Command::Studies { papers } => {
            let papers = load_papers(&papers)?;
            print!("{}", format_studies_markdown(&papers));
        }
    }

    Ok(())
}
