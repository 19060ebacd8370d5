//! Command-line study front end over JSON deck files.

pub mod store;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use study_core::{Clock, Deck, Difficulty, GlobalSettings, NewCard, StudySession, SystemClock};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "study", about = "Spaced repetition flashcards")]
pub struct Cli {
    /// Treat this RFC 3339 instant as the current time.
    #[arg(long, global = true)]
    pub now: Option<DateTime<Utc>>,

    /// JSON file with global study settings.
    #[arg(long, global = true, env = "STUDY_SETTINGS")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an empty deck file.
    NewDeck {
        deck: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Add a card to a deck.
    Add {
        deck: PathBuf,
        #[arg(long)]
        front: String,
        #[arg(long)]
        back: String,
        #[arg(long, default_value = "")]
        topic: String,
        #[arg(long, default_value = "medium")]
        difficulty: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Correct a card's front and back text.
    Edit {
        deck: PathBuf,
        card_id: Uuid,
        #[arg(long)]
        front: String,
        #[arg(long)]
        back: String,
    },
    /// Delete a card.
    Remove { deck: PathBuf, card_id: Uuid },
    /// Show the next card due for review.
    Next { deck: PathBuf },
    /// Record a 1-5 confidence rating for a card.
    Review {
        deck: PathBuf,
        card_id: Uuid,
        #[arg(allow_negative_numbers = true)]
        confidence: i64,
    },
    /// Print deck stats as JSON.
    Stats { deck: PathBuf },
}

/// Execute a parsed command, writing user-facing output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let now = cli.now.unwrap_or_else(|| SystemClock.now());
    let global = match &cli.settings {
        Some(path) => store::load_settings(path)?,
        None => GlobalSettings::default(),
    };

    match cli.command {
        Command::NewDeck {
            deck,
            name,
            description,
        } => {
            let created = Deck::new(name, description, now);
            store::create_deck(&deck, &created)?;
            writeln!(out, "{}", created.id)?;
        }
        Command::Add {
            deck,
            front,
            back,
            topic,
            difficulty,
            tags,
        } => {
            let difficulty = Difficulty::from_str(&difficulty)
                .with_context(|| format!("unknown difficulty {difficulty:?}"))?;
            let mut loaded = store::load_deck(&deck)?;
            let id = loaded.add_card(NewCard {
                front,
                back,
                topic,
                difficulty,
                tags,
            });
            store::save_deck(&deck, &loaded)?;
            writeln!(out, "{id}")?;
        }
        Command::Edit {
            deck,
            card_id,
            front,
            back,
        } => {
            let mut loaded = store::load_deck(&deck)?;
            loaded.edit_card(card_id, front, back)?;
            store::save_deck(&deck, &loaded)?;
        }
        Command::Remove { deck, card_id } => {
            let mut loaded = store::load_deck(&deck)?;
            let removed = loaded.remove_card(card_id)?;
            store::save_deck(&deck, &loaded)?;
            writeln!(out, "removed {}", removed.front)?;
        }
        Command::Next { deck } => {
            let loaded = store::load_deck(&deck)?;
            match loaded.next_due(now) {
                Some(card) => writeln!(out, "{}\t{}", card.id, card.front)?,
                None => writeln!(out, "no cards due")?,
            }
        }
        Command::Review {
            deck,
            card_id,
            confidence,
        } => {
            let mut loaded = store::load_deck(&deck)?;
            let outcome =
                StudySession::for_deck(&mut loaded, &global).rate(card_id, confidence, now)?;
            store::save_deck(&deck, &loaded)?;
            tracing::info!(%card_id, level = outcome.repetition_level, "review saved");
            writeln!(
                out,
                "level {} next review {}",
                outcome.repetition_level,
                outcome.next_review.to_rfc3339()
            )?;
        }
        Command::Stats { deck } => {
            let loaded = store::load_deck(&deck)?;
            serde_json::to_writer_pretty(&mut *out, &loaded.stats(now))?;
            writeln!(out)?;
        }
    }

    Ok(())
}
