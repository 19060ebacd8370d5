//! Deck and settings files. Decks are whole-file JSON; the last write wins.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use study_core::{Deck, GlobalSettings};

/// Read a deck file, rejecting cards with broken schedules.
pub fn load_deck(path: &Path) -> anyhow::Result<Deck> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading deck {}", path.display()))?;
    let deck: Deck = serde_json::from_str(&content)
        .with_context(|| format!("parsing deck {}", path.display()))?;
    deck.validate()
        .with_context(|| format!("validating deck {}", path.display()))?;
    tracing::debug!(path = %path.display(), cards = deck.cards.len(), "deck loaded");
    Ok(deck)
}

/// Write a new deck file, failing if the path already exists.
pub fn create_deck(path: &Path, deck: &Deck) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(deck)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("creating deck {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("writing deck {}", path.display()))?;
    tracing::debug!(path = %path.display(), "deck created");
    Ok(())
}

pub fn save_deck(path: &Path, deck: &Deck) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(deck)?;
    fs::write(path, content).with_context(|| format!("writing deck {}", path.display()))?;
    tracing::debug!(path = %path.display(), cards = deck.cards.len(), "deck saved");
    Ok(())
}

pub fn load_settings(path: &Path) -> anyhow::Result<GlobalSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading settings {}", path.display()))?;
    GlobalSettings::from_json(&content)
        .with_context(|| format!("parsing settings {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use study_core::{InputPolicy, NewCard};

    #[test]
    fn deck_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let mut deck = Deck::new("Biology", "cells", Utc::now());
        deck.add_card(NewCard::new("mitochondria", "powerhouse"));

        save_deck(&path, &deck).unwrap();
        let loaded = load_deck(&path).unwrap();

        assert_eq!(loaded.id, deck.id);
        assert_eq!(loaded.cards, deck.cards);
    }

    #[test]
    fn create_deck_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let first = Deck::new("First", "", Utc::now());
        create_deck(&path, &first).unwrap();

        let err = create_deck(&path, &Deck::new("Second", "", Utc::now())).unwrap_err();
        assert!(err.to_string().starts_with("creating deck"));
        assert_eq!(load_deck(&path).unwrap().name, "First");
    }

    #[test]
    fn zero_level_card_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let mut deck = Deck::new("Imported", "", Utc::now());
        deck.add_card(NewCard::new("q", "a"));
        deck.cards[0].repetition_level = 0;
        save_deck(&path, &deck).unwrap();

        assert_eq!(load_deck(&path).unwrap().cards[0].repetition_level, 0);
    }

    #[test]
    fn malformed_card_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let mut deck = Deck::new("Broken", "", Utc::now());
        deck.add_card(NewCard::new("q", "a"));
        let reviewed = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        deck.cards[0].last_reviewed = Some(reviewed);
        deck.cards[0].next_review = Some(reviewed - Duration::days(3));
        save_deck(&path, &deck).unwrap();

        let err = load_deck(&path).unwrap_err();
        assert!(err.to_string().starts_with("validating deck"));
    }

    #[test]
    fn missing_deck_reports_path() {
        let err = load_deck(Path::new("/nonexistent/deck.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/deck.json"));
    }

    #[test]
    fn settings_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"input_policy": "clamp"}"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.input_policy, InputPolicy::Clamp);
        assert_eq!(settings.max_interval_days, None);
    }
}
