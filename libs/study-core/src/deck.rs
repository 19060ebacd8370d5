//! Decks: named card collections and their bookkeeping.

use crate::algorithm::{due_cards, select_next_due_card};
use crate::error::{Result, StudyError};
use crate::settings::DeckSettings;
use crate::types::{Card, NewCard};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Repetition level at which a card counts as mastered in stats.
pub const MASTERED_LEVEL: u32 = 5;

/// A named collection of cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    pub created: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_studied: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "DeckSettings::is_empty")]
    pub settings: DeckSettings,
}

/// Card counts for a deck at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckStats {
    pub card_count: usize,
    pub new_count: usize,
    pub due_count: usize,
    pub mastered_count: usize,
    pub average_repetition_level: f64,
}

impl Deck {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            cards: Vec::new(),
            created: now,
            last_studied: None,
            settings: DeckSettings::default(),
        }
    }

    /// Append a fresh card and return its id.
    pub fn add_card(&mut self, new_card: NewCard) -> Uuid {
        let card = Card::new(new_card);
        let id = card.id;
        self.cards.push(card);
        id
    }

    pub fn card(&self, id: Uuid) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn card_mut(&mut self, id: Uuid) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    /// Correct a card's text. The review schedule is kept.
    pub fn edit_card(
        &mut self,
        id: Uuid,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Result<()> {
        let card = self.card_mut(id).ok_or(StudyError::CardNotFound { id })?;
        card.front = front.into();
        card.back = back.into();
        Ok(())
    }

    pub fn remove_card(&mut self, id: Uuid) -> Result<Card> {
        let index = self
            .cards
            .iter()
            .position(|card| card.id == id)
            .ok_or(StudyError::CardNotFound { id })?;
        Ok(self.cards.remove(index))
    }

    pub fn next_due(&self, now: DateTime<Utc>) -> Option<&Card> {
        select_next_due_card(&self.cards, now)
    }

    /// Check every card before accepting a deck from storage.
    pub fn validate(&self) -> Result<()> {
        self.cards.iter().try_for_each(Card::validate)
    }

    pub fn stats(&self, now: DateTime<Utc>) -> DeckStats {
        let card_count = self.cards.len();
        let average_repetition_level = if card_count == 0 {
            0.0
        } else {
            let total: u64 = self
                .cards
                .iter()
                .map(|card| u64::from(card.repetition_level))
                .sum();
            total as f64 / card_count as f64
        };

        DeckStats {
            card_count,
            new_count: self.cards.iter().filter(|card| card.is_new()).count(),
            due_count: due_cards(&self.cards, now).len(),
            mastered_count: self
                .cards
                .iter()
                .filter(|card| card.repetition_level >= MASTERED_LEVEL)
                .count(),
            average_repetition_level,
        }
    }
}
