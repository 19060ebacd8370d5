//! Study sessions over a single deck.

use crate::algorithm::{ReviewOutcome, Scheduler};
use crate::deck::Deck;
use crate::error::{Result, StudyError};
use crate::settings::{EffectiveSettings, GlobalSettings};
use crate::types::Card;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Running totals for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_reviewed: u32,
    pub correct_count: u32,
    pub average_confidence: f64,
}

impl SessionStats {
    fn record(&mut self, confidence: u8, correct: bool) {
        let n = f64::from(self.total_reviewed);
        self.average_confidence =
            (self.average_confidence * n + f64::from(confidence)) / (n + 1.0);
        self.total_reviewed += 1;
        if correct {
            self.correct_count += 1;
        }
    }

    /// Share of reviews rated 3 or higher, 0.0 before any review.
    pub fn accuracy(&self) -> f64 {
        if self.total_reviewed == 0 {
            0.0
        } else {
            f64::from(self.correct_count) / f64::from(self.total_reviewed)
        }
    }
}

/// One pass over a deck. Holding the deck mutably serializes reviews.
pub struct StudySession<'a> {
    deck: &'a mut Deck,
    scheduler: Scheduler,
    stats: SessionStats,
}

impl<'a> StudySession<'a> {
    pub fn new(deck: &'a mut Deck, scheduler: Scheduler) -> Self {
        Self {
            deck,
            scheduler,
            stats: SessionStats::default(),
        }
    }

    /// Session using the global settings merged with the deck's overrides.
    pub fn for_deck(deck: &'a mut Deck, global: &GlobalSettings) -> Self {
        let settings = EffectiveSettings::merge(global, Some(&deck.settings));
        Self::new(deck, Scheduler::new(settings))
    }

    pub fn current_card(&self, now: DateTime<Utc>) -> Option<&Card> {
        self.deck.next_due(now)
    }

    /// Apply a rating to a card and record it in the session totals.
    pub fn rate(
        &mut self,
        card_id: Uuid,
        raw_confidence: i64,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome> {
        let card = self
            .deck
            .card_mut(card_id)
            .ok_or(StudyError::CardNotFound { id: card_id })?;
        let outcome = self.scheduler.review(card, raw_confidence, now)?;

        self.stats
            .record(outcome.confidence.value(), outcome.confidence.is_correct());
        self.deck.last_studied = Some(now);

        Ok(outcome)
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn deck(&self) -> &Deck {
        &*self.deck
    }
}
