//! Spaced repetition scheduling.
//!
//! Interval policy by confidence band:
//!
//! | confidence | interval (days)        | new level   |
//! |------------|------------------------|-------------|
//! | 1-2        | 1                      | 1           |
//! | 3          | level * 2              | level + 1   |
//! | 4-5        | level * 3              | level + 1   |

pub mod interval;
pub mod selection;

pub use interval::{compute_next_review, interval_for};
pub use selection::{due_cards, select_next_due_card};

use crate::error::Result;
use crate::settings::{EffectiveSettings, InputPolicy};
use crate::types::{Card, Confidence};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of scheduling a card after review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewOutcome {
    /// Rating actually applied, after the input policy.
    pub confidence: Confidence,
    pub repetition_level: u32,
    pub interval_days: u64,
    pub next_review: DateTime<Utc>,
}

/// Scheduler configured with an input policy and optional interval cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    settings: EffectiveSettings,
}

impl Scheduler {
    pub fn new(settings: EffectiveSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> EffectiveSettings {
        self.settings
    }

    /// Schedule a review from raw user input.
    pub fn schedule(
        &self,
        raw_confidence: i64,
        repetition_level: u32,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome> {
        let (confidence, repetition_level) = match self.settings.input_policy {
            InputPolicy::Reject => (Confidence::new(raw_confidence)?, repetition_level),
            InputPolicy::Clamp => (Confidence::clamped(raw_confidence), repetition_level.max(1)),
        };

        let (mut interval_days, new_level) = interval_for(confidence.band(), repetition_level)?;
        if let Some(cap) = self.settings.max_interval_days {
            interval_days = interval_days.min(u64::from(cap.max(1)));
        }

        Ok(ReviewOutcome {
            confidence,
            repetition_level: new_level,
            interval_days,
            next_review: interval::add_days(now, interval_days)?,
        })
    }

    /// Review a card in place. The card is untouched on error.
    pub fn review(
        &self,
        card: &mut Card,
        raw_confidence: i64,
        now: DateTime<Utc>,
    ) -> Result<ReviewOutcome> {
        let outcome = self.schedule(raw_confidence, card.repetition_level, now)?;

        card.confidence = Some(outcome.confidence);
        card.repetition_level = outcome.repetition_level;
        card.last_reviewed = Some(now);
        card.next_review = Some(outcome.next_review);

        tracing::debug!(
            card_id = %card.id,
            confidence = outcome.confidence.value(),
            level = outcome.repetition_level,
            interval_days = outcome.interval_days,
            "card reviewed"
        );

        Ok(outcome)
    }
}
