//! Interval calculation from a confidence rating.

use super::ReviewOutcome;
use crate::error::{Result, StudyError};
use crate::types::{Confidence, ConfidenceBand};
use chrono::{DateTime, Days, Utc};

const MEDIUM_MULTIPLIER: u64 = 2;
const HIGH_MULTIPLIER: u64 = 3;

/// Compute the new repetition level and next review date for a rating.
///
/// `repetition_level` is the card's level before this review and must be at
/// least 1. The result is a whole number of calendar days after `now`.
pub fn compute_next_review(
    confidence: Confidence,
    repetition_level: u32,
    now: DateTime<Utc>,
) -> Result<ReviewOutcome> {
    let (interval_days, new_level) = interval_for(confidence.band(), repetition_level)?;

    Ok(ReviewOutcome {
        confidence,
        repetition_level: new_level,
        interval_days,
        next_review: add_days(now, interval_days)?,
    })
}

/// Uncapped interval in days and the new repetition level for a band.
pub fn interval_for(band: ConfidenceBand, repetition_level: u32) -> Result<(u64, u32)> {
    if repetition_level == 0 {
        return Err(StudyError::InvalidRepetitionLevel {
            value: repetition_level,
        });
    }

    let level = u64::from(repetition_level);
    let next_level = repetition_level.saturating_add(1);
    Ok(match band {
        ConfidenceBand::Low => (1, 1),
        ConfidenceBand::Medium => (level * MEDIUM_MULTIPLIER, next_level),
        ConfidenceBand::High => (level * HIGH_MULTIPLIER, next_level),
    })
}

pub(crate) fn add_days(now: DateTime<Utc>, days: u64) -> Result<DateTime<Utc>> {
    now.checked_add_days(Days::new(days))
        .ok_or(StudyError::DateOutOfRange { days })
}
