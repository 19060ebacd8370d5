//! Core types for the study deck.

use crate::error::{Result, StudyError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest confidence that still counts as a successful recall.
pub const CORRECT_THRESHOLD: u8 = 3;

/// Self-reported recall confidence on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Confidence(u8);

impl Confidence {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw rating, rejecting anything outside 1..=5.
    pub fn new(value: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(StudyError::InvalidConfidence { value })
        }
    }

    /// Clamp a raw rating into 1..=5.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn band(self) -> ConfidenceBand {
        match self.0 {
            v if v < CORRECT_THRESHOLD => ConfidenceBand::Low,
            v if v == CORRECT_THRESHOLD => ConfidenceBand::Medium,
            _ => ConfidenceBand::High,
        }
    }

    /// Whether this rating counts towards the repetition level.
    pub fn is_correct(self) -> bool {
        self.0 >= CORRECT_THRESHOLD
    }
}

impl TryFrom<i64> for Confidence {
    type Error = StudyError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Confidence> for u8 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

/// Interval policy band a confidence rating falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    /// Not recalled: review again tomorrow, level resets.
    Low,
    /// Recalled with effort: interval doubles with the level.
    Medium,
    /// Recalled easily: interval triples with the level.
    High,
}

/// Author-assigned difficulty label. Not used by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl Difficulty {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Fields supplied by the user when creating a card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCard {
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewCard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            ..Default::default()
        }
    }
}

/// A question/answer card with its review schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
    pub repetition_level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review: Option<DateTime<Utc>>,
}

impl Card {
    /// Create a card with no review history at repetition level 1.
    pub fn new(new_card: NewCard) -> Self {
        Self {
            id: Uuid::new_v4(),
            front: new_card.front,
            back: new_card.back,
            topic: new_card.topic,
            difficulty: new_card.difficulty,
            tags: new_card.tags,
            repetition_level: 1,
            confidence: None,
            last_reviewed: None,
            next_review: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.next_review.is_none()
    }

    /// Scheduled before its own last review.
    pub fn is_malformed(&self) -> bool {
        matches!(
            (self.last_reviewed, self.next_review),
            (Some(last), Some(next)) if next < last
        )
    }

    /// Due when never reviewed, when the scheduled date has passed, or when
    /// the schedule is malformed.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.next_review {
            None => true,
            Some(next) => next <= now || self.is_malformed(),
        }
    }

    /// Reject cards whose schedule is malformed. A zero repetition level is
    /// left to the scheduler's input policy.
    pub fn validate(&self) -> Result<()> {
        if self.is_malformed() {
            return Err(StudyError::MalformedCard { id: self.id });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn confidence_bands() {
        assert_eq!(Confidence::new(1).unwrap().band(), ConfidenceBand::Low);
        assert_eq!(Confidence::new(2).unwrap().band(), ConfidenceBand::Low);
        assert_eq!(Confidence::new(3).unwrap().band(), ConfidenceBand::Medium);
        assert_eq!(Confidence::new(4).unwrap().band(), ConfidenceBand::High);
        assert_eq!(Confidence::new(5).unwrap().band(), ConfidenceBand::High);
    }

    #[test]
    fn confidence_rejects_out_of_range() {
        assert!(matches!(
            Confidence::new(0),
            Err(StudyError::InvalidConfidence { value: 0 })
        ));
        assert!(matches!(
            Confidence::new(6),
            Err(StudyError::InvalidConfidence { value: 6 })
        ));
    }

    #[test]
    fn confidence_clamps() {
        assert_eq!(Confidence::clamped(-4).value(), 1);
        assert_eq!(Confidence::clamped(9).value(), 5);
        assert_eq!(Confidence::clamped(3).value(), 3);
    }

    #[test]
    fn confidence_deserialize_validates() {
        let ok: Confidence = serde_json::from_str("4").unwrap();
        assert_eq!(ok.value(), 4);
        assert!(serde_json::from_str::<Confidence>("8").is_err());
    }

    #[test]
    fn new_card_starts_unreviewed() {
        let card = Card::new(NewCard::new("2 + 2", "4"));
        assert_eq!(card.repetition_level, 1);
        assert!(card.confidence.is_none());
        assert!(card.is_new());
        assert!(card.is_due(at(1)));
    }

    #[test]
    fn card_due_when_date_passed() {
        let mut card = Card::new(NewCard::new("q", "a"));
        card.last_reviewed = Some(at(1));
        card.next_review = Some(at(3));
        assert!(!card.is_due(at(2)));
        assert!(card.is_due(at(3)));
        assert!(card.is_due(at(4)));
    }

    #[test]
    fn malformed_card_is_due_and_fails_validation() {
        let mut card = Card::new(NewCard::new("q", "a"));
        card.last_reviewed = Some(at(10));
        card.next_review = Some(at(10) - Duration::hours(1));
        assert!(card.is_malformed());
        assert!(card.is_due(at(1)));
        assert!(matches!(
            card.validate(),
            Err(StudyError::MalformedCard { .. })
        ));
    }

    #[test]
    fn zero_level_passes_validation() {
        let mut card = Card::new(NewCard::new("q", "a"));
        card.repetition_level = 0;
        assert!(card.validate().is_ok());
    }

    #[test]
    fn difficulty_parse() {
        assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("extreme"), None);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
