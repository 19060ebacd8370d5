//! Flashcard study core: spaced repetition scheduling and deck bookkeeping.
//!
//! Provides:
//! - Confidence-band interval scheduling and due-card selection
//! - Decks with card editing and stats
//! - Study sessions with running review totals
//! - Policy settings (input validation, interval cap)
//! - Clock abstraction so callers control `now`

pub mod algorithm;
pub mod clock;
pub mod deck;
pub mod error;
pub mod session;
pub mod settings;
pub mod types;

pub use algorithm::{
    compute_next_review, due_cards, interval_for, select_next_due_card, ReviewOutcome, Scheduler,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use deck::{Deck, DeckStats, MASTERED_LEVEL};
pub use error::{Result, StudyError};
pub use session::{SessionStats, StudySession};
pub use settings::{DeckSettings, EffectiveSettings, GlobalSettings, InputPolicy};
pub use types::{Card, Confidence, ConfidenceBand, Difficulty, NewCard, CORRECT_THRESHOLD};
