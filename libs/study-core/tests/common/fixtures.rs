//! Factory functions for cards, decks and timestamps.

use chrono::{DateTime, Duration, TimeZone, Utc};
use study_core::{Card, Deck, NewCard};

/// Midnight UTC on the given 2024 date.
pub fn date(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, 0, 0, 0).unwrap()
}

/// A card that has never been reviewed.
pub fn new_card(front: &str) -> Card {
    Card::new(NewCard::new(front, format!("{front} answer")))
}

/// A card reviewed one day before `next_review`.
pub fn reviewed_card(front: &str, next_review: DateTime<Utc>) -> Card {
    let mut card = new_card(front);
    card.repetition_level = 2;
    card.confidence = Some(study_core::Confidence::new(3).unwrap());
    card.last_reviewed = Some(next_review - Duration::days(1));
    card.next_review = Some(next_review);
    card
}

/// Deck with `count` numbered, never-reviewed cards.
pub fn deck_with_cards(count: usize) -> Deck {
    let mut deck = Deck::new("Fixture deck", "generated", date(1, 1));
    for i in 0..count {
        deck.add_card(NewCard::new(format!("Question {}?", i + 1), format!("Answer {}.", i + 1)));
    }
    deck
}
