//! Due-card selection.
//!
//! Never-reviewed cards come first in their input order, then reviewed
//! cards by earliest `next_review`. Ties keep the input order.

use crate::types::Card;
use chrono::{DateTime, Utc};

/// Pick the next card to study, or `None` when nothing is due.
pub fn select_next_due_card(cards: &[Card], now: DateTime<Utc>) -> Option<&Card> {
    // min_by_key returns the first of equal minima, which keeps ties stable.
    cards
        .iter()
        .filter(|card| is_eligible(card, now))
        .min_by_key(|card| due_order(card))
}

/// All due cards in study order.
pub fn due_cards(cards: &[Card], now: DateTime<Utc>) -> Vec<&Card> {
    let mut due: Vec<&Card> = cards.iter().filter(|card| is_eligible(card, now)).collect();
    due.sort_by_key(|card| due_order(card));
    due
}

fn due_order(card: &Card) -> (bool, Option<DateTime<Utc>>) {
    (card.next_review.is_some(), card.next_review)
}

fn is_eligible(card: &Card, now: DateTime<Utc>) -> bool {
    if card.is_malformed() {
        tracing::warn!(
            card_id = %card.id,
            "card scheduled before its last review, treating as due"
        );
        return true;
    }
    card.is_due(now)
}
