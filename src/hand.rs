//! Hand representation and the blackjack total.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::error::SplitError;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Returns `(total, is_soft)` for a set of cards.
///
/// Every ace starts at 11 and is reduced to 1, one at a time, while the
/// total is over 21.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// An ordered set of cards held by one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the blackjack total.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the total still counts an ace as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Returns whether the hand is exactly two cards of equal rank.
    #[must_use]
    pub fn can_split(&self) -> bool {
        match self.cards.as_slice() {
            [first, second] => first.same_rank(second),
            _ => false,
        }
    }

    /// Removes and returns the second card of a pair, leaving one card behind.
    ///
    /// The caller deals the replacement cards.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::NotAPair`] if [`Hand::can_split`] is false.
    pub fn split(&mut self) -> Result<Card, SplitError> {
        if !self.can_split() {
            return Err(SplitError::NotAPair);
        }
        self.cards.pop().ok_or(SplitError::NotAPair)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
