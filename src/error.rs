//! Error types for shoe, hand, turn, and round operations.

use thiserror::Error;

/// A draw was requested from a shoe with no cards left.
///
/// Shoes are never refilled mid-round, so this ends the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct EmptyShoeError;

/// Errors that can occur when splitting a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The hand is not exactly two cards of equal rank.
    #[error("hand is not a pair of equal rank")]
    NotAPair,
    /// The player already holds a split hand this round.
    #[error("hand has already been split this round")]
    AlreadySplit,
    /// Only the player may split.
    #[error("the dealer cannot split")]
    DealerCannotSplit,
}

/// Errors that end a player's turn early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The hand went over 21.
    #[error("bust with {total}")]
    Bust {
        /// The busted total.
        total: u8,
    },
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

impl From<EmptyShoeError> for TurnError {
    fn from(_: EmptyShoeError) -> Self {
        Self::NoCards
    }
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
}

/// Errors that abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The requested bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
    /// A split was attempted on a hand that does not qualify.
    #[error(transparent)]
    Split(#[from] SplitError),
}

impl From<EmptyShoeError> for RoundError {
    fn from(_: EmptyShoeError) -> Self {
        Self::NoCards
    }
}
