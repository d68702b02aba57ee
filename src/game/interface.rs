//! Collaborators the table talks to: the player's input and a display.

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::participant::{HandSlot, TurnChoice};
use crate::result::RoundResult;

/// Which variant of the game a round is played as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Plain blackjack; splits are never offered.
    #[default]
    Classic,
    /// A pair in the opening hand may be split once.
    Split,
}

/// The player's answer when a split is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitChoice {
    /// Split the pair into two hands.
    Accept,
    /// Keep playing a single hand.
    Decline,
}

/// What the player asks for at the start of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundRequest {
    /// Game variant for this round.
    pub mode: GameMode,
    /// Stake per hand. Must be positive.
    pub bet: usize,
}

impl RoundRequest {
    /// Creates a round request.
    #[must_use]
    pub const fn new(mode: GameMode, bet: usize) -> Self {
        Self { mode, bet }
    }
}

/// Identifies whose hand changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// One of the player's hands.
    Player(HandSlot),
    /// The dealer's hand.
    Dealer,
}

/// Source of the player's decisions.
///
/// Each call is a synchronous query that returns one discrete choice.
pub trait PlayerInput {
    /// Asks for the next round. `None` ends the session.
    fn next_round(&mut self) -> Option<RoundRequest>;

    /// Asks whether to split the opening pair.
    fn choose_split(&mut self, hand: &Hand) -> SplitChoice;

    /// Asks whether to hit or stand on the hand in `slot`.
    fn choose_turn(&mut self, slot: HandSlot, hand: &Hand) -> TurnChoice;
}

/// Receives table updates for rendering.
///
/// Every method has an empty default, so a view only implements what it
/// shows.
#[expect(unused_variables, reason = "default methods ignore their arguments")]
pub trait TableView {
    /// Cards left in each shoe of the pool, reported at round boundaries.
    fn shoes(&mut self, remaining: &[usize]) {}

    /// The dealer's face-up card after the opening deal.
    fn dealer_up_card(&mut self, card: &Card) {}

    /// A hand received a card or was split.
    fn hand_changed(&mut self, seat: Seat, hand: &Hand) {}

    /// A player hand went over 21.
    fn bust(&mut self, slot: HandSlot, total: u8) {}

    /// The round was resolved.
    fn round_settled(&mut self, result: &RoundResult) {}

    /// The round stopped on an error.
    fn round_aborted(&mut self, error: &RoundError) {}
}

/// A view that ignores every update.
impl TableView for () {}
