//! Round and session result types.

use alloc::vec::Vec;

/// Result of a single hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts or dealer has the higher total).
    Lose,
    /// Push (tie).
    Push,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (0 for the primary hand, 1 for the split hand).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The stake on this hand.
    pub bet: usize,
    /// Amount credited back: twice the stake on a win, the stake on a push.
    pub payout: usize,
    /// The player's hand total.
    pub player_value: u8,
    /// The dealer's hand total.
    pub dealer_value: u8,
}

/// Result of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player hand, primary first.
    pub hands: Vec<HandResult>,
    /// The dealer's final total.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Total payout for all hands.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player declined to start another round.
    Quit,
    /// A draw hit an exhausted shoe.
    ShoeExhausted,
}

/// Summary of a session of rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds played to settlement.
    pub rounds: usize,
    /// Sum of every settled round's net result.
    pub net: isize,
    /// Why the session stopped.
    pub end: SessionEnd,
}
