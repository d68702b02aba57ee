//! Table state types.

/// Where the table is in the round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableState {
    /// No round has started yet.
    #[default]
    Idle,
    /// Dealing the opening cards and offering the split.
    Dealing,
    /// Waiting for player decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been resolved.
    RoundOver,
    /// A round stopped on an error before it could be resolved.
    Aborted,
}
