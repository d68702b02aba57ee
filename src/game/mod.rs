//! Round controller and table state management.

use alloc::vec::Vec;

use crate::options::TableOptions;
use crate::participant::Participant;
use crate::shoe::{Shoe, ShoePool};

mod deal;
mod interface;
mod play;
mod showdown;
pub mod state;

pub use interface::{GameMode, PlayerInput, RoundRequest, Seat, SplitChoice, TableView};
pub use showdown::resolve;
pub use state::TableState;

/// A single-player blackjack table that runs rounds against the dealer.
///
/// The table owns the shoe pool and both participants. Rounds are played to
/// completion one at a time; see [`Table::play_round`] and [`Table::run`].
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    pub options: TableOptions,
    /// The pool every card is drawn from.
    pool: ShoePool,
    /// The player's seat.
    player: Participant,
    /// The dealer's seat.
    dealer: Participant,
    /// Current table state.
    state: TableState,
    /// The round in progress or most recently played.
    round: Option<RoundRequest>,
}

impl Table {
    /// Creates a table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.cards_remaining(), vec![52; 4]);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let pool = ShoePool::new(options.shoes, options.selection, seed);
        Self::with_pool(options, pool)
    }

    /// Creates a table seeded from the current time.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_time(options: TableOptions) -> Self {
        Self::new(options, crate::shoe::time_seed())
    }

    /// Creates a table that draws from the given shoes.
    ///
    /// `options.shoes` is ignored; the pool size is `shoes.len()`.
    #[must_use]
    pub fn with_shoes(options: TableOptions, shoes: Vec<Shoe>, seed: u64) -> Self {
        let pool = ShoePool::with_shoes(shoes, options.selection, seed);
        Self::with_pool(options, pool)
    }

    const fn with_pool(options: TableOptions, pool: ShoePool) -> Self {
        Self {
            options,
            pool,
            player: Participant::player(),
            dealer: Participant::dealer(),
            state: TableState::Idle,
            round: None,
        }
    }

    /// Returns the current table state.
    #[must_use]
    pub const fn state(&self) -> TableState {
        self.state
    }

    /// Returns the player's seat.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer's seat.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the round in progress or most recently played.
    #[must_use]
    pub const fn round(&self) -> Option<&RoundRequest> {
        self.round.as_ref()
    }

    /// Returns the shoe pool.
    #[must_use]
    pub const fn pool(&self) -> &ShoePool {
        &self.pool
    }

    /// Returns the number of cards left in each shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> Vec<usize> {
        self.pool.cards_remaining()
    }

    /// Replaces every shoe with a freshly shuffled one.
    ///
    /// Rounds never reshuffle on their own; this is the explicit way to
    /// continue after a shoe runs out.
    pub fn reshuffle(&mut self) {
        self.pool.reshuffle();
    }

    /// Clears both seats and forgets the last round.
    pub fn clear_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.round = None;
        self.state = TableState::Idle;
    }
}
