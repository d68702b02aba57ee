//! Table configuration options.

use crate::shoe::ShoeSelection;

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoejack::{ShoeSelection, TableOptions};
///
/// let options = TableOptions::default()
///     .with_shoes(6)
///     .with_selection(ShoeSelection::RoundRobin)
///     .with_reshuffle_between_rounds(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Number of 52-card shoes in the pool.
    pub shoes: u8,
    /// How a shoe is picked for each draw.
    pub selection: ShoeSelection,
    /// Whether exhausted shoes are replaced before a round starts.
    ///
    /// Off by default: an exhausted shoe ends the session.
    pub reshuffle_between_rounds: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            shoes: 4,
            selection: ShoeSelection::Random,
            reshuffle_between_rounds: false,
        }
    }
}

impl TableOptions {
    /// Sets the number of shoes in the pool.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::TableOptions;
    ///
    /// let options = TableOptions::default().with_shoes(2);
    /// assert_eq!(options.shoes, 2);
    /// ```
    #[must_use]
    pub const fn with_shoes(mut self, shoes: u8) -> Self {
        self.shoes = shoes;
        self
    }

    /// Sets the shoe selection policy.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::{ShoeSelection, TableOptions};
    ///
    /// let options = TableOptions::default().with_selection(ShoeSelection::RoundRobin);
    /// assert_eq!(options.selection, ShoeSelection::RoundRobin);
    /// ```
    #[must_use]
    pub const fn with_selection(mut self, selection: ShoeSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets whether exhausted shoes are replaced between rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use shoejack::TableOptions;
    ///
    /// let options = TableOptions::default().with_reshuffle_between_rounds(true);
    /// assert!(options.reshuffle_between_rounds);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_between_rounds(mut self, reshuffle: bool) -> Self {
        self.reshuffle_between_rounds = reshuffle;
        self
    }
}
