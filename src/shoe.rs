//! Shoes and the multi-shoe pool.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyShoeError;

/// Anything a hand can be dealt from.
pub trait CardSource {
    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if no card can be drawn.
    fn draw(&mut self) -> Result<Card, EmptyShoeError>;
}

/// A single shuffled 52-card deck that is consumed from the top.
///
/// The shoe only ever shrinks. Drawing from an empty shoe is an error; it is
/// never refilled implicitly.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Remaining cards. The last element is the top of the shoe.
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds all 52 rank and suit combinations and shuffles them with `rng`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a shuffled shoe from a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Builds a shuffled shoe seeded from the current time.
    ///
    /// Fine for a game, not for anything that needs unpredictable shuffles.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_time() -> Self {
        Self::with_seed(time_seed())
    }

    /// Builds a shoe that deals `draws` in the given order.
    ///
    /// Intended for deterministic play and tests. At most [`DECK_SIZE`]
    /// cards are kept.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards: Vec<Card> = draws.iter().take(DECK_SIZE).copied().collect();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if the shoe is exhausted.
    pub fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        self.cards.pop().ok_or(EmptyShoeError)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl CardSource for Shoe {
    fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        Self::draw(self)
    }
}

#[cfg(feature = "std")]
pub(crate) fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// How the pool picks a shoe for each draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShoeSelection {
    /// Pick a shoe uniformly at random for every draw.
    #[default]
    Random,
    /// Cycle through the shoes in order.
    RoundRobin,
}

/// An ordered pool of shoes drawn from according to a [`ShoeSelection`].
///
/// Selection ignores depletion: shoes empty unevenly, and drawing from an
/// exhausted member fails even if other members still hold cards.
#[derive(Debug, Clone)]
pub struct ShoePool {
    shoes: Vec<Shoe>,
    selection: ShoeSelection,
    /// Next index for round-robin selection.
    next: usize,
    rng: ChaCha8Rng,
}

impl ShoePool {
    /// Creates a pool of `count` freshly shuffled shoes.
    #[must_use]
    pub fn new(count: u8, selection: ShoeSelection, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoes = (0..count).map(|_| Shoe::new(&mut rng)).collect();
        Self::from_parts(shoes, selection, rng)
    }

    /// Creates a pool from existing shoes.
    #[must_use]
    pub fn with_shoes(shoes: Vec<Shoe>, selection: ShoeSelection, seed: u64) -> Self {
        Self::from_parts(shoes, selection, ChaCha8Rng::seed_from_u64(seed))
    }

    const fn from_parts(shoes: Vec<Shoe>, selection: ShoeSelection, rng: ChaCha8Rng) -> Self {
        Self {
            shoes,
            selection,
            next: 0,
            rng,
        }
    }

    /// Returns the shoes in pool order.
    #[must_use]
    pub fn shoes(&self) -> &[Shoe] {
        &self.shoes
    }

    /// Returns the selection policy.
    #[must_use]
    pub const fn selection(&self) -> ShoeSelection {
        self.selection
    }

    /// Returns the number of cards left in each shoe, in pool order.
    #[must_use]
    pub fn cards_remaining(&self) -> Vec<usize> {
        self.shoes.iter().map(Shoe::len).collect()
    }

    /// Replaces every shoe with a freshly shuffled one.
    pub fn reshuffle(&mut self) {
        for shoe in &mut self.shoes {
            *shoe = Shoe::new(&mut self.rng);
        }
        self.next = 0;
        debug!(shoes = self.shoes.len(), "reshuffled pool");
    }

    /// Replaces only the exhausted shoes. Returns how many were replaced.
    pub fn refill_exhausted(&mut self) -> usize {
        let mut refilled = 0;
        for shoe in self.shoes.iter_mut().filter(|shoe| shoe.is_empty()) {
            *shoe = Shoe::new(&mut self.rng);
            refilled += 1;
        }
        if refilled > 0 {
            debug!(refilled, "refilled exhausted shoes");
        }
        refilled
    }

    fn select(&mut self) -> Option<usize> {
        let len = self.shoes.len();
        if len == 0 {
            return None;
        }

        let index = match self.selection {
            ShoeSelection::Random => self.rng.random_range(0..len),
            ShoeSelection::RoundRobin => {
                let index = self.next % len;
                self.next = (index + 1) % len;
                index
            }
        };
        Some(index)
    }
}

impl CardSource for ShoePool {
    fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        let index = self.select().ok_or(EmptyShoeError)?;
        let shoe = &mut self.shoes[index];

        match shoe.draw() {
            Ok(card) => {
                debug!(shoe = index, remaining = shoe.len(), %card, "draw");
                Ok(card)
            }
            Err(err) => {
                warn!(shoe = index, "draw from exhausted shoe");
                Err(err)
            }
        }
    }
}
