//! A blackjack round engine with a multi-shoe card source and optional
//! `no_std` support.
//!
//! The crate provides a [`Table`] that plays one player against a dealer
//! who draws to 17. Cards come from a pool of shuffled 52-card [`Shoe`]s,
//! and an opening pair may be split once. Player decisions and rendering
//! are supplied by the caller through [`PlayerInput`] and [`TableView`].
//!
//! # Example
//!
//! ```
//! use shoejack::{Hand, HandSlot, PlayerInput, RoundRequest, SplitChoice, Table, TableOptions, TurnChoice};
//!
//! struct AlwaysStand;
//!
//! impl PlayerInput for AlwaysStand {
//!     fn next_round(&mut self) -> Option<RoundRequest> {
//!         None
//!     }
//!     fn choose_split(&mut self, _: &Hand) -> SplitChoice {
//!         SplitChoice::Decline
//!     }
//!     fn choose_turn(&mut self, _: HandSlot, _: &Hand) -> TurnChoice {
//!         TurnChoice::Stand
//!     }
//! }
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! let result = table
//!     .play_round(RoundRequest::new(Default::default(), 10), &mut AlwaysStand, &mut ())
//!     .unwrap();
//! assert_eq!(result.hands.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, render_cards};
pub use error::{BetError, EmptyShoeError, RoundError, SplitError, TurnError};
pub use game::{
    GameMode, PlayerInput, RoundRequest, Seat, SplitChoice, Table, TableState, TableView, resolve,
};
pub use hand::{BLACKJACK, Hand};
pub use options::TableOptions;
pub use participant::{DEALER_STANDS_ON, HandSlot, Participant, Role, TurnChoice, TurnEnd};
pub use result::{HandOutcome, HandResult, RoundResult, SessionEnd, SessionSummary};
pub use shoe::{CardSource, Shoe, ShoePool, ShoeSelection};
