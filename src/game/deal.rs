use tracing::debug;

use crate::error::{BetError, EmptyShoeError, RoundError};
use crate::participant::HandSlot;
use crate::shoe::CardSource;

use super::{GameMode, PlayerInput, RoundRequest, Seat, SplitChoice, Table, TableState, TableView};

impl Table {
    /// Validates the bet and resets both seats for a new round.
    pub(super) fn begin_round(&mut self, request: RoundRequest) -> Result<(), RoundError> {
        if request.bet == 0 {
            return Err(BetError::ZeroBet.into());
        }

        if self.options.reshuffle_between_rounds {
            self.pool.refill_exhausted();
        }

        self.player.clear();
        self.dealer.clear();
        self.round = Some(request);
        self.state = TableState::Dealing;

        debug!(bet = request.bet, mode = ?request.mode, "round started");
        Ok(())
    }

    /// Deals two cards each, alternating player and dealer.
    pub(super) fn deal_opening(&mut self) -> Result<(), EmptyShoeError> {
        for _ in 0..2 {
            self.player.add_card(self.pool.draw()?);
            self.dealer.add_card(self.pool.draw()?);
        }

        debug!(
            player = self.player.total(),
            dealer_up = ?self.dealer.up_card(),
            "opening deal"
        );
        Ok(())
    }

    /// Offers a split when the mode allows it and the opening hand is a pair.
    ///
    /// Returns whether the split was taken.
    pub(super) fn offer_split<I, V>(&mut self, input: &mut I, view: &mut V) -> Result<bool, RoundError>
    where
        I: PlayerInput + ?Sized,
        V: TableView + ?Sized,
    {
        let split_mode = self.round.is_some_and(|round| round.mode == GameMode::Split);
        if !split_mode || !self.player.can_split() {
            return Ok(false);
        }

        if input.choose_split(self.player.hand()) == SplitChoice::Decline {
            debug!("split declined");
            return Ok(false);
        }

        self.split_player()?;
        for slot in self.player.slots() {
            if let Some(hand) = self.player.hand_at(slot) {
                view.hand_changed(Seat::Player(slot), hand);
            }
        }
        Ok(true)
    }

    /// Splits the player's pair and deals one fresh card to each hand.
    fn split_player(&mut self) -> Result<(), RoundError> {
        self.player.split()?;

        for slot in [HandSlot::Primary, HandSlot::Split] {
            let card = self.pool.draw()?;
            self.player.add_card_to(slot, card);
        }
        Ok(())
    }
}
