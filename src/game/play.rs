use tracing::{debug, info, warn};

use crate::error::{RoundError, TurnError};
use crate::participant::{HandSlot, TurnChoice};
use crate::result::{RoundResult, SessionEnd, SessionSummary};

use super::{PlayerInput, RoundRequest, Seat, Table, TableState, TableView};

impl Table {
    /// Plays one full round: opening deal, optional split, the player's
    /// hand(s), the dealer's turn, and resolution.
    ///
    /// A bust is reported through `view` and resolved as a loss; it does not
    /// abort the round. Any returned error is reported through
    /// [`TableView::round_aborted`] first.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Bet`] for a zero bet, [`RoundError::NoCards`] if
    /// a draw hits an exhausted shoe, and [`RoundError::Split`] if a split is
    /// attempted on a hand that does not qualify.
    pub fn play_round<I, V>(
        &mut self,
        request: RoundRequest,
        input: &mut I,
        view: &mut V,
    ) -> Result<RoundResult, RoundError>
    where
        I: PlayerInput + ?Sized,
        V: TableView + ?Sized,
    {
        match self.play_round_inner(request, input, view) {
            Ok(result) => {
                view.shoes(&self.cards_remaining());
                view.round_settled(&result);
                Ok(result)
            }
            Err(err) => {
                self.state = TableState::Aborted;
                warn!(%err, "round aborted");
                view.round_aborted(&err);
                Err(err)
            }
        }
    }

    fn play_round_inner<I, V>(
        &mut self,
        request: RoundRequest,
        input: &mut I,
        view: &mut V,
    ) -> Result<RoundResult, RoundError>
    where
        I: PlayerInput + ?Sized,
        V: TableView + ?Sized,
    {
        self.begin_round(request)?;
        view.shoes(&self.cards_remaining());

        self.deal_opening()?;
        if let Some(card) = self.dealer.up_card() {
            view.dealer_up_card(card);
        }
        view.hand_changed(Seat::Player(HandSlot::Primary), self.player.hand());

        self.offer_split(input, view)?;

        self.state = TableState::PlayerTurn;
        for slot in self.player.slots() {
            self.play_player_hand(slot, input, view)?;
        }

        self.state = TableState::DealerTurn;
        self.dealer
            .take_turn(HandSlot::Primary, &mut self.pool, |_| TurnChoice::Stand)
            .map_err(|_| RoundError::NoCards)?;
        view.hand_changed(Seat::Dealer, self.dealer.hand());

        Ok(self.settle(request.bet))
    }

    /// Plays one player hand. A bust is reported and swallowed here.
    fn play_player_hand<I, V>(
        &mut self,
        slot: HandSlot,
        input: &mut I,
        view: &mut V,
    ) -> Result<(), RoundError>
    where
        I: PlayerInput + ?Sized,
        V: TableView + ?Sized,
    {
        let seat = Seat::Player(slot);
        let turn = self.player.take_turn(slot, &mut self.pool, |hand| {
            view.hand_changed(seat, hand);
            input.choose_turn(slot, hand)
        });

        match turn {
            Ok(end) => {
                debug!(?slot, total = end.total, drawn = end.drawn.len(), "hand finished");
                Ok(())
            }
            Err(TurnError::Bust { total }) => {
                if let Some(hand) = self.player.hand_at(slot) {
                    view.hand_changed(seat, hand);
                }
                view.bust(slot, total);
                debug!(?slot, total, "bust");
                Ok(())
            }
            Err(TurnError::NoCards) => Err(RoundError::NoCards),
        }
    }

    /// Plays rounds until the input declines another or a shoe runs out.
    ///
    /// A rejected bet is reported and the next round is requested. An
    /// exhausted shoe ends the session with [`SessionEnd::ShoeExhausted`].
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Split`] if a split was attempted on a hand that
    /// does not qualify. This indicates a logic defect, not a game event.
    pub fn run<I, V>(&mut self, input: &mut I, view: &mut V) -> Result<SessionSummary, RoundError>
    where
        I: PlayerInput + ?Sized,
        V: TableView + ?Sized,
    {
        let mut rounds = 0;
        let mut net: isize = 0;

        let end = loop {
            let Some(request) = input.next_round() else {
                break SessionEnd::Quit;
            };

            match self.play_round(request, input, view) {
                Ok(result) => {
                    rounds += 1;
                    net += result.net;
                }
                Err(RoundError::Bet(_)) => {}
                Err(RoundError::NoCards) => break SessionEnd::ShoeExhausted,
                Err(err @ RoundError::Split(_)) => return Err(err),
            }
        };

        info!(rounds, net, ?end, "session ended");
        Ok(SessionSummary { rounds, net, end })
    }
}
