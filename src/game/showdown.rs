use alloc::vec::Vec;

use tracing::info;

use crate::hand::BLACKJACK;
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{Table, TableState};

/// Resolves one player hand against the dealer.
///
/// Returns the outcome and the amount credited back for a stake of `bet`:
/// a player bust loses regardless of the dealer, a dealer bust or higher
/// player total pays `2 * bet`, a tie returns `bet`.
///
/// # Example
///
/// ```
/// use shoejack::{HandOutcome, resolve};
///
/// assert_eq!(resolve(20, 18, 10), (HandOutcome::Win, 20));
/// assert_eq!(resolve(22, 17, 10), (HandOutcome::Lose, 0));
/// assert_eq!(resolve(19, 19, 10), (HandOutcome::Push, 10));
/// ```
#[must_use]
pub const fn resolve(player_total: u8, dealer_total: u8, bet: usize) -> (HandOutcome, usize) {
    if player_total > BLACKJACK {
        (HandOutcome::Lose, 0)
    } else if dealer_total > BLACKJACK || player_total > dealer_total {
        (HandOutcome::Win, bet * 2)
    } else if player_total < dealer_total {
        (HandOutcome::Lose, 0)
    } else {
        (HandOutcome::Push, bet)
    }
}

impl Table {
    /// Compares every player hand with the dealer's and ends the round.
    pub(super) fn settle(&mut self, bet: usize) -> RoundResult {
        let dealer_value = self.dealer.total();
        let dealer_bust = dealer_value > BLACKJACK;

        let mut hands = Vec::new();
        let mut total_payout: usize = 0;
        let mut total_bet: usize = 0;

        for slot in self.player.slots() {
            let Some(hand) = self.player.hand_at(slot) else {
                continue;
            };

            let player_value = hand.total();
            let (outcome, payout) = resolve(player_value, dealer_value, bet);
            total_payout += payout;
            total_bet += bet;

            hands.push(HandResult {
                hand_index: slot.index(),
                outcome,
                bet,
                payout,
                player_value,
                dealer_value,
            });
        }

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = total_payout as isize - total_bet as isize;

        self.state = TableState::RoundOver;
        info!(
            bet,
            hands = hands.len(),
            dealer_value,
            total_payout,
            net,
            "round settled"
        );

        RoundResult {
            hands,
            dealer_value,
            dealer_bust,
            total_payout,
            net,
        }
    }
}
