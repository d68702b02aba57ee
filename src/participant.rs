//! Player and dealer seats and their turn policies.

use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::error::{SplitError, TurnError};
use crate::hand::{BLACKJACK, Hand};
use crate::shoe::CardSource;

/// Total at which the dealer stops drawing. Soft totals count.
pub const DEALER_STANDS_ON: u8 = 17;

/// Which turn policy a participant follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Interactive: hits or stands on each decision.
    Player,
    /// Fixed policy: draws while under 17.
    Dealer,
}

/// Identifies one of the player's hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandSlot {
    /// The hand dealt at the start of the round.
    Primary,
    /// The second hand created by a split.
    Split,
}

impl HandSlot {
    /// Index of the slot in round results.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Split => 1,
        }
    }
}

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnChoice {
    /// Keep the current total and end the turn.
    Stand,
    /// Draw one more card.
    Hit,
}

/// How a turn ended when it did not bust.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnEnd {
    /// Final total of the hand.
    pub total: u8,
    /// Cards drawn during the turn, in order.
    pub drawn: Vec<Card>,
}

/// A seat at the table: one hand, plus a split hand for a player who split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    role: Role,
    hand: Hand,
    split_hand: Option<Hand>,
}

impl Participant {
    /// Creates a participant with an empty hand.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            hand: Hand::new(),
            split_hand: None,
        }
    }

    /// Creates a player.
    #[must_use]
    pub const fn player() -> Self {
        Self::new(Role::Player)
    }

    /// Creates a dealer.
    #[must_use]
    pub const fn dealer() -> Self {
        Self::new(Role::Dealer)
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the primary hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the split hand, if a split was taken this round.
    #[must_use]
    pub const fn split_hand(&self) -> Option<&Hand> {
        self.split_hand.as_ref()
    }

    /// Returns the hand in `slot`, if it exists.
    #[must_use]
    pub const fn hand_at(&self, slot: HandSlot) -> Option<&Hand> {
        match slot {
            HandSlot::Primary => Some(&self.hand),
            HandSlot::Split => self.split_hand.as_ref(),
        }
    }

    fn hand_at_mut(&mut self, slot: HandSlot) -> Option<&mut Hand> {
        match slot {
            HandSlot::Primary => Some(&mut self.hand),
            HandSlot::Split => self.split_hand.as_mut(),
        }
    }

    /// Returns the slots currently in play, primary first.
    #[must_use]
    pub fn slots(&self) -> Vec<HandSlot> {
        let mut slots = alloc::vec![HandSlot::Primary];
        if self.split_hand.is_some() {
            slots.push(HandSlot::Split);
        }
        slots
    }

    /// Returns the primary hand's total.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.hand.total()
    }

    /// Adds a card to the primary hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Adds a card to the hand in `slot`. Returns `false` if that hand does
    /// not exist.
    pub fn add_card_to(&mut self, slot: HandSlot, card: Card) -> bool {
        let Some(hand) = self.hand_at_mut(slot) else {
            return false;
        };
        hand.add_card(card);
        true
    }

    /// Returns the first card dealt, which the dealer shows face up.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the primary hand may be split now.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.role == Role::Player && self.split_hand.is_none() && self.hand.can_split()
    }

    /// Moves one card of the primary pair into a new split hand.
    ///
    /// Both hands hold one card afterwards; the caller deals each a second.
    ///
    /// # Errors
    ///
    /// Returns an error if the participant is the dealer, has already split
    /// this round, or the primary hand is not a pair.
    pub fn split(&mut self) -> Result<(), SplitError> {
        if self.role == Role::Dealer {
            return Err(SplitError::DealerCannotSplit);
        }
        if self.split_hand.is_some() {
            return Err(SplitError::AlreadySplit);
        }

        let card = self.hand.split()?;
        self.split_hand = Some(Hand::from_cards(&[card]));
        debug!(%card, "split pair");
        Ok(())
    }

    /// Empties every hand for a new round.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.split_hand = None;
    }

    /// Plays out the hand in `slot` according to the participant's role.
    ///
    /// A player consults `choose` before every decision; a dealer ignores it
    /// and always plays the primary hand.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::Bust`] if a player's hit takes the hand over 21,
    /// and [`TurnError::NoCards`] if a draw fails.
    pub fn take_turn<S, F>(
        &mut self,
        slot: HandSlot,
        source: &mut S,
        choose: F,
    ) -> Result<TurnEnd, TurnError>
    where
        S: CardSource + ?Sized,
        F: FnMut(&Hand) -> TurnChoice,
    {
        match self.role {
            Role::Player => self.player_turn(slot, source, choose),
            Role::Dealer => self.dealer_turn(source),
        }
    }

    fn player_turn<S, F>(
        &mut self,
        slot: HandSlot,
        source: &mut S,
        mut choose: F,
    ) -> Result<TurnEnd, TurnError>
    where
        S: CardSource + ?Sized,
        F: FnMut(&Hand) -> TurnChoice,
    {
        let mut drawn = Vec::new();
        // A missing split hand has nothing to play.
        let Some(hand) = self.hand_at_mut(slot) else {
            return Ok(TurnEnd { total: 0, drawn });
        };

        loop {
            match choose(hand) {
                TurnChoice::Stand => {
                    let total = hand.total();
                    debug!(?slot, total, "stand");
                    return Ok(TurnEnd { total, drawn });
                }
                TurnChoice::Hit => {
                    let card = source.draw()?;
                    hand.add_card(card);
                    drawn.push(card);

                    let total = hand.total();
                    debug!(?slot, %card, total, "hit");
                    if total > BLACKJACK {
                        return Err(TurnError::Bust { total });
                    }
                }
            }
        }
    }

    fn dealer_turn<S>(&mut self, source: &mut S) -> Result<TurnEnd, TurnError>
    where
        S: CardSource + ?Sized,
    {
        let mut drawn = Vec::new();

        while self.hand.total() < DEALER_STANDS_ON {
            let card = source.draw()?;
            self.hand.add_card(card);
            drawn.push(card);
        }

        let total = self.hand.total();
        debug!(total, drawn = drawn.len(), "dealer stands");
        Ok(TurnEnd { total, drawn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::shoe::Shoe;

    const fn card(rank: Rank) -> Card {
        Card::new(Suit::Spades, rank)
    }

    fn dealt(role: Role, ranks: &[Rank]) -> Participant {
        let mut participant = Participant::new(role);
        for &rank in ranks {
            participant.add_card(card(rank));
        }
        participant
    }

    #[test]
    fn dealer_draws_from_16() {
        let mut dealer = dealt(Role::Dealer, &[Rank::Ten, Rank::Six]);
        let mut shoe = Shoe::stacked(&[card(Rank::Two), card(Rank::Nine)]);

        let end = dealer.take_turn(HandSlot::Primary, &mut shoe, |_| TurnChoice::Hit).unwrap();
        assert_eq!(end.drawn, vec![card(Rank::Two)]);
        assert_eq!(end.total, 18);
        assert_eq!(shoe.len(), 1);
    }

    #[test]
    fn dealer_stands_on_hard_and_soft_17() {
        for ranks in [[Rank::Ten, Rank::Seven], [Rank::Ace, Rank::Six]] {
            let mut dealer = dealt(Role::Dealer, &ranks);
            let mut shoe = Shoe::stacked(&[card(Rank::Two)]);

            let end = dealer.take_turn(HandSlot::Primary, &mut shoe, |_| TurnChoice::Hit).unwrap();
            assert!(end.drawn.is_empty());
            assert_eq!(end.total, 17);
            assert_eq!(shoe.len(), 1);
        }
    }

    #[test]
    fn dealer_may_finish_over_21() {
        let mut dealer = dealt(Role::Dealer, &[Rank::Ten, Rank::Six]);
        let mut shoe = Shoe::stacked(&[card(Rank::King)]);

        let end = dealer.take_turn(HandSlot::Primary, &mut shoe, |_| TurnChoice::Stand).unwrap();
        assert_eq!(end.total, 26);
    }

    #[test]
    fn dealer_reports_empty_shoe() {
        let mut dealer = dealt(Role::Dealer, &[Rank::Two, Rank::Three]);
        let mut shoe = Shoe::stacked(&[]);

        assert_eq!(
            dealer.take_turn(HandSlot::Primary, &mut shoe, |_| TurnChoice::Stand),
            Err(TurnError::NoCards)
        );
    }

    #[test]
    fn player_hits_then_stands() {
        let mut player = dealt(Role::Player, &[Rank::Five, Rank::Four]);
        let mut shoe = Shoe::stacked(&[card(Rank::Three), card(Rank::Ten)]);
        let mut choices = vec![TurnChoice::Stand, TurnChoice::Hit];

        let end = player
            .take_turn(HandSlot::Primary, &mut shoe, |_| choices.pop().unwrap())
            .unwrap();
        assert_eq!(end.total, 12);
        assert_eq!(end.drawn, vec![card(Rank::Three)]);
        assert_eq!(player.hand().len(), 3);
    }

    #[test]
    fn player_bust_ends_turn_immediately() {
        let mut player = dealt(Role::Player, &[Rank::Ten, Rank::Six]);
        let mut shoe = Shoe::stacked(&[card(Rank::Queen), card(Rank::Two)]);

        let err = player
            .take_turn(HandSlot::Primary, &mut shoe, |_| TurnChoice::Hit)
            .unwrap_err();
        assert_eq!(err, TurnError::Bust { total: 26 });
        assert_eq!(shoe.len(), 1);
    }

    #[test]
    fn player_sees_each_card_before_deciding() {
        let mut player = dealt(Role::Player, &[Rank::Two, Rank::Three]);
        let mut shoe = Shoe::stacked(&[card(Rank::Four), card(Rank::Five)]);
        let mut seen = Vec::new();

        player
            .take_turn(HandSlot::Primary, &mut shoe, |hand| {
                seen.push(hand.total());
                if hand.total() < 12 {
                    TurnChoice::Hit
                } else {
                    TurnChoice::Stand
                }
            })
            .unwrap();
        assert_eq!(seen, vec![5, 9, 14]);
    }

    #[test]
    fn split_moves_one_card_to_a_new_hand() {
        let mut player = dealt(Role::Player, &[Rank::Six, Rank::Six]);
        assert!(player.can_split());

        player.split().unwrap();
        assert_eq!(player.hand().len(), 1);
        assert_eq!(player.split_hand().map(Hand::len), Some(1));
        assert_eq!(player.slots(), vec![HandSlot::Primary, HandSlot::Split]);
        assert!(!player.can_split());
        assert_eq!(player.split(), Err(SplitError::AlreadySplit));

        player.clear();
        assert!(player.hand().is_empty());
        assert!(player.split_hand().is_none());
    }

    #[test]
    fn dealer_cannot_split() {
        let mut dealer = dealt(Role::Dealer, &[Rank::Eight, Rank::Eight]);
        assert!(!dealer.can_split());
        assert_eq!(dealer.split(), Err(SplitError::DealerCannotSplit));
    }

    #[test]
    fn add_card_to_missing_split_hand_is_rejected() {
        let mut player = Participant::player();
        assert!(!player.add_card_to(HandSlot::Split, card(Rank::Two)));
        assert!(player.add_card_to(HandSlot::Primary, card(Rank::Two)));
        assert_eq!(player.total(), 2);
    }
}
