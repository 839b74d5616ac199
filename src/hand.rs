//! Player and dealer hands and blackjack scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Blackjack: the best total a hand can reach.
pub const BLACKJACK: u16 = 21;

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(u16::from(card.rank.value()));
    }

    // Downgrade aces from 11 to 1 only as far as needed.
    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (value, aces > 0)
}

/// Computes the blackjack value of a sequence of cards.
///
/// Aces count as 11, then drop to 1 one at a time while the total is over 21.
///
/// # Example
///
/// ```
/// use bjround::{Card, Rank, Suit, hand_value};
///
/// let aces = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ace, Suit::Hearts)];
/// assert_eq!(hand_value(&aces), 12);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// Which side of the table a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// A hand of cards, in draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    role: Role,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand for `role`.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            cards: Vec::new(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the role that owns this hand.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card, keeping the role.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
