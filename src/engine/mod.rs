//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{BLACKJACK, Hand, Role};
use crate::options::RoundOptions;
use crate::presentation::{Presenter, status_text};
use crate::result::{Outcome, RoundResult};

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// Cards needed for the opening deal: two for the player, one for the dealer.
const OPENING_CARDS: usize = 3;

/// A single-player blackjack round engine.
///
/// The engine owns the deck, both hands and the round state. It is a plain
/// value: the caller owns it and drives it through `&mut self` operations.
///
/// # Example
///
/// ```
/// use bjround::{RoundEngine, RoundOptions, RoundState};
///
/// let mut engine = RoundEngine::new(RoundOptions::default(), 42);
/// assert_eq!(engine.state(), RoundState::NotStarted);
///
/// engine.start_round();
/// assert_eq!(engine.player_hand().len(), 2);
/// assert_eq!(engine.dealer_hand().len(), 1);
/// assert_eq!(engine.cards_remaining(), 49);
/// ```
#[derive(Debug, Clone)]
pub struct RoundEngine {
    /// Cards left in the current deck.
    deck: Deck,
    /// Engine options.
    options: RoundOptions,
    /// Current round state.
    state: RoundState,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Result of the resolved round, if any.
    result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl RoundEngine {
    /// Creates a new engine with the given seed.
    ///
    /// No round is dealt until [`RoundEngine::start_round`] is called.
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        Self {
            deck: Deck::default(),
            options,
            state: RoundState::NotStarted,
            player: Hand::new(Role::Player),
            dealer: Hand::new(Role::Dealer),
            result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Produces a full deck in uniformly random order using the engine's RNG.
    pub fn shuffle_deck(&mut self) -> Deck {
        Deck::shuffled(&mut self.rng)
    }

    /// Starts a new round from a freshly shuffled deck.
    ///
    /// Any previous round is discarded. Returns the state after the opening
    /// deal: [`RoundState::Resolved`] if the player was dealt 21, otherwise
    /// [`RoundState::PlayerTurn`].
    pub fn start_round(&mut self) -> RoundState {
        let deck = self.shuffle_deck();
        self.deal_from(deck);
        self.state
    }

    /// Starts a new round dealt from `deck` instead of a shuffled one.
    ///
    /// The deck is drawn from its end; see [`Deck::stacked`] to lay cards out
    /// in draw order.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if `deck` holds fewer than three
    /// cards. The previous round is left untouched in that case.
    pub fn start_round_with(&mut self, deck: Deck) -> Result<RoundState, DealError> {
        if deck.len() < OPENING_CARDS {
            return Err(DealError::NotEnoughCards);
        }
        self.deal_from(deck);
        Ok(self.state)
    }

    fn deal_from(&mut self, deck: Deck) {
        self.deck = deck;
        self.player.clear();
        self.dealer.clear();
        self.result = None;

        // Callers guarantee at least three cards.
        for role in [Role::Player, Role::Player, Role::Dealer] {
            if let Some(card) = self.draw() {
                self.hand_mut(role).add_card(card);
            }
        }

        log::debug!(
            "round dealt: player {} ({}), dealer {}",
            self.player.value(),
            self.player.len(),
            self.dealer.value()
        );

        if self.player.value() == BLACKJACK {
            self.resolve(Outcome::PlayerBlackjack);
        } else {
            self.state = RoundState::PlayerTurn;
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        let card = self.deck.draw();
        if let Some(card) = card {
            log::trace!("drew {card}, {} left", self.deck.len());
        }
        card
    }

    const fn hand_mut(&mut self, role: Role) -> &mut Hand {
        match role {
            Role::Player => &mut self.player,
            Role::Dealer => &mut self.dealer,
        }
    }

    /// Ends the round with `outcome` and records the final values.
    fn resolve(&mut self, outcome: Outcome) -> RoundResult {
        let result = RoundResult {
            outcome,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
        };
        log::debug!(
            "round resolved: {outcome} (player {}, dealer {})",
            result.player_value,
            result.dealer_value
        );
        self.result = Some(result);
        self.state = RoundState::Resolved;
        result
    }

    /// Returns the engine options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the result of the current round once it is resolved.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Pushes the current table view to `presenter`.
    pub fn render<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        presenter.render(
            self.player.cards(),
            self.dealer.cards(),
            status_text(self.state, self.result.map(|r| r.outcome)),
        );
    }
}
