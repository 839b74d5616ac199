//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`RoundEngine`] that deals a round from a single
//! shuffled deck, lets the player hit or stand, and plays out the dealer.
//! The dealer opens with one card and draws the rest only once the player
//! stands.
//!
//! # Example
//!
//! ```
//! use bjround::{RoundEngine, RoundOptions, RoundState};
//!
//! let mut engine = RoundEngine::new(RoundOptions::default(), 42);
//! if engine.start_round() == RoundState::PlayerTurn {
//!     let result = engine.stand().unwrap();
//!     assert_eq!(engine.state(), RoundState::Resolved);
//!     assert_eq!(engine.result(), Some(result));
//!     assert_eq!(result.player_value, engine.player_hand().value());
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod engine;
pub mod error;
pub mod hand;
pub mod options;
pub mod presentation;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use engine::{RoundEngine, RoundState};
pub use error::{ActionError, DealError};
pub use hand::{BLACKJACK, Hand, Role, hand_value};
pub use options::RoundOptions;
pub use presentation::{Controls, Presenter, status_text};
pub use result::{Outcome, RoundResult};
