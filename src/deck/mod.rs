//! Deck building.
//!
//! A deck is the doubled alphabet `[s0, s0, s1, s1, ...]` put through an
//! unbiased Fisher–Yates shuffle. Every card starts face-down and its id is
//! its position in the dealt sequence.
//!
//! ## Example
//!
//! ```
//! use memo_match::core::{Alphabet, GameRng};
//! use memo_match::deck::DeckBuilder;
//!
//! let alphabet = Alphabet::default();
//! let mut rng = GameRng::new(42);
//!
//! let deck = DeckBuilder::new(&alphabet).shuffled(&mut rng);
//! assert_eq!(deck.len(), 24);
//! assert!(deck.iter().enumerate().all(|(i, c)| c.id.index() == i));
//! ```

mod builder;

pub use builder::DeckBuilder;
