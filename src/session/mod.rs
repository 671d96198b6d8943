//! Game session: the component a frontend talks to.
//!
//! A [`MemoryGame`] owns the configuration, the shuffling RNG, the current
//! board and the queue of pending resolutions. Frontends forward clicks to
//! [`MemoryGame::flip_card`], the reset button to [`MemoryGame::reset`] and
//! elapsed frame time to [`MemoryGame::advance`], then draw
//! [`MemoryGame::snapshot`].
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memo_match::core::{Alphabet, GameConfig, SymbolId};
//! use memo_match::session::MemoryGame;
//!
//! let alphabet = Alphabet::new(["A", "B"]).unwrap();
//! let (a, b) = (SymbolId::new(0), SymbolId::new(1));
//! let config = GameConfig::new().with_alphabet(alphabet);
//! let mut game = MemoryGame::with_deck(config, 42, &[a, b, a, b]).unwrap();
//!
//! game.flip_card(0);
//! game.flip_card(2);
//! game.advance(Duration::from_millis(300));
//!
//! assert_eq!(game.snapshot().match_count, 1);
//! ```

mod game;

pub use game::MemoryGame;
