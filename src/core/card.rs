//! Cards on the board.
//!
//! A card is a symbol plus its face state. The face is a single enum rather
//! than separate `revealed`/`matched` flags, so a matched card can never be
//! face-down.

use serde::{Deserialize, Serialize};

use super::symbol::SymbolId;

/// Stable card identity, equal to the card's position in the dealt deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Board index of this card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Face state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Face-down.
    #[default]
    Hidden,
    /// Face-up, waiting for a partner or for resolution.
    Revealed,
    /// Permanently paired. Never reverts.
    Matched,
}

/// A single card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position in the dealt deck.
    pub id: CardId,

    /// The symbol this card shares with exactly one other card.
    pub symbol: SymbolId,

    /// Current face.
    pub face: CardFace,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, symbol: SymbolId) -> Self {
        Self {
            id,
            symbol,
            face: CardFace::Hidden,
        }
    }

    /// Face-up and unresolved.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.face == CardFace::Revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == CardFace::Matched
    }

    /// Whether the symbol should be shown (revealed or matched).
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face != CardFace::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_hidden() {
        let card = Card::new(CardId::new(3), SymbolId::new(1));

        assert_eq!(card.id.index(), 3);
        assert!(!card.is_revealed());
        assert!(!card.is_matched());
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_matched_is_face_up() {
        let mut card = Card::new(CardId::new(0), SymbolId::new(0));
        card.face = CardFace::Matched;

        assert!(card.is_face_up());
        assert!(card.is_matched());
        assert!(!card.is_revealed());
    }
}
